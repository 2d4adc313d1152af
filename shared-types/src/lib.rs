use serde::{Deserialize, Serialize};

/// One city's delivery total for the requested date window, as returned by
/// the remote deliveries endpoint. List order is the server's ranking; the
/// client never re-sorts it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CityDelivery {
    pub city: String,
    pub delivery_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_record() {
        let payload = r#"[{"city":"Casablanca","delivery_count":42}]"#;
        let cities: Vec<CityDelivery> = serde_json::from_str(payload).unwrap();
        assert_eq!(
            cities,
            vec![CityDelivery {
                city: "Casablanca".to_string(),
                delivery_count: 42,
            }]
        );
    }

    #[test]
    fn decodes_empty_array() {
        let cities: Vec<CityDelivery> = serde_json::from_str("[]").unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn preserves_server_order() {
        let payload = r#"[
            {"city":"Rabat","delivery_count":7},
            {"city":"Casablanca","delivery_count":42},
            {"city":"Tangier","delivery_count":7}
        ]"#;
        let cities: Vec<CityDelivery> = serde_json::from_str(payload).unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, ["Rabat", "Casablanca", "Tangier"]);
    }

    #[test]
    fn rejects_negative_count() {
        let payload = r#"[{"city":"Fes","delivery_count":-1}]"#;
        assert!(serde_json::from_str::<Vec<CityDelivery>>(payload).is_err());
    }
}
