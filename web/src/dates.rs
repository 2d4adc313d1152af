use chrono::{Datelike, Duration, Months, NaiveDate};

/// The user-selected query window. Either endpoint may be absent while the
/// user is mid-edit; no fetch is attempted until both are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The default window on first render: the current calendar month.
    pub fn current_month(today: NaiveDate) -> Self {
        Self::new(start_of_month(today), end_of_month(today))
    }

    /// Both endpoints, or `None` if the range is still partial. No ordering
    /// check: a reversed range is forwarded to the endpoint as-is.
    pub fn endpoints(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// A named shortcut for a commonly used window.
#[derive(Clone, Copy, Debug)]
pub struct RangePreset {
    pub label: &'static str,
    pub range: DateRange,
}

/// The quick-select presets, each computed from the given "today".
pub fn presets_for(today: NaiveDate) -> Vec<RangePreset> {
    let last_month = start_of_month(today) - Months::new(1);
    let last_quarter = start_of_quarter(today) - Months::new(3);
    vec![
        RangePreset {
            label: "This Month",
            range: DateRange::new(start_of_month(today), end_of_month(today)),
        },
        RangePreset {
            label: "Last Month",
            range: DateRange::new(last_month, end_of_month(last_month)),
        },
        RangePreset {
            label: "This Quarter",
            range: DateRange::new(start_of_quarter(today), end_of_quarter(today)),
        },
        RangePreset {
            label: "Last Quarter",
            range: DateRange::new(last_quarter, end_of_quarter(last_quarter)),
        },
        RangePreset {
            label: "This Year",
            range: DateRange::new(start_of_year(today), end_of_year(today)),
        },
    ]
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Formats a date the way the deliveries endpoint expects it (YYYY-MM-DD).
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Months::new(1) - Duration::days(1)
}

fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), quarter_month, 1).unwrap_or(date)
}

fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    start_of_quarter(date) + Months::new(3) - Duration::days(1)
}

fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds_handle_leap_february() {
        let today = date(2024, 2, 15);
        assert_eq!(start_of_month(today), date(2024, 2, 1));
        assert_eq!(end_of_month(today), date(2024, 2, 29));
    }

    #[test]
    fn current_month_is_first_to_last_day() {
        let range = DateRange::current_month(date(2025, 7, 18));
        assert_eq!(range.endpoints(), Some((date(2025, 7, 1), date(2025, 7, 31))));
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        let presets = presets_for(date(2025, 1, 10));
        let last_month = presets
            .iter()
            .find(|p| p.label == "Last Month")
            .unwrap()
            .range;
        assert_eq!(
            last_month.endpoints(),
            Some((date(2024, 12, 1), date(2024, 12, 31)))
        );
    }

    #[test]
    fn quarter_bounds() {
        let today = date(2025, 5, 20);
        assert_eq!(start_of_quarter(today), date(2025, 4, 1));
        assert_eq!(end_of_quarter(today), date(2025, 6, 30));
    }

    #[test]
    fn last_quarter_crosses_year_boundary() {
        let presets = presets_for(date(2025, 2, 3));
        let last_quarter = presets
            .iter()
            .find(|p| p.label == "Last Quarter")
            .unwrap()
            .range;
        assert_eq!(
            last_quarter.endpoints(),
            Some((date(2024, 10, 1), date(2024, 12, 31)))
        );
    }

    #[test]
    fn year_bounds() {
        let presets = presets_for(date(2025, 6, 1));
        let this_year = presets
            .iter()
            .find(|p| p.label == "This Year")
            .unwrap()
            .range;
        assert_eq!(
            this_year.endpoints(),
            Some((date(2025, 1, 1), date(2025, 12, 31)))
        );
    }

    #[test]
    fn preset_labels_in_display_order() {
        let labels: Vec<&str> = presets_for(date(2025, 3, 1))
            .iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(
            labels,
            [
                "This Month",
                "Last Month",
                "This Quarter",
                "Last Quarter",
                "This Year"
            ]
        );
    }

    #[test]
    fn iso_format_zero_pads() {
        assert_eq!(format_iso(date(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn iso_parse_roundtrip_and_rejects_garbage() {
        assert_eq!(parse_iso("2025-03-07"), Some(date(2025, 3, 7)));
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("07/03/2025"), None);
    }

    #[test]
    fn partial_range_has_no_endpoints() {
        let partial = DateRange {
            start: Some(date(2025, 1, 1)),
            end: None,
        };
        assert_eq!(partial.endpoints(), None);
    }

    #[test]
    fn reversed_range_passes_through() {
        let reversed = DateRange::new(date(2025, 6, 30), date(2025, 6, 1));
        assert_eq!(
            reversed.endpoints(),
            Some((date(2025, 6, 30), date(2025, 6, 1)))
        );
    }
}
