use leptos::prelude::*;
use leptos::server;
use shared_types::CityDelivery;
use thiserror::Error;

/// The remote endpoint owning the query contract. It expects `startDate`
/// and `endDate` query parameters as YYYY-MM-DD.
pub const DELIVERIES_ENDPOINT: &str = "https://ratio.sketchdesign.ma/fetch_deliveries.php";

/// The two failure kinds of the fetch pipeline. Both end up as a single
/// user-visible message; neither is retried.
#[derive(Debug, Error)]
pub enum DeliveryFetchError {
    #[error("deliveries endpoint returned status {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("failed to fetch deliveries: {0}")]
    Transport(String),
}

#[server]
pub async fn fetch_deliveries(
    start_date: String,
    end_date: String,
) -> Result<Vec<CityDelivery>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let client = reqwest::Client::new();

        let response = client
            .get(DELIVERIES_ENDPOINT)
            .query(&[
                ("startDate", start_date.as_str()),
                ("endDate", end_date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                leptos::logging::log!("HTTP request to deliveries endpoint failed: {}", e);
                ServerFnError::new(DeliveryFetchError::Transport(e.to_string()).to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // Surface the raw body so the user sees what the server said
            let body = response.text().await.unwrap_or_default();
            leptos::logging::log!(
                "Deliveries endpoint returned error status {} for range {}..{}",
                status,
                start_date,
                end_date
            );
            return Err(ServerFnError::new(
                DeliveryFetchError::Remote {
                    status: status.as_u16(),
                    body,
                }
                .to_string(),
            ));
        }

        response.json::<Vec<CityDelivery>>().await.map_err(|e| {
            leptos::logging::log!("Failed to parse deliveries JSON: {}", e);
            ServerFnError::new(DeliveryFetchError::Transport(e.to_string()).to_string())
        })
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (start_date, end_date);
        Err(ServerFnError::new(
            "Server-side rendering not available".to_string(),
        ))
    }
}
