use leptos::prelude::*;
use shared_types::CityDelivery;

/// Renders the cities in the order the server ranked them, one row per
/// record. An empty list renders no rows.
#[component]
pub fn DeliveryList(cities: Signal<Vec<CityDelivery>>) -> impl IntoView {
    view! {
        <ul class="delivery-list">
            {move || {
                cities
                    .get()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="delivery-list__row">
                                <h3 class="delivery-list__city">{entry.city}</h3>
                                <span class="delivery-list__badge">
                                    {format!("{} deliveries", entry.delivery_count)}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
