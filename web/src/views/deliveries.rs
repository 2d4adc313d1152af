use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::CityDelivery;

use crate::{
    components::{error::ErrorView, loading::LoadingView, DateRangePicker, DeliveryList},
    dates::{format_iso, today, DateRange},
    server::fetch_deliveries,
};

/// The single source of truth for which view is shown. Exactly one variant
/// holds at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error(String),
    Success,
}

/// A response commits only if it belongs to the most recently issued
/// request. In-flight requests are never cancelled; stale ones are dropped
/// here instead.
fn response_is_current(issued: u64, latest: u64) -> bool {
    issued == latest
}

#[component]
pub fn DeliveriesDashboard() -> impl IntoView {
    let date_range = RwSignal::new(DateRange::current_month(today()));
    let cities = RwSignal::new(Vec::<CityDelivery>::new());
    let status = RwSignal::new(FetchStatus::Idle);
    let request_generation = RwSignal::new(0u64);

    // Fetch whenever the range becomes fully specified; a partial range is
    // a no-op until the user finishes editing.
    Effect::new(move |_| {
        let range = date_range.get();
        let Some((start, end)) = range.endpoints() else {
            return;
        };

        let generation = request_generation.get_untracked() + 1;
        request_generation.set(generation);
        status.set(FetchStatus::Loading);

        spawn_local(async move {
            let result = fetch_deliveries(format_iso(start), format_iso(end)).await;

            if !response_is_current(generation, request_generation.get_untracked()) {
                return;
            }

            match result {
                Ok(list) => {
                    cities.set(list);
                    status.set(FetchStatus::Success);
                }
                Err(e) => {
                    // The previously fetched list is kept; only the view
                    // switches to the error message.
                    status.set(FetchStatus::Error(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="deliveries-dashboard">
            <header class="deliveries-dashboard__header">
                <h1>"City Deliveries"</h1>
            </header>

            <section class="deliveries-dashboard__range">
                <h2>"Select Date Range"</h2>
                <DateRangePicker range=date_range />
            </section>

            <section class="deliveries-dashboard__results">
                <h2>"Cities Ranked by Deliveries"</h2>
                {move || match status.get() {
                    FetchStatus::Loading => {
                        view! {
                            <LoadingView message=Some("Loading deliveries...".to_string()) />
                        }
                            .into_any()
                    }
                    FetchStatus::Error(message) => {
                        view! { <ErrorView message=Some(message) /> }.into_any()
                    }
                    FetchStatus::Idle | FetchStatus::Success => {
                        view! { <DeliveryList cities=cities.into() /> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
