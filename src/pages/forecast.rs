//! Forecast Page
//!
//! The forecast view: fetches the precomputed forecast once on mount and
//! renders one of three mutually exclusive states.

use leptos::*;

use crate::api;
use crate::api::ForecastEntry;
use crate::components::{ForecastCard, StatusLine, StatusVariant};

/// Fixed user-facing message for any fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Could not load forecast data";

/// View state of the forecast page
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Vec<ForecastEntry>),
}

/// Map a fetch outcome onto the next view state.
///
/// Every failure collapses into the one fixed user-facing message; the
/// diagnostic detail stays with the caller.
fn resolve(result: Result<Vec<ForecastEntry>, String>) -> ViewState {
    match result {
        Ok(entries) => ViewState::Ready(entries),
        Err(_) => ViewState::Error(FETCH_ERROR_MESSAGE.to_string()),
    }
}

/// Forecast page component
#[component]
pub fn ForecastPage() -> impl IntoView {
    let (state, set_state) = create_signal(ViewState::Loading);

    // Fetch the forecast once on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_forecast().await;

            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch forecast: {}", e).into());
            }

            // The view may have been torn down while the request was in
            // flight; committing through try_set makes that a no-op.
            let _ = set_state.try_set(resolve(result));
        });
    });

    view! {
        {move || match state.get() {
            ViewState::Loading => view! {
                <StatusLine message="Loading forecast data...".to_string() variant=StatusVariant::Info />
            }
            .into_view(),
            ViewState::Error(message) => view! {
                <StatusLine message=message variant=StatusVariant::Error />
            }
            .into_view(),
            ViewState::Ready(entries) => view! {
                <div class="space-y-4">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <ForecastCard entry=entry /> })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }}
    }
}
