//! App Root Component
//!
//! Page shell with the configured theme and the forecast view.

use leptos::*;

use crate::config::{provide_app_config, AppConfig};
use crate::pages::ForecastPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide configuration to all components
    provide_app_config();

    let config = use_context::<AppConfig>().expect("AppConfig not found");

    view! {
        <main class=config.theme.page_class()>
            <h1 class="text-2xl font-bold text-center mb-4">
                "Claudia Kite Predictor"
            </h1>

            <ForecastPage />
        </main>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mounts_in_loading_state() {
        mount_to_body(|| view! { <App /> });

        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .expect("no document body");

        assert!(body.inner_html().contains("Loading forecast data"));
    }
}
