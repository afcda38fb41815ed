//! HTTP API Client
//!
//! Functions for fetching the precomputed forecast from the Kitecast API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://trondur78.pythonanywhere.com/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("kitecast_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// One forecast window as computed upstream.
///
/// The payload is taken verbatim: no field is validated or transformed, and
/// the array order is the display order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub time: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub tide_state: String,
    pub current_direction: String,
    pub current_strength: f64,
    /// Present in the payload but not shown by the view
    pub precipitation: f64,
    pub score: f64,
    pub conditions: String,
}

// ============ API Functions ============

/// Fetch the forecast
pub async fn fetch_forecast() -> Result<Vec<ForecastEntry>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/forecast", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json::<Vec<ForecastEntry>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_JSON: &str = r#"{
        "date": "2024-05-01",
        "time": "09:00",
        "wind_speed": 18,
        "wind_direction": 225,
        "tide_state": "rising",
        "current_direction": "NE",
        "current_strength": 40,
        "precipitation": 0,
        "score": 85,
        "conditions": "Great session"
    }"#;

    #[test]
    fn test_entry_deserializes() {
        let entry: ForecastEntry = serde_json::from_str(ENTRY_JSON).unwrap();
        assert_eq!(entry.date, "2024-05-01");
        assert_eq!(entry.time, "09:00");
        assert_eq!(entry.wind_speed, 18.0);
        assert_eq!(entry.wind_direction, 225.0);
        assert_eq!(entry.tide_state, "rising");
        assert_eq!(entry.current_direction, "NE");
        assert_eq!(entry.current_strength, 40.0);
        assert_eq!(entry.precipitation, 0.0);
        assert_eq!(entry.score, 85.0);
        assert_eq!(entry.conditions, "Great session");
    }

    #[test]
    fn test_array_order_is_preserved() {
        let json = format!("[{a}, {b}]", a = ENTRY_JSON, b = ENTRY_JSON.replace("09:00", "12:00"));
        let entries: Vec<ForecastEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time, "09:00");
        assert_eq!(entries[1].time, "12:00");
    }

    #[test]
    fn test_empty_array() {
        let entries: Vec<ForecastEntry> = serde_json::from_str("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(serde_json::from_str::<Vec<ForecastEntry>>("not json").is_err());
        assert!(serde_json::from_str::<Vec<ForecastEntry>>(r#"{"status": "ok"}"#).is_err());
    }

    #[test]
    fn test_default_base_resolves_forecast_url() {
        assert_eq!(
            format!("{}/forecast", DEFAULT_API_BASE),
            "https://trondur78.pythonanywhere.com/api/forecast"
        );
    }
}
