//! Forecast Card Component
//!
//! Displays a single forecast window: date/time header, score badge, wind and
//! tide blocks, and the conditions summary.

use leptos::*;

use crate::api::ForecastEntry;
use crate::config::AppConfig;

/// Forecast card component
#[component]
pub fn ForecastCard(entry: ForecastEntry) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let theme = config.theme;
    let tier = config.thresholds.tier(entry.score);

    view! {
        <div class=theme.card_class()>
            // Header with date/time and score badge
            <div class="flex justify-between items-center mb-3">
                <h2 class="text-lg font-semibold">{header_label(&entry)}</h2>
                <span class=format!("text-xl font-bold {}", tier.text_class())>
                    {score_label(entry.score)}
                </span>
            </div>

            // Wind and tide blocks
            <div class="grid grid-cols-2 gap-4 mb-3">
                <div class=theme.panel_class()>
                    <p class=theme.label_class()>"Wind"</p>
                    <p class="text-lg">{wind_speed_label(&entry)}</p>
                    <p class="text-lg">{wind_direction_label(&entry)}</p>
                </div>
                <div class=theme.panel_class()>
                    <p class=theme.label_class()>"Tide"</p>
                    <p class="text-lg">{entry.tide_state.clone()}</p>
                    <p class="text-lg">{current_label(&entry)}</p>
                </div>
            </div>

            // Conditions summary
            <div class=theme.panel_class()>
                <p class=theme.label_class()>"Conditions"</p>
                <p>{entry.conditions.clone()}</p>
            </div>
        </div>
    }
}

/// Card header: date and time of the forecast window
fn header_label(entry: &ForecastEntry) -> String {
    format!("{} - {}", entry.date, entry.time)
}

/// Score badge text
fn score_label(score: f64) -> String {
    format!("{}/100", score)
}

fn wind_speed_label(entry: &ForecastEntry) -> String {
    format!("{} knots", entry.wind_speed)
}

fn wind_direction_label(entry: &ForecastEntry) -> String {
    format!("{}°", entry.wind_direction)
}

/// Current direction with strength percentage
fn current_label(entry: &ForecastEntry) -> String {
    format!("{} ({}%)", entry.current_direction, entry.current_strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ForecastEntry {
        ForecastEntry {
            date: "2024-05-01".to_string(),
            time: "09:00".to_string(),
            wind_speed: 18.0,
            wind_direction: 225.0,
            tide_state: "rising".to_string(),
            current_direction: "NE".to_string(),
            current_strength: 40.0,
            precipitation: 0.0,
            score: 85.0,
            conditions: "Great session".to_string(),
        }
    }

    #[test]
    fn test_header_label() {
        assert_eq!(header_label(&entry()), "2024-05-01 - 09:00");
    }

    #[test]
    fn test_score_label_drops_trailing_zero() {
        assert_eq!(score_label(85.0), "85/100");
        assert_eq!(score_label(62.5), "62.5/100");
    }

    #[test]
    fn test_wind_labels() {
        assert_eq!(wind_speed_label(&entry()), "18 knots");
        assert_eq!(wind_direction_label(&entry()), "225°");
    }

    #[test]
    fn test_current_label() {
        assert_eq!(current_label(&entry()), "NE (40%)");
    }
}
