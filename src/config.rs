//! Application Configuration
//!
//! Theme and score-threshold settings, provided to the component tree via
//! context. Defaults can be overridden through local storage so a deployment
//! can switch variants without a rebuild.

use leptos::*;

/// Local storage key for the theme override
pub const THEME_STORAGE_KEY: &str = "kitecast_theme";

/// Local storage key for the score-tier scheme override
pub const TIERS_STORAGE_KEY: &str = "kitecast_score_tiers";

/// Application configuration provided to all components
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    /// Color theme for page and card surfaces
    pub theme: Theme,
    /// Score-to-tier thresholds for the suitability badge
    pub thresholds: ScoreThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            thresholds: ScoreThresholds::FOUR_TIER,
        }
    }
}

impl AppConfig {
    /// Load configuration, applying any local storage overrides
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                    if let Some(theme) = Theme::from_name(&value) {
                        config.theme = theme;
                    }
                }
                if let Ok(Some(value)) = storage.get_item(TIERS_STORAGE_KEY) {
                    if let Some(thresholds) = ScoreThresholds::from_name(&value) {
                        config.thresholds = thresholds;
                    }
                }
            }
        }

        config
    }
}

/// Provide the application configuration to the component tree
pub fn provide_app_config() {
    provide_context(AppConfig::load());
}

/// Color theme for the page and card surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse a theme name as stored in local storage
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Classes for the page background
    pub fn page_class(self) -> &'static str {
        match self {
            Self::Dark => "min-h-screen bg-gray-900 text-white p-4",
            Self::Light => "min-h-screen bg-gray-100 text-gray-900 p-4",
        }
    }

    /// Classes for a forecast card
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Dark => "bg-gray-800 rounded-lg shadow-lg p-4 border border-gray-700",
            Self::Light => "bg-white rounded-lg shadow-lg p-4 border border-gray-200",
        }
    }

    /// Classes for an inner card panel (wind/tide/conditions blocks)
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Dark => "bg-gray-700 p-3 rounded-md",
            Self::Light => "bg-gray-200 p-3 rounded-md",
        }
    }

    /// Classes for a panel label
    pub fn label_class(self) -> &'static str {
        match self {
            Self::Dark => "font-semibold text-gray-300 mb-1",
            Self::Light => "font-semibold text-gray-600 mb-1",
        }
    }
}

/// Score thresholds for the suitability badge, inclusive at the lower bound
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreThresholds {
    pub good: f64,
    pub moderate: f64,
    /// `None` collapses the marginal tier into poor
    pub marginal: Option<f64>,
}

impl ScoreThresholds {
    /// Four-tier scheme: good / moderate / marginal / poor
    pub const FOUR_TIER: Self = Self {
        good: 80.0,
        moderate: 60.0,
        marginal: Some(40.0),
    };

    /// Three-tier scheme: good / moderate / poor
    pub const THREE_TIER: Self = Self {
        good: 80.0,
        moderate: 60.0,
        marginal: None,
    };

    /// Parse a scheme name as stored in local storage
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "four" => Some(Self::FOUR_TIER),
            "three" => Some(Self::THREE_TIER),
            _ => None,
        }
    }

    /// Map a score onto its tier
    pub fn tier(&self, score: f64) -> ScoreTier {
        if score >= self.good {
            ScoreTier::Good
        } else if score >= self.moderate {
            ScoreTier::Moderate
        } else if self.marginal.is_some_and(|m| score >= m) {
            ScoreTier::Marginal
        } else {
            ScoreTier::Poor
        }
    }
}

/// Suitability tier for a forecast score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Moderate,
    Marginal,
    Poor,
}

impl ScoreTier {
    /// Text color class for the score badge
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Good => "text-green-600",
            Self::Moderate => "text-yellow-600",
            Self::Marginal => "text-orange-600",
            Self::Poor => "text-red-600",
        }
    }
}
