//! UI Components
//!
//! Reusable Leptos components for the forecast view.

pub mod forecast_card;
pub mod loading;

pub use forecast_card::ForecastCard;
pub use loading::{StatusLine, StatusVariant};
