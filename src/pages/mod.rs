//! Pages
//!
//! Top-level page components.

pub mod forecast;

pub use forecast::ForecastPage;
