//! Kitecast
//!
//! Kitesurfing conditions dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Forecast cards with wind, tide and current readings
//! - Color-coded suitability scores
//! - Dark and light themes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches a precomputed forecast from the Kitecast API over
//! HTTP and renders it; all scoring happens upstream.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
