//! HTTP API
//!
//! Client for the Kitecast forecast API.

pub mod client;

pub use client::*;
