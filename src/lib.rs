// Library exports for the web binary and tests
pub mod api;
pub mod availability;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod session;
pub mod views;

use std::sync::Arc;

/// Application state shared across all page handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: api::ApiClient,
    pub config: Arc<config::Config>,
}
