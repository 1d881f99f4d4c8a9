//! Application Context
//!
//! Shared read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide settings
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
