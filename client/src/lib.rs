//! AgriSetu Platform - Client Core
//!
//! Shared application core for the farmer, FPO, and processor dashboards:
//! configuration, the authenticated REST gateway to the platform backend,
//! and the multi-step form controllers the screens drive. All business
//! logic lives behind the remote API; this crate composes requests,
//! validates input before submission, and keeps per-screen form state.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;

pub use config::Config;
pub use error::{AppError, AppResult};

use api::ApiClient;

/// Application context handed to the screens
///
/// Owns the API client and configuration explicitly; screens receive a
/// clone instead of reaching into global state.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Build a context from loaded configuration
    pub fn new(config: Config) -> AppResult<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self {
            api,
            config: Arc::new(config),
        })
    }

    /// Attach a bearer token after sign-in
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api = self.api.with_token(token);
        self
    }
}
