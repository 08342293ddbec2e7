//! Application state for the web layer.

use std::sync::Arc;

use crate::api::HttpRailApi;
use crate::clock::SystemClock;

/// The rail client the web layer serves.
pub type LiveRailApi = HttpRailApi<SystemClock>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Rail client over the live providers
    pub api: Arc<LiveRailApi>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(api: LiveRailApi) -> Self {
        Self { api: Arc::new(api) }
    }
}
