//! Shared application state

use std::time::Instant;

use crate::config::ServiceConfig;

/// State shared by all handlers.
///
/// Computation is stateless per request; this only carries the immutable
/// configuration and the start instant used for `/health` uptime.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}
