//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::TrackingService;

/// Application state shared across all handlers.
///
/// The tracking service is stateless, so a single shared instance serves
/// every request with no coordination.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
}

impl AppState {
    pub fn new(tracking_service: Arc<TrackingService>) -> Self {
        Self { tracking_service }
    }
}
