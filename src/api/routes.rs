//! API route configuration.

use crate::api::handlers::next_tracking_number_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /next-tracking-number` - Validate shipment parameters and issue
///   a tracking number
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/next-tracking-number", get(next_tracking_number_handler))
}
