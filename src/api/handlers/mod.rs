//! HTTP request handlers for API endpoints.

pub mod health;
pub mod tracking;

pub use health::health_handler;
pub use tracking::next_tracking_number_handler;
