//! # Tracking Number Service
//!
//! A stateless shipment tracking number generation service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Shipment parameter model and clock abstraction
//! - **Application Layer** ([`application`]) - Validation and tracking number issuance
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## How a tracking number is made
//!
//! The validator turns the seven raw query parameters into an immutable
//! [`domain::shipment::ShipmentParams`], rejecting malformed input with a
//! specific reason. The generator hashes a seed built from those
//! parameters plus the current wall-clock instant (SHA-256), re-encodes
//! the digest in base 36, and keeps the first 16 characters. Issued
//! numbers are never persisted; uniqueness is probabilistic, drawn from
//! hash entropy plus time.
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="text"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{IssuedTracking, TrackingService};
    pub use crate::domain::clock::{Clock, SystemClock};
    pub use crate::domain::shipment::{RawShipmentRequest, ShipmentParams};
    pub use crate::error::{AppError, ValidationError};
    pub use crate::state::AppState;
}
