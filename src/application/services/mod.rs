//! Application services.
//!
//! - [`validation`] - raw parameter validation into [`crate::domain::shipment::ShipmentParams`]
//! - [`tracking_service`] - clock injection and tracking number issuance

pub mod tracking_service;
pub mod validation;

pub use tracking_service::{IssuedTracking, TrackingService};
