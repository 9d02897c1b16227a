//! Tracking number issuance service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::clock::Clock;
use crate::domain::shipment::RawShipmentRequest;
use crate::error::ValidationError;
use crate::utils::tracking_code;

use super::validation::validate_shipment;

/// Result of issuing a tracking number.
///
/// `created_at` is the issuance instant, not the shipment's own
/// `created_at` input parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedTracking {
    pub tracking_number: String,
    pub created_at: DateTime<Utc>,
}

/// Service that validates a raw request and derives a tracking number.
///
/// Pure orchestration over the validator and the code generator: no
/// retained state between calls, safe to share across request handlers.
/// The clock is injected so tests can pin the issuance instant.
pub struct TrackingService {
    clock: Arc<dyn Clock>,
}

impl TrackingService {
    /// Creates a new tracking service with the given time source.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates the request and issues a tracking number.
    ///
    /// A single clock reading serves as both the generator's entropy
    /// input and the response `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the raw parameters violate the
    /// validation contract; the generator itself cannot fail.
    pub fn issue(&self, raw: &RawShipmentRequest) -> Result<IssuedTracking, ValidationError> {
        let params = validate_shipment(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "shipment validation failed");
        })?;

        let now = self.clock.now();
        let tracking_number = tracking_code::generate(&params, now);

        tracing::info!(
            %tracking_number,
            origin = %params.origin_country,
            destination = %params.destination_country,
            "issued tracking number"
        );

        Ok(IssuedTracking {
            tracking_number,
            created_at: now,
        })
    }
}
