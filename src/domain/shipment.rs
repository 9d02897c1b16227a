//! Shipment parameter model: raw input and the validated value object.

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Raw request parameters as received from the transport layer.
///
/// No invariants hold here: any field may be absent or malformed.
/// [`crate::application::services::validation::validate_shipment`] turns
/// this into a [`ShipmentParams`] or rejects it with a specific reason.
#[derive(Debug, Clone, Default)]
pub struct RawShipmentRequest {
    pub origin_country_id: Option<String>,
    pub destination_country_id: Option<String>,
    pub weight: Option<String>,
    pub created_at: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_slug: Option<String>,
}

/// Validated, immutable shipment parameters.
///
/// Constructed once per request by the validator; every field is
/// guaranteed to satisfy its invariant:
///
/// - country codes match `^[A-Z]{2}$`
/// - `weight_kg` is finite and in the open interval (0, 1000)
/// - `created_at` carries an explicit UTC offset
/// - `customer_name` / `customer_slug` are non-empty
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentParams {
    pub origin_country: String,
    pub destination_country: String,
    pub weight_kg: f64,
    pub created_at: DateTime<FixedOffset>,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_params_construction() {
        let created_at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .unwrap();

        let params = ShipmentParams {
            origin_country: "US".to_string(),
            destination_country: "DE".to_string(),
            weight_kg: 2.5,
            created_at,
            customer_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            customer_name: "Alice".to_string(),
            customer_slug: "alice".to_string(),
        };

        assert_eq!(params.origin_country, "US");
        assert_eq!(params.weight_kg, 2.5);
        assert_eq!(
            params.customer_id.to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
