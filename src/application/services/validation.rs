//! Shipment parameter validation.
//!
//! Turns a [`RawShipmentRequest`] into a [`ShipmentParams`], failing on the
//! first violation encountered. Check order is part of the API contract:
//! presence (in declaration order), country codes, weight, datetime,
//! customer id. Stateless and side-effect free, safe to call concurrently.

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::domain::shipment::{RawShipmentRequest, ShipmentParams};
use crate::error::ValidationError;

/// Compiled regex for ISO 3166-style two-letter country codes.
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// Validates raw request parameters into a [`ShipmentParams`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in documented order.
/// Given two violations, only the earlier check's reason is reported.
pub fn validate_shipment(raw: &RawShipmentRequest) -> Result<ShipmentParams, ValidationError> {
    let origin = require(&raw.origin_country_id, "origin_country_id")?;
    let destination = require(&raw.destination_country_id, "destination_country_id")?;
    let weight_raw = require(&raw.weight, "weight")?;
    let created_at_raw = require(&raw.created_at, "created_at")?;
    let customer_id_raw = require(&raw.customer_id, "customer_id")?;
    let customer_name = require(&raw.customer_name, "customer_name")?;
    let customer_slug = require(&raw.customer_slug, "customer_slug")?;

    validate_country_code(origin)?;
    validate_country_code(destination)?;

    let weight_kg = parse_weight(weight_raw)?;
    let created_at = parse_datetime(created_at_raw)?;

    let customer_id =
        Uuid::parse_str(customer_id_raw).map_err(|_| ValidationError::InvalidCustomerId)?;

    Ok(ShipmentParams {
        origin_country: origin.to_string(),
        destination_country: destination.to_string(),
        weight_kg,
        created_at,
        customer_id,
        customer_name: customer_name.to_string(),
        customer_slug: customer_slug.to_string(),
    })
}

/// Checks that a parameter is present and non-empty.
fn require<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingParameter(name)),
    }
}

fn validate_country_code(code: &str) -> Result<(), ValidationError> {
    if COUNTRY_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCountryCode)
    }
}

/// Parses the weight and enforces the open interval (0, 1000).
///
/// NaN is treated as a format error; infinities parse but fall outside
/// the interval and are reported as a range error.
fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
    let weight: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidWeightFormat)?;

    if weight.is_nan() {
        return Err(ValidationError::InvalidWeightFormat);
    }

    if weight <= 0.0 || weight >= 1000.0 {
        return Err(ValidationError::WeightOutOfRange);
    }

    Ok(weight)
}

/// Parses a datetime that must carry an explicit UTC offset.
///
/// Accepts RFC 3339 first, then RFC 2822. Both formats mandate an offset,
/// so a local datetime like `2024-01-15T10:30:00` fails parsing and is
/// reported with the same generic message as any other unparseable input.
fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map_err(|_| ValidationError::UnparseableDatetime(raw.to_string()))
}
