//! Tracking number derivation.
//!
//! A tracking number is the first 16 base-36 digits of the SHA-256 hash of
//! a seed string built from the shipment parameters and the current
//! wall-clock time. The clock term makes two submissions of identical
//! shipment parameters yield different numbers; uniqueness is
//! probabilistic (hash entropy plus time), never registered anywhere.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::domain::shipment::ShipmentParams;
use crate::utils::base36;

/// Maximum length of a tracking number.
///
/// In the astronomically rare case where the digest's base-36 form is
/// shorter than this, the result is shorter too; no padding is applied.
const TRACKING_NUMBER_LEN: usize = 16;

/// Derives a tracking number from validated parameters and an instant.
///
/// The seed concatenates, in order and without separators: origin country,
/// destination country, weight formatted with exactly three decimal digits,
/// the customer UUID in canonical hyphenated form, and the instant as
/// floating-point seconds since the epoch (microsecond resolution).
///
/// Deterministic for a fixed `now`; the caller supplies wall-clock time
/// to get per-request entropy.
pub fn generate(params: &ShipmentParams, now: DateTime<Utc>) -> String {
    let epoch_seconds = now.timestamp_micros() as f64 / 1_000_000.0;

    let seed = format!(
        "{}{}{:.3}{}{}",
        params.origin_country,
        params.destination_country,
        params.weight_kg,
        params.customer_id,
        epoch_seconds
    );

    let digest = Sha256::digest(seed.as_bytes());

    base36::encode_bytes(&digest)
        .chars()
        .take(TRACKING_NUMBER_LEN)
        .collect()
}
