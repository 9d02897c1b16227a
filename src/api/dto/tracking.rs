//! DTOs for the tracking number endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shipment::RawShipmentRequest;

/// Query parameters for `GET /api/next-tracking-number`.
///
/// Every field is optional at the transport level; presence is enforced
/// by the validator so that a missing parameter yields the documented
/// `Missing required parameter: <name>` message instead of a generic
/// deserialization rejection.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NextTrackingNumberQuery {
    pub origin_country_id: Option<String>,
    pub destination_country_id: Option<String>,
    pub weight: Option<String>,
    pub created_at: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_slug: Option<String>,
}

impl From<NextTrackingNumberQuery> for RawShipmentRequest {
    fn from(q: NextTrackingNumberQuery) -> Self {
        RawShipmentRequest {
            origin_country_id: q.origin_country_id,
            destination_country_id: q.destination_country_id,
            weight: q.weight,
            created_at: q.created_at,
            customer_id: q.customer_id,
            customer_name: q.customer_name,
            customer_slug: q.customer_slug,
        }
    }
}

/// Successful tracking number response.
///
/// `created_at` is the issuance instant in RFC 3339 with UTC offset; it
/// is unrelated to the `created_at` query parameter, which describes the
/// shipment itself.
#[derive(Debug, Serialize)]
pub struct NextTrackingNumberResponse {
    pub tracking_number: String,
    pub created_at: DateTime<Utc>,
}
