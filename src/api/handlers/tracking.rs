//! Handler for the tracking number endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::tracking::{NextTrackingNumberQuery, NextTrackingNumberResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues the next tracking number for a shipment.
///
/// # Endpoint
///
/// `GET /api/next-tracking-number`
///
/// # Query Parameters
///
/// All seven are required and validated in order:
/// `origin_country_id`, `destination_country_id`, `weight`, `created_at`,
/// `customer_id`, `customer_name`, `customer_slug`.
///
/// # Response
///
/// ```json
/// {
///   "tracking_number": "1A2B3C4D5E6F7G8H",
///   "created_at": "2024-01-15T11:00:00.123456Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the validator's reason string when any
/// parameter is missing or malformed; 500 on unexpected internal faults.
pub async fn next_tracking_number_handler(
    State(state): State<AppState>,
    Query(query): Query<NextTrackingNumberQuery>,
) -> Result<Json<NextTrackingNumberResponse>, AppError> {
    let issued = state.tracking_service.issue(&query.into())?;

    Ok(Json(NextTrackingNumberResponse {
        tracking_number: issued.tracking_number,
        created_at: issued.created_at,
    }))
}
