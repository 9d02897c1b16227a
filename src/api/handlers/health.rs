//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::shipment::RawShipmentRequest;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// The service has no external dependencies, so the only component check
/// runs the validator and generator end to end on a canned shipment.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let generator_check = check_generator(&state);

    let all_healthy = generator_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            generator: generator_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Issues a tracking number for a fixed probe shipment.
fn check_generator(state: &AppState) -> CheckStatus {
    let probe = RawShipmentRequest {
        origin_country_id: Some("US".to_string()),
        destination_country_id: Some("DE".to_string()),
        weight: Some("1.000".to_string()),
        created_at: Some("2024-01-01T00:00:00+00:00".to_string()),
        customer_id: Some("00000000-0000-0000-0000-000000000000".to_string()),
        customer_name: Some("probe".to_string()),
        customer_slug: Some("probe".to_string()),
    };

    match state.tracking_service.issue(&probe) {
        Ok(issued) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Generated {}-character probe number",
                issued.tracking_number.len()
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Generator error: {}", e)),
        },
    }
}
