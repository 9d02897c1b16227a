//! Application error types and their HTTP mapping.
//!
//! Two tiers: [`ValidationError`] describes a specific client input fault
//! with a stable, human-readable message; [`AppError`] is the transport-facing
//! error that maps onto an HTTP status and JSON envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// A client input fault detected by the shipment validator.
///
/// Messages are part of the API contract and must not change: callers
/// match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid country code")]
    InvalidCountryCode,

    #[error("Invalid weight format")]
    InvalidWeightFormat,

    #[error("Weight must be between 0 and 1000 kg")]
    WeightOutOfRange,

    /// Covers both unparseable input and parseable input lacking a timezone.
    /// The two cases intentionally share one message; see `DESIGN.md`.
    #[error("Unable to parse datetime: {0}")]
    UnparseableDatetime(String),

    #[error("Invalid customer_id format")]
    InvalidCustomerId,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in the JSON envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts into the serializable payload used inside response bodies.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. } => write!(f, "{message}"),
            AppError::Internal { message, .. } => write!(f, "{message}"),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        let details = match &e {
            ValidationError::MissingParameter(name) => json!({ "parameter": name }),
            ValidationError::UnparseableDatetime(raw) => json!({ "value": raw }),
            _ => json!({}),
        };

        AppError::bad_request(e.to_string(), details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
