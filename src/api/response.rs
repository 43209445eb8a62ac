//! Response types for the paycheck calculator API.
//!
//! This module defines the success envelope, the error response structure
//! and the mapping from [`PaycalcError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PaycalcError;
use crate::models::PayResult;

/// Successful response body for `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The paycheck breakdown.
    pub result: PayResult,
}

impl CalculationResponse {
    /// Wraps a result with a fresh identifier and the current time.
    pub fn new(result: PayResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PaycalcError> for ApiErrorResponse {
    fn from(error: PaycalcError) -> Self {
        match error {
            PaycalcError::MissingPayRate => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_PAY_RATE",
                    "No pay rate available",
                    "Supply pay_rate in the request or payRate in the server configuration",
                ),
            },
            PaycalcError::Overflow { quantity } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    "Inputs are too large to calculate",
                    format!("Arithmetic overflow computing {}", quantity),
                ),
            },
            // Handlers run against the configuration resolved at startup, so
            // file errors only reach here if a caller converts one directly.
            err @ (PaycalcError::ConfigNotFound { .. } | PaycalcError::ConfigParseError { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        err.to_string(),
                    ),
                }
            }
        }
    }
}
