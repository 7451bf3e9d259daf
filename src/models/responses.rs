//! # API Response Models
//!
//! Structures for outgoing API response bodies.
//! All responses are wrapped in a standard format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{UserRole, UserStatus};

/// Standard API response wrapper.
///
/// ## Success Response
///
/// ```json
/// {
///     "success": true,
///     "data": { ... },
///     "error": null
/// }
/// ```
///
/// ## Error Response
///
/// ```json
/// {
///     "success": false,
///     "data": null,
///     "error": {
///         "code": "ACCOUNT_SUSPENDED",
///         "message": "Account suspended"
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,

    /// Response data (null on error).
    pub data: Option<T>,

    /// Error information (null on success).
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            }),
        }
    }

    /// Create an error response carrying internal detail.
    ///
    /// Detail is only attached in development mode; production clients
    /// never see it.
    pub fn error_with_details(code: &str, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
                details,
            }),
        }
    }
}

/// API error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Stable error code (e.g. "TOKEN_EXPIRED").
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Internal detail, present only in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health check response.
///
/// Returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status: "healthy" or "unhealthy".
    pub status: String,

    /// Database connection status.
    pub database: bool,

    /// Runtime environment.
    pub environment: String,

    /// API version.
    pub version: String,

    /// Current timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Current user profile.
///
/// Returned by `GET /api/v1/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// User id.
    pub id: Uuid,

    /// Registered mobile number.
    pub phone_number: String,

    /// Authorization role.
    pub role: UserRole,

    /// Account status.
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success("ok")).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "ok");
        assert!(body["error"].is_null());
    }

    #[test]
    fn test_error_envelope_hides_absent_details() {
        let response: ApiResponse<()> = ApiResponse::error("TOKEN_EXPIRED", "Token expired");
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");
        assert!(body["error"].get("details").is_none());
    }

    #[test]
    fn test_error_envelope_carries_details_when_present() {
        let response: ApiResponse<()> = ApiResponse::error_with_details(
            "INTERNAL_ERROR",
            "Internal Server Error",
            Some("connection refused".to_string()),
        );
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["error"]["details"], "connection refused");
    }
}
