//! # Error Handling
//!
//! Centralized error translation for the API. Every failure funnels
//! into [`AppError`], which classifies it and renders the standard
//! error envelope with a stable HTTP status:
//!
//! - operational application errors carry their own status and code,
//! - database constraint violations map to 400 (404 for missing rows)
//!   via their SQLSTATE,
//! - token errors map to 401,
//! - validation errors map to 400,
//! - everything else is a 500, logged with full context and rendered
//!   without internal detail outside development mode.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::token::TokenError;
use crate::db::DatabaseError;
use crate::models::ApiResponse;

/// Application-level error, classified for the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Explicit, expected, client-facing error with a stable status.
    #[error("{message}")]
    Operational {
        status: StatusCode,
        code: &'static str,
        message: String,
    },

    /// Token verification failure (401).
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Request validation failure (400).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database-layer failure, classified by SQLSTATE.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Unclassified failure. Detail is logged, never sent to clients
    /// outside development mode.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    /// 401 with a stable code.
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Operational {
            status: StatusCode::UNAUTHORIZED,
            code,
            message: message.into(),
        }
    }

    /// 403 with a stable code.
    pub fn forbidden(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Operational {
            status: StatusCode::FORBIDDEN,
            code,
            message: message.into(),
        }
    }

    /// 404 with a stable code.
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Operational {
            status: StatusCode::NOT_FOUND,
            code,
            message: message.into(),
        }
    }

    /// The stable error code rendered in the envelope.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Operational { code, .. } => code,
            AppError::Token(TokenError::Expired) => "TOKEN_EXPIRED",
            AppError::Token(TokenError::Invalid(_)) => "INVALID_TOKEN",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(err) => classify_database(err).1,
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The client-facing message. Database and internal errors are
    /// rendered with safe wording, not the raw driver output.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Operational { message, .. } => message.clone(),
            AppError::Token(TokenError::Expired) => "Token expired".to_string(),
            AppError::Token(TokenError::Invalid(_)) => "Invalid token".to_string(),
            AppError::Validation(message) => message.clone(),
            AppError::Database(err) => classify_database(err).2,
            AppError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

/// Map a database error to (status, code, safe message).
///
/// SQLSTATE class 23 (integrity constraint violations) is expected
/// client input trouble and maps to 400; a missing row is 404;
/// anything else is an infrastructure failure and maps to 500.
fn classify_database(err: &DatabaseError) -> (StatusCode, &'static str, String) {
    match err {
        DatabaseError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            "RECORD_NOT_FOUND",
            "Record not found".to_string(),
        ),
        DatabaseError::QueryError(query_err) => {
            let Some(db_err) = query_err.as_db_error() else {
                // Driver/network failure, not a server-reported error
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database operation failed".to_string(),
                );
            };

            classify_sqlstate(db_err.code().code(), db_err.constraint())
        }
        DatabaseError::ConnectionError(_)
        | DatabaseError::DecodeError(_)
        | DatabaseError::ConfigError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            "Database operation failed".to_string(),
        ),
    }
}

/// Map a server-reported SQLSTATE to (status, code, safe message).
///
/// The unique-violation message names the offending constraint so
/// clients can tell which field collided.
fn classify_sqlstate(code: &str, constraint: Option<&str>) -> (StatusCode, &'static str, String) {
    match code {
        "23505" => {
            let target = constraint.unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                "DUPLICATE_FIELD",
                format!("Duplicate field value: {target}"),
            )
        }
        "23503" => (
            StatusCode::BAD_REQUEST,
            "FOREIGN_KEY_VIOLATION",
            "Invalid input data: foreign key constraint failed".to_string(),
        ),
        "23502" => (
            StatusCode::BAD_REQUEST,
            "MISSING_REQUIRED_FIELD",
            "Invalid input data: required field missing".to_string(),
        ),
        code if code.starts_with("23") => (
            StatusCode::BAD_REQUEST,
            "CONSTRAINT_VIOLATION",
            "Invalid input data: constraint violated".to_string(),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            "DATABASE_ERROR",
            "Database operation failed".to_string(),
        ),
    }
}

/// Whether internal detail may be attached to error responses.
///
/// Detail is exposed only when `NODE_ENV` is explicitly
/// `development`; anything else, including an unset variable, stays
/// closed.
fn development_mode() -> bool {
    is_development_env(std::env::var("NODE_ENV").ok().as_deref())
}

fn is_development_env(node_env: Option<&str>) -> bool {
    node_env == Some("development")
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Operational { status, .. } => *status,
            AppError::Token(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(err) => classify_database(err).0,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.client_message();

        // Unexpected failures get full context in the log; operational
        // errors are routine and only worth a warning.
        if status.is_server_error() {
            error!(code, detail = %self, "Unexpected error");
        } else {
            warn!(code, %status, "Operational error: {}", message);
        }

        let details = if development_mode() {
            Some(self.to_string()).filter(|detail| *detail != message)
        } else {
            None
        };

        HttpResponse::build(status)
            .json(ApiResponse::<()>::error_with_details(code, &message, details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_errors_keep_their_status() {
        let err = AppError::unauthorized("NO_TOKEN", "No token provided");
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "NO_TOKEN");

        let err = AppError::forbidden("ACCOUNT_SUSPENDED", "Account suspended");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = AppError::not_found("ROUTE_NOT_FOUND", "Route not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_token_errors_map_to_401() {
        let err = AppError::Token(TokenError::Expired);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "TOKEN_EXPIRED");
        assert_eq!(err.client_message(), "Token expired");

        let err = AppError::Token(TokenError::Invalid("bad signature".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "INVALID_TOKEN");
        assert_eq!(err.client_message(), "Invalid token");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let err = AppError::Validation("amount must be positive".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_missing_record_maps_to_404() {
        let err = AppError::Database(DatabaseError::NotFound("loan".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
        // Raw detail stays out of the client message
        assert_eq!(err.client_message(), "Record not found");
    }

    #[test]
    fn test_duplicate_key_names_its_constraint() {
        let (status, code, message) = classify_sqlstate("23505", Some("users_phone_number_key"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "DUPLICATE_FIELD");
        assert_eq!(message, "Duplicate field value: users_phone_number_key");
    }

    #[test]
    fn test_constraint_violations_map_to_400() {
        let (status, code, _) = classify_sqlstate("23503", None);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "FOREIGN_KEY_VIOLATION");

        let (status, code, _) = classify_sqlstate("23502", None);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "MISSING_REQUIRED_FIELD");

        // Any other integrity violation (here a check constraint)
        let (status, code, _) = classify_sqlstate("23514", None);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_unmapped_sqlstate_stays_generic() {
        let (status, code, message) = classify_sqlstate("42601", None);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "DATABASE_ERROR");
        assert_eq!(message, "Database operation failed");
    }

    #[test]
    fn test_detail_requires_explicit_development() {
        assert!(is_development_env(Some("development")));
        assert!(!is_development_env(Some("production")));
        assert!(!is_development_env(Some("test")));
        // Unset stays closed
        assert!(!is_development_env(None));
    }

    #[test]
    fn test_infrastructure_failures_map_to_500() {
        let err = AppError::Database(DatabaseError::ConnectionError("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Database operation failed");

        let err = AppError::Internal("worker panicked".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal Server Error");
    }
}
