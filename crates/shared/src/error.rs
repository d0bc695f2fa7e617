//! Application-wide error types.
//!
//! Every domain error is folded into an `AppError` at the HTTP boundary;
//! the variant decides the status code and the stable error code.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Session or user behind a credential could not be found.
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// One or more field-level violations.
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Resource is owned by another user.
    #[error("Ownership mismatch: {0}")]
    OwnershipMismatch(String),

    /// Disallowed state transition on an existing resource.
    #[error("Type conflict: {0}")]
    TypeConflict(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Well-formed request that could not be applied.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::InvalidSession(_) | Self::NotFound(_) => 404,
            Self::OwnershipMismatch(_) | Self::TypeConflict(_) | Self::Conflict(_) => 409,
            Self::Validation(_) | Self::Unprocessable(_) => 422,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidSession(_) => "INVALID_SESSION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::OwnershipMismatch(_) => "OWNERSHIP_MISMATCH",
            Self::TypeConflict(_) => "TYPE_CONFLICT",
            Self::Conflict(_) => "CONFLICT",
            Self::Unprocessable(_) => "UNPROCESSABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the client-facing messages.
    ///
    /// Internal failures never leak their cause.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::Database(_) | Self::Internal(_) => vec!["Internal server error".to_string()],
            Self::Unauthorized(msg)
            | Self::InvalidSession(msg)
            | Self::NotFound(msg)
            | Self::OwnershipMismatch(msg)
            | Self::TypeConflict(msg)
            | Self::Conflict(msg)
            | Self::Unprocessable(msg) => vec![msg.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Unauthorized(String::new()), 401, "UNAUTHORIZED")]
    #[case(AppError::InvalidSession(String::new()), 404, "INVALID_SESSION")]
    #[case(AppError::NotFound(String::new()), 404, "NOT_FOUND")]
    #[case(AppError::Validation(vec![]), 422, "VALIDATION_ERROR")]
    #[case(AppError::OwnershipMismatch(String::new()), 409, "OWNERSHIP_MISMATCH")]
    #[case(AppError::TypeConflict(String::new()), 409, "TYPE_CONFLICT")]
    #[case(AppError::Conflict(String::new()), 409, "CONFLICT")]
    #[case(AppError::Unprocessable(String::new()), 422, "UNPROCESSABLE")]
    #[case(AppError::Database(String::new()), 500, "DATABASE_ERROR")]
    #[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
    fn test_status_and_code(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = AppError::Validation(vec![
            "\"value\" is required".to_string(),
            "\"type\" is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: \"value\" is required, \"type\" is required"
        );
    }

    #[test]
    fn test_internal_messages_are_opaque() {
        let err = AppError::Database("connection reset by peer".into());
        assert_eq!(err.messages(), vec!["Internal server error".to_string()]);

        let err = AppError::NotFound("Statement 42 not found".into());
        assert_eq!(err.messages(), vec!["Statement 42 not found".to_string()]);
    }
}
