// src/application/error_handling.rs
//
// Error handling for commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Invalid input
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Storage failure
    Database,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Book"),

            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Could not save the book list".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(
                    ErrorType::Database,
                    "Database connection failed".to_string(),
                    None,
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(
                    ErrorType::Internal,
                    "Data serialization failed".to_string(),
                    None,
                )
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Field-level problems are the user's to fix; invariant breaks are ours
    pub fn from_domain_error(error: DomainError) -> Self {
        match error {
            DomainError::InvalidFieldValue { .. } | DomainError::UnknownField(_) => {
                Self::validation(error.to_string())
            }
            DomainError::InvariantViolation(_) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed".to_string(),
                Some(error.to_string()),
            ),
        }
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

impl<T> ToErrorResponse<T> for Result<T, DomainError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_domain_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Book not found");
    }

    #[test]
    fn test_bad_field_value_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::InvalidFieldValue {
            field: "anoPublicacao".to_string(),
            value: "soon".to_string(),
        }));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert!(error.message.contains("anoPublicacao"));
    }

    #[test]
    fn test_invariant_violation_is_domain_error() {
        let error = ErrorResponse::from_domain_error(DomainError::InvariantViolation(
            "Book id 1 already exists".to_string(),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert_eq!(error.details.as_deref(), Some("Invariant violation: Book id 1 already exists"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Book");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Book not found"));
    }
}
