// src/application/error_handling.rs
//
// Error Handling for Commands
//
// Maps internal errors to a stable JSON shape the UI can switch on.
// Storage detail goes to the log, never to the UI.

use crate::error::{AppError, ErrorKind};
use serde::{Deserialize, Serialize};

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
    /// Invalid input (400)
    Validation,

    /// No game with that id (404)
    NotFound,

    /// Database or filesystem failure (500)
    Storage,

    /// Image download failure (502)
    ExternalService,

    /// Other/unknown error (500)
    Internal,
}

impl From<ErrorKind> for ErrorType {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Validation => ErrorType::Validation,
            ErrorKind::NotFound => ErrorType::NotFound,
            ErrorKind::Storage => ErrorType::Storage,
            ErrorKind::External => ErrorType::ExternalService,
            ErrorKind::Internal => ErrorType::Internal,
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        let error_type = ErrorType::from(error.kind());

        match error {
            AppError::Domain(domain_error) => Self {
                success: false,
                error_type,
                message: domain_error.to_string(),
                details: Some(domain_error.field().to_string()),
            },

            AppError::NotFound(what) => Self {
                success: false,
                error_type,
                message: format!("{} not found", what),
                details: None,
            },

            AppError::Http(message) => {
                log::warn!("image download failed: {}", message);
                Self {
                    success: false,
                    error_type,
                    message: "Image download failed".to_string(),
                    details: Some(message),
                }
            }

            AppError::Other(message) => {
                log::error!("internal error: {}", message);
                Self {
                    success: false,
                    error_type,
                    message,
                    details: None,
                }
            }

            storage => {
                log::error!("storage error: {:?}", storage);
                Self {
                    success: false,
                    error_type,
                    message: "Storage operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
