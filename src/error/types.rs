// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Coarse error classification exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
    External,
    Internal,
}

impl AppError {
    pub fn game_not_found(id: i64) -> Self {
        AppError::NotFound(format!("game {}", id))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Io(_) => ErrorKind::Storage,
            AppError::Http(_) => ErrorKind::External,
            AppError::Other(_) => ErrorKind::Internal,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
