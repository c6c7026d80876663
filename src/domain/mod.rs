// src/domain/mod.rs
//
// Domain Root
//
// Declares all domain modules and re-exports their public API.
// Other modules import from `crate::domain::*`

pub mod game;
pub mod search;
pub mod statistics;

pub use game::{validate_game_input, Game, GameInput, GameStatus};
pub use search::{SearchFilter, SortDirection, SortField};
pub use statistics::{CountEntry, LibraryStatistics, StatusBreakdown, RECENT_COMPLETIONS_LIMIT};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }

    /// The offending field.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::Validation { field, .. } => field,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
