// src/application/mod.rs
//
// Application Layer
//
// The boundary between the UI (Tauri) and the services. Translates
// between DTOs and domain types; holds no business rules.

pub mod dto;
pub mod error_handling;
pub mod state;

#[cfg(feature = "desktop")]
pub mod commands;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
