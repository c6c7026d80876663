// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// Commands are thin adapters: accept DTOs, call services, return DTOs.
// Errors leave as JSON-encoded `ErrorResponse` strings.

pub mod game_commands;
pub mod image_commands;
pub mod statistics_commands;

pub use game_commands::*;
pub use image_commands::*;
pub use statistics_commands::*;
