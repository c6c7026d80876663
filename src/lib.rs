// src/lib.rs
// GameTrc - Local-first video game library tracker
//
// Architecture:
// - Domain: games, search filters, statistics, validation rules
// - Repositories: SQLite persistence and the dynamic search query
// - Services: validation, orchestration, aggregation
// - Application: DTOs and Tauri commands (feature `desktop`)

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

pub mod application;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_game_input, CountEntry, DomainError, Game, GameInput, GameStatus,
    LibraryStatistics, SearchFilter, SortDirection, SortField, StatusBreakdown,
};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::LibraryConfig;
pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{GameRepository, SqliteGameRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use infrastructure::ImageStore;
pub use services::{GameService, ImageService, StatisticsService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use application::dto;
