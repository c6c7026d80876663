// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are data mappers
// - NO validation (services validate before calling in)
// - Every mutation is one transaction
// - User values are always bound parameters

pub mod game_query;
pub mod game_repository;

pub use game_query::GameQuery;
pub use game_repository::{GameRepository, SqliteGameRepository};

#[cfg(test)]
pub use game_repository::MockGameRepository;
