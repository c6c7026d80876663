pub mod entity;
pub mod invariants;

pub use entity::{Game, GameInput, GameStatus};
pub use invariants::validate_game_input;
