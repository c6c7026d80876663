use super::entity::GameInput;
use crate::domain::{DomainError, DomainResult};

/// Validates every rule a game must satisfy before it is persisted.
/// Expects a normalized input.
pub fn validate_game_input(input: &GameInput) -> DomainResult<()> {
    validate_required("title", &input.title)?;
    validate_required("platform", &input.platform)?;
    validate_range("progress_percent", input.progress_percent, 0.0, 100.0)?;
    validate_range("rating", input.rating, 1.0, 10.0)?;
    validate_playtime(input.playtime_hours)?;
    validate_sequence(input)?;
    Ok(())
}

fn validate_required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "cannot be empty"));
    }
    Ok(())
}

fn validate_range(field: &'static str, value: Option<f64>, min: f64, max: f64) -> DomainResult<()> {
    if let Some(v) = value {
        if !v.is_finite() || v < min || v > max {
            return Err(DomainError::validation(
                field,
                format!("{} is outside {}..={}", v, min, max),
            ));
        }
    }
    Ok(())
}

fn validate_playtime(hours: Option<f64>) -> DomainResult<()> {
    if let Some(h) = hours {
        if !h.is_finite() || h < 0.0 {
            return Err(DomainError::validation(
                "playtime_hours",
                format!("{} must be a non-negative number", h),
            ));
        }
    }
    Ok(())
}

/// A sequence number without a franchise has nothing to be a sequence of.
fn validate_sequence(input: &GameInput) -> DomainResult<()> {
    if input.sequence_in_franchise.is_some() && input.franchise.is_none() {
        return Err(DomainError::validation(
            "sequence_in_franchise",
            "requires a franchise",
        ));
    }
    Ok(())
}

/// Invariants that must hold true for a Game:
///
/// 1. Identity is assigned by storage and never changes
/// 2. Title and platform are never empty
/// 3. progress_percent in [0, 100], rating in [1, 10], playtime >= 0
/// 4. Genres form a set (no duplicates)
/// 5. created_at never changes; updated_at moves on every write

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(input: &GameInput) -> &'static str {
        validate_game_input(input).unwrap_err().field()
    }

    #[test]
    fn test_valid_game() {
        let mut input = GameInput::new("Outer Wilds", "PC");
        input.rating = Some(9.5);
        input.progress_percent = Some(100.0);
        input.playtime_hours = Some(0.0);
        assert!(validate_game_input(&input).is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(field_of(&GameInput::new("  ", "PC")), "title");
        assert_eq!(field_of(&GameInput::new("Tetris", "")), "platform");
    }

    #[test]
    fn test_rating_bounds() {
        for bad in [0.5, 10.5, f64::NAN] {
            let mut input = GameInput::new("Tetris", "Game Boy");
            input.rating = Some(bad);
            assert_eq!(field_of(&input), "rating");
        }
        let mut input = GameInput::new("Tetris", "Game Boy");
        input.rating = Some(1.0);
        assert!(validate_game_input(&input).is_ok());
    }

    #[test]
    fn test_progress_bounds() {
        let mut input = GameInput::new("Tetris", "Game Boy");
        input.progress_percent = Some(-1.0);
        assert_eq!(field_of(&input), "progress_percent");
        input.progress_percent = Some(100.1);
        assert_eq!(field_of(&input), "progress_percent");
    }

    #[test]
    fn test_negative_playtime() {
        let mut input = GameInput::new("Tetris", "Game Boy");
        input.playtime_hours = Some(-0.5);
        assert_eq!(field_of(&input), "playtime_hours");
    }

    #[test]
    fn test_sequence_requires_franchise() {
        let mut input = GameInput::new("Metroid Dread", "Switch");
        input.sequence_in_franchise = Some(5);
        assert_eq!(field_of(&input), "sequence_in_franchise");

        input.franchise = Some("Metroid".into());
        assert!(validate_game_input(&input).is_ok());
    }
}
