use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::DomainError;

/// A game in the user's library.
/// This is the aggregate root; genres and screenshots have no life of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Storage-assigned identifier, never reused
    pub id: i64,

    pub title: String,
    pub franchise: Option<String>,

    /// Position inside the franchise (only set together with `franchise`)
    pub sequence_in_franchise: Option<i32>,

    pub platform: String,
    pub release_date: Option<NaiveDate>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub status: GameStatus,

    /// 0.0 - 100.0
    pub progress_percent: Option<f64>,
    pub playtime_hours: Option<f64>,

    /// 1.0 - 10.0, half steps allowed
    pub rating: Option<f64>,

    pub notes: Option<String>,

    /// Local path or URL, stored verbatim
    pub cover_art_path: Option<String>,

    /// Screenshot paths in insertion order
    pub screenshots: Vec<String>,

    /// Genre labels, sorted, no duplicates
    pub genres: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where the player is with a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Completed,
    Dropped,
    /// Owned but not started yet
    Backlog,
    /// Wanted, not owned
    Wishlist,
}

impl GameStatus {
    pub const ALL: [GameStatus; 6] = [
        GameStatus::NotStarted,
        GameStatus::Playing,
        GameStatus::Completed,
        GameStatus::Dropped,
        GameStatus::Backlog,
        GameStatus::Wishlist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "NotStarted",
            GameStatus::Playing => "Playing",
            GameStatus::Completed => "Completed",
            GameStatus::Dropped => "Dropped",
            GameStatus::Backlog => "Backlog",
            GameStatus::Wishlist => "Wishlist",
        }
    }

    /// Everything except Wishlist counts as owned.
    pub fn is_owned(&self) -> bool {
        *self != GameStatus::Wishlist
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation("status", format!("unknown status '{}'", s)))
    }
}

/// Every mutable field of a game. Used for both add and update;
/// update replaces the stored game wholesale with these values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    pub title: String,
    pub franchise: Option<String>,
    pub sequence_in_franchise: Option<i32>,
    pub platform: String,
    pub release_date: Option<NaiveDate>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub status: GameStatus,
    pub progress_percent: Option<f64>,
    pub playtime_hours: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub cover_art_path: Option<String>,
    pub screenshots: Vec<String>,
    pub genres: Vec<String>,
}

impl GameInput {
    pub fn new(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
            ..Default::default()
        }
    }

    /// Trim text, turn blank optionals into `None`, and reduce genres to a
    /// sorted set. Screenshot order is kept.
    pub fn normalized(self) -> Self {
        let genres: BTreeSet<String> = self
            .genres
            .into_iter()
            .filter_map(non_blank)
            .collect();

        Self {
            title: self.title.trim().to_string(),
            franchise: self.franchise.and_then(non_blank),
            sequence_in_franchise: self.sequence_in_franchise,
            platform: self.platform.trim().to_string(),
            release_date: self.release_date,
            developer: self.developer.and_then(non_blank),
            publisher: self.publisher.and_then(non_blank),
            status: self.status,
            progress_percent: self.progress_percent,
            playtime_hours: self.playtime_hours,
            rating: self.rating,
            notes: self.notes.and_then(non_blank),
            cover_art_path: self.cover_art_path.and_then(non_blank),
            screenshots: self.screenshots.into_iter().filter_map(non_blank).collect(),
            genres: genres.into_iter().collect(),
        }
    }
}

impl Game {
    /// Assemble a stored game from its input and storage-owned fields.
    #[cfg(test)]
    pub(crate) fn from_input(
        id: i64,
        input: GameInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: input.title,
            franchise: input.franchise,
            sequence_in_franchise: input.sequence_in_franchise,
            platform: input.platform,
            release_date: input.release_date,
            developer: input.developer,
            publisher: input.publisher,
            status: input.status,
            progress_percent: input.progress_percent,
            playtime_hours: input.playtime_hours,
            rating: input.rating,
            notes: input.notes,
            cover_art_path: input.cover_art_path,
            screenshots: input.screenshots,
            genres: input.genres,
            created_at,
            updated_at,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
