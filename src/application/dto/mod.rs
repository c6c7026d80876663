// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// The UI speaks plain JSON: statuses and sort fields are strings, dates
// are "YYYY-MM-DD", timestamps are RFC 3339. Conversion into domain types
// is fallible and names the offending field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    CountEntry, DomainError, Game, GameInput, GameStatus, LibraryStatistics, SearchFilter,
    SortField, StatusBreakdown,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// GAME DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDto {
    pub id: i64,
    pub title: String,
    pub franchise: Option<String>,
    pub sequence_in_franchise: Option<i32>,
    pub release_date: Option<String>,
    pub platform: String,
    pub status: String,
    pub progress_percent: Option<f64>,
    pub playtime_hours: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub cover_art_path: Option<String>,
    pub screenshots: Vec<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genres: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for add and update. `status` defaults to "NotStarted".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInputDto {
    pub title: String,
    pub franchise: Option<String>,
    pub sequence_in_franchise: Option<i32>,
    pub release_date: Option<String>,
    pub platform: String,
    pub status: Option<String>,
    pub progress_percent: Option<f64>,
    pub playtime_hours: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub cover_art_path: Option<String>,
    pub screenshots: Vec<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genres: Vec<String>,
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilterDto {
    pub query: Option<String>,
    pub status: Option<String>,
    pub platform: Option<String>,
    pub franchise: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
    pub sort_asc: Option<bool>,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryStatisticsDto {
    pub total_games: u32,
    pub by_status: StatusCountsDto,
    pub total_playtime_hours: f64,
    pub average_rating: Option<f64>,
    pub completion_rate: f64,
    pub games_by_platform: Vec<CountEntryDto>,
    pub games_by_genre: Vec<CountEntryDto>,
    pub games_by_franchise: Vec<CountEntryDto>,
    pub recent_completions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCountsDto {
    pub not_started: u32,
    pub playing: u32,
    pub completed: u32,
    pub dropped: u32,
    pub backlog: u32,
    pub wishlist: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountEntryDto {
    pub name: String,
    pub count: u32,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            franchise: game.franchise,
            sequence_in_franchise: game.sequence_in_franchise,
            release_date: game.release_date.map(|d| d.format(DATE_FORMAT).to_string()),
            platform: game.platform,
            status: game.status.to_string(),
            progress_percent: game.progress_percent,
            playtime_hours: game.playtime_hours,
            rating: game.rating,
            notes: game.notes,
            cover_art_path: game.cover_art_path,
            screenshots: game.screenshots,
            developer: game.developer,
            publisher: game.publisher,
            genres: game.genres,
            created_at: game.created_at.to_rfc3339(),
            updated_at: game.updated_at.to_rfc3339(),
        }
    }
}

impl From<LibraryStatistics> for LibraryStatisticsDto {
    fn from(stats: LibraryStatistics) -> Self {
        Self {
            total_games: stats.total_games,
            by_status: stats.by_status.into(),
            total_playtime_hours: stats.total_playtime_hours,
            average_rating: stats.average_rating,
            completion_rate: stats.completion_rate,
            games_by_platform: counts(stats.games_by_platform),
            games_by_genre: counts(stats.games_by_genre),
            games_by_franchise: counts(stats.games_by_franchise),
            recent_completions: stats.recent_completions,
        }
    }
}

impl From<StatusBreakdown> for StatusCountsDto {
    fn from(b: StatusBreakdown) -> Self {
        Self {
            not_started: b.not_started,
            playing: b.playing,
            completed: b.completed,
            dropped: b.dropped,
            backlog: b.backlog,
            wishlist: b.wishlist,
        }
    }
}

fn counts(entries: Vec<CountEntry>) -> Vec<CountEntryDto> {
    entries
        .into_iter()
        .map(|e| CountEntryDto {
            name: e.name,
            count: e.count,
        })
        .collect()
}

// ============================================================================
// CONVERSION HELPERS (DTO → Domain)
// ============================================================================

impl TryFrom<GameInputDto> for GameInput {
    type Error = DomainError;

    fn try_from(dto: GameInputDto) -> Result<Self, Self::Error> {
        let status = match non_blank(dto.status) {
            Some(s) => s.parse::<GameStatus>()?,
            None => GameStatus::default(),
        };

        let release_date = non_blank(dto.release_date)
            .map(|s| {
                NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|_| {
                    DomainError::validation("release_date", format!("'{}' is not YYYY-MM-DD", s))
                })
            })
            .transpose()?;

        Ok(GameInput {
            title: dto.title,
            franchise: dto.franchise,
            sequence_in_franchise: dto.sequence_in_franchise,
            platform: dto.platform,
            release_date,
            developer: dto.developer,
            publisher: dto.publisher,
            status,
            progress_percent: dto.progress_percent,
            playtime_hours: dto.playtime_hours,
            rating: dto.rating,
            notes: dto.notes,
            cover_art_path: dto.cover_art_path,
            screenshots: dto.screenshots,
            genres: dto.genres,
        })
    }
}

impl TryFrom<SearchFilterDto> for SearchFilter {
    type Error = DomainError;

    fn try_from(dto: SearchFilterDto) -> Result<Self, Self::Error> {
        Ok(SearchFilter {
            // free text keeps its spaces; they are part of the substring
            query: dto.query.filter(|q| !q.trim().is_empty()),
            status: non_blank(dto.status)
                .map(|s| s.parse::<GameStatus>())
                .transpose()?,
            platform: non_blank(dto.platform),
            franchise: non_blank(dto.franchise),
            genre: non_blank(dto.genre),
            min_rating: dto.min_rating,
            sort_by: non_blank(dto.sort_by)
                .map(|s| s.parse::<SortField>())
                .transpose()?,
            sort_asc: dto.sort_asc,
        })
    }
}

/// Blank strings from form fields mean "not set".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
