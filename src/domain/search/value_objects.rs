// src/domain/search/value_objects.rs
//
// Search request value objects
//
// Every predicate is optional; an absent predicate places no constraint.
// Predicates combine with AND.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, GameStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Case-insensitive substring of title, franchise or notes
    pub query: Option<String>,
    pub status: Option<GameStatus>,
    pub platform: Option<String>,
    pub franchise: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<SortField>,
    pub sort_asc: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Title,
    ReleaseDate,
    Rating,
    PlaytimeHours,
    ProgressPercent,
    #[default]
    UpdatedAt,
    SequenceInFranchise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_franchise(mut self, franchise: impl Into<String>) -> Self {
        self.franchise = Some(franchise.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn sorted_by(mut self, field: SortField, ascending: bool) -> Self {
        self.sort_by = Some(field);
        self.sort_asc = Some(ascending);
        self
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_by.unwrap_or_default()
    }

    /// Without an explicit direction the default UpdatedAt sort runs newest
    /// first; an explicitly chosen field sorts ascending.
    pub fn sort_direction(&self) -> SortDirection {
        let ascending = self.sort_asc.unwrap_or(self.sort_by.is_some());
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Title,
        SortField::ReleaseDate,
        SortField::Rating,
        SortField::PlaytimeHours,
        SortField::ProgressPercent,
        SortField::UpdatedAt,
        SortField::SequenceInFranchise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::ReleaseDate => "ReleaseDate",
            SortField::Rating => "Rating",
            SortField::PlaytimeHours => "PlaytimeHours",
            SortField::ProgressPercent => "ProgressPercent",
            SortField::UpdatedAt => "UpdatedAt",
            SortField::SequenceInFranchise => "SequenceInFranchise",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::validation("sort_by", format!("unknown sort field '{}'", s)))
    }
}
