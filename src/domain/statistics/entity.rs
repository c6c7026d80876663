use serde::{Deserialize, Serialize};

use crate::domain::GameStatus;

/// How many titles `recent_completions` holds at most
pub const RECENT_COMPLETIONS_LIMIT: usize = 5;

/// Dashboard summary of the whole library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStatistics {
    pub total_games: u32,
    pub by_status: StatusBreakdown,
    pub total_playtime_hours: f64,
    pub average_rating: Option<f64>,
    /// Percentage of owned (non-Wishlist) games that are Completed
    pub completion_rate: f64,
    pub games_by_platform: Vec<CountEntry>,
    pub games_by_genre: Vec<CountEntry>,
    pub games_by_franchise: Vec<CountEntry>,
    /// Titles of the most recently completed games, newest first
    pub recent_completions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub not_started: u32,
    pub playing: u32,
    pub completed: u32,
    pub dropped: u32,
    pub backlog: u32,
    pub wishlist: u32,
}

/// A name -> count pair used for chart data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub name: String,
    pub count: u32,
}

impl StatusBreakdown {
    pub fn record(&mut self, status: GameStatus) {
        *self.slot(status) += 1;
    }

    pub fn count(&self, status: GameStatus) -> u32 {
        match status {
            GameStatus::NotStarted => self.not_started,
            GameStatus::Playing => self.playing,
            GameStatus::Completed => self.completed,
            GameStatus::Dropped => self.dropped,
            GameStatus::Backlog => self.backlog,
            GameStatus::Wishlist => self.wishlist,
        }
    }

    pub fn total(&self) -> u32 {
        GameStatus::ALL.iter().map(|s| self.count(*s)).sum()
    }

    fn slot(&mut self, status: GameStatus) -> &mut u32 {
        match status {
            GameStatus::NotStarted => &mut self.not_started,
            GameStatus::Playing => &mut self.playing,
            GameStatus::Completed => &mut self.completed,
            GameStatus::Dropped => &mut self.dropped,
            GameStatus::Backlog => &mut self.backlog,
            GameStatus::Wishlist => &mut self.wishlist,
        }
    }
}

impl CountEntry {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl LibraryStatistics {
    pub fn empty() -> Self {
        Self {
            total_games: 0,
            by_status: StatusBreakdown::default(),
            total_playtime_hours: 0.0,
            average_rating: None,
            completion_rate: 0.0,
            games_by_platform: Vec::new(),
            games_by_genre: Vec::new(),
            games_by_franchise: Vec::new(),
            recent_completions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_records_each_status() {
        let mut breakdown = StatusBreakdown::default();
        for status in GameStatus::ALL {
            breakdown.record(status);
        }
        breakdown.record(GameStatus::Completed);

        assert_eq!(breakdown.count(GameStatus::Completed), 2);
        assert_eq!(breakdown.count(GameStatus::Wishlist), 1);
        assert_eq!(breakdown.total(), 7);
    }
}
