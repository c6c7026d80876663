// src/services/statistics_service.rs
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    CountEntry, Game, GameStatus, LibraryStatistics, StatusBreakdown, RECENT_COMPLETIONS_LIMIT,
};
use crate::error::AppResult;
use crate::repositories::GameRepository;

pub struct StatisticsService {
    game_repo: Arc<dyn GameRepository>,
}

impl StatisticsService {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }

    /// Recomputed from the full collection on every call; nothing is cached.
    pub fn compute_stats(&self) -> AppResult<LibraryStatistics> {
        let games = self.game_repo.list_all()?;
        let stats = aggregate(&games);

        log::debug!(
            "computed statistics over {} games ({} completed)",
            stats.total_games,
            stats.by_status.completed
        );
        Ok(stats)
    }
}

/// Summarize a collection of games.
pub fn aggregate(games: &[Game]) -> LibraryStatistics {
    if games.is_empty() {
        return LibraryStatistics::empty();
    }

    let mut by_status = StatusBreakdown::default();
    let mut platforms: HashMap<&str, u32> = HashMap::new();
    let mut genres: HashMap<&str, u32> = HashMap::new();
    let mut franchises: HashMap<&str, u32> = HashMap::new();
    let mut total_playtime_hours = 0.0;
    let mut rating_sum = 0.0;
    let mut rated = 0u32;

    for game in games {
        by_status.record(game.status);
        *platforms.entry(game.platform.as_str()).or_default() += 1;

        // genres are already a set per game
        for genre in &game.genres {
            *genres.entry(genre.as_str()).or_default() += 1;
        }
        if let Some(franchise) = game.franchise.as_deref() {
            *franchises.entry(franchise).or_default() += 1;
        }

        if let Some(hours) = game.playtime_hours {
            total_playtime_hours += hours;
        }
        if let Some(rating) = game.rating {
            rating_sum += rating;
            rated += 1;
        }
    }

    let average_rating = (rated > 0).then(|| rating_sum / rated as f64);

    let owned = games.iter().filter(|g| g.status.is_owned()).count();
    let completion_rate = if owned == 0 {
        0.0
    } else {
        by_status.completed as f64 / owned as f64 * 100.0
    };

    LibraryStatistics {
        total_games: games.len() as u32,
        by_status,
        total_playtime_hours,
        average_rating,
        completion_rate,
        games_by_platform: ranked(platforms),
        games_by_genre: ranked(genres),
        games_by_franchise: ranked(franchises),
        recent_completions: recent_completions(games),
    }
}

/// Count desc, then name asc.
fn ranked(counts: HashMap<&str, u32>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry::new(name, count))
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

fn recent_completions(games: &[Game]) -> Vec<String> {
    let mut completed: Vec<&Game> = games
        .iter()
        .filter(|g| g.status == GameStatus::Completed)
        .collect();

    completed.sort_by(|a, b| match b.updated_at.cmp(&a.updated_at) {
        Ordering::Equal => b.id.cmp(&a.id),
        other => other,
    });

    completed
        .into_iter()
        .take(RECENT_COMPLETIONS_LIMIT)
        .map(|g| g.title.clone())
        .collect()
}
