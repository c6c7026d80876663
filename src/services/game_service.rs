// src/services/game_service.rs
use crate::domain::{validate_game_input, DomainError, Game, GameInput, SearchFilter};
use crate::error::{AppError, AppResult};
use crate::repositories::GameRepository;
use chrono::Utc;
use std::sync::Arc;

pub struct GameService {
    game_repo: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }

    pub fn add_game(&self, input: GameInput) -> AppResult<Game> {
        let input = self.prepare(input)?;
        let game = self.game_repo.insert(&input, Utc::now())?;

        log::info!("added game {} \"{}\"", game.id, game.title);
        Ok(game)
    }

    /// Full replace: every field of the stored game takes the value from
    /// `input`, only `id` and `created_at` survive.
    pub fn update_game(&self, id: i64, input: GameInput) -> AppResult<Game> {
        let input = self.prepare(input)?;
        let game = self.game_repo.update(id, &input, Utc::now())?;

        log::info!("updated game {} \"{}\"", game.id, game.title);
        Ok(game)
    }

    pub fn delete_game(&self, id: i64) -> AppResult<()> {
        self.game_repo.delete(id)?;
        log::info!("deleted game {}", id);
        Ok(())
    }

    pub fn get_game(&self, id: i64) -> AppResult<Game> {
        log::debug!("get game {}", id);
        self.game_repo
            .get_by_id(id)?
            .ok_or_else(|| AppError::game_not_found(id))
    }

    pub fn list_games(&self) -> AppResult<Vec<Game>> {
        let games = self.game_repo.list_all()?;
        log::debug!("listed {} games", games.len());
        Ok(games)
    }

    pub fn search_games(&self, filter: &SearchFilter) -> AppResult<Vec<Game>> {
        if let Some(min) = filter.min_rating {
            if !min.is_finite() {
                return Err(DomainError::validation("min_rating", "must be a number").into());
            }
        }

        let games = self.game_repo.search(filter)?;
        log::debug!("search {:?} matched {} games", filter, games.len());
        Ok(games)
    }

    pub fn get_platforms(&self) -> AppResult<Vec<String>> {
        self.game_repo.distinct_platforms()
    }

    pub fn get_franchises(&self) -> AppResult<Vec<String>> {
        self.game_repo.distinct_franchises()
    }

    pub fn get_genres(&self) -> AppResult<Vec<String>> {
        self.game_repo.distinct_genres()
    }

    /// Normalize and validate; nothing reaches the repository otherwise.
    fn prepare(&self, input: GameInput) -> AppResult<GameInput> {
        let input = input.normalized();
        if let Err(err) = validate_game_input(&input) {
            log::warn!("rejected game \"{}\": {}", input.title, err);
            return Err(AppError::Domain(err));
        }
        Ok(input)
    }
}
