// src/application/state.rs

use std::sync::Arc;

use crate::services::{GameService, ImageService, StatisticsService};

/// Application state managed by Tauri.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub statistics_service: Arc<StatisticsService>,
    pub image_service: Arc<ImageService>,
}
