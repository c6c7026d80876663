// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use gametrc::application::commands::*;
use gametrc::application::state::AppState;
use gametrc::config::LibraryConfig;
use gametrc::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use gametrc::repositories::{GameRepository, SqliteGameRepository};
use gametrc::services::{GameService, ImageService, StatisticsService};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. INFRASTRUCTURE
    let config = LibraryConfig::from_env()?;
    let pool = Arc::new(create_connection_pool(&config)?);

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        log::info!(
            "library at {} ({} games, {} bytes)",
            config.data_dir().display(),
            stats.game_count,
            stats.size_bytes
        );
    }

    // 2. REPOSITORIES
    let game_repo: Arc<dyn GameRepository> = Arc::new(SqliteGameRepository::new(pool.clone()));

    // 3. SERVICES
    let app_state = AppState {
        game_service: Arc::new(GameService::new(game_repo.clone())),
        statistics_service: Arc::new(StatisticsService::new(game_repo)),
        image_service: Arc::new(ImageService::from_config(&config)?),
    };

    // 4. TAURI BOOTSTRAP
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            get_all_games,
            get_game,
            add_game,
            update_game,
            delete_game,
            search_games,
            get_platforms,
            get_franchises,
            get_genres,
            get_stats,
            process_cover_image,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
