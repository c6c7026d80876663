// src/application/commands/statistics_commands.rs

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

/// Dashboard statistics over the whole library
#[tauri::command]
pub async fn get_stats(state: State<'_, AppState>) -> Result<LibraryStatisticsDto, String> {
    let stats = state
        .statistics_service
        .compute_stats()
        .to_error_response()?;

    Ok(LibraryStatisticsDto::from(stats))
}
