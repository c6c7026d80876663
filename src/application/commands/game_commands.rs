// src/application/commands/game_commands.rs
//
// Game Command Handlers

use tauri::State;

use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::{dto::*, state::AppState};
use crate::domain::{DomainError, GameInput, SearchFilter};

/// List every game, most recently updated first
#[tauri::command]
pub async fn get_all_games(state: State<'_, AppState>) -> Result<Vec<GameDto>, String> {
    let games = state.game_service.list_games().to_error_response()?;
    Ok(games.into_iter().map(GameDto::from).collect())
}

#[tauri::command]
pub async fn get_game(id: i64, state: State<'_, AppState>) -> Result<GameDto, String> {
    let game = state.game_service.get_game(id).to_error_response()?;
    Ok(GameDto::from(game))
}

#[tauri::command]
pub async fn add_game(
    input: GameInputDto,
    state: State<'_, AppState>,
) -> Result<GameDto, String> {
    let input = GameInput::try_from(input).map_err(rejected)?;
    let game = state.game_service.add_game(input).to_error_response()?;
    Ok(GameDto::from(game))
}

/// Replace every field of an existing game
#[tauri::command]
pub async fn update_game(
    id: i64,
    input: GameInputDto,
    state: State<'_, AppState>,
) -> Result<GameDto, String> {
    let input = GameInput::try_from(input).map_err(rejected)?;
    let game = state.game_service.update_game(id, input).to_error_response()?;
    Ok(GameDto::from(game))
}

#[tauri::command]
pub async fn delete_game(id: i64, state: State<'_, AppState>) -> Result<(), String> {
    state.game_service.delete_game(id).to_error_response()
}

#[tauri::command]
pub async fn search_games(
    filter: SearchFilterDto,
    state: State<'_, AppState>,
) -> Result<Vec<GameDto>, String> {
    let filter = SearchFilter::try_from(filter).map_err(rejected)?;
    let games = state.game_service.search_games(&filter).to_error_response()?;
    Ok(games.into_iter().map(GameDto::from).collect())
}

#[tauri::command]
pub async fn get_platforms(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    state.game_service.get_platforms().to_error_response()
}

#[tauri::command]
pub async fn get_franchises(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    state.game_service.get_franchises().to_error_response()
}

#[tauri::command]
pub async fn get_genres(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    state.game_service.get_genres().to_error_response()
}

/// DTO conversion failures go out in the same shape as service errors.
fn rejected(err: DomainError) -> String {
    let response = ErrorResponse::from_app_error(err.into());
    serde_json::to_string(&response).unwrap_or_else(|_| "Internal error".to_string())
}
