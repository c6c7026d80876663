// src/application/commands/image_commands.rs

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

/// Copy a local image or download a URL into the library's images directory.
/// Returns the stored file's absolute path.
#[tauri::command]
pub async fn process_cover_image(
    input: String,
    state: State<'_, AppState>,
) -> Result<String, String> {
    state.image_service.import(&input).await.to_error_response()
}
