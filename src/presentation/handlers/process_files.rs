use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::FileLoader;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[tracing::instrument(skip(state))]
pub async fn process_files_handler<F>(State(state): State<AppState<F>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
{
    let directories = &state.settings.directories;

    match state
        .batch_service
        .process_directory(&directories.input_dir, &directories.output_dir)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Batch processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}
