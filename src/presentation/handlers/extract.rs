use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::FileLoader;
use crate::application::services::{ExtractedText, UploadedFile};
use crate::presentation::state::AppState;

const FILES_FIELD: &str = "files";

#[derive(Serialize)]
pub struct ExtractedFileResponse {
    pub filename: String,
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ExtractedText> for ExtractedFileResponse {
    fn from(extracted: ExtractedText) -> Self {
        Self {
            filename: extracted.filename,
            full_text: extracted.full_text,
            error: extracted.error,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<F>(
    State(state): State<AppState<F>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
{
    let mut files = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
                )
                    .into_response();
            }
        };

        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
                )
                    .into_response();
            }
        };

        // A form submitted without choosing a file still sends an empty part.
        if filename.is_empty() && data.is_empty() {
            continue;
        }

        tracing::debug!(filename = %filename, bytes = data.len(), "File received");
        files.push(UploadedFile {
            filename,
            data: data.to_vec(),
        });
    }

    match state.extraction_service.extract_all(files).await {
        Ok(results) => {
            tracing::info!(files = results.len(), "Upload extraction complete");
            let body: Vec<ExtractedFileResponse> = results.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Upload rejected");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}
