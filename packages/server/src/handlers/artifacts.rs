use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use common::storage::{ArtifactKind, validate_flat_filename};

use crate::error::AppError;
use crate::state::AppState;

/// Serve a stored artifact: an uploaded image or voice note, or a generated
/// certificate QR image.
#[instrument(skip(state))]
pub async fn serve_artifact(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = ArtifactKind::from_dir_name(&category)
        .ok_or_else(|| AppError::NotFound(format!("Unknown artifact category '{category}'")))?;
    let filename = validate_flat_filename(&filename)
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let content = state.artifacts.get(kind, filename).await?;
    let mime = mime_guess::from_path(filename).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content))
        .map_err(|e| AppError::Internal(e.to_string()))
}
