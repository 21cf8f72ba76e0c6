use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::product::{ProcessResponse, Submission, UploadedFile};
use crate::pipeline;
use crate::state::AppState;

pub fn process_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(64 * 1024 * 1024) // 64 MB
}

#[utoipa::path(
    post,
    path = "/process",
    tag = "Products",
    operation_id = "processSubmission",
    summary = "Process an artisan product submission",
    description = "Accepts a multipart submission (`product_name` required; `tags`, \
        `transcript`, `image` and `audio` optional) and synthesizes the product record: \
        story, normalized tags, suggested price range and a scannable certificate.",
    request_body(content_type = "multipart/form-data", description = "Product submission form"),
    responses(
        (status = 200, description = "Product record created", body = ProcessResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn process_submission(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let submission = read_submission(&mut multipart).await?;
    let response = pipeline::process(&state, submission).await?;
    Ok(Json(response))
}

async fn read_submission(multipart: &mut Multipart) -> Result<Submission, AppError> {
    let mut name: Option<String> = None;
    let mut tags: Option<String> = None;
    let mut transcript: Option<String> = None;
    let mut image: Option<UploadedFile> = None;
    let mut audio: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("product_name") => name = Some(read_text(field, "product_name").await?),
            Some("tags") => tags = Some(read_text(field, "tags").await?),
            Some("transcript") => transcript = Some(read_text(field, "transcript").await?),
            Some("image") => image = read_file(field).await?,
            Some("audio") => audio = read_file(field).await?,
            _ => {} // Ignore unknown fields.
        }
    }

    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("product_name is required".into()))?;

    Ok(Submission {
        name,
        tags,
        transcript,
        image,
        audio,
    })
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))
}

async fn read_file(field: Field<'_>) -> Result<Option<UploadedFile>, AppError> {
    // File inputs submitted empty arrive with no filename; treat as absent.
    let filename = match field.file_name() {
        Some(f) if !f.trim().is_empty() => f.to_string(),
        _ => return Ok(None),
    };

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

    Ok(Some(UploadedFile {
        filename,
        data: data.to_vec(),
    }))
}
