//! The submission-to-record synthesis pipeline.
//!
//! Composes the enrichment heuristics, artifact storage, certificate
//! encoding and the record store into one flow per submission.

mod qr;

pub use qr::encode_certificate;

use chrono::Utc;
use tracing::info;

use common::enrich;
use common::id;
use common::storage::{ArtifactKind, validate_flat_filename};

use crate::error::AppError;
use crate::models::product::{ProcessResponse, ProductRecord, Submission, UploadedFile};
use crate::state::AppState;

/// Run one submission through the full synthesis pipeline.
///
/// Binary artifacts are persisted first and the record itself is written
/// last, so a storage failure never leaves a committed record pointing at
/// missing artifacts.
pub async fn process(
    state: &AppState,
    submission: Submission,
) -> Result<ProcessResponse, AppError> {
    let image_ref = match &submission.image {
        Some(upload) => Some(store_upload(state, ArtifactKind::Image, upload).await?),
        None => None,
    };
    let audio_ref = match &submission.audio {
        Some(upload) => Some(store_upload(state, ArtifactKind::Audio, upload).await?),
        None => None,
    };

    let transcript =
        enrich::resolve_transcript(submission.transcript.as_deref(), audio_ref.as_deref());
    let story = enrich::synthesize_story(&transcript);
    let tags = enrich::classify_tags(submission.tags.as_deref(), image_ref.as_deref());
    let price_range = enrich::suggest_price(&tags);

    let product_id = id::new_id();
    let qr_file = encode_certificate(
        state.artifacts.as_ref(),
        &product_id,
        &state.config.public_base_url,
    )
    .await?;

    let record = ProductRecord {
        id: product_id.clone(),
        name: submission.name,
        image: image_ref.clone(),
        audio: audio_ref,
        transcript,
        story,
        tags,
        price_range: price_range.to_string(),
        qr: qr_file.clone(),
        created_at: Utc::now(),
    };
    state.records.put(&record).await?;

    info!(product_id = %record.id, name = %record.name, "product record created");

    Ok(ProcessResponse {
        id: record.id,
        name: record.name,
        tags: record.tags,
        story: record.story,
        price_range: record.price_range,
        qr_link: format!("/uploads/qrcodes/{qr_file}"),
        certificate_link: format!("/certificate/{product_id}"),
        image_link: image_ref.map(|file| format!("/uploads/images/{file}")),
    })
}

/// Persist an uploaded binary under a collision-resistant stored name:
/// `{new_id()}_{original_filename}`.
async fn store_upload(
    state: &AppState,
    kind: ArtifactKind,
    upload: &UploadedFile,
) -> Result<String, AppError> {
    let original = validate_flat_filename(&upload.filename)
        .map_err(|msg| AppError::Validation(format!("Invalid upload filename: {msg}")))?;

    let stored_name = format!("{}_{}", id::new_id(), original);
    state.artifacts.put(kind, &stored_name, &upload.data).await?;
    Ok(stored_name)
}
