use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The durable result of processing one submission.
///
/// Append-only: a record is written exactly once and never mutated or
/// deleted. Serialized field names are the on-disk document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    /// Stored image artifact filename, when an image was uploaded.
    pub image: Option<String>,
    /// Stored audio artifact filename, when audio was uploaded.
    pub audio: Option<String>,
    pub transcript: String,
    pub story: String,
    pub tags: Vec<String>,
    pub price_range: String,
    /// Filename of the generated certificate QR image.
    pub qr: String,
    pub created_at: DateTime<Utc>,
}

/// A parsed product submission, before enrichment.
#[derive(Debug)]
pub struct Submission {
    pub name: String,
    pub tags: Option<String>,
    pub transcript: Option<String>,
    pub image: Option<UploadedFile>,
    pub audio: Option<UploadedFile>,
}

/// An uploaded binary with its original filename.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Response payload for a processed submission.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProcessResponse {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub story: String,
    /// One of the fixed price-band strings.
    #[schema(example = "₹1500–₹3500")]
    pub price_range: String,
    /// Path to the certificate QR image artifact.
    #[schema(example = "/uploads/qrcodes/5e0c7a.png")]
    pub qr_link: String,
    /// Path to the public certificate page.
    #[schema(example = "/certificate/5e0c7a")]
    pub certificate_link: String,
    /// Path to the stored image artifact, when one was uploaded.
    pub image_link: Option<String>,
}
