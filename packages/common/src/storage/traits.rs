use async_trait::async_trait;

use super::error::StorageError;

/// Category an artifact is stored under; one directory per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Uploaded product photo.
    Image,
    /// Uploaded voice note.
    Audio,
    /// Generated certificate QR image.
    QrCode,
}

impl ArtifactKind {
    /// Directory (and URL category segment) for this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Audio => "audio",
            Self::QrCode => "qrcodes",
        }
    }

    /// Parse a URL category segment back into a kind.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "images" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "qrcodes" => Some(Self::QrCode),
            _ => None,
        }
    }
}

/// Binary artifact storage, keyed by category and filename.
///
/// Uploaded images and audio plus generated certificate codes all go through
/// this interface; nothing above it touches the filesystem directly.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store bytes under the given category and filename, replacing any
    /// existing artifact with the same name.
    async fn put(
        &self,
        kind: ArtifactKind,
        filename: &str,
        data: &[u8],
    ) -> Result<(), StorageError>;

    /// Retrieve an artifact's bytes.
    async fn get(&self, kind: ArtifactKind, filename: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether an artifact exists.
    async fn exists(&self, kind: ArtifactKind, filename: &str) -> Result<bool, StorageError>;
}
