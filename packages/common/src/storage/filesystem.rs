use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::traits::{ArtifactKind, ArtifactStore};
use crate::id;

/// Filesystem-backed artifact store.
///
/// Artifacts live under one directory per category:
/// `{base_path}/{images,audio,qrcodes}/{filename}`. Writes land in a temp
/// file first and are moved into place with a rename, so readers never see a
/// half-written artifact.
pub struct FilesystemArtifactStore {
    base_path: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create the store, bootstrapping the category directories.
    pub async fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        for kind in [ArtifactKind::Image, ArtifactKind::Audio, ArtifactKind::QrCode] {
            fs::create_dir_all(base_path.join(kind.dir_name())).await?;
        }
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self { base_path })
    }

    fn artifact_path(&self, kind: ArtifactKind, filename: &str) -> PathBuf {
        self.base_path.join(kind.dir_name()).join(filename)
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path.join(".tmp").join(id::new_id())
    }
}

#[async_trait]
impl ArtifactStore for FilesystemArtifactStore {
    async fn put(
        &self,
        kind: ArtifactKind,
        filename: &str,
        data: &[u8],
    ) -> Result<(), StorageError> {
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        let dest = self.artifact_path(kind, filename);
        if let Err(e) = fs::rename(&temp_path, &dest).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn get(&self, kind: ArtifactKind, filename: &str) -> Result<Vec<u8>, StorageError> {
        match fs::read(self.artifact_path(kind, filename)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, kind: ArtifactKind, filename: &str) -> Result<bool, StorageError> {
        match fs::metadata(self.artifact_path(kind, filename)).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
