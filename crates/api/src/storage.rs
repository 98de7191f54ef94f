//! Local file storage for uploaded media.
//!
//! Files live under `{root}/{subdir}/{uuid}{ext}` where `subdir` is derived
//! from the MIME type. Stored paths are always relative to the root and are
//! checked segment by segment before touching the filesystem.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_core::media::{file_extension, is_safe_path_segment, storage_subdir};

/// Default MIME whitelist when `UPLOAD_ALLOWED_TYPES` is not set.
const DEFAULT_ALLOWED_TYPES: &str =
    "image/jpeg,image/png,image/gif,image/webp,video/mp4,video/webm,application/pdf";

/// Default upload limit (50 MiB).
const DEFAULT_MAX_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Cannot store empty file")]
    EmptyFile,

    #[error("File type not allowed: {0}")]
    TypeNotAllowed(String),

    #[error("File exceeds the maximum upload size of {0} bytes")]
    TooLarge(usize),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload settings.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub root: PathBuf,
    pub allowed_types: HashSet<String>,
    pub max_bytes: usize,
}

impl UploadConfig {
    /// Load upload settings from environment variables.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `UPLOAD_PATH`          | `./uploads`                           |
    /// | `UPLOAD_ALLOWED_TYPES` | common image/video types plus PDF     |
    /// | `UPLOAD_MAX_BYTES`     | `52428800`                            |
    pub fn from_env() -> Self {
        let root = PathBuf::from(std::env::var("UPLOAD_PATH").unwrap_or_else(|_| "./uploads".into()));

        let allowed_types = std::env::var("UPLOAD_ALLOWED_TYPES")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_TYPES.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_bytes: usize = std::env::var("UPLOAD_MAX_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_BYTES.to_string())
            .parse()
            .expect("UPLOAD_MAX_BYTES must be a valid usize");

        Self {
            root,
            allowed_types,
            max_bytes,
        }
    }
}

/// A file written by [`FileStorage::store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Path relative to the storage root, e.g. `images/<uuid>.png`.
    pub relative_path: String,
    pub size: i64,
}

/// Filesystem-backed media storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: UploadConfig,
}

impl FileStorage {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn max_bytes(&self) -> usize {
        self.config.max_bytes
    }

    /// Check type and size before anything is written.
    pub fn check_upload(&self, content_type: &str, len: usize) -> Result<(), StorageError> {
        if len == 0 {
            return Err(StorageError::EmptyFile);
        }
        if !self.config.allowed_types.contains(content_type) {
            return Err(StorageError::TypeNotAllowed(content_type.to_string()));
        }
        if len > self.config.max_bytes {
            return Err(StorageError::TooLarge(self.config.max_bytes));
        }
        Ok(())
    }

    /// Write an upload under a fresh UUID name and return its relative path.
    pub async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredFile, StorageError> {
        self.check_upload(content_type, data.len())?;

        let subdir = storage_subdir(content_type);
        let filename = format!("{}{}", uuid::Uuid::new_v4(), file_extension(original_name));

        let dir = self.config.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), data).await?;

        Ok(StoredFile {
            relative_path: format!("{subdir}/{filename}"),
            size: data.len() as i64,
        })
    }

    /// Read a stored file.
    pub async fn load(&self, relative_path: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(relative_path)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(relative_path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn delete(&self, relative_path: &str) -> Result<(), StorageError> {
        let path = self.resolve(relative_path)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Map a relative path onto the root, rejecting traversal.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf, StorageError> {
        let segments: Vec<&str> = relative_path.split('/').collect();
        if segments.is_empty() || !segments.iter().all(|s| is_safe_path_segment(s)) {
            return Err(StorageError::InvalidPath(relative_path.to_string()));
        }
        Ok(segments
            .iter()
            .fold(self.config.root.clone(), |acc: PathBuf, s| acc.join(Path::new(s))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn storage(root: PathBuf) -> FileStorage {
        FileStorage::new(UploadConfig {
            root,
            allowed_types: ["image/png", "application/pdf"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_bytes: 16,
        })
    }

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-storage-{name}-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn rejects_empty_disallowed_and_oversized() {
        let s = storage(temp_root("check"));
        assert_matches!(s.check_upload("image/png", 0), Err(StorageError::EmptyFile));
        assert_matches!(
            s.check_upload("text/html", 4),
            Err(StorageError::TypeNotAllowed(t)) if t == "text/html"
        );
        assert_matches!(s.check_upload("image/png", 17), Err(StorageError::TooLarge(16)));
        assert!(s.check_upload("image/png", 16).is_ok());
    }

    #[test]
    fn resolve_rejects_traversal() {
        let s = storage(temp_root("resolve"));
        assert_matches!(s.resolve("../etc/passwd"), Err(StorageError::InvalidPath(_)));
        assert_matches!(s.resolve("images/../../x"), Err(StorageError::InvalidPath(_)));
        assert_matches!(s.resolve("images//x.png"), Err(StorageError::InvalidPath(_)));
        assert!(s.resolve("images/x.png").is_ok());
    }

    #[tokio::test]
    async fn store_load_delete_round_trip() {
        let root = temp_root("roundtrip");
        let s = storage(root.clone());

        let stored = s.store("diagram.PNG", "image/png", b"\x89PNG").await.unwrap();
        assert!(stored.relative_path.starts_with("images/"));
        assert!(stored.relative_path.ends_with(".PNG"));
        assert_eq!(stored.size, 4);

        assert_eq!(s.load(&stored.relative_path).await.unwrap(), b"\x89PNG");

        s.delete(&stored.relative_path).await.unwrap();
        assert_matches!(
            s.load(&stored.relative_path).await,
            Err(StorageError::NotFound(_))
        );
        // Deleting twice is fine.
        s.delete(&stored.relative_path).await.unwrap();

        let _ = tokio::fs::remove_dir_all(root).await;
    }

    #[tokio::test]
    async fn pdf_goes_to_documents() {
        let root = temp_root("pdf");
        let s = storage(root.clone());
        let stored = s.store("cv.pdf", "application/pdf", b"%PDF").await.unwrap();
        assert!(stored.relative_path.starts_with("documents/"));
        let _ = tokio::fs::remove_dir_all(root).await;
    }

    #[tokio::test]
    async fn unsafe_client_extension_is_dropped() {
        let root = temp_root("ext");
        let s = storage(root.clone());

        let stored = s.store("report.v2/final", "image/png", b"\x89PNG").await.unwrap();
        let (subdir, filename) = stored.relative_path.split_once('/').unwrap();
        assert_eq!(subdir, "images");
        assert!(!filename.contains('.'));
        assert_eq!(s.load(&stored.relative_path).await.unwrap(), b"\x89PNG");

        let _ = tokio::fs::remove_dir_all(root).await;
    }
}
