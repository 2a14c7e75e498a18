//! Uploaded images.
//!
//! The frontend sends profile images inline as `data:image/<ext>;base64,<payload>`.

use std::path::PathBuf;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cc_common::StorageConfig;
use cc_core::error::DomainError;
use cc_core::traits::{ImageStore, RepoResult};
use tracing::{debug, instrument};
use uuid::Uuid;

/// A decoded data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// File extension taken from the media type, e.g. `png`
    pub extension: String,
    pub bytes: Vec<u8>,
}

/// Decode `data:image/<ext>;base64,<payload>`. Only png, jpeg, gif and webp
/// are accepted.
pub fn decode_data_url(data_url: &str) -> Result<DecodedImage, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidImage(reason.to_string());

    let rest = data_url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| invalid("expected a data URL"))?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| invalid("expected base64 encoding"))?;
    let subtype = media_type
        .strip_prefix("image/")
        .ok_or_else(|| invalid("expected an image media type"))?
        .to_ascii_lowercase();
    let extension = match subtype.as_str() {
        "png" => "png",
        "jpeg" | "jpg" => "jpg",
        "gif" => "gif",
        "webp" => "webp",
        _ => return Err(invalid("unsupported image type")),
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| invalid(&e.to_string()))?;
    if bytes.is_empty() {
        return Err(invalid("empty payload"));
    }

    Ok(DecodedImage {
        extension: extension.to_string(),
        bytes,
    })
}

/// Writes images under the upload directory with random file names
#[derive(Debug, Clone)]
pub struct FileImageStore {
    root: PathBuf,
    max_bytes: usize,
}

impl FileImageStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir, config.max_file_size_bytes())
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn store(&self, extension: &str, bytes: &[u8]) -> RepoResult<String> {
        if bytes.len() > self.max_bytes {
            return Err(DomainError::InvalidImage(format!(
                "image exceeds {} bytes",
                self.max_bytes
            )));
        }

        let directory = self.root.join("profile_images");
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let file_name = format!("{}.{extension}", Uuid::new_v4().simple());
        tokio::fs::write(directory.join(&file_name), bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(file_name = %file_name, "Image stored");
        Ok(format!("/media/profile_images/{file_name}"))
    }
}
