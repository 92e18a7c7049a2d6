//! Avatar file storage.

use chrono::Utc;
use shared::slug::sanitize_filename;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::UploadsConfig;

/// File name used when the client sends none.
pub const DEFAULT_AVATAR_NAME: &str = "avatar.png";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Invalid multipart body: {0}")]
    Multipart(String),

    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the stored name `<user_id>_<unix_millis>_<sanitized original>`.
pub fn avatar_file_name(user_id: i64, original: Option<&str>, unix_millis: i64) -> String {
    let original = original.unwrap_or_default();
    format!(
        "{}_{}_{}",
        user_id,
        unix_millis,
        sanitize_filename(original, DEFAULT_AVATAR_NAME)
    )
}

/// Writes avatars into the configured upload directory.
#[derive(Debug, Clone)]
pub struct AvatarStore {
    dir: PathBuf,
    public_path: String,
    max_bytes: usize,
}

impl AvatarStore {
    pub fn new(config: &UploadsConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            public_path: config.public_path.trim_end_matches('/').to_string(),
            max_bytes: config.max_avatar_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Stores `bytes` and returns the public URL of the new file.
    pub async fn save(
        &self,
        user_id: i64,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        if bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                limit: self.max_bytes,
            });
        }

        let file_name = avatar_file_name(user_id, original_name, Utc::now().timestamp_millis());
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        tracing::debug!(file = %file_name, size = bytes.len(), "Avatar stored");
        Ok(self.public_url(&file_name))
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_path, file_name)
    }
}
