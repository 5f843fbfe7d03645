//! Validation and persistence of uploaded product images.

use std::fs;
use std::path::{Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use thiserror::Error;

use crate::models::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("uploaded file has no name")]
    MissingFileName,
    #[error("unsupported image extension: {0}")]
    UnsupportedExtension(String),
    #[error("uploaded file name is invalid")]
    InvalidFileName,
    #[error("failed to store image: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes uploaded images into a fixed directory that doubles as a static
/// asset root, so the stored path is also the URL the pages reference.
#[derive(Clone)]
pub struct ImageStore {
    upload_dir: PathBuf,
    public_prefix: String,
    allowed_extensions: Vec<String>,
}

impl ImageStore {
    /// Build the store from configuration, creating the upload directory if
    /// it does not exist yet.
    pub fn new(config: &ServerConfig) -> std::io::Result<Self> {
        fs::create_dir_all(&config.upload_dir)?;
        Ok(Self {
            upload_dir: PathBuf::from(&config.upload_dir),
            public_prefix: config.upload_dir.trim_end_matches('/').to_string(),
            allowed_extensions: config
                .allowed_image_extensions
                .iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
        })
    }

    /// Validate the uploaded file and copy it into the upload directory.
    /// Returns the server-relative path stored on the product row. An upload
    /// with the same name as an existing file overwrites it.
    pub fn save(&self, file: &TempFile) -> Result<String, ImageStoreError> {
        let file_name = file
            .file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ImageStoreError::MissingFileName)?;

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !self.allowed_extensions.contains(&extension) {
            return Err(ImageStoreError::UnsupportedExtension(extension));
        }

        let sanitized = sanitize_file_name(file_name);
        if sanitized.is_empty() {
            return Err(ImageStoreError::InvalidFileName);
        }

        // fs::copy instead of NamedTempFile::persist: the temp directory may
        // live on a different filesystem than the upload directory.
        fs::copy(file.file.path(), self.upload_dir.join(&sanitized))?;

        Ok(format!("{}/{}", self.public_prefix, sanitized))
    }
}

/// Reduce an uploaded file name to a safe single path component: keep ASCII
/// alphanumerics, dots, dashes and underscores, turn whitespace into
/// underscores, drop everything else, then strip leading dots so the result
/// can neither traverse directories nor hide itself.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}
