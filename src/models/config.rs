use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the Trastienda service.
///
/// Replaces the process-wide mutable settings of older inventory tools with
/// an explicit struct handed to the storage and upload components at
/// construction time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub bind_address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Directory product images are written to. Also the URL prefix under
    /// which they are served, so it must live under the static root.
    pub upload_dir: String,
    /// Lowercase image extensions accepted by the upload handler.
    pub allowed_image_extensions: Vec<String>,
    /// Signing key for the flash-message cookie store. A random key is
    /// generated when absent, which invalidates pending messages on restart.
    pub secret_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from an optional YAML file plus environment
    /// overrides (e.g. `DATABASE_URL`, `PORT`).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "products.db")?
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 5000)?
            .set_default("upload_dir", "static/images")?
            .set_default(
                "allowed_image_extensions",
                vec!["png", "jpg", "jpeg", "gif"],
            )?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
