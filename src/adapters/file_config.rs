//! JSON-file configuration store.
//!
//! Persists [`AppConfig`] as pretty-printed JSON, by default under the
//! platform configuration directory (`<config_dir>/droppad/config.json`).
//! A missing file is not an error: it simply means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::models::AppConfig;
use crate::traits::{ConfigError, ConfigService};

/// File-backed [`ConfigService`].
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store reading and writing the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<config_dir>/droppad/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDirectory)?;
        Ok(base.join("droppad").join("config.json"))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigService for FileConfigStore {
    async fn load(&self) -> Result<Option<AppConfig>, ConfigError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ConfigError::LoadFailed(err.to_string())),
        };

        let config = serde_json::from_str(&data)
            .map_err(|err| ConfigError::LoadFailed(err.to_string()))?;
        Ok(Some(config))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ConfigError::SaveFailed(err.to_string()))?;
        }

        let data = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::SaveFailed(err.to_string()))?;
        fs::write(&self.path, data).map_err(|err| ConfigError::SaveFailed(err.to_string()))?;

        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}
