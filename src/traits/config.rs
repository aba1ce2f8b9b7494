//! Configuration store seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::AppConfig;

/// Configuration store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to load the configuration
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),
    /// Failed to save the configuration
    #[error("failed to save configuration: {0}")]
    SaveFailed(String),
    /// No platform configuration directory available
    #[error("could not determine configuration directory")]
    NoConfigDirectory,
}

/// Read/write access to the persisted configuration.
///
/// Read once on startup, written on every user toggle. The store itself
/// does not notify: after a successful save the host echoes the new value
/// back on the event stream as
/// [`BackendEvent::ConfigChanged`](crate::host::BackendEvent::ConfigChanged),
/// and only that echo updates the in-memory state.
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Load the stored configuration.
    ///
    /// `Ok(None)` means nothing has been stored yet; callers fall back to
    /// [`AppConfig::default`].
    async fn load(&self) -> Result<Option<AppConfig>, ConfigError>;

    /// Persist the configuration.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}
