//! In-memory configuration store for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::AppConfig;
use crate::traits::{ConfigError, ConfigService};

/// In-memory [`ConfigService`] with failure toggles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfig {
    stored: Arc<Mutex<Option<AppConfig>>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryConfig {
    /// Empty store (loads as `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(config);
        store
    }

    /// Make subsequent loads fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Make subsequent saves fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// What is currently stored (sync accessor for assertions).
    pub fn stored(&self) -> Option<AppConfig> {
        *self.stored.lock().unwrap()
    }
}

#[async_trait]
impl ConfigService for InMemoryConfig {
    async fn load(&self) -> Result<Option<AppConfig>, ConfigError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(ConfigError::LoadFailed("mock load failure".to_string()));
        }
        Ok(*self.stored.lock().unwrap())
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(ConfigError::SaveFailed("mock save failure".to_string()));
        }
        *self.stored.lock().unwrap() = Some(*config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemoryConfig::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save(&AppConfig { on_top: true }).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(AppConfig { on_top: true }));
        assert_eq!(store.stored(), Some(AppConfig { on_top: true }));
    }

    #[tokio::test]
    async fn test_failure_toggles() {
        let store = InMemoryConfig::with_config(AppConfig { on_top: true });

        store.set_load_should_fail(true);
        assert!(matches!(store.load().await, Err(ConfigError::LoadFailed(_))));

        store.set_save_should_fail(true);
        let result = store.save(&AppConfig { on_top: false }).await;
        assert!(matches!(result, Err(ConfigError::SaveFailed(_))));
        // A failed save leaves the stored value untouched
        assert_eq!(store.stored(), Some(AppConfig { on_top: true }));
    }
}
