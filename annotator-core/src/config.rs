//! Navigator configuration file
//!
//! JSON file with every field optional, stored by default at
//! `<config_dir>/annotator/config.json`.

use std::path::{Path, PathBuf};

use annotator_store::{StoreConfig, MAX_RESULT_WINDOW};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{CoreError, CoreResult};

/// Default number of users fetched by `start()`
pub const DEFAULT_USERS_PAGE_SIZE: u32 = 50;

/// Navigation settings plus the store connection they run against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorConfig {
    /// Size of the single users page fetched at start
    pub users_page_size: u32,
    /// Upper bound on a whole fetch (messages plus counter); `None` waits forever
    pub fetch_timeout_secs: Option<u64>,
    pub store: StoreConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            users_page_size: DEFAULT_USERS_PAGE_SIZE,
            fetch_timeout_secs: None,
            store: StoreConfig::default(),
        }
    }
}

/// Default config file location
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("annotator")
        .join("config.json")
}

impl NavigatorConfig {
    /// Read and validate a config file
    pub async fn load(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::ConfigIo(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded navigator config from {}", path.display());
        Ok(config)
    }

    /// Like [`NavigatorConfig::load`], but a missing file yields the defaults
    pub async fn load_or_default(path: &Path) -> CoreResult<Self> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path).await
    }

    /// Write the config as pretty JSON, creating parent directories
    pub async fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::ConfigIo(format!("{}: {e}", dir.display())))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(path, content)
            .await
            .map_err(|e| CoreError::ConfigIo(format!("{}: {e}", path.display())))?;
        Ok(())
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.users_page_size == 0 || self.users_page_size > MAX_RESULT_WINDOW {
            return Err(CoreError::InvalidConfig(format!(
                "usersPageSize must be between 1 and {MAX_RESULT_WINDOW}, got {}",
                self.users_page_size
            )));
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err(CoreError::InvalidConfig(
                "fetchTimeoutSecs must be positive".to_string(),
            ));
        }
        self.store
            .validate()
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }
}
