use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ACTIVITY_DISPLAY_LIMIT: usize = 10;

const DEMO_IDENTIFIER: &str = "intern@demo.com";
const DEMO_SECRET: &str = "intern123";

/// The single credential pair accepted by the placeholder login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialConfig {
    pub identifier: String,
    pub secret: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            identifier: DEMO_IDENTIFIER.to_string(),
            secret: DEMO_SECRET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted records.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// How many activity log entries to show.
    #[serde(default)]
    pub activity_display_limit: Option<usize>,
    /// Keep only this many newest log entries in storage. Unset keeps all.
    #[serde(default)]
    pub max_persisted_log_entries: Option<usize>,
    #[serde(default)]
    pub credentials: Option<CredentialConfig>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("taskboard")))
    }

    pub fn effective_activity_display_limit(&self) -> usize {
        self.activity_display_limit
            .unwrap_or(DEFAULT_ACTIVITY_DISPLAY_LIMIT)
    }

    pub fn effective_credentials(&self) -> CredentialConfig {
        self.credentials.clone().unwrap_or_default()
    }
}
