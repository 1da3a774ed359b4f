use chatfmt_engine::Platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that relocates the config file.
pub const CONFIG_PATH_ENV: &str = "CHATFMT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// The user's remembered output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target platform.
    pub platform: Platform,
    /// Chunk budget in characters. `None` uses the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    /// Whether output is split into chunks at all.
    pub split: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            max_len: None,
            split: true,
        }
    }
}

impl Config {
    /// Chunk budget to split with, or `None` when splitting is off.
    ///
    /// Budgets below [`Platform::MIN_MAX_LEN`] are raised to it.
    pub fn effective_max_len(&self) -> Option<usize> {
        if !self.split {
            return None;
        }
        let wanted = self
            .max_len
            .unwrap_or_else(|| self.platform.default_max_len());
        Some(wanted.max(Platform::MIN_MAX_LEN))
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$CHATFMT_CONFIG` if set, otherwise `~/.config/chatfmt/config.toml`.
    pub fn config_path() -> PathBuf {
        let from_env = std::env::var(CONFIG_PATH_ENV).ok();
        Self::config_path_from(from_env.as_deref())
    }

    fn config_path_from(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
            let path = PathBuf::from(path);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/chatfmt");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
