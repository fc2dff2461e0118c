// GUI configuration module
pub mod theme; // Theme selection and palettes

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use shared::utils::ZeroAmount;
use std::path::{Path, PathBuf};
use thiserror::Error;

use theme::Theme;

/// Environment variable pointing at a user configuration file.
pub const CONFIG_PATH_ENV: &str = "AUCTION_DESK_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

// Mirrors the structure of assets/config/default.json
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub currency: CurrencySettings,
    #[serde(default)]
    pub dates: DateSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub theme: Theme,
    pub initial_tab: String, // "donors", "sales" or "reports"
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CurrencySettings {
    #[serde(default)]
    pub zero_amount: ZeroAmount,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DateSettings {
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl DateSettings {
    /// Zone dates are displayed in. Out-of-range offsets are rejected at load time.
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

impl AppConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&config_str)
    }

    /// Loads the file named by `AUCTION_DESK_CONFIG`, or the embedded default when unset.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                tracing::info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Self::load_default(),
        }
    }

    pub fn from_json(config_str: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let minutes = self.dates.utc_offset_minutes;
        if minutes.checked_mul(60).and_then(FixedOffset::east_opt).is_none() {
            return Err(ConfigError::InvalidOffset(minutes));
        }
        Ok(())
    }
}
