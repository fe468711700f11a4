//! Display preferences, stored as JSON next to the application data.

use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use crate::{
    currency::CurrencySettings,
    ledger::DEFAULT_HISTORY_LIMIT,
    utils::paths::{app_data_dir, config_file_in},
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown setting `{0}` (expected currency-symbol, currency-code, history-limit or plain-mode)")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: ConfigKey,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub currency_code: String,
    pub history_limit: usize,
    pub plain_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        let currency = CurrencySettings::default();
        Self {
            currency_symbol: currency.symbol,
            currency_code: currency.code,
            history_limit: DEFAULT_HISTORY_LIMIT,
            plain_mode: false,
        }
    }
}

impl Config {
    pub fn currency(&self) -> CurrencySettings {
        CurrencySettings::new(self.currency_symbol.clone(), self.currency_code.clone())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::CurrencySymbol => self.currency_symbol.clone(),
            ConfigKey::CurrencyCode => self.currency_code.clone(),
            ConfigKey::HistoryLimit => self.history_limit.to_string(),
            ConfigKey::PlainMode => self.plain_mode.to_string(),
        }
    }

    /// Applies a raw value; the config is untouched when validation fails.
    pub fn set(&mut self, key: ConfigKey, raw: &str) -> Result<(), ConfigError> {
        let value = raw.trim();
        let invalid = |reason| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason,
        };
        match key {
            ConfigKey::CurrencySymbol => {
                if value.is_empty() {
                    return Err(invalid("symbol cannot be empty"));
                }
                self.currency_symbol = value.to_string();
            }
            ConfigKey::CurrencyCode => {
                if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid("expected a three-letter code"));
                }
                self.currency_code = value.to_ascii_uppercase();
            }
            ConfigKey::HistoryLimit => {
                let limit = value
                    .parse::<usize>()
                    .map_err(|_| invalid("expected a whole number"))?;
                if limit == 0 {
                    return Err(invalid("must be at least 1"));
                }
                self.history_limit = limit;
            }
            ConfigKey::PlainMode => {
                self.plain_mode = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid("expected on or off")),
                };
            }
        }
        Ok(())
    }

    /// Checks stored values against the same rules as [`Config::set`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut check = self.clone();
        for key in ConfigKey::ALL {
            check.set(key, &self.get(key))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CurrencySymbol,
    CurrencyCode,
    HistoryLimit,
    PlainMode,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::CurrencySymbol,
        ConfigKey::CurrencyCode,
        ConfigKey::HistoryLimit,
        ConfigKey::PlainMode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::CurrencySymbol => "currency-symbol",
            ConfigKey::CurrencyCode => "currency-code",
            ConfigKey::HistoryLimit => "history-limit",
            ConfigKey::PlainMode => "plain-mode",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownKey(value.trim().to_string()))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: config_file_in(&base),
        }
    }

    /// Loads the stored config, or defaults when none has been saved yet.
    /// A file holding values `set` would refuse is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes to a sibling temp file, then renames over the real one.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
