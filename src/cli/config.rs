use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::exchange::{ExchangeRateOptions, DEFAULT_BASE_URL};
use crate::models::CurrencyList;
use crate::utils::{read_file_to_string, write_file};

pub const CONFIG_PATH: &str = "~/.config/fxconv/config.yaml";
pub const LOG_PATH: &str = "~/.config/fxconv/logs";
pub const LOG_FILE_NAME: &str = "fxconv.log";
pub const API_KEY_ENV: &str = "FXCONV_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// exchangerate-api.com key; `FXCONV_API_KEY` takes precedence.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub currencies: CurrencyList,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            currencies: CurrencyList::default(),
        }
    }
}

impl Config {
    /// Replace the file's key with `key` when one is given and non-blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn exchange_options(&self) -> Result<ExchangeRateOptions> {
        let api_key = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!(
                "No exchange-rate API key configured. Set {} or add `api_key` to {}",
                API_KEY_ENV,
                CONFIG_PATH
            ),
        };
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }

        Ok(ExchangeRateOptions {
            api_key,
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

pub fn config_path(custom: Option<&Path>) -> PathBuf {
    match custom {
        Some(path) => path.to_path_buf(),
        None => shellexpand::tilde(CONFIG_PATH).into_owned().into(),
    }
}

pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    write_file(path, &yaml)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let content = read_file_to_string(path)?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Load the configuration, writing a default one first if there is none.
pub fn ensure_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        write_config(path, &config)?;
        println!(
            "No configuration present, we created one at: {}\n\
             Add your exchangerate-api.com key there as `api_key`, or export {}.",
            path.display(),
            API_KEY_ENV
        );
        return Ok(config);
    }

    read_config(path)
}

/// Configuration as the program should use it: file (created on demand) plus
/// the environment override for the API key.
pub fn resolve_config(custom: Option<&Path>) -> Result<Config> {
    let config = ensure_config(&config_path(custom))?;
    Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
}
