use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use super::config::{LOG_FILE_NAME, LOG_PATH};
use crate::utils::ensure_directory;

/// Environment variable read for per-module filters, e.g. `FXCONV_LOG=fxconv=debug`.
pub const LOG_FILTER_ENV: &str = "FXCONV_LOG";

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))
}

/// Route log output to `~/.config/fxconv/logs/fxconv.log`. The terminal belongs
/// to the interactive view, so nothing is logged to stderr.
pub fn init_logging(level: &str) -> Result<PathBuf> {
    let filter = parse_level(level)?;

    let dir: PathBuf = shellexpand::tilde(LOG_PATH).into_owned().into();
    ensure_directory(&dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_env(LOG_FILTER_ENV)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(path)
}
