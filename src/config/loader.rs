use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::QuizConfig;
use crate::core::{Error, Result};

/// Config file searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".typequiz.toml";

/// Directories checked, starting directory included
const MAX_SEARCH_DEPTH: usize = 10;

/// Parse TOML and validate the resulting config.
pub fn parse_and_validate_config(contents: &str) -> Result<QuizConfig> {
    let config = toml::from_str::<QuizConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file; any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<QuizConfig> {
    let contents = fs::read_to_string(path)?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(with_bank_relative_to(config, path))
}

// Relative bank paths are relative to the config file, not the cwd
fn with_bank_relative_to(mut config: QuizConfig, config_path: &Path) -> QuizConfig {
    if let (Some(bank), Some(dir)) = (&config.bank, config_path.parent()) {
        if bank.is_relative() {
            config.bank = Some(dir.join(bank));
        }
    }
    config
}

/// A discovered config file that cannot be used is skipped with a warning;
/// a missing one is skipped silently.
fn discovered_config(dir: &Path) -> Option<QuizConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    match load_config_from_path(&path) {
        Ok(config) => Some(config),
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Ignoring {}: {}. Using defaults.", path.display(), e);
            None
        }
    }
}

/// Nearest `.typequiz.toml` at or above `start`, or defaults.
pub fn load_config_from(start: &Path) -> QuizConfig {
    start
        .ancestors()
        .take(MAX_SEARCH_DEPTH)
        .find_map(discovered_config)
        .unwrap_or_else(|| {
            log::debug!("No {} found above {}", CONFIG_FILE_NAME, start.display());
            QuizConfig::default()
        })
}

pub fn load_config() -> QuizConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!("Cannot read current directory: {}. Using defaults.", e);
            QuizConfig::default()
        }
    }
}
