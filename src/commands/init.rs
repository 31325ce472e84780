use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;

const DEFAULT_CONFIG: &str = r#"# typequiz configuration

# Answers required before a provisional type is shown mid-quiz
provisional_threshold = 8

# Shuffles tried before accepting an order with adjacent repeated dimensions
max_shuffle_attempts = 1000

# Raw scores in [-score_range, +score_range] map onto 0-100 for display
score_range = 20.0

# Fixed seed for a reproducible question order
# seed = 42

# Custom question bank (TOML or JSON), relative to this file
# bank = "questions.toml"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
