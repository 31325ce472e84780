//! CLI command implementations.
//!
//! Available commands:
//! - **take**: Interactive quiz over stdin/stdout
//! - **score**: Classify a file of recorded answers
//! - **sequence**: Print a randomized question order
//! - **init**: Write a default configuration file

pub mod init;
pub mod score;
pub mod sequence;
pub mod take;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{self, QuizConfig};

pub use init::init_config;
pub use score::{score_answers, AnswerSheet};
pub use sequence::print_sequence;
pub use take::{run_interactive, take_quiz};

/// Explicit config path fails hard; otherwise the nearest file or defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<QuizConfig> {
    match explicit {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load_config()),
    }
}
