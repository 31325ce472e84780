//! Quiz configuration.
//!
//! Settings live in `.typequiz.toml`, found by walking up from the current
//! directory. Every field is optional and falls back to its default:
//!
//! ```toml
//! provisional_threshold = 8
//! max_shuffle_attempts = 1000
//! score_range = 20.0
//! seed = 42
//! bank = "questions.toml"
//! ```

mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use loader::{
    load_config, load_config_from, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::bank::QuestionBank;
use crate::core::Result;
use crate::scoring::{ScoreNormalizer, DEFAULT_SCORE_RANGE};
use crate::sequencer::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Answers required before a provisional type is shown mid-quiz.
    #[serde(default = "default_provisional_threshold")]
    pub provisional_threshold: usize,

    /// Shuffles tried before accepting an order with adjacent repeats.
    #[serde(default = "default_max_shuffle_attempts")]
    pub max_shuffle_attempts: u32,

    /// Symmetric bound used to map raw scores onto 0-100.
    #[serde(default = "default_score_range")]
    pub score_range: f64,

    /// Fixed seed for reproducible question order.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Custom question bank (TOML or JSON).
    #[serde(default)]
    pub bank: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            provisional_threshold: default_provisional_threshold(),
            max_shuffle_attempts: default_max_shuffle_attempts(),
            score_range: default_score_range(),
            seed: None,
            bank: None,
        }
    }
}

impl QuizConfig {
    /// Check every setting, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn normalizer(&self) -> ScoreNormalizer {
        ScoreNormalizer::new(self.score_range)
    }

    /// The configured bank, or the standard one.
    pub fn question_bank(&self) -> Result<QuestionBank> {
        match &self.bank {
            Some(path) => QuestionBank::load(path),
            None => Ok(QuestionBank::standard().clone()),
        }
    }
}

pub fn default_provisional_threshold() -> usize {
    8 // one answer per dimension on average
}

pub fn default_max_shuffle_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

pub fn default_score_range() -> f64 {
    DEFAULT_SCORE_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.provisional_threshold, 8);
        assert_eq!(config.max_shuffle_attempts, 1000);
        assert_eq!(config.score_range, 20.0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: QuizConfig = toml::from_str("").unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<QuizConfig>("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_default_bank_is_standard() {
        let bank = QuizConfig::default().question_bank().unwrap();
        assert_eq!(bank.len(), QuestionBank::standard().len());
    }

    #[test]
    fn test_normalizer_uses_range() {
        let config = QuizConfig {
            score_range: 10.0,
            ..QuizConfig::default()
        };
        assert_eq!(config.normalizer().range(), 10.0);
    }
}
