//! Validation with error accumulation for configuration.
//!
//! Every check runs, and all failures are reported together so a user can
//! fix a config file in one pass.

use super::QuizConfig;
use crate::core::{Error, Result};

// Pure function: collect every problem with the config
pub fn collect_config_errors(config: &QuizConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.max_shuffle_attempts == 0 {
        errors.push("max_shuffle_attempts must be at least 1".to_string());
    }

    if !config.score_range.is_finite() || config.score_range <= 0.0 {
        errors.push(format!(
            "score_range must be a positive number, got {}",
            config.score_range
        ));
    }

    if let Some(bank) = &config.bank {
        if bank.as_os_str().is_empty() {
            errors.push("bank path must not be empty".to_string());
        }
    }

    errors
}

/// Validate the config, returning all errors in a single message.
pub fn validate_config(config: &QuizConfig) -> Result<()> {
    let errors = collect_config_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(collect_config_errors(&QuizConfig::default()).is_empty());
    }

    #[test]
    fn test_accumulates_all_errors() {
        let config = QuizConfig {
            max_shuffle_attempts: 0,
            score_range: f64::NAN,
            bank: Some(PathBuf::new()),
            ..QuizConfig::default()
        };
        let errors = collect_config_errors(&config);
        assert_eq!(errors.len(), 3);

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("max_shuffle_attempts"));
        assert!(message.contains("score_range"));
        assert!(message.contains("bank"));
    }

    #[test]
    fn test_zero_threshold_is_allowed() {
        let config = QuizConfig {
            provisional_threshold: 0,
            ..QuizConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
