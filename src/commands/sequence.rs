use anyhow::{Context, Result};
use std::path::Path;

use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::sequencer::{QuestionSequencer, SequenceOutcome};

pub fn sequence_bank(bank: &QuestionBank, config: &QuizConfig, seed: Option<u64>) -> SequenceOutcome {
    let sequencer = QuestionSequencer::new(config.max_shuffle_attempts);
    match seed.or(config.seed) {
        Some(seed) => sequencer.sequence_seeded(bank.questions(), seed),
        None => sequencer.sequence(bank.questions()),
    }
}

pub fn print_sequence(seed: Option<u64>, bank: Option<&Path>, config: &QuizConfig) -> Result<()> {
    let bank = match bank {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load question bank {}", path.display()))?,
        None => config.question_bank().context("Failed to load question bank")?,
    };

    let outcome = sequence_bank(&bank, config, seed);
    for (position, question) in outcome.questions.iter().enumerate() {
        println!(
            "{:>3}. [{}] {}{} {}",
            position + 1,
            question.dimension,
            question.id,
            if question.is_reversed { "*" } else { "" },
            question.text
        );
    }
    if !outcome.constrained {
        eprintln!(
            "Warning: adjacent questions share a dimension (no valid order found in {} attempts)",
            outcome.attempts
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::has_adjacent_repeat;

    #[test]
    fn test_explicit_seed_overrides_config() {
        let config = QuizConfig {
            seed: Some(1),
            ..QuizConfig::default()
        };
        let bank = QuestionBank::standard();
        let from_config = sequence_bank(bank, &config, None);
        let explicit = sequence_bank(bank, &config, Some(1));
        let other = sequence_bank(bank, &config, Some(2));
        assert_eq!(from_config, explicit);
        assert_ne!(from_config.questions, other.questions);
    }

    #[test]
    fn test_standard_bank_order_is_valid_permutation() {
        let bank = QuestionBank::standard();
        for seed in 0..20 {
            let outcome = sequence_bank(bank, &QuizConfig::default(), Some(seed));
            assert_eq!(outcome.constrained, !has_adjacent_repeat(&outcome.questions));
            let mut ids: Vec<_> = outcome.questions.iter().map(|q| q.id).collect();
            ids.sort();
            let expected: Vec<_> = bank.questions().iter().map(|q| q.id).collect();
            assert_eq!(ids, expected);
        }
    }
}
