use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::bank::QuestionBank;
use crate::classification::classify_standard;
use crate::cli::OutputFormat;
use crate::config::QuizConfig;
use crate::core::{Error, LikertValue, QuestionId};
use crate::report::QuizReport;
use crate::session::ScoreAccumulator;

/// A response as written in the file, before Likert validation.
///
/// Kept raw so a bad value such as `9` or `3.5` can be skipped instead of
/// failing the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Number(f64),
}

impl TryFrom<AnswerValue> for LikertValue {
    type Error = Error;

    fn try_from(value: AnswerValue) -> std::result::Result<Self, Error> {
        match value {
            AnswerValue::Integer(v) => LikertValue::try_from(v),
            AnswerValue::Number(v) => LikertValue::try_from(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnswerEntry {
    pub id: QuestionId,
    pub value: AnswerValue,
}

/// Answers recorded outside an interactive session.
///
/// Later entries for the same id revise earlier ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerSheet {
    pub answers: Vec<AnswerEntry>,
}

impl AnswerSheet {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers from {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let sheet: std::result::Result<Self, Error> = if is_json {
            serde_json::from_str(&contents).map_err(Error::from)
        } else {
            toml::from_str(&contents).map_err(Error::from)
        };
        sheet.with_context(|| format!("Failed to parse answers in {}", path.display()))
    }

    /// Replay the sheet into an accumulator.
    ///
    /// Unknown question ids are an error; invalid Likert values (out of
    /// range or not an integer) are logged and skipped so they never reach
    /// the score vector.
    pub fn accumulate(&self, bank: &QuestionBank) -> Result<ScoreAccumulator> {
        let mut accumulator = ScoreAccumulator::new();
        for entry in &self.answers {
            let question = bank
                .get(entry.id)
                .ok_or(Error::UnknownQuestion(entry.id))?;
            match LikertValue::try_from(entry.value) {
                Ok(value) => accumulator.record_answer(question, value),
                Err(e) => log::warn!("Skipping answer to {}: {}", entry.id, e),
            }
        }
        Ok(accumulator)
    }
}

pub fn build_report(
    sheet: &AnswerSheet,
    bank: &QuestionBank,
    config: &QuizConfig,
) -> Result<QuizReport> {
    let accumulator = sheet.accumulate(bank)?;
    if accumulator.answered_count() < config.provisional_threshold {
        log::warn!(
            "Only {} answers recorded; results below {} answers are unreliable",
            accumulator.answered_count(),
            config.provisional_threshold
        );
    }
    Ok(QuizReport::new(
        classify_standard(&accumulator.scores()),
        &accumulator,
        &config.normalizer(),
    ))
}

pub fn score_answers(
    answers: &Path,
    format: OutputFormat,
    plain: bool,
    config: &QuizConfig,
) -> Result<()> {
    let bank = config.question_bank().context("Failed to load question bank")?;
    let sheet = AnswerSheet::load(answers)?;
    let report = build_report(&sheet, &bank, config)?;

    match format {
        OutputFormat::Terminal => print!("{}", report.render_terminal(plain)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
