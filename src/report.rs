//! Presentation of quiz results.

use colored::*;
use serde::Serialize;
use std::fmt::Write as _;

use crate::classification::ClassificationResult;
use crate::core::{Category, CategoryProfile, Dimension};
use crate::scoring::{Percent, ScoreNormalizer};
use crate::session::ScoreAccumulator;

#[derive(Debug, Clone, Serialize)]
pub struct DimensionLine {
    pub dimension: Dimension,
    pub name: &'static str,
    pub raw: f64,
    pub display: Percent,
    /// Answers that contributed to this dimension
    pub answered: usize,
}

/// Everything the result screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub category: Category,
    pub profile: CategoryProfile,
    pub runner_up: Category,
    pub confidence: Percent,
    pub answered: usize,
    /// Dimensions from strongest to weakest
    pub dimensions: Vec<DimensionLine>,
    pub classification: ClassificationResult,
}

impl QuizReport {
    pub fn new(
        classification: ClassificationResult,
        accumulator: &ScoreAccumulator,
        normalizer: &ScoreNormalizer,
    ) -> Self {
        let per_dimension = accumulator.answered_by_dimension();
        let dimensions = accumulator
            .scores()
            .ranked()
            .into_iter()
            .map(|(dimension, raw)| DimensionLine {
                dimension,
                name: dimension.name(),
                raw,
                display: normalizer.normalize(raw),
                answered: per_dimension[dimension.index()],
            })
            .collect();

        Self {
            category: classification.top_category,
            profile: classification.top_category.profile(),
            runner_up: classification.runner_up,
            confidence: classification.confidence,
            answered: accumulator.answered_count(),
            dimensions,
            classification,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary; `plain` disables colors.
    pub fn render_terminal(&self, plain: bool) -> String {
        let mut out = String::new();
        let headline = format!("{} - {}", self.category, self.profile.nickname);

        let _ = writeln!(out, "{}", style(&headline, plain, |s| s.blue().bold()));
        let _ = writeln!(out, "{}", self.profile.summary);
        let _ = writeln!(
            out,
            "Confidence: {}  (runner-up: {} - {})",
            style(&self.confidence.to_string(), plain, |s| s.cyan()),
            self.runner_up,
            self.runner_up.profile().nickname
        );
        let _ = writeln!(out, "Answered: {}", self.answered);
        let _ = writeln!(out);

        for line in &self.dimensions {
            let bar = score_bar(line.display);
            let bar = if line.raw >= 0.0 {
                style(&bar, plain, |s| s.green())
            } else {
                style(&bar, plain, |s| s.yellow())
            };
            let _ = writeln!(
                out,
                "  {} {:<22} {} {:>3}  ({:+.2}, {} answered)",
                line.dimension,
                line.name,
                bar,
                line.display.value(),
                line.raw,
                line.answered
            );
        }
        out
    }
}

fn style(text: &str, plain: bool, paint: impl Fn(&str) -> ColoredString) -> String {
    if plain {
        text.to_string()
    } else {
        paint(text).to_string()
    }
}

// 20-cell bar, one cell per 5 points
fn score_bar(display: Percent) -> String {
    let filled = usize::from(display.value()) / 5;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::classify_standard;
    use crate::core::{LikertValue, Question};

    fn report() -> QuizReport {
        let mut accumulator = ScoreAccumulator::new();
        let answers = [
            (Question::new(1, "a", Dimension::Ni, false), 5),
            (Question::new(2, "b", Dimension::Ni, true), 1),
            (Question::new(3, "c", Dimension::Ti, false), 4),
            (Question::new(4, "d", Dimension::Se, false), 1),
        ];
        for (question, value) in &answers {
            accumulator.record_answer(question, LikertValue::new(*value).unwrap());
        }
        QuizReport::new(
            classify_standard(&accumulator.scores()),
            &accumulator,
            &ScoreNormalizer::default(),
        )
    }

    #[test]
    fn test_dimensions_strongest_first() {
        let report = report();
        assert_eq!(report.dimensions.len(), 8);
        assert_eq!(report.dimensions[0].dimension, Dimension::Ni);
        assert_eq!(report.dimensions[1].dimension, Dimension::Ti);
        assert_eq!(report.dimensions[7].dimension, Dimension::Se);
        // 2 * 2^1.2 = 4.59 on a +/-20 range
        assert_eq!(report.dimensions[0].display.value(), 61);
    }

    #[test]
    fn test_per_dimension_answer_counts() {
        let report = report();
        assert_eq!(report.answered, 4);
        assert_eq!(report.dimensions[0].answered, 2);
        assert_eq!(report.dimensions[1].answered, 1);
        assert_eq!(report.dimensions[7].answered, 1);
        assert!(report.dimensions[2..7].iter().all(|line| line.answered == 0));
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let text = report().render_terminal(true);
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains(report().category.label()));
        assert!(text.contains("Confidence:"));
        assert!(text.contains("Answered: 4"));
        assert!(text.contains("2 answered"));
    }

    #[test]
    fn test_json_contains_category_label() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["category"], report().category.label());
        assert_eq!(json["classification"]["ranking"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar(Percent::ZERO).len(), 20);
        assert_eq!(score_bar(Percent::FULL), "#".repeat(20));
    }
}
