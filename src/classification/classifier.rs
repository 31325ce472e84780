//! Ranking of categories against a score vector.
//!
//! Every category's stack-weighted total is computed, the totals are ranked
//! descending, and the gap between the top two becomes the confidence:
//!
//! ```text
//! confidence = clamp(100 * (top - second) / (|top| + |second| + 1e-6), 0, 100)
//! ```
//!
//! Ranking uses a stable sort over the category declaration order, so equal
//! totals resolve to the lexically smaller label.

use serde::Serialize;
use std::cmp::Ordering;

use super::stack_table::StackTable;
use crate::core::Category;
use crate::scoring::Percent;
use crate::session::ScoreVector;

/// Guards the confidence ratio against a zero denominator.
pub const CONFIDENCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub total: f64,
}

/// Outcome of classifying one score vector. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub top_category: Category,
    pub runner_up: Category,
    pub confidence: Percent,
    /// All sixteen totals, highest first.
    pub ranking: Vec<CategoryScore>,
}

impl ClassificationResult {
    pub fn top_score(&self) -> f64 {
        self.ranking[0].total
    }

    pub fn runner_up_score(&self) -> f64 {
        self.ranking[1].total
    }

    pub fn total_for(&self, category: Category) -> f64 {
        self.ranking
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.total)
            .unwrap_or(0.0)
    }

    /// Totals in category declaration order.
    pub fn category_scores(&self) -> [f64; Category::COUNT] {
        let mut totals = [0.0; Category::COUNT];
        for score in &self.ranking {
            totals[score.category.index()] = score.total;
        }
        totals
    }
}

/// Classify `scores` against `table`.
pub fn classify(scores: &ScoreVector, table: &StackTable) -> ClassificationResult {
    let mut ranking: Vec<CategoryScore> = Category::ALL
        .into_iter()
        .map(|category| CategoryScore {
            category,
            total: table.total(category, scores),
        })
        .collect();

    // Stable: equal totals keep declaration order
    ranking.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    let top = ranking[0];
    let second = ranking[1];
    let confidence = confidence(top.total, second.total);

    log::debug!(
        "Classified as {} ({:.3}) over {} ({:.3}), confidence {}",
        top.category,
        top.total,
        second.category,
        second.total,
        confidence
    );

    ClassificationResult {
        top_category: top.category,
        runner_up: second.category,
        confidence,
        ranking,
    }
}

/// Classify with the standard stack table.
pub fn classify_standard(scores: &ScoreVector) -> ClassificationResult {
    classify(scores, &StackTable::standard())
}

// Pure function: normalized gap between the two best totals
fn confidence(top: f64, second: f64) -> Percent {
    let gap = 100.0 * (top - second) / (top.abs() + second.abs() + CONFIDENCE_EPSILON);
    Percent::from_f64(gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension::{self, *};
    use pretty_assertions::assert_eq;

    fn mock_vector() -> ScoreVector {
        ScoreVector::from_pairs([
            (Ni, 15.0),
            (Ne, -5.0),
            (Si, -10.0),
            (Se, -15.0),
            (Ti, 10.0),
            (Te, 5.0),
            (Fi, -5.0),
            (Fe, 0.0),
        ])
    }

    #[test]
    fn test_mock_vector_scenario() {
        let result = classify_standard(&mock_vector());

        // INFJ: 15*4 + 0*2 + 10*1 + -15*0.5 = 62.5
        // INTJ: 15*4 + 5*2 + -5*1 + -15*0.5 = 57.5
        assert_eq!(result.top_category, Category::Infj);
        assert_eq!(result.top_score(), 62.5);
        assert_eq!(result.runner_up, Category::Intj);
        assert_eq!(result.runner_up_score(), 57.5);
        for score in &result.ranking[1..] {
            assert!(result.top_score() > score.total);
        }
        // 100 * 5 / 120 = 4.17
        assert_eq!(result.confidence.value(), 4);
    }

    #[test]
    fn test_zero_vector_has_zero_confidence() {
        let result = classify_standard(&ScoreVector::new());
        assert_eq!(result.confidence, Percent::ZERO);
        assert_eq!(result.top_category, Category::Enfj);
        assert_eq!(result.runner_up, Category::Enfp);
    }

    #[test]
    fn test_ties_resolve_to_declaration_order() {
        // Only Ni scored: INFJ and INTJ both lead with Ni and tie at 4.0
        let result = classify_standard(&ScoreVector::from_pairs([(Ni, 1.0)]));
        assert_eq!(result.top_category, Category::Infj);
        assert_eq!(result.runner_up, Category::Intj);
        assert_eq!(result.confidence, Percent::ZERO);
    }

    #[test]
    fn test_ranking_contains_all_categories_descending() {
        let result = classify_standard(&mock_vector());
        assert_eq!(result.ranking.len(), Category::COUNT);
        for pair in result.ranking.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
        let totals = result.category_scores();
        assert_eq!(totals[Category::Infj.index()], 62.5);
        assert_eq!(result.total_for(Category::Intj), 57.5);
    }

    #[test]
    fn test_opposite_signs_cap_at_full_confidence() {
        // Only one dominant dimension strongly positive, everything else negative
        let scores = ScoreVector::from_pairs(
            Dimension::ALL
                .into_iter()
                .map(|d| (d, if d == Se { 10.0 } else { -10.0 })),
        );
        let result = classify_standard(&scores);
        assert!(result.confidence <= Percent::FULL);
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(confidence(10.0, 5.0).value(), 33);
        assert_eq!(confidence(10.0, -10.0).value(), 100);
        assert_eq!(confidence(0.0, 0.0).value(), 0);
        assert_eq!(confidence(-2.0, -4.0).value(), 33);
    }
}
