//! Running per-dimension totals for one quiz attempt.
//!
//! Invariant: for every dimension `d`, `scores[d]` is the sum of the item
//! scores of all currently recorded answers whose question measures `d`.
//! Revising an answer removes the stored contribution before adding the new
//! one, so going back and changing a response never double counts.

use std::collections::HashMap;

use super::score_vector::ScoreVector;
use crate::core::{Answer, Dimension, LikertValue, Question, QuestionId};
use crate::scoring::item_scorer;

#[derive(Debug, Clone, Copy, PartialEq)]
struct RecordedAnswer {
    dimension: Dimension,
    answer: Answer,
}

impl RecordedAnswer {
    fn contribution(&self) -> f64 {
        item_scorer::score(self.answer.value, self.answer.is_reversed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    scores: ScoreVector,
    answers: HashMap<QuestionId, RecordedAnswer>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or revise the answer to `question`.
    pub fn record_answer(&mut self, question: &Question, value: LikertValue) {
        let new = RecordedAnswer {
            dimension: question.dimension,
            answer: Answer {
                value,
                is_reversed: question.is_reversed,
            },
        };

        if let Some(old) = self.answers.get(&question.id) {
            if *old == new {
                return;
            }
            self.scores.subtract(old.dimension, old.contribution());
        }

        self.scores.add(new.dimension, new.contribution());
        self.answers.insert(question.id, new);
    }

    /// Drop all answers and return to an all-zero score vector.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn scores(&self) -> ScoreVector {
        self.scores
    }

    pub fn answer(&self, id: QuestionId) -> Option<Answer> {
        self.answers.get(&id).map(|r| r.answer)
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of recorded answers per dimension
    pub fn answered_by_dimension(&self) -> [usize; Dimension::COUNT] {
        let mut counts = [0; Dimension::COUNT];
        for recorded in self.answers.values() {
            counts[recorded.dimension.index()] += 1;
        }
        counts
    }
}
