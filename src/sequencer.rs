//! Randomized question ordering.
//!
//! Questions are shuffled with a uniform Fisher-Yates permutation and the
//! result is accepted only if no two consecutive questions measure the same
//! dimension. Rejected permutations are retried up to a fixed budget; when
//! the budget runs out the last permutation is used as is. Banks whose
//! dimension counts make the constraint impossible therefore still get a
//! random order after a bounded amount of work.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Question;

/// Default retry budget before falling back to an unconstrained order.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// A produced ordering plus how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOutcome {
    pub questions: Vec<Question>,
    /// Permutations generated, including the accepted one.
    pub attempts: u32,
    /// Whether the no-adjacent-repeat constraint holds.
    pub constrained: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSequencer {
    max_attempts: u32,
}

impl QuestionSequencer {
    /// A budget of zero is treated as one attempt.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Shuffle with a caller-supplied random source.
    pub fn sequence_with_rng<R: Rng + ?Sized>(
        &self,
        questions: &[Question],
        rng: &mut R,
    ) -> SequenceOutcome {
        let mut order = questions.to_vec();

        if order.len() < 2 {
            return SequenceOutcome {
                questions: order,
                attempts: 1,
                constrained: true,
            };
        }

        for attempt in 1..=self.max_attempts {
            order.shuffle(rng);
            if !has_adjacent_repeat(&order) {
                log::debug!(
                    "Sequenced {} questions in {} attempt(s)",
                    order.len(),
                    attempt
                );
                return SequenceOutcome {
                    questions: order,
                    attempts: attempt,
                    constrained: true,
                };
            }
        }

        log::warn!(
            "No ordering without adjacent repeated dimensions found in {} attempts; using last shuffle",
            self.max_attempts
        );
        SequenceOutcome {
            questions: order,
            attempts: self.max_attempts,
            constrained: false,
        }
    }

    /// Shuffle with a deterministic seed.
    pub fn sequence_seeded(&self, questions: &[Question], seed: u64) -> SequenceOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.sequence_with_rng(questions, &mut rng)
    }

    /// Shuffle with the thread-local random source.
    pub fn sequence(&self, questions: &[Question]) -> SequenceOutcome {
        self.sequence_with_rng(questions, &mut rand::thread_rng())
    }
}

impl Default for QuestionSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Randomized order with the default retry budget.
pub fn sequence(questions: &[Question]) -> Vec<Question> {
    QuestionSequencer::default().sequence(questions).questions
}

/// Whether any two consecutive questions share a dimension.
pub fn has_adjacent_repeat(questions: &[Question]) -> bool {
    questions
        .windows(2)
        .any(|pair| pair[0].dimension == pair[1].dimension)
}
