//! One quiz attempt: question order, position and answers.
//!
//! The session is a small state machine. Answers are only accepted while a
//! question is awaiting an answer; the UI then finishes its transition and
//! calls [`QuizSession::advance`]. Calls made in the wrong state are
//! rejected with [`Error::InvalidState`] instead of interleaving with a
//! transition in progress.
//!
//! ```text
//!   AwaitingAnswer --submit_answer--> Transitioning --advance--> AwaitingAnswer
//!         ^                                              \
//!         |                                               `--(last)--> Complete
//!         `------------------- go_back -----------------------------------'
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::accumulator::ScoreAccumulator;
use super::score_vector::ScoreVector;
use crate::bank::QuestionBank;
use crate::classification::{classify, ClassificationResult, StackTable};
use crate::config::QuizConfig;
use crate::core::{Answer, Error, LikertValue, Question, QuestionId, Result};
use crate::sequencer::QuestionSequencer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    AwaitingAnswer,
    Transitioning,
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::AwaitingAnswer => "awaiting an answer",
            SessionState::Transitioning => "transitioning",
            SessionState::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// How far through the quiz a respondent is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// Index of the question currently shown (0-based).
    pub position: usize,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.answered * 100) / self.total) as u8
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    state: SessionState,
    accumulator: ScoreAccumulator,
    table: StackTable,
}

impl QuizSession {
    /// Create a session over an already ordered question list.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(Error::DuplicateQuestion(question.id));
            }
        }

        let state = if questions.is_empty() {
            SessionState::Complete
        } else {
            SessionState::AwaitingAnswer
        };

        Ok(Self {
            questions,
            position: 0,
            state,
            accumulator: ScoreAccumulator::new(),
            table: StackTable::standard(),
        })
    }

    /// Sequence `bank` according to `config` and start a session over it.
    pub fn start(bank: &QuestionBank, config: &QuizConfig) -> Result<Self> {
        let sequencer = QuestionSequencer::new(config.max_shuffle_attempts);
        let outcome = match config.seed {
            Some(seed) => sequencer.sequence_seeded(bank.questions(), seed),
            None => sequencer.sequence(bank.questions()),
        };
        tracing::debug!(
            questions = outcome.questions.len(),
            attempts = outcome.attempts,
            constrained = outcome.constrained,
            "starting quiz session"
        );
        Self::new(outcome.questions)
    }

    /// Use a custom stack table for classification.
    pub fn with_stack_table(mut self, table: StackTable) -> Self {
        self.table = table;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question being shown, if the quiz is not complete.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Complete => None,
            _ => self.questions.get(self.position),
        }
    }

    pub fn answer_for(&self, id: QuestionId) -> Option<Answer> {
        self.accumulator.answer(id)
    }

    /// Answer the current question, replacing any earlier answer to it.
    pub fn submit_answer(&mut self, value: LikertValue) -> Result<()> {
        self.require(SessionState::AwaitingAnswer, "submit an answer")?;
        let _span = tracing::debug_span!("submit_answer", position = self.position).entered();

        let question = &self.questions[self.position];
        self.accumulator.record_answer(question, value);
        tracing::debug!(question = %question.id, value = value.value(), "answer recorded");

        self.state = SessionState::Transitioning;
        Ok(())
    }

    /// Finish the transition after an answer and move to the next question.
    pub fn advance(&mut self) -> Result<SessionState> {
        self.require(SessionState::Transitioning, "advance")?;

        if self.position + 1 >= self.questions.len() {
            self.state = SessionState::Complete;
        } else {
            self.position += 1;
            self.state = SessionState::AwaitingAnswer;
        }
        Ok(self.state)
    }

    /// Return to the previous question so it can be answered again.
    ///
    /// From `Complete` this reopens the last question.
    pub fn go_back(&mut self) -> Result<()> {
        match self.state {
            SessionState::Complete if !self.questions.is_empty() => {
                self.position = self.questions.len() - 1;
            }
            SessionState::AwaitingAnswer if self.position > 0 => {
                self.position -= 1;
            }
            SessionState::AwaitingAnswer => {
                return Err(Error::invalid_state("go back", "at the first question"));
            }
            state => return Err(Error::invalid_state("go back", state)),
        }
        self.state = SessionState::AwaitingAnswer;
        Ok(())
    }

    /// Discard every answer and start over with the same question order.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.position = 0;
        self.state = if self.questions.is_empty() {
            SessionState::Complete
        } else {
            SessionState::AwaitingAnswer
        };
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.accumulator.answered_count(),
            total: self.questions.len(),
            position: self.position,
        }
    }

    pub fn accumulator(&self) -> &ScoreAccumulator {
        &self.accumulator
    }

    pub fn current_scores(&self) -> ScoreVector {
        self.accumulator.scores()
    }

    /// Classify the answers given so far.
    pub fn classify(&self) -> ClassificationResult {
        classify(&self.accumulator.scores(), &self.table)
    }

    /// Classification for mid-quiz display, once at least `threshold`
    /// questions are answered.
    pub fn provisional_result(&self, threshold: usize) -> Option<ClassificationResult> {
        if self.accumulator.answered_count() >= threshold {
            Some(self.classify())
        } else {
            None
        }
    }

    /// Classification after the last question.
    pub fn final_result(&self) -> Result<ClassificationResult> {
        self.require(SessionState::Complete, "produce a final result")?;
        Ok(self.classify())
    }

    fn require(&self, expected: SessionState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::invalid_state(operation, self.state))
        }
    }
}
