// Export modules for library usage
pub mod bank;
pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod report;
pub mod scoring;
pub mod sequencer;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Answer, Category, CategoryProfile, Dimension, Error, LikertValue, Question, QuestionId,
    Result, Stack, STACK_WEIGHTS,
};

pub use crate::bank::QuestionBank;

pub use crate::classification::{
    classify, classify_standard, CategoryScore, ClassificationResult, StackTable,
};

pub use crate::scoring::{normalize, score, score_or_neutral, score_raw, Percent, ScoreNormalizer};

pub use crate::sequencer::{has_adjacent_repeat, sequence, QuestionSequencer, SequenceOutcome};

pub use crate::session::{Progress, QuizSession, ScoreAccumulator, ScoreVector, SessionState};

pub use crate::config::QuizConfig;

pub use crate::report::QuizReport;
