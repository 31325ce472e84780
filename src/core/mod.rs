//! Core domain types: dimensions, categories, questions and answers.

pub mod errors;
pub mod likert;
pub mod tables;
pub mod types;

pub use errors::{Error, Result};
pub use likert::LikertValue;
pub use tables::{CategoryProfile, Stack, STACK_DEPTH, STACK_WEIGHTS};
pub use types::{Answer, Category, Dimension, Question, QuestionId};
