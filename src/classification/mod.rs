//! Type classification from accumulated dimension scores.

pub mod classifier;
pub mod stack_table;

pub use classifier::{
    classify, classify_standard, CategoryScore, ClassificationResult, CONFIDENCE_EPSILON,
};
pub use stack_table::StackTable;
