pub mod accumulator;
pub mod quiz;
pub mod score_vector;

pub use accumulator::ScoreAccumulator;
pub use quiz::{Progress, QuizSession, SessionState};
pub use score_vector::ScoreVector;
