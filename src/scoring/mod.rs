pub mod item_scorer;
pub mod score_normalizer;
pub mod score_types;

pub use item_scorer::{score, score_or_neutral, score_raw, EMPHASIS_EXPONENT};
pub use score_normalizer::{normalize, ScoreNormalizer, DEFAULT_SCORE_RANGE};
pub use score_types::Percent;
