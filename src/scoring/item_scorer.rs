//! Per-item scoring of Likert responses.
//!
//! A response is turned into a signed contribution by measuring its distance
//! from the neutral midpoint and applying a power-law emphasis, so strong
//! agreement or disagreement counts for more than a linear scale would give:
//!
//! | value | contribution |
//! |-------|--------------|
//! | 5     | +2.297       |
//! | 4     | +1.000       |
//! | 3     |  0.000       |
//! | 2     | -1.000       |
//! | 1     | -2.297       |
//!
//! Reversed items are mirrored (`6 - value`) before scoring.

use crate::core::{Error, LikertValue, Result};

/// Exponent applied to the absolute deviation from neutral.
pub const EMPHASIS_EXPONENT: f64 = 1.2;

/// Score a validated response.
///
/// Pure function: the same value and reversal flag always give the same
/// result.
pub fn score(value: LikertValue, is_reversed: bool) -> f64 {
    let effective = if is_reversed { value.reversed() } else { value };
    emphasize(f64::from(effective.deviation()))
}

/// Score a raw integer response, rejecting anything outside 1..=5.
pub fn score_raw(value: i64, is_reversed: bool) -> Result<f64> {
    let value = LikertValue::try_from(value)?;
    Ok(score(value, is_reversed))
}

/// Score a raw response, treating invalid input as a neutral 0.0.
///
/// The rejection is logged; callers must still not record the answer.
pub fn score_or_neutral(value: i64, is_reversed: bool) -> f64 {
    match score_raw(value, is_reversed) {
        Ok(score) => score,
        Err(Error::InvalidLikert { value }) => {
            log::warn!("Ignoring invalid Likert response {}", value);
            0.0
        }
        Err(e) => {
            log::warn!("Ignoring response: {}", e);
            0.0
        }
    }
}

// Pure function: sign-preserving power law, exactly 0.0 at the midpoint
fn emphasize(deviation: f64) -> f64 {
    if deviation == 0.0 {
        0.0
    } else {
        deviation.signum() * deviation.abs().powf(EMPHASIS_EXPONENT)
    }
}
