//! Validated Likert responses.
//!
//! A [`LikertValue`] can only hold an integer from 1 to 5. Raw input is
//! validated once at the boundary (`TryFrom`, `FromStr`, serde) so the
//! scorer and accumulator never see out-of-range answers.
//!
//! ```rust
//! use typequiz::core::LikertValue;
//!
//! let agree = LikertValue::try_from(4i64).unwrap();
//! assert_eq!(agree.value(), 4);
//! assert_eq!(agree.reversed().value(), 2);
//!
//! assert!(LikertValue::try_from(6i64).is_err());
//! assert!("3.5".parse::<LikertValue>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};

/// Integer response on a five-point agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LikertValue(u8);

impl LikertValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const NEUTRAL: LikertValue = LikertValue(3);

    /// Create a value, rejecting anything outside 1..=5.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid_likert(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Mirror around the midpoint: 5↔1, 4↔2, 3 fixed.
    pub fn reversed(self) -> Self {
        Self(Self::MIN + Self::MAX - self.0)
    }

    /// Signed distance from the neutral midpoint, in -2..=2.
    pub fn deviation(self) -> i8 {
        self.0 as i8 - Self::NEUTRAL.0 as i8
    }
}

impl TryFrom<i64> for LikertValue {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| Error::invalid_likert(value))
            .and_then(Self::new)
    }
}

impl TryFrom<i32> for LikertValue {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for LikertValue {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::invalid_likert(value));
        }
        Self::try_from(value as i64)
    }
}

impl FromStr for LikertValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map_err(|_| Error::invalid_likert(trimmed))
            .and_then(Self::try_from)
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.0
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for v in 1..=5 {
            assert_eq!(LikertValue::try_from(v as i64).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(LikertValue::try_from(0i64).is_err());
        assert!(LikertValue::try_from(6i64).is_err());
        assert!(LikertValue::try_from(-1i64).is_err());
        assert!(LikertValue::try_from(300i64).is_err());
    }

    #[test]
    fn test_rejects_non_integer_floats() {
        assert!(LikertValue::try_from(3.5f64).is_err());
        assert!(LikertValue::try_from(f64::NAN).is_err());
        assert!(LikertValue::try_from(f64::INFINITY).is_err());
        assert_eq!(LikertValue::try_from(2.0f64).unwrap().value(), 2);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(" 5 ".parse::<LikertValue>().unwrap().value(), 5);
        assert!("abc".parse::<LikertValue>().is_err());
        assert!("".parse::<LikertValue>().is_err());
        assert!("3.0".parse::<LikertValue>().is_err());
    }

    #[test]
    fn test_reversed_mirrors_midpoint() {
        let pairs = [(1, 5), (2, 4), (3, 3), (4, 2), (5, 1)];
        for (v, expected) in pairs {
            assert_eq!(LikertValue::new(v).unwrap().reversed().value(), expected);
        }
    }

    #[test]
    fn test_deviation_range() {
        assert_eq!(LikertValue::new(1).unwrap().deviation(), -2);
        assert_eq!(LikertValue::NEUTRAL.deviation(), 0);
        assert_eq!(LikertValue::new(5).unwrap().deviation(), 2);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<LikertValue>("4").is_ok());
        assert!(serde_json::from_str::<LikertValue>("9").is_err());
        assert_eq!(serde_json::to_string(&LikertValue::NEUTRAL).unwrap(), "3");
    }
}
