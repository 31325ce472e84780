//! Type-safe display scales.
//!
//! Raw dimension scores and category totals are unbounded reals and must never
//! be mixed with presentation values. Everything shown to a respondent goes
//! through [`Percent`], an integer on the 0-100 scale.
//!
//! # Examples
//!
//! ```rust
//! use typequiz::scoring::Percent;
//!
//! // Values are rounded and clamped on construction
//! assert_eq!(Percent::from_f64(49.6).value(), 50);
//! assert_eq!(Percent::from_f64(150.0).value(), 100);
//! assert_eq!(Percent::from_f64(-3.0).value(), 0);
//!
//! // Explicit conversion to a fraction
//! assert_eq!(Percent::from_f64(85.0).as_fraction(), 0.85);
//! ```

use serde::{Deserialize, Serialize};

/// Integer percentage on the 0-100 scale.
///
/// Used for normalized dimension scores and classification confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Clamp to [0, 100] and round half away from zero.
    ///
    /// NaN maps to 0.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    /// Get the raw percentage.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction on the 0-1 scale.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamps_upper_bound() {
        assert_eq!(Percent::from_f64(150.0), Percent::FULL);
    }

    #[test]
    fn percent_clamps_lower_bound() {
        assert_eq!(Percent::from_f64(-10.0), Percent::ZERO);
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(Percent::from_f64(2.5).value(), 3);
        assert_eq!(Percent::from_f64(2.4999).value(), 2);
    }

    #[test]
    fn nan_is_zero() {
        assert_eq!(Percent::from_f64(f64::NAN), Percent::ZERO);
    }

    #[test]
    fn display_has_percent_sign() {
        assert_eq!(Percent::from_f64(42.0).to_string(), "42%");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn percent_always_in_bounds(value in -1000.0..1000.0f64) {
            let p = Percent::from_f64(value);
            prop_assert!(p.value() <= 100);
        }

        #[test]
        fn percent_preserves_ordering(a in -50.0..150.0f64, b in -50.0..150.0f64) {
            if a <= b {
                prop_assert!(Percent::from_f64(a) <= Percent::from_f64(b));
            }
        }
    }
}
