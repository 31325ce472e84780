use super::score_types::Percent;

/// Default theoretical bound of an accumulated dimension score.
///
/// Banks with up to eight items per dimension stay inside it
/// (8 * 2^1.2 is about 18.4).
pub const DEFAULT_SCORE_RANGE: f64 = 20.0;

/// Maps raw dimension scores from `[-range, +range]` onto a 0-100 display
/// scale.
///
/// Display-only: classification always works on the raw scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNormalizer {
    range: f64,
}

impl ScoreNormalizer {
    /// Create a normalizer for a symmetric range.
    ///
    /// Non-finite or non-positive ranges fall back to the default; the
    /// config layer rejects them before they get here.
    pub fn new(range: f64) -> Self {
        if range.is_finite() && range > 0.0 {
            Self { range }
        } else {
            log::warn!(
                "Invalid normalization range {}, using {}",
                range,
                DEFAULT_SCORE_RANGE
            );
            Self {
                range: DEFAULT_SCORE_RANGE,
            }
        }
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Linear map to 0-100; values outside the range are clamped first.
    pub fn normalize(&self, raw_score: f64) -> Percent {
        if raw_score.is_nan() {
            return Percent::from_f64(50.0);
        }
        let clamped = raw_score.clamp(-self.range, self.range);
        Percent::from_f64((clamped + self.range) / (2.0 * self.range) * 100.0)
    }
}

impl Default for ScoreNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_RANGE)
    }
}

/// Normalize with the default range.
pub fn normalize(raw_score: f64) -> Percent {
    ScoreNormalizer::default().normalize(raw_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(normalize(-20.0).value(), 0);
        assert_eq!(normalize(0.0).value(), 50);
        assert_eq!(normalize(20.0).value(), 100);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(normalize(-999.0).value(), 0);
        assert_eq!(normalize(999.0).value(), 100);
        assert_eq!(normalize(f64::INFINITY).value(), 100);
        assert_eq!(normalize(f64::NEG_INFINITY).value(), 0);
    }

    #[test]
    fn test_rounding() {
        // 2.297 / 40 * 100 + 50 = 55.74
        assert_eq!(normalize(2.297).value(), 56);
        assert_eq!(normalize(-1.0).value(), 48);
    }

    #[test]
    fn test_custom_range() {
        let normalizer = ScoreNormalizer::new(10.0);
        assert_eq!(normalizer.normalize(5.0).value(), 75);
        assert_eq!(normalizer.normalize(-10.0).value(), 0);
    }

    #[test]
    fn test_invalid_range_falls_back() {
        assert_eq!(ScoreNormalizer::new(0.0).range(), DEFAULT_SCORE_RANGE);
        assert_eq!(ScoreNormalizer::new(f64::NAN).range(), DEFAULT_SCORE_RANGE);
        assert_eq!(ScoreNormalizer::new(-4.0).range(), DEFAULT_SCORE_RANGE);
    }

    #[test]
    fn test_nan_is_midpoint() {
        assert_eq!(normalize(f64::NAN).value(), 50);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_is_monotonic(a in -100.0..100.0f64, b in -100.0..100.0f64) {
            if a <= b {
                prop_assert!(normalize(a) <= normalize(b));
            }
        }

        #[test]
        fn normalized_is_symmetric(raw in 0.0..30.0f64) {
            let up = i32::from(normalize(raw).value());
            let down = i32::from(normalize(-raw).value());
            // rounding of x.5 can differ by one
            prop_assert!((up + down - 100).abs() <= 1);
        }
    }
}
