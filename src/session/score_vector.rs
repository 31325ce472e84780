use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Index;

use crate::core::Dimension;
use crate::scoring::{Percent, ScoreNormalizer};

/// Accumulated raw score for every dimension.
///
/// Indexed by [`Dimension`], so a vector always has all eight entries; inputs
/// that omit a dimension leave it at 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector([f64; Dimension::COUNT]);

impl ScoreVector {
    /// All-zero vector, the state at session start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit pairs; dimensions not listed stay at 0.0 and
    /// non-finite values are treated as 0.0.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Dimension, f64)>) -> Self {
        let mut vector = Self::new();
        for (dimension, value) in pairs {
            vector.0[dimension.index()] = sanitize(dimension.label(), value);
        }
        vector
    }

    /// Build from string-keyed scores such as `{"Ni": 15.0}`.
    ///
    /// Unknown keys contribute nothing; missing dimensions stay at 0.0.
    pub fn from_labels(scores: &HashMap<String, f64>) -> Self {
        let pairs = scores.iter().filter_map(|(key, &value)| match key.parse::<Dimension>() {
            Ok(dimension) => Some((dimension, value)),
            Err(_) => {
                log::debug!("Ignoring score for unknown dimension '{}'", key);
                None
            }
        });
        Self::from_pairs(pairs)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub(crate) fn add(&mut self, dimension: Dimension, delta: f64) {
        self.0[dimension.index()] += delta;
    }

    pub(crate) fn subtract(&mut self, dimension: Dimension, delta: f64) {
        self.0[dimension.index()] -= delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Display scores for every dimension, in canonical order.
    pub fn normalized(&self, normalizer: &ScoreNormalizer) -> Vec<(Dimension, Percent)> {
        self.iter()
            .map(|(d, raw)| (d, normalizer.normalize(raw)))
            .collect()
    }

    /// Dimensions ordered from highest to lowest raw score.
    pub fn ranked(&self) -> Vec<(Dimension, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl Index<Dimension> for ScoreVector {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        &self.0[dimension.index()]
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.label(), &value)?;
        }
        map.end()
    }
}

fn sanitize(label: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Non-finite score {} for {}, using 0.0", value, label);
        0.0
    }
}
