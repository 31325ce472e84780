use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};
use super::likert::LikertValue;

/// Unique identifier of a question within a bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One of the eight cognitive functions scored by the quiz.
///
/// Declaration order is the canonical index order used by
/// [`ScoreVector`](crate::session::ScoreVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Ni,
    Ne,
    Si,
    Se,
    Ti,
    Te,
    Fi,
    Fe,
}

impl Dimension {
    pub const COUNT: usize = 8;

    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Ni,
        Dimension::Ne,
        Dimension::Si,
        Dimension::Se,
        Dimension::Ti,
        Dimension::Te,
        Dimension::Fi,
        Dimension::Fe,
    ];

    /// Position of this dimension in [`Dimension::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short two-letter label
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Ni => "Ni",
            Dimension::Ne => "Ne",
            Dimension::Si => "Si",
            Dimension::Se => "Se",
            Dimension::Ti => "Ti",
            Dimension::Te => "Te",
            Dimension::Fi => "Fi",
            Dimension::Fe => "Fe",
        }
    }

    /// Full function name for display
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Ni => "Introverted Intuition",
            Dimension::Ne => "Extraverted Intuition",
            Dimension::Si => "Introverted Sensing",
            Dimension::Se => "Extraverted Sensing",
            Dimension::Ti => "Introverted Thinking",
            Dimension::Te => "Extraverted Thinking",
            Dimension::Fi => "Introverted Feeling",
            Dimension::Fe => "Extraverted Feeling",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Validation(format!("unknown dimension '{}'", wanted)))
    }
}

/// One of the sixteen personality types.
///
/// Variants are declared in lexical order of their labels; ranking ties are
/// resolved by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Enfj,
    Enfp,
    Entj,
    Entp,
    Esfj,
    Esfp,
    Estj,
    Estp,
    Infj,
    Infp,
    Intj,
    Intp,
    Isfj,
    Isfp,
    Istj,
    Istp,
}

impl Category {
    pub const COUNT: usize = 16;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Enfj,
        Category::Enfp,
        Category::Entj,
        Category::Entp,
        Category::Esfj,
        Category::Esfp,
        Category::Estj,
        Category::Estp,
        Category::Infj,
        Category::Infp,
        Category::Intj,
        Category::Intp,
        Category::Isfj,
        Category::Isfp,
        Category::Istj,
        Category::Istp,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Enfj => "ENFJ",
            Category::Enfp => "ENFP",
            Category::Entj => "ENTJ",
            Category::Entp => "ENTP",
            Category::Esfj => "ESFJ",
            Category::Esfp => "ESFP",
            Category::Estj => "ESTJ",
            Category::Estp => "ESTP",
            Category::Infj => "INFJ",
            Category::Infp => "INFP",
            Category::Intj => "INTJ",
            Category::Intp => "INTP",
            Category::Isfj => "ISFJ",
            Category::Isfp => "ISFP",
            Category::Istj => "ISTJ",
            Category::Istp => "ISTP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Validation(format!("unknown category '{}'", wanted)))
    }
}

/// Immutable question record from a bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub dimension: Dimension,
    #[serde(default, alias = "reversed")]
    pub is_reversed: bool,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, dimension: Dimension, is_reversed: bool) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            dimension,
            is_reversed,
        }
    }
}

/// Stored response for one question.
///
/// The reversal flag is copied from the question at answer time so the
/// contribution can be removed exactly when the answer is revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub value: LikertValue,
    pub is_reversed: bool,
}
