//! Static category tables: function stacks, positional weights and profiles.

use serde::Serialize;

use super::types::Dimension::{Fe, Fi, Ne, Ni, Se, Si, Te, Ti};
use super::types::{Category, Dimension};

/// Number of dimensions in a category's stack
pub const STACK_DEPTH: usize = 4;

/// Weight applied to each stack position, dominant first.
pub const STACK_WEIGHTS: [f64; STACK_DEPTH] = [4.0, 2.0, 1.0, 0.5];

/// Ordered cognitive functions for one category
pub type Stack = [Dimension; STACK_DEPTH];

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    pub nickname: &'static str,
    pub summary: &'static str,
}

impl Category {
    /// Standard dominant/auxiliary/tertiary/inferior stack
    pub fn stack(self) -> Stack {
        match self {
            Category::Enfj => [Fe, Ni, Se, Ti],
            Category::Enfp => [Ne, Fi, Te, Si],
            Category::Entj => [Te, Ni, Se, Fi],
            Category::Entp => [Ne, Ti, Fe, Si],
            Category::Esfj => [Fe, Si, Ne, Ti],
            Category::Esfp => [Se, Fi, Te, Ni],
            Category::Estj => [Te, Si, Ne, Fi],
            Category::Estp => [Se, Ti, Fe, Ni],
            Category::Infj => [Ni, Fe, Ti, Se],
            Category::Infp => [Fi, Ne, Si, Te],
            Category::Intj => [Ni, Te, Fi, Se],
            Category::Intp => [Ti, Ne, Si, Fe],
            Category::Isfj => [Si, Fe, Ti, Ne],
            Category::Isfp => [Fi, Se, Ni, Te],
            Category::Istj => [Si, Te, Fi, Ne],
            Category::Istp => [Ti, Se, Ni, Fe],
        }
    }

    pub fn profile(self) -> CategoryProfile {
        let (nickname, summary) = match self {
            Category::Enfj => (
                "Teacher",
                "Reads the mood of a group and rallies people toward shared growth.",
            ),
            Category::Enfp => (
                "Champion",
                "Sees possibilities in everyone and follows ideas that feel authentic.",
            ),
            Category::Entj => (
                "Fieldmarshal",
                "Organizes people and resources around a long-range plan.",
            ),
            Category::Entp => (
                "Inventor",
                "Generates and stress-tests ideas, enjoying a good argument.",
            ),
            Category::Esfj => (
                "Provider",
                "Keeps traditions and relationships running smoothly for others.",
            ),
            Category::Esfp => (
                "Performer",
                "Lives in the moment and brings energy to whatever is happening.",
            ),
            Category::Estj => (
                "Supervisor",
                "Establishes order through clear rules and proven procedures.",
            ),
            Category::Estp => (
                "Promoter",
                "Acts quickly on what is in front of them and thrives on risk.",
            ),
            Category::Infj => (
                "Counselor",
                "Follows quiet insight about people and where things are heading.",
            ),
            Category::Infp => (
                "Healer",
                "Guided by a deep personal value system and a wish for harmony.",
            ),
            Category::Intj => (
                "Mastermind",
                "Builds independent strategies from a private vision of the future.",
            ),
            Category::Intp => (
                "Architect",
                "Seeks precise, internally consistent models of how things work.",
            ),
            Category::Isfj => (
                "Protector",
                "Remembers what matters to people and looks after them reliably.",
            ),
            Category::Isfp => (
                "Composer",
                "Expresses personal values through craft and sensory experience.",
            ),
            Category::Istj => (
                "Inspector",
                "Dependable and thorough, grounded in facts and past experience.",
            ),
            Category::Istp => (
                "Crafter",
                "Takes things apart to see how they work and fixes them on the spot.",
            ),
        };
        CategoryProfile { nickname, summary }
    }
}
