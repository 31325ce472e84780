use std::collections::HashSet;

use crate::core::{Category, Dimension, Error, Result, Stack, STACK_DEPTH, STACK_WEIGHTS};
use crate::session::ScoreVector;

/// Function stack for each of the sixteen categories.
///
/// Construction validates the whole table, so classification itself never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTable {
    stacks: [Stack; Category::COUNT],
}

impl StackTable {
    /// The conventional dominant/auxiliary/tertiary/inferior stacks.
    pub fn standard() -> Self {
        Self {
            stacks: Category::ALL.map(Category::stack),
        }
    }

    /// Build a custom table. Every category must appear exactly once and no
    /// stack may repeat a dimension.
    pub fn new(entries: impl IntoIterator<Item = (Category, Stack)>) -> Result<Self> {
        let mut slots: [Option<Stack>; Category::COUNT] = [None; Category::COUNT];

        for (category, stack) in entries {
            validate_stack(category, &stack)?;
            let slot = &mut slots[category.index()];
            if slot.is_some() {
                return Err(Error::StackTable(format!(
                    "category {} defined more than once",
                    category
                )));
            }
            *slot = Some(stack);
        }

        let missing: Vec<&str> = Category::ALL
            .iter()
            .filter(|c| slots[c.index()].is_none())
            .map(|c| c.label())
            .collect();
        if !missing.is_empty() {
            return Err(Error::StackTable(format!(
                "missing categories: {}",
                missing.join(", ")
            )));
        }

        let mut stacks = [[Dimension::Ni; STACK_DEPTH]; Category::COUNT];
        for (stack, slot) in stacks.iter_mut().zip(slots) {
            if let Some(defined) = slot {
                *stack = defined;
            }
        }
        Ok(Self { stacks })
    }

    pub fn stack(&self, category: Category) -> Stack {
        self.stacks[category.index()]
    }

    /// Weighted stack total for one category.
    pub fn total(&self, category: Category, scores: &ScoreVector) -> f64 {
        self.stack(category)
            .iter()
            .zip(STACK_WEIGHTS)
            .map(|(&dimension, weight)| scores[dimension] * weight)
            .sum()
    }
}

impl Default for StackTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_stack(category: Category, stack: &Stack) -> Result<()> {
    let unique: HashSet<Dimension> = stack.iter().copied().collect();
    if unique.len() != STACK_DEPTH {
        return Err(Error::StackTable(format!(
            "stack for {} repeats a dimension: {:?}",
            category, stack
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dimension::*;

    #[test]
    fn test_standard_matches_category_stacks() {
        let table = StackTable::standard();
        assert_eq!(table.stack(Category::Intj), [Ni, Te, Fi, Se]);
        assert_eq!(table.stack(Category::Esfp), [Se, Fi, Te, Ni]);
    }

    #[test]
    fn test_new_accepts_complete_table() {
        let table = StackTable::new(Category::ALL.map(|c| (c, c.stack()))).unwrap();
        assert_eq!(table, StackTable::standard());
    }

    #[test]
    fn test_new_rejects_missing_category() {
        let entries = Category::ALL
            .into_iter()
            .filter(|&c| c != Category::Istp)
            .map(|c| (c, c.stack()));
        let err = StackTable::new(entries).unwrap_err();
        assert!(err.to_string().contains("ISTP"));
    }

    #[test]
    fn test_new_rejects_duplicate_category() {
        let mut entries: Vec<_> = Category::ALL.map(|c| (c, c.stack())).to_vec();
        entries.push((Category::Enfj, [Fe, Ni, Se, Ti]));
        let err = StackTable::new(entries).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_new_rejects_repeated_dimension() {
        let entries = Category::ALL.map(|c| {
            if c == Category::Intp {
                (c, [Ti, Ti, Si, Fe])
            } else {
                (c, c.stack())
            }
        });
        assert!(matches!(
            StackTable::new(entries),
            Err(Error::StackTable(_))
        ));
    }

    #[test]
    fn test_total_applies_positional_weights() {
        let table = StackTable::standard();
        let scores = ScoreVector::from_pairs([(Ni, 1.0), (Te, 1.0), (Fi, 1.0), (Se, 1.0)]);
        assert_eq!(table.total(Category::Intj, &scores), 7.5);

        let dominant_only = ScoreVector::from_pairs([(Ni, 2.0)]);
        assert_eq!(table.total(Category::Intj, &dominant_only), 8.0);
        assert_eq!(table.total(Category::Istp, &dominant_only), 2.0);
    }
}
