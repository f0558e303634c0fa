//! Ordering contract shared by pure and fold functions.

use std::cmp::Ordering;

/// Outcome of comparing two function definitions.
///
/// `Failed` is a normal return value, not an error: it means the two
/// operands have no defined relative order (for example a pure function
/// against a fold function). All four derived relations report `false`
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Failed,
}

impl Comparison {
    pub fn less_than(self) -> bool {
        matches!(self, Comparison::Less)
    }

    pub fn greater_than(self) -> bool {
        matches!(self, Comparison::Greater)
    }

    pub fn less_or_equal(self) -> bool {
        matches!(self, Comparison::Less | Comparison::Equal)
    }

    pub fn greater_or_equal(self) -> bool {
        matches!(self, Comparison::Greater | Comparison::Equal)
    }

    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }

    pub fn is_failed(self) -> bool {
        self == Comparison::Failed
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_relations_match_only_their_exact_outcome() {
        assert!(Comparison::Less.less_than());
        assert!(Comparison::Less.less_or_equal());
        assert!(!Comparison::Less.greater_or_equal());

        assert!(Comparison::Equal.less_or_equal());
        assert!(Comparison::Equal.greater_or_equal());
        assert!(!Comparison::Equal.less_than());

        assert!(Comparison::Greater.greater_than());
        assert!(Comparison::Greater.greater_or_equal());

        assert!(!Comparison::Failed.less_than());
        assert!(!Comparison::Failed.greater_than());
        assert!(!Comparison::Failed.less_or_equal());
        assert!(!Comparison::Failed.greater_or_equal());
    }
}
