//! Monotonic identifier allocation.

/// Hands out increasing numeric identifiers.
///
/// The sequence starts one past the largest numeric identifier already in a
/// collection, so ids stay unique even if records are removed or seeded with
/// gaps. Non-numeric identifiers are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IdSequence {
    next: Option<u64>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdSequence {
    /// Start after the largest of `existing`.
    pub(super) fn after(existing: impl IntoIterator<Item = Option<u64>>) -> Self {
        let max = existing.into_iter().flatten().max();
        Self {
            next: match max {
                Some(max) => max.checked_add(1),
                None => Some(1),
            },
        }
    }

    /// Take the next identifier, or `None` once the space is exhausted.
    pub(super) fn allocate(&mut self) -> Option<String> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "1")]
    #[case(vec![Some(2), Some(5), None], "6")]
    #[case(vec![None, None], "1")]
    fn starts_after_largest(#[case] existing: Vec<Option<u64>>, #[case] expected: &str) {
        let mut seq = IdSequence::after(existing);
        assert_eq!(seq.allocate().as_deref(), Some(expected));
    }

    #[test]
    fn never_repeats() {
        let mut seq = IdSequence::default();
        let first = seq.allocate();
        let second = seq.allocate();
        assert_ne!(first, second);
    }

    #[test]
    fn exhausts_at_max() {
        let mut seq = IdSequence::after([Some(u64::MAX - 1)]);
        assert_eq!(seq.allocate(), Some(u64::MAX.to_string()));
        assert_eq!(seq.allocate(), None);
    }
}
