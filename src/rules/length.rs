//! Length rule - bounds the number of characters.

use std::ops::RangeInclusive;

use super::{Rule, RuleError};

/// Passes when the password has between `min` and `max` characters, inclusive.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule {
    range: RangeInclusive<usize>,
}

impl LengthRule {
    /// Creates a rule accepting passwords of `min..=max` characters.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvertedLengthRange`] if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::InvertedLengthRange { min, max });
        }
        Ok(Self { range: min..=max })
    }

    /// Bounds already known to be ordered.
    pub(crate) const fn from_ordered(min: usize, max: usize) -> Self {
        Self { range: min..=max }
    }

    pub fn min(&self) -> usize {
        *self.range.start()
    }

    pub fn max(&self) -> usize {
        *self.range.end()
    }
}

impl TryFrom<RangeInclusive<usize>> for LengthRule {
    type Error = RuleError;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

impl Rule for LengthRule {
    fn evaluate(&self, password: &str) -> bool {
        self.range.contains(&password.chars().count())
    }

    fn failure_description(&self) -> String {
        format!(
            "Must be between {} and {} characters",
            self.min(),
            self.max()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_inclusive() {
        let rule = LengthRule::new(6, 64).expect("valid range");
        assert!(!rule.evaluate("abcde"));
        assert!(rule.evaluate("abcdef"));
        assert!(rule.evaluate(&"a".repeat(64)));
        assert!(!rule.evaluate(&"a".repeat(65)));
        assert!(!rule.evaluate(""));
    }

    #[test]
    fn test_length_counts_chars() {
        let rule = LengthRule::new(3, 3).expect("valid range");
        // 3 chars, 6 bytes
        assert!(rule.evaluate("äöü"));
    }

    #[test]
    fn test_length_inverted_range_rejected() {
        let result = LengthRule::new(10, 5);
        assert!(matches!(
            result,
            Err(RuleError::InvertedLengthRange { min: 10, max: 5 })
        ));
    }

    #[test]
    fn test_length_try_from_range() {
        let rule = LengthRule::try_from(8..=16).expect("valid range");
        assert_eq!((rule.min(), rule.max()), (8, 16));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = LengthRule::try_from(16..=8);
        assert!(inverted.is_err());
    }

    #[test]
    fn test_length_zero_range_accepts_only_empty() {
        let rule = LengthRule::new(0, 0).expect("valid range");
        assert!(rule.evaluate(""));
        assert!(!rule.evaluate("a"));
    }

    #[test]
    fn test_length_failure_description() {
        let rule = LengthRule::new(6, 64).expect("valid range");
        assert_eq!(rule.failure_description(), "Must be between 6 and 64 characters");
    }
}
