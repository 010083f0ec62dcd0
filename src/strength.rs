//! Strength classification - maps entropy onto five ordered levels.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::entropy::entropy;

/// Password strength levels, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLevel {
    /// H < 28 bits
    VeryWeak,
    /// 28 ≤ H < 36 bits
    Weak,
    /// 36 ≤ H < 60 bits
    Reasonable,
    /// 60 ≤ H < 128 bits
    Strong,
    /// H ≥ 128 bits
    VeryStrong,
}

impl StrengthLevel {
    /// Every level, weakest first.
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Reasonable,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    /// Classifies an entropy value in bits. Lower bounds are inclusive.
    pub fn from_entropy(bits: f64) -> Self {
        if bits >= 128.0 {
            StrengthLevel::VeryStrong
        } else if bits >= 60.0 {
            StrengthLevel::Strong
        } else if bits >= 36.0 {
            StrengthLevel::Reasonable
        } else if bits >= 28.0 {
            StrengthLevel::Weak
        } else {
            StrengthLevel::VeryWeak
        }
    }

    /// Stable, localizable name of the level.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Reasonable => "Reasonable",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the strength level of a password.
///
/// ```rust
/// use pwd_rules::{strength_for, StrengthLevel};
///
/// assert_eq!(strength_for("abc"), StrengthLevel::VeryWeak);
/// assert!(strength_for("Tr0ub4dor&3-correct-horse") >= StrengthLevel::Strong);
/// ```
pub fn strength_for(password: &str) -> StrengthLevel {
    StrengthLevel::from_entropy(entropy(password))
}

/// Same as [`strength_for`], for a password held as a secret.
pub fn strength_for_secret(password: &SecretString) -> StrengthLevel {
    strength_for(password.expose_secret())
}

/// Returns the localizable label of a strength level.
///
/// Translating the label is left to the caller.
pub fn label_for(level: StrengthLevel) -> &'static str {
    level.label()
}
