//! Password validator - evaluates an ordered set of rules.

use std::sync::{Arc, LazyLock};

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{LengthRule, SharedRule};

static STANDARD: LazyLock<Validator> = LazyLock::new(|| {
    Validator::with_rules([Arc::new(LengthRule::from_ordered(6, 64)) as SharedRule])
});

/// Result of validating one password.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// `true` when no rule failed.
    pub is_valid: bool,
    /// Rules that failed, in the validator's order.
    pub failing_rules: Vec<SharedRule>,
}

impl ValidationOutcome {
    /// Failure descriptions of the failing rules, in order.
    pub fn failure_descriptions(&self) -> Vec<String> {
        self.failing_rules
            .iter()
            .map(|rule| rule.failure_description())
            .collect()
    }
}

/// An ordered, immutable collection of password rules.
///
/// ```rust
/// use std::sync::Arc;
/// use pwd_rules::{LengthRule, SharedRule, Validator, digit_required};
///
/// let validator = Validator::with_rules([
///     Arc::new(LengthRule::new(8, 64).unwrap()) as SharedRule,
///     digit_required(),
/// ]);
///
/// let outcome = validator.validate("short");
/// assert!(!outcome.is_valid);
/// assert_eq!(outcome.failing_rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<SharedRule>,
}

impl Validator {
    /// Creates a validator that checks `rules` in the given order.
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SharedRule>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard validator: passwords of 6 to 64 characters.
    pub fn standard() -> &'static Validator {
        &STANDARD
    }

    pub fn rules(&self) -> &[SharedRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validates a password against every rule.
    ///
    /// All rules are evaluated, so the outcome lists every unmet requirement
    /// rather than only the first one.
    pub fn validate(&self, password: &str) -> ValidationOutcome {
        let failing_rules: Vec<SharedRule> = self
            .rules
            .iter()
            .filter(|rule| !rule.evaluate(password))
            .cloned()
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = self.rules.len(),
            failing = failing_rules.len(),
            "password validated"
        );

        ValidationOutcome {
            is_valid: failing_rules.is_empty(),
            failing_rules,
        }
    }

    /// Same as [`validate`](Self::validate), for a password held as a secret.
    pub fn validate_secret(&self, password: &SecretString) -> ValidationOutcome {
        self.validate(password.expose_secret())
    }
}
