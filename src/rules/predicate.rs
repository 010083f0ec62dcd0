//! Predicate rule - declarative conditions over the password.

use std::fmt;

use super::Rule;
use crate::charset::CharacterSet;

/// A boolean expression over a password.
///
/// Unlike [`CustomRule`](super::CustomRule), a predicate is plain data: it can
/// be compared and rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// At least `n` characters.
    MinLength(usize),
    /// At most `n` characters.
    MaxLength(usize),
    /// At least one character from the set.
    ContainsAny(CharacterSet),
    /// Only characters from the set.
    ContainsOnly(CharacterSet),
    /// Contains the substring.
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    Not(Box<Predicate>),
    /// Every predicate holds. Empty means `true`.
    All(Vec<Predicate>),
    /// Some predicate holds. Empty means `false`.
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn evaluate(&self, password: &str) -> bool {
        match self {
            Predicate::MinLength(n) => password.chars().count() >= *n,
            Predicate::MaxLength(n) => password.chars().count() <= *n,
            Predicate::ContainsAny(set) => set.contains_any(password),
            Predicate::ContainsOnly(set) => set.contains_all(password),
            Predicate::Contains(s) => password.contains(s.as_str()),
            Predicate::StartsWith(s) => password.starts_with(s.as_str()),
            Predicate::EndsWith(s) => password.ends_with(s.as_str()),
            Predicate::Not(inner) => !inner.evaluate(password),
            Predicate::All(all) => all.iter().all(|p| p.evaluate(password)),
            Predicate::Any(any) => any.iter().any(|p| p.evaluate(password)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Conjunction, flattening nested `All`.
    #[must_use]
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::All(mut all) => {
                all.push(other);
                Predicate::All(all)
            }
            first => Predicate::All(vec![first, other]),
        }
    }

    /// Disjunction, flattening nested `Any`.
    #[must_use]
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Predicate::Any(mut any) => {
                any.push(other);
                Predicate::Any(any)
            }
            first => Predicate::Any(vec![first, other]),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Predicate], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", sep)?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, ")")
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::MinLength(n) => write!(f, "length >= {}", n),
            Predicate::MaxLength(n) => write!(f, "length <= {}", n),
            Predicate::ContainsAny(set) => write!(f, "contains any {}", set),
            Predicate::ContainsOnly(set) => write!(f, "contains only {}", set),
            Predicate::Contains(s) => write!(f, "contains {:?}", s),
            Predicate::StartsWith(s) => write!(f, "starts with {:?}", s),
            Predicate::EndsWith(s) => write!(f, "ends with {:?}", s),
            Predicate::Not(inner) => write!(f, "not {}", inner),
            Predicate::All(all) if all.is_empty() => write!(f, "true"),
            Predicate::Any(any) if any.is_empty() => write!(f, "false"),
            Predicate::All(all) => write_joined(f, all, "and"),
            Predicate::Any(any) => write_joined(f, any, "or"),
        }
    }
}

/// Passes when the predicate holds for the password.
#[derive(Debug, Clone)]
pub struct PredicateRule {
    predicate: Predicate,
    description: Option<String>,
}

impl PredicateRule {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            description: None,
        }
    }

    /// Replaces the default failure description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Rule for PredicateRule {
    fn evaluate(&self, password: &str) -> bool {
        self.predicate.evaluate(password)
    }

    fn failure_description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("Must satisfy: {}", self.predicate),
        }
    }
}
