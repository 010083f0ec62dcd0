//! Password rules
//!
//! Each rule checks one aspect of a password's composition and explains,
//! independently of the password, why a failing evaluation failed.

mod character;
mod custom;
mod dictionary;
mod length;
mod pattern;
mod predicate;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub use character::{
    AllowedCharacterRule, RequiredCharacterRule, digit_required, lowercase_required,
    symbol_required, uppercase_required,
};
pub use custom::CustomRule;
pub use dictionary::{DictionaryWordRule, WordLookup};
pub use length::LengthRule;
pub use pattern::RegularExpressionRule;
pub use predicate::{Predicate, PredicateRule};

/// A password rule.
///
/// Rules are immutable after construction and may be shared between threads.
/// Evaluation never fails: a password that does not satisfy the rule simply
/// evaluates to `false`.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Returns `true` if the password satisfies the rule.
    fn evaluate(&self, password: &str) -> bool;

    /// Describes why a password failed this rule.
    fn failure_description(&self) -> String;
}

/// A rule shared between validators.
pub type SharedRule = Arc<dyn Rule>;

/// Errors raised while constructing a rule.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid length range: minimum {min} is greater than maximum {max}")]
    InvertedLengthRange { min: usize, max: usize },
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Required character set is empty")]
    EmptyCharacterSet,
    #[error("Word list has not been initialized")]
    WordListUnavailable,
}
