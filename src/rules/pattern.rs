//! Regular expression rule - requires a pattern match somewhere in the password.

use regex::Regex;

use super::{Rule, RuleError};

/// Passes when the pattern matches anywhere in the password.
///
/// The match is not anchored: use `^...$` in the pattern to require a
/// full-string match.
#[derive(Debug, Clone)]
pub struct RegularExpressionRule {
    pattern: Regex,
    description: Option<String>,
}

impl RegularExpressionRule {
    /// Compiles `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if the pattern does not compile.
    ///
    /// ```rust
    /// use pwd_rules::{RegularExpressionRule, Rule};
    ///
    /// let rule = RegularExpressionRule::new(r"\d{2}").unwrap();
    /// assert!(rule.evaluate("abc42"));
    /// assert!(!rule.evaluate("a1b2"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Wraps an already compiled expression.
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern,
            description: None,
        }
    }

    /// Replaces the default failure description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule for RegularExpressionRule {
    fn evaluate(&self, password: &str) -> bool {
        self.pattern.is_match(password)
    }

    fn failure_description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("Must match the pattern /{}/", self.pattern.as_str()),
        }
    }
}
