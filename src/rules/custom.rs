//! Custom rule - arbitrary evaluation logic supplied as a closure.

use std::fmt;
use std::sync::Arc;

use super::Rule;

type Evaluate = dyn Fn(&str) -> bool + Send + Sync;

/// Passes when the supplied function returns `true`.
#[derive(Clone)]
pub struct CustomRule {
    description: String,
    evaluate: Arc<Evaluate>,
}

impl CustomRule {
    /// Creates a rule from a failure description and an evaluation function.
    ///
    /// ```rust
    /// use pwd_rules::{CustomRule, Rule};
    ///
    /// let rule = CustomRule::new("Must not contain spaces", |pwd| !pwd.contains(' '));
    /// assert!(rule.evaluate("no-spaces"));
    /// assert!(!rule.evaluate("has spaces"));
    /// ```
    pub fn new<F>(description: impl Into<String>, evaluate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            evaluate: Arc::new(evaluate),
        }
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Rule for CustomRule {
    fn evaluate(&self, password: &str) -> bool {
        (self.evaluate)(password)
    }

    fn failure_description(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_rule_delegates() {
        let rule = CustomRule::new("Must not repeat a character three times", |pwd| {
            let chars: Vec<char> = pwd.chars().collect();
            !chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
        });
        assert!(rule.evaluate("abcabc"));
        assert!(!rule.evaluate("abccc1"));
        assert_eq!(
            rule.failure_description(),
            "Must not repeat a character three times"
        );
    }

    #[test]
    fn test_custom_rule_captures_state() {
        let username = "lucio".to_string();
        let rule = CustomRule::new("Must not contain the username", move |pwd| {
            !pwd.to_lowercase().contains(&username)
        });
        assert!(!rule.evaluate("Lucio2024!"));
        assert!(rule.evaluate("Tr0ub4dor&3"));
    }

    #[test]
    fn test_custom_rule_debug_omits_closure() {
        let rule = CustomRule::new("Always passes", |_| true);
        let debug = format!("{:?}", rule);
        assert!(debug.contains("Always passes"));
    }
}
