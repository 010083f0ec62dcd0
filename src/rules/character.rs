//! Character rules - allowed and required character sets.

use std::sync::{Arc, LazyLock};

use super::{Rule, RuleError};
use crate::charset::CharacterSet;

/// Passes when every character of the password belongs to the allowed set.
///
/// The empty password always passes.
#[derive(Debug, Clone)]
pub struct AllowedCharacterRule {
    set: CharacterSet,
}

impl AllowedCharacterRule {
    pub fn new(set: CharacterSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &CharacterSet {
        &self.set
    }
}

impl Rule for AllowedCharacterRule {
    fn evaluate(&self, password: &str) -> bool {
        self.set.contains_all(password)
    }

    fn failure_description(&self) -> String {
        format!("Must only include {} characters", self.set)
    }
}

/// Passes when at least one character of the password belongs to the required set.
#[derive(Debug, Clone)]
pub struct RequiredCharacterRule {
    set: CharacterSet,
}

impl RequiredCharacterRule {
    /// Creates a rule requiring at least one character from `set`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyCharacterSet`] if `set` has no members,
    /// since such a rule could never pass.
    pub fn new(set: CharacterSet) -> Result<Self, RuleError> {
        if set.is_empty() {
            return Err(RuleError::EmptyCharacterSet);
        }
        Ok(Self { set })
    }

    pub fn set(&self) -> &CharacterSet {
        &self.set
    }
}

impl Rule for RequiredCharacterRule {
    fn evaluate(&self, password: &str) -> bool {
        self.set.contains_any(password)
    }

    fn failure_description(&self) -> String {
        format!("Must include {} characters", self.set)
    }
}

static LOWERCASE_REQUIRED: LazyLock<Arc<RequiredCharacterRule>> = LazyLock::new(|| {
    Arc::new(RequiredCharacterRule {
        set: CharacterSet::lowercase(),
    })
});

static UPPERCASE_REQUIRED: LazyLock<Arc<RequiredCharacterRule>> = LazyLock::new(|| {
    Arc::new(RequiredCharacterRule {
        set: CharacterSet::uppercase(),
    })
});

static DIGIT_REQUIRED: LazyLock<Arc<RequiredCharacterRule>> = LazyLock::new(|| {
    Arc::new(RequiredCharacterRule {
        set: CharacterSet::decimal_digits(),
    })
});

static SYMBOL_REQUIRED: LazyLock<Arc<RequiredCharacterRule>> = LazyLock::new(|| {
    Arc::new(RequiredCharacterRule {
        set: CharacterSet::symbols(),
    })
});

/// Shared rule requiring at least one lowercase letter.
pub fn lowercase_required() -> Arc<RequiredCharacterRule> {
    Arc::clone(&LOWERCASE_REQUIRED)
}

/// Shared rule requiring at least one uppercase letter.
pub fn uppercase_required() -> Arc<RequiredCharacterRule> {
    Arc::clone(&UPPERCASE_REQUIRED)
}

/// Shared rule requiring at least one decimal digit.
pub fn digit_required() -> Arc<RequiredCharacterRule> {
    Arc::clone(&DIGIT_REQUIRED)
}

/// Shared rule requiring at least one symbol.
pub fn symbol_required() -> Arc<RequiredCharacterRule> {
    Arc::clone(&SYMBOL_REQUIRED)
}
