//! Password strength estimation and policy validation library
//!
//! This library estimates password entropy, classifies it into five strength
//! levels, and validates passwords against composable rules.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the word list used by
//!   [`DictionaryWordRule::shared`] (default: `/usr/share/dict/words`)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pwd_rules::{
//!     LengthRule, SharedRule, StrengthLevel, Validator, digit_required, strength_for,
//!     uppercase_required,
//! };
//!
//! assert_eq!(strength_for("abc"), StrengthLevel::VeryWeak);
//!
//! let validator = Validator::with_rules([
//!     Arc::new(LengthRule::new(8, 64).unwrap()) as SharedRule,
//!     uppercase_required(),
//!     digit_required(),
//! ]);
//!
//! let outcome = validator.validate("hunter2");
//! assert!(!outcome.is_valid);
//! for description in outcome.failure_descriptions() {
//!     println!("{}", description);
//! }
//! ```

// Internal modules
mod charset;
mod entropy;
mod evaluator;
mod rules;
mod strength;
mod validator;
mod wordlist;

// Public API
pub use charset::{CharClass, CharacterSet};
pub use entropy::entropy;
pub use evaluator::{PasswordReport, evaluate_password};
pub use rules::{
    AllowedCharacterRule, CustomRule, DictionaryWordRule, LengthRule, Predicate, PredicateRule,
    RegularExpressionRule, RequiredCharacterRule, Rule, RuleError, SharedRule, WordLookup,
    digit_required, lowercase_required, symbol_required, uppercase_required,
};
pub use strength::{StrengthLevel, label_for, strength_for, strength_for_secret};
pub use validator::{ValidationOutcome, Validator};
pub use wordlist::{
    WordList, WordListError, init_word_list, init_word_list_from_path, shared_word_list,
    word_list_path,
};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
