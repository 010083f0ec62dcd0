//! Dictionary rule - rejects passwords that are plain dictionary words.

use std::fmt;
use std::sync::Arc;

use super::{Rule, RuleError};
use crate::wordlist::{WordList, shared_word_list};

/// Membership test over a word list.
///
/// Words are queried in lowercase, so implementations must hold lowercase
/// words. [`WordList`] normalizes its entries; plain string sets go through it
/// (see [`DictionaryWordRule::from_words`]). Implementations are expected to
/// be backed by data prepared in memory before the rule is built.
pub trait WordLookup: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

impl<F> WordLookup for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// Passes unless the password, compared case-insensitively, is a word of the lookup.
#[derive(Clone)]
pub struct DictionaryWordRule {
    lookup: Arc<dyn WordLookup>,
}

impl DictionaryWordRule {
    pub fn new<L: WordLookup + 'static>(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Builds the rule over a collection of words, in any case.
    ///
    /// ```rust
    /// use pwd_rules::{DictionaryWordRule, Rule};
    ///
    /// let rule = DictionaryWordRule::from_words(["Password", "LetMeIn"]);
    /// assert!(!rule.evaluate("password"));
    /// assert!(!rule.evaluate("LETMEIN"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(WordList::from_words(words))
    }

    /// Builds the rule from a lookup that is already shared.
    pub fn from_shared(lookup: Arc<dyn WordLookup>) -> Self {
        Self { lookup }
    }

    /// Builds the rule over the process-wide word list.
    ///
    /// The rule keeps its own handle on the list, so reloading the list later
    /// does not change the behavior of rules already built.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::WordListUnavailable`] if
    /// [`init_word_list`](crate::init_word_list) has not succeeded yet.
    pub fn shared() -> Result<Self, RuleError> {
        let list = shared_word_list().ok_or(RuleError::WordListUnavailable)?;
        Ok(Self { lookup: list })
    }
}

impl fmt::Debug for DictionaryWordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryWordRule").finish_non_exhaustive()
    }
}

impl Rule for DictionaryWordRule {
    fn evaluate(&self, password: &str) -> bool {
        !self.lookup.contains(&password.to_lowercase())
    }

    fn failure_description(&self) -> String {
        "Must not be a dictionary word".to_string()
    }
}
