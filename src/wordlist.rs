//! Word list management module
//!
//! Loads the dictionary that backs [`DictionaryWordRule`](crate::DictionaryWordRule).

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::rules::WordLookup;

static SHARED_WORD_LIST: RwLock<Option<Arc<WordList>>> = RwLock::new(None);

const DEFAULT_WORD_LIST_PATH: &str = "/usr/share/dict/words";

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// An in-memory set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Builds a list from words, trimming and lowercasing each one.
    /// Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Reads a list with one word per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
            return Err(WordListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: Empty file {:?}", path);
            return Err(WordListError::EmptyFile);
        }

        Ok(Self::from_words(content.lines()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<HashSet<String>> for WordList {
    fn from(words: HashSet<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<BTreeSet<String>> for WordList {
    fn from(words: BTreeSet<String>) -> Self {
        Self::from_words(words)
    }
}

impl WordLookup for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `/usr/share/dict/words`
pub fn word_list_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORD_LIST_PATH))
}

/// Loads the process-wide word list from [`word_list_path`].
///
/// Call once at startup, before building any
/// [`DictionaryWordRule::shared`](crate::DictionaryWordRule::shared) rule.
/// Idempotent: once a list is loaded, later calls return its size without
/// reading the file again.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_WORDLIST_PATH", "/etc/myapp/words.txt"); }
/// pwd_rules::init_word_list()?;
/// let rule = pwd_rules::DictionaryWordRule::shared()?;
/// ```
pub fn init_word_list() -> Result<usize, WordListError> {
    let path = word_list_path();
    init_word_list_from_path(&path)
}

/// Loads the process-wide word list from a specific file path.
///
/// Use this when the path comes from the application's own configuration
/// instead of the environment.
pub fn init_word_list_from_path<P: AsRef<Path>>(path: P) -> Result<usize, WordListError> {
    {
        let guard = SHARED_WORD_LIST.read().unwrap_or_else(|e| e.into_inner());
        if let Some(list) = guard.as_ref() {
            return Ok(list.len());
        }
    }

    let list = WordList::from_path(path.as_ref())?;
    let count = list.len();

    let mut guard = SHARED_WORD_LIST.write().unwrap_or_else(|e| e.into_inner());
    if let Some(existing) = guard.as_ref() {
        return Ok(existing.len());
    }
    *guard = Some(Arc::new(list));

    #[cfg(feature = "tracing")]
    tracing::info!("Word list initialized: {} words from {:?}", count, path.as_ref());

    Ok(count)
}

/// Returns the process-wide word list.
///
/// Returns `None` if `init_word_list()` has not succeeded.
pub fn shared_word_list() -> Option<Arc<WordList>> {
    let guard = SHARED_WORD_LIST.read().unwrap_or_else(|e| e.into_inner());
    guard.clone()
}

/// Resets the word list for testing purposes.
#[cfg(test)]
pub(crate) fn reset_word_list_for_testing() {
    let mut guard = SHARED_WORD_LIST.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}
