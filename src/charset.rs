//! Character sets - Unicode classes and explicit code points.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("valid decimal digit pattern"));

/// A built-in Unicode character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    /// Lowercase letters (`char::is_lowercase`).
    Lowercase,
    /// Uppercase letters (`char::is_uppercase`).
    Uppercase,
    /// Decimal digits, Unicode general category `Nd`.
    DecimalDigit,
    /// Printable characters that are neither alphanumeric nor whitespace.
    Symbol,
    /// Whitespace and newlines.
    Whitespace,
    /// Alphabetic characters of any case.
    Letter,
    /// Letters and digits.
    Alphanumeric,
}

impl CharClass {
    /// Returns `true` if `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::DecimalDigit => is_decimal_digit(c),
            CharClass::Symbol => is_symbol(c),
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::DecimalDigit => "decimal digit",
            CharClass::Symbol => "symbol",
            CharClass::Whitespace => "whitespace",
            CharClass::Letter => "letter",
            CharClass::Alphanumeric => "alphanumeric",
        }
    }
}

/// General category `Nd`. Fractions, superscripts and roman numerals are excluded.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Printable, non-alphanumeric, non-whitespace.
pub(crate) fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// An immutable set of characters, made of Unicode classes and/or explicit code points.
///
/// Membership is tested code point by code point; no normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    classes: BTreeSet<CharClass>,
    chars: BTreeSet<char>,
}

impl CharacterSet {
    /// A set containing a single Unicode class.
    pub fn from_class(class: CharClass) -> Self {
        Self {
            classes: BTreeSet::from([class]),
            chars: BTreeSet::new(),
        }
    }

    /// A set containing exactly the given characters.
    ///
    /// ```rust
    /// use pwd_rules::CharacterSet;
    ///
    /// let hex = CharacterSet::from_chars("0123456789abcdef".chars());
    /// assert!(hex.contains('c'));
    /// assert!(!hex.contains('g'));
    /// ```
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            classes: BTreeSet::new(),
            chars: chars.into_iter().collect(),
        }
    }

    pub fn lowercase() -> Self {
        Self::from_class(CharClass::Lowercase)
    }

    pub fn uppercase() -> Self {
        Self::from_class(CharClass::Uppercase)
    }

    pub fn decimal_digits() -> Self {
        Self::from_class(CharClass::DecimalDigit)
    }

    pub fn symbols() -> Self {
        Self::from_class(CharClass::Symbol)
    }

    pub fn whitespace() -> Self {
        Self::from_class(CharClass::Whitespace)
    }

    pub fn letters() -> Self {
        Self::from_class(CharClass::Letter)
    }

    pub fn alphanumerics() -> Self {
        Self::from_class(CharClass::Alphanumeric)
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub fn union(mut self, other: &CharacterSet) -> Self {
        self.classes.extend(other.classes.iter().copied());
        self.chars.extend(other.chars.iter().copied());
        self
    }

    /// Returns `true` if `c` is a member of this set.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c) || self.classes.iter().any(|class| class.contains(c))
    }

    /// Returns `true` if every character of `s` is a member.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    /// Returns `true` if at least one character of `s` is a member.
    pub fn contains_any(&self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }

    /// Returns `true` if the set has no classes and no explicit characters.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.chars.is_empty()
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.classes.iter().map(|c| c.name().to_string()).collect();
        if !self.chars.is_empty() {
            let listed: String = self.chars.iter().collect();
            parts.push(format!("\"{}\"", listed));
        }
        write!(f, "{}", parts.join(" or "))
    }
}
