//! Entropy estimation - pool-size approximation of password entropy.

use crate::charset::{is_decimal_digit, is_symbol};

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const WHITESPACE_POOL: u32 = 6;
const SYMBOL_POOL: u32 = 32;
const OTHER_POOL: u32 = 128;

/// Symbol pools, one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pool {
    Lowercase = 1,
    Uppercase = 1 << 1,
    Digit = 1 << 2,
    Whitespace = 1 << 3,
    Symbol = 1 << 4,
    Other = 1 << 5,
}

impl Pool {
    const ALL: [Pool; 6] = [
        Pool::Lowercase,
        Pool::Uppercase,
        Pool::Digit,
        Pool::Whitespace,
        Pool::Symbol,
        Pool::Other,
    ];

    fn of(c: char) -> Pool {
        if c.is_lowercase() {
            Pool::Lowercase
        } else if c.is_uppercase() {
            Pool::Uppercase
        } else if is_decimal_digit(c) {
            Pool::Digit
        } else if c.is_whitespace() {
            Pool::Whitespace
        } else if c.is_ascii() && is_symbol(c) {
            Pool::Symbol
        } else {
            Pool::Other
        }
    }

    fn size(self) -> u32 {
        match self {
            Pool::Lowercase => LOWERCASE_POOL,
            Pool::Uppercase => UPPERCASE_POOL,
            Pool::Digit => DIGIT_POOL,
            Pool::Whitespace => WHITESPACE_POOL,
            Pool::Symbol => SYMBOL_POOL,
            Pool::Other => OTHER_POOL,
        }
    }
}

/// Estimates the entropy of a password in bits.
///
/// The estimate is `L * log2(N)` where `L` is the number of characters and `N`
/// the summed size of every symbol pool that appears in the password
/// (lowercase 26, uppercase 26, digits 10, whitespace 6, ASCII symbols 32,
/// anything else 128). The strength thresholds are calibrated against this
/// exact formula, so it is not a frequency-based Shannon entropy.
///
/// ```rust
/// use pwd_rules::entropy;
///
/// assert_eq!(entropy(""), 0.0);
/// assert!(entropy("correcthorse") < entropy("CorrectHorse"));
/// ```
pub fn entropy(password: &str) -> f64 {
    let mut seen = 0u8;
    let mut length = 0usize;
    for c in password.chars() {
        seen |= Pool::of(c) as u8;
        length += 1;
    }

    if length == 0 {
        return 0.0;
    }

    let pool_size: u32 = Pool::ALL
        .iter()
        .filter(|&&pool| seen & pool as u8 != 0)
        .map(|pool| pool.size())
        .sum();

    length as f64 * f64::from(pool_size).log2()
}
