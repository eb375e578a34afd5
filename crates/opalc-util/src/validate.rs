//! Standalone string-validation patterns.
//!
//! A stateless set of precompiled patterns for ad-hoc validation of whole
//! strings. This module is independent of the lexer: nothing here feeds the
//! token stream, and the lexer never consults these patterns.
//!
//! Every pattern is anchored, so a string matches only if the entire input
//! fits the pattern.
//!
//! # Examples
//!
//! ```
//! use opalc_util::validate;
//!
//! assert!(validate::is_email("thelegend27@gmail.com"));
//! assert!(!validate::is_email("a@b.com"));
//! assert!(validate::is_decimal("-1.38"));
//! assert!(!validate::is_decimal("1."));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Email addresses: a local part of at least two word characters, dots, or
/// underscores, then a domain ending in a three-letter lowercase TLD.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._]{2,}@[A-Za-z0-9~]+\.([A-Za-z0-9-]+\.)*[a-z]{3}$")
        .expect("EMAIL pattern is valid")
});

/// Strings of odd length between 11 and 19 characters inclusive.
pub static ODD_STRINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(..){5,9}.$").expect("ODD_STRINGS pattern is valid")
});

/// Bracketed lists of single-quoted characters, such as `['a','b','c']`,
/// with an optional single space after each comma. The empty list `[]` is
/// allowed.
pub static CHARACTER_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[('.'(, ?'.')*)?\]$")
        .expect("CHARACTER_LIST pattern is valid")
});

/// Signed decimal numbers with no leading zeros and at least one digit on
/// each side of the point, such as `10100.001` or `-1.38`.
pub static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)\.[0-9]+$")
        .expect("DECIMAL pattern is valid")
});

/// Double-quoted string literals whose escapes are limited to
/// `\b \n \r \t \' \" \\`.
pub static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"([^"\\]|\\[bnrt'"\\])*"$"#)
        .expect("STRING pattern is valid")
});

/// Returns true if `text` is a valid email address per [`EMAIL`].
pub fn is_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Returns true if `text` has an odd length between 11 and 19 characters.
pub fn is_odd_string(text: &str) -> bool {
    ODD_STRINGS.is_match(text)
}

/// Returns true if `text` is a bracketed character list per
/// [`CHARACTER_LIST`].
pub fn is_character_list(text: &str) -> bool {
    CHARACTER_LIST.is_match(text)
}

/// Returns true if `text` is a decimal number per [`DECIMAL`].
pub fn is_decimal(text: &str) -> bool {
    DECIMAL.is_match(text)
}

/// Returns true if `text` is a well-formed string literal per [`STRING`].
pub fn is_string_literal(text: &str) -> bool {
    STRING.is_match(text)
}
