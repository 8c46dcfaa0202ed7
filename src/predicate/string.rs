//! String predicates
//!
//! Lengths are measured in `char`s, not bytes.

use regex::Regex;

use super::Predicate;

/// Holds for the empty string.
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl Predicate<str> for Empty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty()
    }
}

impl Predicate<String> for Empty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that holds for the empty string.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(empty().check(""));
/// assert!(!empty().check(" "));
/// ```
pub fn empty() -> Empty {
    Empty
}

/// Holds for strings that are empty or contain only whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct Blank;

impl Predicate<str> for Blank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.trim().is_empty()
    }
}

impl Predicate<String> for Blank {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.trim().is_empty()
    }
}

/// Create a predicate that holds for empty or whitespace-only strings.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(blank().check(""));
/// assert!(blank().check(" \t\n"));
/// assert!(!blank().check(" x "));
/// ```
pub fn blank() -> Blank {
    Blank
}

/// Holds for strings with more than `max` characters.
#[derive(Clone, Copy, Debug)]
pub struct LongerThan {
    max: usize,
}

impl Predicate<str> for LongerThan {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() > self.max
    }
}

impl Predicate<String> for LongerThan {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().count() > self.max
    }
}

/// Create a predicate that holds for strings longer than `max` characters.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(longer_than(3).check("four"));
/// assert!(!longer_than(3).check("abc"));
/// assert!(!longer_than(3).check("äöü"));
/// ```
pub fn longer_than(max: usize) -> LongerThan {
    LongerThan { max }
}

/// Holds for strings matched by a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl Predicate<String> for Matches {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that holds when `pattern` matches the string.
///
/// The pattern is not anchored implicitly; use `^...$` for whole-string formats.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use wrapture::predicate::*;
///
/// let zip = Regex::new(r"^\d{5}$").unwrap();
/// assert!(matches(&zip).check("12345"));
/// assert!(!matches(&zip).check("1234a"));
/// ```
pub fn matches(pattern: &Regex) -> Matches {
    Matches(pattern.clone())
}
