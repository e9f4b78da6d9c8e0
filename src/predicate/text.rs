//! Text predicates
//!
//! Substring and case-insensitive matching over `str` and `String`.

use super::combinators::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for Contains<S> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string contains `needle`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(contains("ut").is_satisfied("Flute"));
/// assert!(!contains("ut").is_satisfied("Piano"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(needle: S) -> Contains<S> {
    Contains(needle)
}

/// Predicate that checks if a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for StartsWith<S> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string starts with `prefix`.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for EndsWith<S> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string ends with `suffix`.
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate for ASCII case-insensitive equality.
#[derive(Clone, Debug)]
pub struct EqIgnoreAsciiCase<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EqIgnoreAsciiCase<S> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        value.eq_ignore_ascii_case(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for EqIgnoreAsciiCase<S> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        value.eq_ignore_ascii_case(self.0.as_ref())
    }
}

/// Create a predicate that compares strings ignoring ASCII case.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(eq_ignore_ascii_case("drums").is_satisfied("Drums"));
/// ```
pub fn eq_ignore_ascii_case<S: AsRef<str> + Send + Sync>(target: S) -> EqIgnoreAsciiCase<S> {
    EqIgnoreAsciiCase(target)
}
