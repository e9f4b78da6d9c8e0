//! Error types for predicate construction and filtering.
//!
//! Every failure in this crate is reported through [`FilterError`]. Nothing is
//! logged or swallowed internally: construction errors are returned from the
//! fallible constructors, usage errors from [`try_filter`](crate::try_filter),
//! and missing records from the iterator at the point they are pulled.

use std::fmt;

/// Errors raised while building predicates or filtering records.
///
/// # Example
///
/// ```rust
/// use sift::Material;
///
/// let err = "Bronze".parse::<Material>().unwrap_err();
/// assert!(err.is_construction());
/// assert_eq!(err.to_string(), "invalid material: 'Bronze'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A leaf predicate target lies outside its attribute's domain.
    InvalidTarget {
        /// Attribute the target was meant for.
        attribute: &'static str,
        /// The rejected raw value.
        value: String,
    },
    /// A range predicate was built with `min > max`.
    InvalidRange {
        /// Lower bound, rendered for display.
        min: String,
        /// Upper bound, rendered for display.
        max: String,
    },
    /// `filter` was invoked without a predicate.
    MissingPredicate,
    /// The record sequence yielded an absent record.
    MissingRecord {
        /// Zero-based position of the absent record in the input.
        index: usize,
    },
}

impl FilterError {
    /// Create an invalid target error.
    pub fn invalid_target(attribute: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidTarget {
            attribute,
            value: value.into(),
        }
    }

    /// Create an invalid range error, rendering both bounds with `Debug`.
    pub fn invalid_range(min: impl fmt::Debug, max: impl fmt::Debug) -> Self {
        Self::InvalidRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }

    /// Returns true if the error was raised while constructing a predicate.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. } | Self::InvalidRange { .. })
    }

    /// Returns true if the error signals a misuse of the filter engine.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingPredicate)
    }

    /// Returns true if the input sequence yielded an absent record.
    pub fn is_missing_record(&self) -> bool {
        matches!(self, Self::MissingRecord { .. })
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { attribute, value } => {
                write!(f, "invalid {}: '{}'", attribute, value)
            }
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min {} is greater than max {}", min, max)
            }
            Self::MissingPredicate => write!(f, "filter invoked without a predicate"),
            Self::MissingRecord { index } => {
                write!(f, "record at position {} is missing", index)
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Result alias defaulting to [`FilterError`].
pub type Result<T, E = FilterError> = std::result::Result<T, E>;
