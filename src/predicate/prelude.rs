//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::prelude::*;
//!
//! let valid_age = ge(0).and(le(150));
//! assert!(valid_age.is_satisfied(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt, SharedPredicate};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

// Comparison predicates
pub use super::compare::{between, eq, ge, gt, le, lt, ne, one_of, try_between};

// Text predicates
pub use super::text::{contains, ends_with, eq_ignore_ascii_case, not_empty, starts_with};

// Attribute projection
pub use super::field::field;
