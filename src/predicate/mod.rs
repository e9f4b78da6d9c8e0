//! Composable predicates over typed records
//!
//! A predicate answers one question about one record. Predicates combine
//! with `and`, `or` and `not` (or the n-ary [`all_of`], [`any_of`] and
//! [`none_of`]) into larger predicates, which are themselves predicates, so
//! composition nests to any depth. Adding a new kind of leaf predicate never
//! requires touching the combinators or the filter engine.
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Reading {
//!     sensor: &'static str,
//!     celsius: f64,
//! }
//!
//! let outdoor = field(|r: &Reading| r.sensor, starts_with("out"));
//! let freezing = field(|r: &Reading| &r.celsius, le(0.0));
//! let alert = outdoor.and(freezing);
//!
//! assert!(alert.is_satisfied(&Reading { sensor: "out-north", celsius: -3.5 }));
//! assert!(!alert.is_satisfied(&Reading { sensor: "in-hall", celsius: -3.5 }));
//! ```
//!
//! # Mixing predicate types
//!
//! Binary combinators keep full static types. The n-ary combinators hold a
//! `Vec` of one type; erase differing types with [`PredicateExt::shared`]:
//!
//! ```rust
//! use sift::predicate::*;
//!
//! let p = any_of([eq(0).shared(), gt(100).shared(), (|x: &i32| x % 7 == 0).shared()]);
//! assert!(p.is_satisfied(&14));
//! assert!(!p.is_satisfied(&15));
//! ```

mod combinators;
mod compare;
mod field;
mod text;
#[cfg(feature = "tracing")]
mod traced;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{
    all_of, any_of, none_of, AllOf, And, AnyOf, ByRef, NoneOf, Not, Or, SharedPredicate,
};

// Re-export comparison predicates
pub use compare::{
    between, eq, ge, gt, le, lt, ne, one_of, try_between, Between, Compare, Equals, Op, OneOf,
};

// Re-export text predicates
pub use text::{
    contains, ends_with, eq_ignore_ascii_case, not_empty, starts_with, Contains, EndsWith,
    EqIgnoreAsciiCase, NotEmpty, StartsWith,
};

pub use field::{field, Field};

#[cfg(feature = "tracing")]
pub use traced::Traced;
