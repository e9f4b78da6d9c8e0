//! Comparison predicates
//!
//! Equality, ordering, range and membership tests against captured target
//! values. Pair one with an attribute accessor via [`field`](super::field) to
//! test one attribute of a record.
//!
//! Targets normally have the attribute's own type. Text is the exception: a
//! `&str` target also tests `String` and `str` attributes, so comparing a
//! record's owned name against a literal needs no allocation.

use super::combinators::Predicate;
use crate::error::{FilterError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// Equality (or inequality) with a target value.
#[derive(Clone, Copy, Debug)]
pub struct Equals<V> {
    target: V,
    expected: bool,
}

impl<V> Equals<V> {
    /// The value records are compared against.
    pub fn target(&self) -> &V {
        &self.target
    }

    /// Returns true for `ne`, false for `eq`.
    pub fn is_negated(&self) -> bool {
        !self.expected
    }
}

impl<T: PartialEq + Send + Sync> Predicate<T> for Equals<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        (*value == self.target) == self.expected
    }
}

impl Predicate<String> for Equals<&str> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        (value.as_str() == self.target) == self.expected
    }
}

impl Predicate<str> for Equals<&str> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        (value == self.target) == self.expected
    }
}

/// Satisfied when the value equals `target`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(eq(5).is_satisfied(&5));
/// assert!(!eq(5).is_satisfied(&4));
///
/// // A literal tests an owned string without allocating a target.
/// assert!(eq("Flute").is_satisfied(&String::from("Flute")));
/// ```
pub fn eq<V>(target: V) -> Equals<V> {
    Equals {
        target,
        expected: true,
    }
}

/// Satisfied when the value differs from `target`.
pub fn ne<V>(target: V) -> Equals<V> {
    Equals {
        target,
        expected: false,
    }
}

/// Ordering relation tested by a [`Compare`] predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Strictly less than the target.
    Lt,
    /// Less than or equal to the target.
    Le,
    /// Strictly greater than the target.
    Gt,
    /// Greater than or equal to the target.
    Ge,
}

impl Op {
    /// Whether a value ordered `ordering` relative to the target passes.
    ///
    /// Incomparable values (`None`, as for a `NaN`) never pass.
    pub fn accepts(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (Op::Lt, Some(o)) => o.is_lt(),
            (Op::Le, Some(o)) => o.is_le(),
            (Op::Gt, Some(o)) => o.is_gt(),
            (Op::Ge, Some(o)) => o.is_ge(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        })
    }
}

/// Ordering comparison against a target value.
///
/// One type covers all four relations, so `gt(0)` and `lt(10)` can sit side
/// by side in an [`AllOf`](super::AllOf) without type erasure.
#[derive(Clone, Copy, Debug)]
pub struct Compare<V> {
    op: Op,
    target: V,
}

impl<V> Compare<V> {
    /// Compare values against `target` with `op`.
    pub fn new(op: Op, target: V) -> Self {
        Self { op, target }
    }

    /// The relation being tested.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The value records are compared against.
    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Compare<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        self.op.accepts(value.partial_cmp(&self.target))
    }
}

impl Predicate<String> for Compare<&str> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        self.op.accepts(value.as_str().partial_cmp(self.target))
    }
}

impl Predicate<str> for Compare<&str> {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        self.op.accepts(value.partial_cmp(self.target))
    }
}

/// Satisfied when the value is greater than `target`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(gt(5).is_satisfied(&6));
/// assert!(!gt(5).is_satisfied(&5));
/// ```
pub fn gt<V>(target: V) -> Compare<V> {
    Compare::new(Op::Gt, target)
}

/// Satisfied when the value is at least `target`.
pub fn ge<V>(target: V) -> Compare<V> {
    Compare::new(Op::Ge, target)
}

/// Satisfied when the value is less than `target`.
pub fn lt<V>(target: V) -> Compare<V> {
    Compare::new(Op::Lt, target)
}

/// Satisfied when the value is at most `target`.
pub fn le<V>(target: V) -> Compare<V> {
    Compare::new(Op::Le, target)
}

/// Inclusive range test.
#[derive(Clone, Debug)]
pub struct Between<V>(RangeInclusive<V>);

impl<V> Between<V> {
    /// Lower bound (inclusive).
    pub fn min(&self) -> &V {
        self.0.start()
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> &V {
        self.0.end()
    }
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

impl Predicate<String> for Between<&str> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        self.0.contains(&value.as_str())
    }
}

/// Satisfied when the value lies in `min..=max`.
///
/// An inverted range (`min > max`) is accepted and matches nothing; use
/// [`try_between`] to reject it up front.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = between(0, 100);
/// assert!(p.is_satisfied(&0));
/// assert!(p.is_satisfied(&100));
/// assert!(!p.is_satisfied(&101));
/// ```
pub fn between<V>(min: V, max: V) -> Between<V> {
    Between(min..=max)
}

/// Like [`between`], but fails if the bounds are not ordered.
///
/// Bounds that cannot be compared at all (a `NaN` float) are rejected too.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(try_between(1, 10).is_ok());
///
/// let err = try_between(10, 1).unwrap_err();
/// assert!(err.is_construction());
/// ```
pub fn try_between<V: PartialOrd + fmt::Debug>(min: V, max: V) -> Result<Between<V>> {
    let range = min..=max;
    if range.is_empty() {
        return Err(FilterError::invalid_range(range.start(), range.end()));
    }
    Ok(Between(range))
}

/// Membership in a fixed set of values.
#[derive(Clone, Debug)]
pub struct OneOf<V>(Vec<V>);

impl<T: PartialEq + Send + Sync> Predicate<T> for OneOf<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

impl Predicate<String> for OneOf<&str> {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        self.0.iter().any(|target| value.as_str() == *target)
    }
}

/// Satisfied when the value equals any of `values`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = one_of(["a", "b"]);
/// assert!(p.is_satisfied(&"b"));
/// assert!(!p.is_satisfied(&"c"));
/// ```
pub fn one_of<V, I: IntoIterator<Item = V>>(values: I) -> OneOf<V> {
    OneOf(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{all_of, field, PredicateExt};

    #[test]
    fn test_equality_and_negation() {
        assert!(eq(5).is_satisfied(&5));
        assert!(!eq(5).is_satisfied(&4));
        assert!(ne(5).is_satisfied(&4));
        assert!(!ne(5).is_satisfied(&5));
        assert!(ne(5).is_negated());
        assert_eq!(*eq(5).target(), 5);
    }

    #[test]
    fn test_op_accepts() {
        assert!(Op::Le.accepts(Some(Ordering::Equal)));
        assert!(!Op::Lt.accepts(Some(Ordering::Equal)));
        assert!(Op::Ge.accepts(Some(Ordering::Greater)));
        assert!(!Op::Gt.accepts(Some(Ordering::Less)));
        assert!(!Op::Ge.accepts(None));
        assert_eq!(Op::Le.to_string(), "<=");
    }

    #[test]
    fn test_ordering_boundaries() {
        let cases = [
            (gt(5), [false, false, true]),
            (ge(5), [false, true, true]),
            (lt(5), [true, false, false]),
            (le(5), [true, true, false]),
        ];
        for (p, expected) in cases {
            let got = [4, 5, 6].map(|x| p.is_satisfied(&x));
            assert_eq!(got, expected, "{:?}", p.op());
        }
    }

    #[test]
    fn test_ordering_predicates_share_a_type() {
        let window = all_of([gt(10), lt(20)]).with(le(15));
        assert!(window.is_satisfied(&12));
        assert!(!window.is_satisfied(&16));
        assert!(!window.is_satisfied(&25));

        let q = ge(0).and(le(9)).or(eq(42));
        assert!(q.is_satisfied(&42));
    }

    #[test]
    fn test_nan_never_compares() {
        assert!(!gt(0.0_f64).is_satisfied(&f64::NAN));
        assert!(!le(0.0_f64).is_satisfied(&f64::NAN));
        assert!(!between(0.0_f64, 1.0).is_satisfied(&f64::NAN));
    }

    #[test]
    fn test_between_and_inverted_range() {
        let p = between(0, 100);
        assert!(p.is_satisfied(&0));
        assert!(p.is_satisfied(&100));
        assert!(!p.is_satisfied(&-1));
        assert!(!p.is_satisfied(&101));

        let inverted = between(10, 1);
        assert!(!inverted.is_satisfied(&5));
        assert!(!inverted.is_satisfied(&10));
    }

    #[test]
    fn test_try_between_rejects_inverted_range() {
        let err = try_between(10, 1).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidRange {
                min: "10".to_string(),
                max: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_try_between_rejects_nan() {
        assert!(try_between(f64::NAN, 1.0).is_err());
        assert!(try_between(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_try_between_accepts_single_point() {
        let p = try_between(3, 3).unwrap();
        assert_eq!((p.min(), p.max()), (&3, &3));
        assert!(p.is_satisfied(&3));
    }

    #[test]
    fn test_one_of() {
        let p = one_of([1, 3, 5]);
        assert!(p.is_satisfied(&3));
        assert!(!p.is_satisfied(&4));
        assert!(!one_of(Vec::<i32>::new()).is_satisfied(&0));
    }

    struct Player {
        name: String,
    }

    #[test]
    fn test_owned_string_attribute_against_str_target() {
        let ada = Player {
            name: "Ada".to_string(),
        };

        assert!(field(|p: &Player| &p.name, eq("Ada")).is_satisfied(&ada));
        assert!(field(|p: &Player| &p.name, ne("Grace")).is_satisfied(&ada));
        assert!(field(|p: &Player| &p.name, lt("B")).is_satisfied(&ada));
        assert!(!field(|p: &Player| &p.name, ge("B")).is_satisfied(&ada));
        assert!(field(|p: &Player| &p.name, between("A", "Az")).is_satisfied(&ada));
        assert!(field(|p: &Player| &p.name, one_of(["Ada", "Grace"])).is_satisfied(&ada));
        assert!(field(|p: &Player| p.name.as_str(), eq("Ada")).is_satisfied(&ada));
    }
}
