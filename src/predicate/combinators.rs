//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the binary
//! combinators (`And`, `Or`, `Not`) and their n-ary counterparts
//! (`AllOf`, `AnyOf`, `NoneOf`).

use std::fmt;
use std::sync::Arc;

/// A single selection criterion over records of type `T`.
///
/// A predicate is a pure test: evaluating it twice on the same record yields
/// the same answer, and it never mutates the record it inspects. Any type
/// with this one capability can be passed to the filter engine or nested in
/// a combinator, including closures.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let in_range = ge(0).and(le(150));
/// assert!(in_range.is_satisfied(&25));
/// assert!(!in_range.is_satisfied(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the record satisfies this predicate.
    fn is_satisfied(&self, record: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self(record)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All combining methods return concrete types, so a composed predicate is
/// resolved statically unless it is explicitly [`shared`](PredicateExt::shared).
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = gt(0).and(lt(100)).not();
/// assert!(p.is_satisfied(&-5));
/// assert!(!p.is_satisfied(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is only evaluated when `self` is satisfied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.is_satisfied(&50));
    /// assert!(!p.is_satisfied(&0));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// `other` is only evaluated when `self` is not satisfied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.is_satisfied(&-5));
    /// assert!(p.is_satisfied(&150));
    /// assert!(!p.is_satisfied(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = eq(5).not();
    /// assert!(p.is_satisfied(&4));
    /// assert!(!p.is_satisfied(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Borrow the predicate instead of moving it into a combinator or filter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    /// use sift::filter;
    ///
    /// let small = lt(3);
    /// let first: Vec<_> = filter(vec![1, 2, 3], small.by_ref()).collect();
    /// let second: Vec<_> = filter(vec![0, 5], small.by_ref()).collect();
    /// assert_eq!(first, vec![1, 2]);
    /// assert_eq!(second, vec![0]);
    /// ```
    fn by_ref(&self) -> ByRef<'_, Self> {
        ByRef(self)
    }

    /// Erase the concrete type behind a reference-counted handle.
    ///
    /// Shared predicates can be cloned cheaply and reused as children of
    /// several combinators, and they let predicates of different concrete
    /// types live in the same [`AllOf`] or [`AnyOf`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let positive = gt(0).shared();
    /// let even = (|x: &i32| x % 2 == 0).shared();
    ///
    /// let both = all_of([positive.clone(), even.clone()]);
    /// let either = any_of([positive, even]);
    /// assert!(both.is_satisfied(&4));
    /// assert!(!both.is_satisfied(&3));
    /// assert!(either.is_satisfied(&-2));
    /// ```
    fn shared(self) -> SharedPredicate<T>
    where
        Self: 'static,
    {
        SharedPredicate(Arc::new(self))
    }

    /// Emit a `trace` event with `label` and the outcome on every evaluation.
    #[cfg(feature = "tracing")]
    fn traced(self, label: &'static str) -> super::traced::Traced<Self> {
        super::traced::Traced::new(self, label)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.is_satisfied(record) && self.1.is_satisfied(record)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.is_satisfied(record) || self.1.is_satisfied(record)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        !self.0.is_satisfied(record)
    }
}

/// A borrowed predicate, see [`PredicateExt::by_ref`].
#[derive(Debug)]
pub struct ByRef<'a, P>(&'a P);

impl<P> Clone for ByRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for ByRef<'_, P> {}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for ByRef<'_, P> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.is_satisfied(record)
    }
}

/// A type-erased, reference-counted predicate.
///
/// Cloning shares the underlying predicate rather than copying it.
pub struct SharedPredicate<T: ?Sized>(Arc<dyn Predicate<T>>);

impl<T: ?Sized> SharedPredicate<T> {
    /// Wrap a predicate in a shared handle.
    pub fn new<P: Predicate<T> + 'static>(predicate: P) -> Self {
        Self(Arc::new(predicate))
    }
}

impl<T: ?Sized> Clone for SharedPredicate<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for SharedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPredicate").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Predicate<T> for SharedPredicate<T> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.is_satisfied(record)
    }
}

/// Satisfied iff every child predicate is satisfied.
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first child that is not satisfied. An `AllOf` with no children is the
/// identity of AND: it is satisfied by every record.
#[derive(Clone, Debug)]
pub struct AllOf<P>(Vec<P>);

impl<P> AllOf<P> {
    /// Append a child predicate.
    pub fn push(&mut self, predicate: P) {
        self.0.push(predicate);
    }

    /// Append a child predicate, builder style.
    pub fn with(mut self, predicate: P) -> Self {
        self.0.push(predicate);
        self
    }

    /// Number of child predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no children (the combinator always matches).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The child predicates, in evaluation order.
    pub fn children(&self) -> &[P] {
        &self.0
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.iter().all(|p| p.is_satisfied(record))
    }
}

impl<P> FromIterator<P> for AllOf<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        AllOf(iter.into_iter().collect())
    }
}

/// Create a predicate satisfied when all given predicates are satisfied.
///
/// Children must share one type; use [`PredicateExt::shared`] to mix
/// different predicate types. An empty list matches everything.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let bounds = all_of([gt(0), gt(-10), gt(-100)]);
/// assert!(bounds.is_satisfied(&50));
/// assert!(!bounds.is_satisfied(&-50));
///
/// let everything = all_of(Vec::<Compare<i32>>::new());
/// assert!(everything.is_satisfied(&-50));
/// ```
pub fn all_of<P, I: IntoIterator<Item = P>>(predicates: I) -> AllOf<P> {
    predicates.into_iter().collect()
}

/// Satisfied iff at least one child predicate is satisfied.
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first satisfied child. An `AnyOf` with no children is the identity of OR:
/// it is satisfied by no record.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(Vec<P>);

impl<P> AnyOf<P> {
    /// Append a child predicate.
    pub fn push(&mut self, predicate: P) {
        self.0.push(predicate);
    }

    /// Append a child predicate, builder style.
    pub fn with(mut self, predicate: P) -> Self {
        self.0.push(predicate);
        self
    }

    /// Number of child predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no children (the combinator never matches).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The child predicates, in evaluation order.
    pub fn children(&self) -> &[P] {
        &self.0
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        self.0.iter().any(|p| p.is_satisfied(record))
    }
}

impl<P> FromIterator<P> for AnyOf<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        AnyOf(iter.into_iter().collect())
    }
}

/// Create a predicate satisfied when any given predicate is satisfied.
///
/// An empty list matches nothing.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let special = any_of([eq(1), eq(5), eq(10)]);
/// assert!(special.is_satisfied(&5));
/// assert!(!special.is_satisfied(&7));
/// ```
pub fn any_of<P, I: IntoIterator<Item = P>>(predicates: I) -> AnyOf<P> {
    predicates.into_iter().collect()
}

/// Satisfied iff no child predicate is satisfied.
///
/// Equivalent to `Not(AnyOf(..))`; an empty list matches everything.
#[derive(Clone, Debug)]
pub struct NoneOf<P>(Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NoneOf<P> {
    #[inline]
    fn is_satisfied(&self, record: &T) -> bool {
        !self.0.iter().any(|p| p.is_satisfied(record))
    }
}

impl<P> FromIterator<P> for NoneOf<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        NoneOf(iter.into_iter().collect())
    }
}

/// Create a predicate satisfied when none of the given predicates is.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let ordinary = none_of([eq(1), eq(5), eq(10)]);
/// assert!(ordinary.is_satisfied(&7));
/// assert!(!ordinary.is_satisfied(&5));
/// ```
pub fn none_of<P, I: IntoIterator<Item = P>>(predicates: I) -> NoneOf<P> {
    predicates.into_iter().collect()
}
