//! Attribute projection
//!
//! The filter engine knows nothing about record attributes. A [`Field`]
//! bridges that gap: it reads exactly one attribute of a record through an
//! accessor and hands it to a value predicate.

use super::combinators::Predicate;
use std::fmt;
use std::marker::PhantomData;

/// Leaf predicate testing one attribute of a record.
pub struct Field<F, P, A: ?Sized> {
    accessor: F,
    predicate: P,
    _attribute: PhantomData<fn(&A)>,
}

impl<F, P, A: ?Sized> Field<F, P, A> {
    /// The predicate applied to the projected attribute.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<F: Clone, P: Clone, A: ?Sized> Clone for Field<F, P, A> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            predicate: self.predicate.clone(),
            _attribute: PhantomData,
        }
    }
}

impl<F, P: fmt::Debug, A: ?Sized> fmt::Debug for Field<F, P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("attribute", &std::any::type_name::<A>())
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<R, A, F, P> Predicate<R> for Field<F, P, A>
where
    R: ?Sized,
    A: ?Sized,
    F: Fn(&R) -> &A + Send + Sync,
    P: Predicate<A>,
{
    #[inline]
    fn is_satisfied(&self, record: &R) -> bool {
        self.predicate.is_satisfied((self.accessor)(record))
    }
}

/// Build a leaf predicate from an attribute accessor and a value predicate.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// struct Track {
///     title: String,
///     seconds: u32,
/// }
///
/// let long = field(|t: &Track| &t.seconds, gt(300));
/// let live = field(|t: &Track| t.title.as_str(), ends_with("(Live)"));
/// let long_live = long.and(live);
///
/// let track = Track { title: "Echoes (Live)".into(), seconds: 1380 };
/// assert!(long_live.is_satisfied(&track));
/// ```
pub fn field<R, A, F, P>(accessor: F, predicate: P) -> Field<F, P, A>
where
    R: ?Sized,
    A: ?Sized,
    F: Fn(&R) -> &A + Send + Sync,
    P: Predicate<A>,
{
    Field {
        accessor,
        predicate,
        _attribute: PhantomData,
    }
}
