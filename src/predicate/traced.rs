//! Tracing instrumentation for predicates (feature-gated)

use super::combinators::Predicate;

/// Wraps a predicate and emits a `trace` event on every evaluation.
///
/// Built with [`PredicateExt::traced`](super::PredicateExt::traced).
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let adult = ge(18).traced("adult");
/// assert!(adult.is_satisfied(&30));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Traced<P> {
    inner: P,
    label: &'static str,
}

impl<P> Traced<P> {
    /// Wrap `inner`, tagging its events with `label`.
    pub fn new(inner: P, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The label attached to emitted events.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unwrap the instrumented predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Traced<P> {
    fn is_satisfied(&self, record: &T) -> bool {
        let satisfied = self.inner.is_satisfied(record);
        tracing::trace!(predicate = self.label, satisfied, "evaluated predicate");
        satisfied
    }
}
