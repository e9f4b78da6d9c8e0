//! Testing utilities for predicates and filters
//!
//! [`Counting`] wraps a predicate and records how many times it was
//! evaluated, which is how short-circuiting and laziness are observed from
//! the outside. With the `proptest` feature enabled, the catalogue types also
//! implement [`Arbitrary`](proptest::arbitrary::Arbitrary).
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::*;
//! use sift::testing::Counting;
//!
//! let second = Counting::new(gt(0));
//! let calls = second.counter();
//! let p = lt(0).and(second);
//!
//! assert!(!p.is_satisfied(&5));
//! assert_eq!(calls.get(), 0); // never reached
//! ```

use crate::predicate::Predicate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle to the evaluation count of a [`Counting`] predicate.
#[derive(Debug, Clone, Default)]
pub struct EvaluationCounter(Arc<AtomicUsize>);

impl EvaluationCounter {
    /// Number of evaluations so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}

/// A predicate that counts its own evaluations.
///
/// The count is shared with every [`EvaluationCounter`] obtained from
/// [`counter`](Counting::counter), so it stays readable after the predicate
/// has been moved into a combinator or a filter.
#[derive(Debug, Clone)]
pub struct Counting<P> {
    inner: P,
    calls: EvaluationCounter,
}

impl<P> Counting<P> {
    /// Wrap `inner` with a fresh counter.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: EvaluationCounter::default(),
        }
    }

    /// A handle reading this predicate's evaluation count.
    pub fn counter(&self) -> EvaluationCounter {
        self.calls.clone()
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Counting<P> {
    fn is_satisfied(&self, record: &T) -> bool {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        self.inner.is_satisfied(record)
    }
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use crate::instrument::{Instrument, InstrumentType, Material};
    use proptest::prelude::*;

    impl Arbitrary for Material {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(Material::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for InstrumentType {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(InstrumentType::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for Instrument {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (
                "[A-Z][a-z]{0,11}",
                any::<InstrumentType>(),
                any::<Material>(),
            )
                .prop_map(|(name, kind, material)| Instrument::new(name, kind, material))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, PredicateExt};

    #[test]
    fn counting_counts_every_evaluation() {
        let p = Counting::new(eq(1));
        let calls = p.counter();
        assert!(p.is_satisfied(&1));
        assert!(!p.is_satisfied(&2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn counter_survives_move_into_combinator() {
        let p = Counting::new(eq(1));
        let calls = p.counter();
        let combined = p.not();
        assert!(combined.is_satisfied(&3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn counter_reset() {
        let p = Counting::new(eq(1));
        let calls = p.counter();
        p.is_satisfied(&1);
        calls.reset();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn clones_share_the_count() {
        let p = Counting::new(eq(1));
        let q = p.clone();
        p.is_satisfied(&1);
        q.is_satisfied(&1);
        assert_eq!(p.counter().get(), 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::instrument::{Instrument, Material};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn instrument_arbitrary_has_nonempty_name(i in any::<Instrument>()) {
                prop_assert!(!i.name.is_empty());
                prop_assert!(Material::ALL.contains(&i.material));
            }
        }
    }
}
