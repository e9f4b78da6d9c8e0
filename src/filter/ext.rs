//! Fluent entry points for the filter engine
//!
//! These traits let a caller write "collection, then filter by predicate".
//! Every method delegates to the corresponding free function in
//! [`crate::filter`]; there is no engine instance to construct or share.

use super::{filter, filter_present, partition, reject, try_filter, Filtered, Present};
use crate::error::Result;
use crate::predicate::{Not, Predicate};
use std::borrow::Borrow;

/// Filtering methods for any collection or iterator.
///
/// # Example
///
/// ```rust
/// use sift::prelude::*;
///
/// let catalogue = sample_instruments();
/// let names: Vec<&str> = catalogue
///     .iter()
///     .filter_by(MaterialIs::new(Material::Metal).and(KindIs::new(InstrumentType::Wind)))
///     .map(|i| i.name.as_str())
///     .collect();
/// assert_eq!(names, vec!["Flute"]);
/// ```
pub trait FilterExt: IntoIterator + Sized {
    /// Lazily keep the records satisfying `predicate`. See [`filter`].
    fn filter_by<T, P>(self, predicate: P) -> Filtered<Self::IntoIter, P, T>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: Predicate<T>,
    {
        filter(self, predicate)
    }

    /// Like [`filter_by`](FilterExt::filter_by), failing if the predicate is
    /// absent. See [`try_filter`].
    fn try_filter_by<T, P>(self, predicate: Option<P>) -> Result<Filtered<Self::IntoIter, P, T>>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: Predicate<T>,
    {
        try_filter(self, predicate)
    }

    /// Lazily drop the records satisfying `predicate`. See [`reject`].
    fn reject_by<T, P>(self, predicate: P) -> Filtered<Self::IntoIter, Not<P>, T>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: Predicate<T>,
    {
        reject(self, predicate)
    }

    /// Split into matching and non-matching records. See [`partition`].
    fn partition_by<T, P>(self, predicate: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: Predicate<T>,
    {
        partition(self, predicate)
    }
}

impl<I: IntoIterator> FilterExt for I {}

/// Filtering methods for sequences of possibly absent records.
///
/// # Example
///
/// ```rust
/// use sift::prelude::*;
///
/// let loaded = vec![Some(3), None, Some(9)];
/// let result: Result<Vec<i32>, FilterError> = loaded.filter_present_by(gt(1)).collect();
/// assert_eq!(result, Err(FilterError::MissingRecord { index: 1 }));
/// ```
pub trait PresentExt<R>: IntoIterator<Item = Option<R>> + Sized {
    /// Lazily keep present records satisfying `predicate`, failing on the
    /// first absent one. See [`filter_present`].
    fn filter_present_by<T, P>(self, predicate: P) -> Present<Self::IntoIter, P, T>
    where
        T: ?Sized,
        R: Borrow<T>,
        P: Predicate<T>,
    {
        filter_present(self, predicate)
    }
}

impl<R, I: IntoIterator<Item = Option<R>>> PresentExt<R> for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::predicate::{eq, gt, PredicateExt};

    #[test]
    fn test_filter_by_matches_free_function() {
        let input = vec![4, 8, 15, 16, 23, 42];
        let fluent: Vec<i32> = input.clone().filter_by(gt(15)).collect();
        let direct: Vec<i32> = filter(input, gt(15)).collect();
        assert_eq!(fluent, direct);
        assert_eq!(fluent, vec![16, 23, 42]);
    }

    #[test]
    fn test_filter_by_on_slice() {
        let input = [1, 2, 3];
        let out: Vec<&i32> = input.iter().filter_by(eq(2)).collect();
        assert_eq!(out, vec![&2]);
    }

    #[test]
    fn test_try_filter_by_missing() {
        let missing: Option<crate::predicate::Equals<i32>> = None;
        let err = vec![1].try_filter_by(missing).unwrap_err();
        assert_eq!(err, FilterError::MissingPredicate);
    }

    #[test]
    fn test_reject_by_and_partition_by() {
        let odd: Vec<i32> = (1..=5).reject_by(|x: &i32| x % 2 == 0).collect();
        assert_eq!(odd, vec![1, 3, 5]);

        let (big, small) = vec![1, 50, 2, 60].partition_by(gt(10).and(gt(20)));
        assert_eq!(big, vec![50, 60]);
        assert_eq!(small, vec![1, 2]);
    }

    #[test]
    fn test_filter_present_by() {
        let mut it = vec![Some(1), Some(5)].filter_present_by(gt(2));
        assert_eq!(it.next(), Some(Ok(5)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_chained_filters() {
        let out: Vec<i32> = (0..20).filter_by(gt(5)).filter_by(|x: &i32| x % 5 == 0).collect();
        assert_eq!(out, vec![10, 15]);
    }
}
