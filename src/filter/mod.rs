//! The filter engine
//!
//! Applies a predicate to a sequence of records and yields, lazily and in
//! input order, the records that satisfy it. The engine holds no state: every
//! function here is a thin constructor around an iterator adapter, and all
//! evaluation happens as the consumer pulls.
//!
//! Records may be owned or borrowed. Anything whose items implement
//! [`Borrow<T>`](std::borrow::Borrow) for the predicate's record type works,
//! so the same predicate filters a `Vec<T>`, a `&[T]` or an iterator of
//! `Rc<T>`.
//!
//! # Example
//!
//! ```rust
//! use sift::{filter, sample_instruments, Material, MaterialIs};
//!
//! let catalogue = sample_instruments();
//! let metal: Vec<&str> = filter(&catalogue, MaterialIs::new(Material::Metal))
//!     .map(|i| i.name.as_str())
//!     .collect();
//! assert_eq!(metal, vec!["Flute", "Drums"]);
//! ```

mod ext;

pub use ext::{FilterExt, PresentExt};

use crate::error::{FilterError, Result};
use crate::predicate::{Not, Predicate};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Lazy iterator over the records satisfying a predicate.
///
/// Created by [`filter`]. Single pass: records are tested one at a time as
/// `next` is called, and a record is never tested before the consumer asks
/// for it.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<I, P, T: ?Sized> {
    records: I,
    predicate: P,
    _record: PhantomData<fn(&T)>,
}

impl<I, P, T: ?Sized> Filtered<I, P, T> {
    fn new(records: I, predicate: P) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = std::any::type_name::<P>(),
            "constructed filter"
        );
        Self {
            records,
            predicate,
            _record: PhantomData,
        }
    }

    /// The predicate records are tested against.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<I: fmt::Debug, P: fmt::Debug, T: ?Sized> fmt::Debug for Filtered<I, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("records", &self.records)
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<I, P, T> Iterator for Filtered<I, P, T>
where
    T: ?Sized,
    I: Iterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let predicate = &self.predicate;
        self.records
            .find(|record| predicate.is_satisfied(record.borrow()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.records.size_hint();
        (0, upper)
    }
}

impl<I, P, T> FusedIterator for Filtered<I, P, T>
where
    T: ?Sized,
    I: FusedIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
}

/// Filter `records` by `predicate`, lazily and in input order.
///
/// Records are never mutated, copied or reordered. An empty input yields an
/// empty output.
///
/// # Example
///
/// ```rust
/// use sift::filter;
/// use sift::predicate::*;
///
/// let evens: Vec<i32> = filter(1..=10, |x: &i32| x % 2 == 0).collect();
/// assert_eq!(evens, vec![2, 4, 6, 8, 10]);
///
/// // Unbounded inputs are fine as long as the consumer stops pulling.
/// let first_big: Vec<u64> = filter(0u64.., gt(1_000)).take(2).collect();
/// assert_eq!(first_big, vec![1_001, 1_002]);
/// ```
pub fn filter<T, I, P>(records: I, predicate: P) -> Filtered<I::IntoIter, P, T>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
    Filtered::new(records.into_iter(), predicate)
}

/// Filter `records` by an optional predicate.
///
/// A missing predicate is a usage error, reported as
/// [`FilterError::MissingPredicate`]; it is never treated as "match
/// everything" or "match nothing".
///
/// # Example
///
/// ```rust
/// use sift::{try_filter, FilterError};
/// use sift::predicate::*;
///
/// let none: Option<Compare<i32>> = None;
/// let err = try_filter(vec![1, 2, 3], none).unwrap_err();
/// assert_eq!(err, FilterError::MissingPredicate);
///
/// let some: Vec<i32> = try_filter(vec![1, 2, 3], Some(gt(1)))?.collect();
/// assert_eq!(some, vec![2, 3]);
/// # Ok::<(), FilterError>(())
/// ```
pub fn try_filter<T, I, P>(records: I, predicate: Option<P>) -> Result<Filtered<I::IntoIter, P, T>>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
    let predicate = predicate.ok_or(FilterError::MissingPredicate)?;
    Ok(filter(records, predicate))
}

/// Filter `records` by the complement of `predicate`.
///
/// # Example
///
/// ```rust
/// use sift::reject;
/// use sift::predicate::*;
///
/// let odd: Vec<i32> = reject(1..=6, |x: &i32| x % 2 == 0).collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn reject<T, I, P>(records: I, predicate: P) -> Filtered<I::IntoIter, Not<P>, T>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
    filter(records, Not(predicate))
}

/// Split `records` into those that satisfy `predicate` and those that don't.
///
/// Both halves keep input order. Unlike [`filter`], this consumes the whole
/// input eagerly.
///
/// # Example
///
/// ```rust
/// use sift::partition;
/// use sift::predicate::*;
///
/// let (small, large): (Vec<i32>, Vec<i32>) = partition(vec![5, 50, 1, 70], lt(10));
/// assert_eq!(small, vec![5, 1]);
/// assert_eq!(large, vec![50, 70]);
/// ```
pub fn partition<T, I, P>(records: I, predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
{
    records
        .into_iter()
        .partition(|record| predicate.is_satisfied(record.borrow()))
}

/// Lazy iterator over a sequence of possibly absent records.
///
/// Created by [`filter_present`]. Yields `Ok(record)` for each present record
/// satisfying the predicate. The first absent record yields
/// `Err(FilterError::MissingRecord)` at the moment it is reached, after which
/// the iterator is exhausted.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Present<I, P, T: ?Sized> {
    records: I,
    predicate: P,
    position: usize,
    failed: bool,
    _record: PhantomData<fn(&T)>,
}

impl<I: fmt::Debug, P: fmt::Debug, T: ?Sized> fmt::Debug for Present<I, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Present")
            .field("records", &self.records)
            .field("predicate", &self.predicate)
            .field("position", &self.position)
            .field("failed", &self.failed)
            .finish()
    }
}

impl<I, R, P, T> Iterator for Present<I, P, T>
where
    T: ?Sized,
    I: Iterator<Item = Option<R>>,
    R: Borrow<T>,
    P: Predicate<T>,
{
    type Item = Result<R>;

    fn next(&mut self) -> Option<Result<R>> {
        if self.failed {
            return None;
        }
        loop {
            let slot = self.records.next()?;
            let index = self.position;
            self.position += 1;
            match slot {
                Some(record) => {
                    if self.predicate.is_satisfied(record.borrow()) {
                        return Some(Ok(record));
                    }
                }
                None => {
                    self.failed = true;
                    return Some(Err(FilterError::MissingRecord { index }));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (_, upper) = self.records.size_hint();
        (0, upper)
    }
}

impl<I, R, P, T> FusedIterator for Present<I, P, T>
where
    T: ?Sized,
    I: FusedIterator<Item = Option<R>>,
    R: Borrow<T>,
    P: Predicate<T>,
{
}

/// Filter a sequence whose records may be absent.
///
/// # Example
///
/// ```rust
/// use sift::{filter_present, FilterError};
/// use sift::predicate::*;
///
/// let mut it = filter_present(vec![Some(1), Some(20), None, Some(30)], gt(10));
/// assert_eq!(it.next(), Some(Ok(20)));
/// assert_eq!(it.next(), Some(Err(FilterError::MissingRecord { index: 2 })));
/// assert_eq!(it.next(), None);
/// ```
pub fn filter_present<T, R, I, P>(records: I, predicate: P) -> Present<I::IntoIter, P, T>
where
    T: ?Sized,
    I: IntoIterator<Item = Option<R>>,
    R: Borrow<T>,
    P: Predicate<T>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(
        predicate = std::any::type_name::<P>(),
        "constructed filter over optional records"
    );
    Present {
        records: records.into_iter(),
        predicate,
        position: 0,
        failed: false,
        _record: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{all_of, any_of, eq, gt, lt, PredicateExt, SharedPredicate};
    use crate::testing::Counting;
    use std::cell::Cell;

    #[test]
    fn test_filter_preserves_order() {
        let out: Vec<i32> = filter(vec![5, 1, 4, 2, 3], gt(2)).collect();
        assert_eq!(out, vec![5, 4, 3]);
    }

    #[test]
    fn test_filter_borrowed_records() {
        let records = vec![String::from("a"), String::from("bb"), String::from("ccc")];
        let out: Vec<&String> = filter(&records, |s: &String| s.len() > 1).collect();
        assert_eq!(out, vec!["bb", "ccc"]);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_filter_empty_input() {
        let out: Vec<i32> = filter(Vec::<i32>::new(), gt(0)).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_filter_empty_all_of_is_identity() {
        let input = vec![3, 1, 2];
        let p: crate::predicate::AllOf<SharedPredicate<i32>> = all_of([]);
        let out: Vec<i32> = filter(input.clone(), p).collect();
        assert_eq!(out, input);
    }

    #[test]
    fn test_filter_empty_any_of_is_empty() {
        let p: crate::predicate::AnyOf<SharedPredicate<i32>> = any_of([]);
        assert_eq!(filter(vec![3, 1, 2], p).count(), 0);
    }

    #[test]
    fn test_filter_is_lazy() {
        let pulled = Cell::new(0);
        let source = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let mut it = filter(source, gt(4));
        assert_eq!(pulled.get(), 0);

        assert_eq!(it.next(), Some(5));
        assert_eq!(pulled.get(), 6);

        assert_eq!(it.next(), Some(6));
        assert_eq!(pulled.get(), 7);
    }

    #[test]
    fn test_stopping_early_skips_remaining_evaluations() {
        let counting = Counting::new(lt(3));
        let calls = counting.counter();
        let first: Vec<i32> = filter(0..1_000, counting).take(2).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_predicate_accessor_exposes_filter_criterion() {
        let mut it = filter(vec![3, 8, 1, 9], gt(5));
        assert_eq!(*it.predicate().target(), 5);
        assert_eq!(it.next(), Some(8));
        assert!(it.predicate().is_satisfied(&9));
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let it = filter(vec![1, 2, 3], gt(0));
        assert_eq!(it.size_hint(), (0, Some(3)));
    }

    #[test]
    fn test_try_filter_missing_predicate() {
        let missing: Option<crate::predicate::Compare<i32>> = None;
        let err = try_filter(vec![1, 2], missing).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_try_filter_missing_predicate_on_empty_input() {
        let missing: Option<crate::predicate::Compare<i32>> = None;
        assert_eq!(
            try_filter(Vec::<i32>::new(), missing).unwrap_err(),
            FilterError::MissingPredicate
        );
    }

    #[test]
    fn test_try_filter_with_predicate() {
        let out: Vec<i32> = try_filter(vec![1, 2, 3], Some(eq(2))).unwrap().collect();
        assert_eq!(out, vec![2]);
    }

    #[test]
    fn test_reject_is_complement() {
        let input = vec![1, 2, 3, 4, 5];
        let kept: Vec<i32> = filter(input.clone(), gt(2)).collect();
        let dropped: Vec<i32> = reject(input, gt(2)).collect();
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(dropped, vec![1, 2]);
    }

    #[test]
    fn test_partition() {
        let (yes, no) = partition(vec![1, 10, 2, 20], gt(5));
        assert_eq!(yes, vec![10, 20]);
        assert_eq!(no, vec![1, 2]);
    }

    #[test]
    fn test_filter_present_all_present() {
        let out: Result<Vec<i32>> = filter_present(vec![Some(1), Some(2), Some(3)], gt(1)).collect();
        assert_eq!(out, Ok(vec![2, 3]));
    }

    #[test]
    fn test_filter_present_fails_at_first_absent_record() {
        let evaluated = Counting::new(gt(0));
        let calls = evaluated.counter();
        let mut it = filter_present(vec![Some(1), None, Some(2), None], evaluated);

        assert_eq!(it.next(), Some(Ok(1)));
        assert_eq!(it.next(), Some(Err(FilterError::MissingRecord { index: 1 })));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_present_reports_absent_record_even_if_nothing_matches() {
        let out: Result<Vec<i32>> = filter_present(vec![Some(1), None], gt(100)).collect();
        assert_eq!(out, Err(FilterError::MissingRecord { index: 1 }));
    }

    #[test]
    fn test_filter_with_composed_predicate() {
        let p = gt(0).and(lt(10)).or(eq(100));
        let out: Vec<i32> = filter(vec![-1, 5, 50, 100], p).collect();
        assert_eq!(out, vec![5, 100]);
    }
}
