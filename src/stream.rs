//! Filtering asynchronous record sources
//!
//! [`FilteredStream`] is the [`Stream`] counterpart of
//! [`Filtered`](crate::filter::Filtered): records are pulled from the source
//! one at a time as the consumer polls, nothing is buffered, and input order is
//! preserved. The adapter spawns no tasks and owns no runtime.
//!
//! # Example
//!
//! ```rust
//! use futures::stream::{self, StreamExt};
//! use sift::predicate::*;
//! use sift::stream::FilterStreamExt;
//!
//! # tokio_test::block_on(async {
//! let readings = stream::iter(vec![3, 14, 1, 59, 26]);
//! let high: Vec<i32> = readings.filter_by(gt(10)).collect().await;
//! assert_eq!(high, vec![14, 59, 26]);
//! # });
//! ```

use crate::predicate::Predicate;
use futures::stream::{FusedStream, Stream, StreamExt};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream of the records satisfying a predicate.
///
/// The source must be [`Unpin`]; pin a `!Unpin` source with `Box::pin` first.
#[must_use = "streams do nothing unless polled"]
pub struct FilteredStream<S, P, T: ?Sized> {
    records: S,
    predicate: P,
    _record: PhantomData<fn(&T)>,
}

// The predicate is never pinned, only the source is polled through `&mut`.
impl<S: Unpin, P, T: ?Sized> Unpin for FilteredStream<S, P, T> {}

impl<S: fmt::Debug, P: fmt::Debug, T: ?Sized> fmt::Debug for FilteredStream<S, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredStream")
            .field("records", &self.records)
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<S, P, T> Stream for FilteredStream<S, P, T>
where
    T: ?Sized,
    S: Stream + Unpin,
    S::Item: Borrow<T>,
    P: Predicate<T>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.get_mut();
        loop {
            match futures::ready!(this.records.poll_next_unpin(cx)) {
                Some(record) => {
                    if this.predicate.is_satisfied(record.borrow()) {
                        return Poll::Ready(Some(record));
                    }
                }
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.records.size_hint();
        (0, upper)
    }
}

impl<S, P, T> FusedStream for FilteredStream<S, P, T>
where
    T: ?Sized,
    S: FusedStream + Unpin,
    S::Item: Borrow<T>,
    P: Predicate<T>,
{
    fn is_terminated(&self) -> bool {
        self.records.is_terminated()
    }
}

/// Filtering method for any [`Stream`].
pub trait FilterStreamExt: Stream + Sized {
    /// Lazily keep the records satisfying `predicate`.
    fn filter_by<T, P>(self, predicate: P) -> FilteredStream<Self, P, T>
    where
        T: ?Sized,
        Self: Unpin,
        Self::Item: Borrow<T>,
        P: Predicate<T>,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = std::any::type_name::<P>(),
            "constructed stream filter"
        );
        FilteredStream {
            records: self,
            predicate,
            _record: PhantomData,
        }
    }
}

impl<S: Stream> FilterStreamExt for S {}
