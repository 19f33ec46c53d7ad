// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairing operators that combine each value with its predecessor.
//!
//! # Behavior
//!
//! - [`combine_with_previous`](CombineWithPreviousExt::combine_with_previous): the first value
//!   yields `WithPrevious { previous: None, current }`, later values carry `Some(previous)`.
//! - [`pair_with_previous`](PairWithPreviousExt::pair_with_previous): plain `(previous, current)`
//!   tuples, with `T::default()` standing in for the missing predecessor of the first value.
//!
//! Both keep one value of state per subscription, re-seeded on every subscribe, and pass
//! completion and errors through unchanged.
//!
//! # Examples
//!
//! ```
//! use rxutils_core::Observable;
//! use rxutils_stream::PairWithPreviousExt;
//! use std::sync::{Arc, Mutex};
//!
//! let pairs = Arc::new(Mutex::new(Vec::new()));
//! let sink = pairs.clone();
//!
//! Observable::from_iter(vec![1, 2, 3])
//!     .pair_with_previous()
//!     .subscribe_next(move |pair| sink.lock().unwrap().push(pair));
//!
//! assert_eq!(*pairs.lock().unwrap(), vec![(0, 1), (1, 2), (2, 3)]);
//! ```
//!
//! # Use Cases
//!
//! - Change detection (comparing consecutive values)
//! - Delta calculation (computing differences)
//! - State transitions (analyzing previous → current)

use crate::types::WithPrevious;
use parking_lot::Mutex;
use rxutils_core::{ForwardObserver, Observable, Subscriber};

/// Extension trait providing the `combine_with_previous` operator.
pub trait CombineWithPreviousExt<T> {
    /// Pairs each value with its previous value, if there was one.
    fn combine_with_previous(&self) -> Observable<WithPrevious<T>>;
}

impl<T> CombineWithPreviousExt<T> for Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn combine_with_previous(&self) -> Observable<WithPrevious<T>> {
        let source = self.clone();
        Observable::create(move |downstream: Subscriber<WithPrevious<T>>| {
            let last = Mutex::new(None::<T>);
            source.subscribe(ForwardObserver::new(
                downstream,
                move |downstream: &Subscriber<WithPrevious<T>>, current: T| {
                    let previous = last.lock().replace(current.clone());
                    downstream.next(WithPrevious::new(previous, current));
                },
            ))
        })
    }
}

/// Extension trait providing the `pair_with_previous` operator.
pub trait PairWithPreviousExt<T> {
    /// Emits `(previous, current)` for every value; the first value is paired with
    /// `T::default()`.
    fn pair_with_previous(&self) -> Observable<(T, T)>;
}

impl<T> PairWithPreviousExt<T> for Observable<T>
where
    T: Default + Clone + Send + Sync + 'static,
{
    fn pair_with_previous(&self) -> Observable<(T, T)> {
        self.combine_with_previous().map(WithPrevious::into_pair)
    }
}
