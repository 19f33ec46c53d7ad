// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cold, push-based observable sequences.
//!
//! An [`Observable`] is a recipe: nothing happens until [`subscribe`](Observable::subscribe) is
//! called, and every subscription runs the recipe afresh with its own state.
//!
//! ## Example
//!
//! ```
//! use rxutils_core::Observable;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! Observable::from_iter(vec![1, 2, 3, 4])
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * 10)
//!     .subscribe_next(move |v| sink.lock().unwrap().push(v));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![20, 40]);
//! ```

use crate::error::RxError;
use crate::notification::Notification;
use crate::observer::{FnObserver, Observer};
use crate::subscriber::{ForwardObserver, Subscriber};
use crate::subscription::Subscription;
use parking_lot::Mutex;
use std::sync::Arc;

type SubscribeFn<T> = dyn Fn(Subscriber<T>) -> Subscription + Send + Sync;

/// A push-based sequence of `T` that may complete, fail, or run forever.
pub struct Observable<T> {
    subscribe_fn: Arc<SubscribeFn<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe_fn: self.subscribe_fn.clone(),
        }
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Builds an observable from a subscribe function.
    ///
    /// The function receives the [`Subscriber`] of one subscription and returns the teardown of
    /// whatever it started. The teardown runs when that subscription is disposed or terminates.
    pub fn create<F>(subscribe_fn: F) -> Self
    where
        F: Fn(Subscriber<T>) -> Subscription + Send + Sync + 'static,
    {
        Self {
            subscribe_fn: Arc::new(subscribe_fn),
        }
    }

    /// Attaches `observer` and returns the handle whose disposal stops delivery.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T> + 'static,
    {
        let subscription = Subscription::empty();
        let subscriber = Subscriber::new(observer, subscription.clone());
        let upstream = (self.subscribe_fn)(subscriber);
        subscription.add(upstream);
        subscription
    }

    /// Subscribes with one closure per notification kind.
    pub fn subscribe_with<N, E, C>(&self, on_next: N, on_error: E, on_completed: C) -> Subscription
    where
        N: Fn(T) + Send + Sync + 'static,
        E: Fn(RxError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.subscribe(FnObserver::new(on_next, on_error, on_completed))
    }

    /// Subscribes to values only. An error reaching this subscriber is logged, not raised.
    pub fn subscribe_next<N>(&self, on_next: N) -> Subscription
    where
        N: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe_with(
            on_next,
            |error| error!("unhandled error in subscription: {}", error),
            || {},
        )
    }

    /// Projects every value through `f`.
    pub fn map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Observable::create(move |downstream: Subscriber<U>| {
            let f = f.clone();
            source.subscribe(ForwardObserver::new(
                downstream,
                move |downstream: &Subscriber<U>, value: T| downstream.next(f(value)),
            ))
        })
    }

    /// Forwards the values for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = self.clone();
        let predicate = Arc::new(predicate);
        Observable::create(move |downstream: Subscriber<T>| {
            let predicate = predicate.clone();
            source.subscribe(ForwardObserver::new(
                downstream,
                move |downstream: &Subscriber<T>, value: T| {
                    if predicate(&value) {
                        downstream.next(value);
                    }
                },
            ))
        })
    }

    /// Running accumulation: emits `acc = f(acc, value)` after every value.
    ///
    /// The accumulator starts from a clone of `seed` for every subscription.
    pub fn scan<A, F>(&self, seed: A, f: F) -> Observable<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(&A, T) -> A + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Observable::create(move |downstream: Subscriber<A>| {
            let f = f.clone();
            let acc = Mutex::new(seed.clone());
            source.subscribe(ForwardObserver::new(
                downstream,
                move |downstream: &Subscriber<A>, value: T| {
                    let next = {
                        let mut acc = acc.lock();
                        let next = f(&acc, value);
                        *acc = next.clone();
                        next
                    };
                    downstream.next(next);
                },
            ))
        })
    }

    /// Turns every notification, terminal ones included, into a value.
    ///
    /// The materialized sequence completes right after carrying the source's terminal
    /// notification.
    pub fn materialize(&self) -> Observable<Notification<T>> {
        let source = self.clone();
        Observable::create(move |downstream: Subscriber<Notification<T>>| {
            source.subscribe(Materialize { downstream })
        })
    }
}

struct Materialize<T> {
    downstream: Subscriber<Notification<T>>,
}

impl<T> Observer<T> for Materialize<T> {
    fn on_next(&self, value: T) {
        self.downstream.next(Notification::Value(value));
    }

    fn on_error(&self, error: RxError) {
        self.downstream.next(Notification::Error(error));
        self.downstream.complete();
    }

    fn on_completed(&self) {
        self.downstream.next(Notification::Completed);
        self.downstream.complete();
    }
}
