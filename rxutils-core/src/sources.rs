// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Elementary synchronous sources.

use crate::error::RxError;
use crate::observable::Observable;
use crate::subscriber::Subscriber;
use crate::subscription::Subscription;

impl<T: Send + 'static> Observable<T> {
    /// Emits every item of `items` synchronously on subscribe, then completes.
    ///
    /// Emission stops early if the subscription is disposed from inside an observer.
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
    {
        Observable::create(move |subscriber: Subscriber<T>| {
            for item in items.clone() {
                if subscriber.is_closed() {
                    return Subscription::empty();
                }
                subscriber.next(item);
            }
            subscriber.complete();
            Subscription::empty()
        })
    }

    /// Completes immediately without emitting.
    pub fn empty() -> Self {
        Observable::create(|subscriber: Subscriber<T>| {
            subscriber.complete();
            Subscription::empty()
        })
    }

    /// Never emits and never terminates.
    pub fn never() -> Self {
        Observable::create(|_subscriber: Subscriber<T>| Subscription::empty())
    }

    /// Fails immediately with a clone of `error`.
    pub fn throw(error: RxError) -> Self {
        Observable::create(move |subscriber: Subscriber<T>| {
            subscriber.error(error.clone());
            Subscription::empty()
        })
    }
}
