// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in observables.

use rxutils_core::{IntoRxError, Observable, RxError, Subscriber, Subscription};

/// Error type raised by test sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("injected failure: {0}")]
    Injected(String),
}

/// An [`RxError`] wrapping [`TestError::Injected`] with `message`.
pub fn injected_error(message: &str) -> RxError {
    TestError::Injected(message.to_string()).into_rx_error()
}

/// Emits `values` synchronously, then fails with a clone of `error` instead of completing.
///
/// ```rust
/// use rxutils_core::RxError;
/// use rxutils_test_utils::{error_after, SubscribeTestExt};
///
/// let (observer, _subscription) =
///     error_after(vec![1, 2], RxError::stream_error("boom")).subscribe_test();
///
/// assert_eq!(observer.values(), vec![1, 2]);
/// assert_eq!(observer.error(), Some(RxError::stream_error("boom")));
/// ```
pub fn error_after<T>(values: Vec<T>, error: RxError) -> Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    Observable::create(move |subscriber: Subscriber<T>| {
        for value in values.iter().cloned() {
            subscriber.next(value);
        }
        subscriber.error(error.clone());
        Subscription::empty()
    })
}
