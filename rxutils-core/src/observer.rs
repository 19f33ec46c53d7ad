// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RxError;
use std::sync::Arc;

/// Receiver of a push-based sequence.
///
/// Producers call these methods serially for a given subscription, but consecutive calls may
/// come from different threads, hence the `Send + Sync` bound and `&self` receivers. Observers
/// that keep state use interior mutability.
pub trait Observer<T>: Send + Sync {
    /// Called for every value.
    fn on_next(&self, value: T);

    /// Called at most once when the sequence fails; nothing follows it.
    fn on_error(&self, error: RxError);

    /// Called at most once when the sequence ends; nothing follows it.
    fn on_completed(&self);
}

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: RxError) {
        (**self).on_error(error);
    }

    fn on_completed(&self) {
        (**self).on_completed();
    }
}

/// Observer assembled from three closures.
pub struct FnObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_completed: C,
}

impl<N, E, C> FnObserver<N, E, C> {
    pub fn new(on_next: N, on_error: E, on_completed: C) -> Self {
        Self {
            on_next,
            on_error,
            on_completed,
        }
    }
}

impl<T, N, E, C> Observer<T> for FnObserver<N, E, C>
where
    N: Fn(T) + Send + Sync,
    E: Fn(RxError) + Send + Sync,
    C: Fn() + Send + Sync,
{
    fn on_next(&self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&self, error: RxError) {
        (self.on_error)(error);
    }

    fn on_completed(&self) {
        (self.on_completed)();
    }
}
