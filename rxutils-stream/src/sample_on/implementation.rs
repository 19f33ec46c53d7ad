// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::{Mutex, ReentrantMutex};
use rxutils_core::{Observable, Observer, RxError, Subscriber, Subscription};
use std::sync::Arc;

/// Extension trait providing the `sample_on` operator.
pub trait SampleOnExt<T> {
    /// Emits the latest source value each time `sampler` emits.
    ///
    /// See the [module-level documentation](crate::sample_on) for details.
    fn sample_on<U: Send + 'static>(&self, sampler: Observable<U>) -> Observable<T>;
}

impl<T> SampleOnExt<T> for Observable<T>
where
    T: Clone + Send + 'static,
{
    fn sample_on<U: Send + 'static>(&self, sampler: Observable<U>) -> Observable<T> {
        let source = self.clone();
        Observable::create(move |downstream: Subscriber<T>| {
            let state = Arc::new(SampleState {
                gate: ReentrantMutex::new(()),
                latest: Mutex::new(None),
                downstream,
            });

            let subscriptions = Subscription::empty();
            subscriptions.add(source.subscribe(LatestObserver {
                state: state.clone(),
            }));
            subscriptions.add(sampler.subscribe(SamplerObserver { state }));
            subscriptions
        })
    }
}

struct SampleState<T> {
    // Serializes delivery across both upstreams; re-entrant so observers may feed either side
    gate: ReentrantMutex<()>,
    latest: Mutex<Option<T>>,
    downstream: Subscriber<T>,
}

impl<T: Clone> SampleState<T> {
    fn store(&self, value: T) {
        let _gate = self.gate.lock();
        *self.latest.lock() = Some(value);
    }

    fn sample(&self) {
        let _gate = self.gate.lock();
        let latest = self.latest.lock().clone();
        if let Some(value) = latest {
            self.downstream.next(value);
        }
    }

    fn error(&self, error: RxError) {
        let _gate = self.gate.lock();
        self.downstream.error(error);
    }

    fn complete(&self) {
        let _gate = self.gate.lock();
        self.downstream.complete();
    }
}

struct LatestObserver<T> {
    state: Arc<SampleState<T>>,
}

impl<T: Clone + Send> Observer<T> for LatestObserver<T> {
    fn on_next(&self, value: T) {
        self.state.store(value);
    }

    fn on_error(&self, error: RxError) {
        self.state.error(error);
    }

    fn on_completed(&self) {
        self.state.complete();
    }
}

struct SamplerObserver<T> {
    state: Arc<SampleState<T>>,
}

impl<T: Clone + Send, U> Observer<U> for SamplerObserver<T> {
    fn on_next(&self, _tick: U) {
        self.state.sample();
    }

    fn on_error(&self, error: RxError) {
        self.state.error(error);
    }

    fn on_completed(&self) {
        self.state.complete();
    }
}
