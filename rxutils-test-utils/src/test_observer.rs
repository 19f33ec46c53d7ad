// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxutils_core::{Notification, Observable, Observer, RxError, Subscription};
use std::sync::Arc;

/// Observer that records every notification it receives.
///
/// Clones share the same recording, so one clone can be subscribed while another is inspected.
///
/// ```rust
/// use rxutils_core::{Notification, Observable};
/// use rxutils_test_utils::TestObserver;
///
/// let observer = TestObserver::new();
/// Observable::from_iter(vec![1, 2]).subscribe(observer.clone());
///
/// assert_eq!(observer.values(), vec![1, 2]);
/// assert!(observer.is_completed());
/// ```
pub struct TestObserver<T> {
    recorded: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> Clone for TestObserver<T> {
    fn clone(&self) -> Self {
        Self {
            recorded: self.recorded.clone(),
        }
    }
}

impl<T> Default for TestObserver<T> {
    fn default() -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> TestObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received so far, terminal ones included.
    pub fn len(&self) -> usize {
        self.recorded.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.lock().is_empty()
    }

    /// `true` once a completion was recorded.
    pub fn is_completed(&self) -> bool {
        self.recorded
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Completed))
    }

    /// `true` once an error or a completion was recorded.
    pub fn is_terminated(&self) -> bool {
        self.recorded.lock().iter().any(Notification::is_terminal)
    }

    /// Number of terminal notifications recorded; more than one is a grammar violation.
    pub fn terminal_count(&self) -> usize {
        self.recorded
            .lock()
            .iter()
            .filter(|n| n.is_terminal())
            .count()
    }

    /// The recorded error, if the sequence failed.
    pub fn error(&self) -> Option<RxError> {
        self.recorded.lock().iter().find_map(|n| match n {
            Notification::Error(e) => Some(e.clone()),
            _ => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.recorded.lock().clear();
    }
}

impl<T: Clone> TestObserver<T> {
    /// Everything recorded so far, in arrival order.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.recorded.lock().clone()
    }

    /// The recorded values, in arrival order.
    pub fn values(&self) -> Vec<T> {
        self.recorded
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Value(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T: Send> Observer<T> for TestObserver<T> {
    fn on_next(&self, value: T) {
        self.recorded.lock().push(Notification::Value(value));
    }

    fn on_error(&self, error: RxError) {
        self.recorded.lock().push(Notification::Error(error));
    }

    fn on_completed(&self) {
        self.recorded.lock().push(Notification::Completed);
    }
}

/// Subscribes a fresh [`TestObserver`] to an observable.
pub trait SubscribeTestExt<T> {
    /// Returns the recording observer and the subscription.
    fn subscribe_test(&self) -> (TestObserver<T>, Subscription);
}

impl<T: Send + 'static> SubscribeTestExt<T> for Observable<T> {
    fn subscribe_test(&self) -> (TestObserver<T>, Subscription) {
        let observer = TestObserver::new();
        let subscription = self.subscribe(observer.clone());
        (observer, subscription)
    }
}
