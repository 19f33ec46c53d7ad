// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RxError;
use crate::notification::Notification;
use crate::observer::Observer;
use crate::subscription::Subscription;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct SubscriberInner<T> {
    observer: Box<dyn Observer<T>>,
    stopped: AtomicBool,
    subscription: Subscription,
}

/// Producer-side handle to one subscribed observer.
///
/// Enforces the sequence grammar `Value* (Error | Completed)?`: values after a terminal
/// notification or after disposal are dropped, and only the first terminal notification is
/// delivered. Delivering a terminal notification disposes the subscription, releasing the
/// upstream resources registered on it.
pub struct Subscriber<T> {
    inner: Arc<SubscriberInner<T>>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Subscriber<T> {
    pub(crate) fn new<O>(observer: O, subscription: Subscription) -> Self
    where
        O: Observer<T> + 'static,
    {
        Self {
            inner: Arc::new(SubscriberInner {
                observer: Box::new(observer),
                stopped: AtomicBool::new(false),
                subscription,
            }),
        }
    }

    /// Delivers a value unless the subscriber is closed.
    pub fn next(&self, value: T) {
        if self.is_closed() {
            return;
        }
        self.inner.observer.on_next(value);
    }

    /// Delivers the error and disposes the subscription. Only the first terminal call counts.
    pub fn error(&self, error: RxError) {
        if !self.try_stop() {
            return;
        }
        self.inner.observer.on_error(error);
        self.inner.subscription.dispose();
    }

    /// Delivers completion and disposes the subscription. Only the first terminal call counts.
    pub fn complete(&self) {
        if !self.try_stop() {
            return;
        }
        self.inner.observer.on_completed();
        self.inner.subscription.dispose();
    }

    /// Applies a materialized notification.
    pub fn notify(&self, notification: Notification<T>) {
        notification.accept(self);
    }

    /// `true` once a terminal notification was delivered or the subscription was disposed.
    pub fn is_closed(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire) || self.inner.subscription.is_disposed()
    }

    /// The downstream subscription; producers register their teardown on it.
    pub fn subscription(&self) -> &Subscription {
        &self.inner.subscription
    }

    fn try_stop(&self) -> bool {
        !self.inner.subscription.is_disposed() && !self.inner.stopped.swap(true, Ordering::AcqRel)
    }
}

impl<T> Observer<T> for Subscriber<T> {
    fn on_next(&self, value: T) {
        self.next(value);
    }

    fn on_error(&self, error: RxError) {
        self.error(error);
    }

    fn on_completed(&self) {
        self.complete();
    }
}

/// Observer that passes terminal notifications straight to a downstream [`Subscriber`] and
/// hands each value to `on_value` together with that subscriber.
///
/// This is the building block of most single-source operators.
pub struct ForwardObserver<U, F> {
    downstream: Subscriber<U>,
    on_value: F,
}

impl<U, F> ForwardObserver<U, F> {
    pub fn new(downstream: Subscriber<U>, on_value: F) -> Self {
        Self {
            downstream,
            on_value,
        }
    }
}

impl<T, U, F> Observer<T> for ForwardObserver<U, F>
where
    F: Fn(&Subscriber<U>, T) + Send + Sync,
{
    fn on_next(&self, value: T) {
        (self.on_value)(&self.downstream, value);
    }

    fn on_error(&self, error: RxError) {
        self.downstream.error(error);
    }

    fn on_completed(&self) {
        self.downstream.complete();
    }
}
