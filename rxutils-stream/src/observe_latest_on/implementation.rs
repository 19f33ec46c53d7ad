// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::error;
use core::time::Duration;
use parking_lot::Mutex;
use rxutils_core::{
    AssignableSubscription, Notification, Observable, Observer, RxError, Subscriber, Subscription,
};
use rxutils_runtime::{ScheduleRecursiveExt, Scheduler};
use std::sync::Arc;

/// Extension trait providing the `observe_latest_on` operator.
pub trait ObserveLatestOnExt<T> {
    /// Re-emits the source on `scheduler`, keeping only the latest pending notification.
    ///
    /// See the [module-level documentation](crate::observe_latest_on) for details.
    fn observe_latest_on<S: Scheduler>(&self, scheduler: S) -> Observable<T>;
}

impl<T: Send + 'static> ObserveLatestOnExt<T> for Observable<T> {
    fn observe_latest_on<S: Scheduler>(&self, scheduler: S) -> Observable<T> {
        let source = self.clone();
        Observable::create(move |downstream: Subscriber<T>| {
            let dispatcher = Arc::new(Dispatcher {
                scheduler: scheduler.clone(),
                downstream,
                slot: Mutex::new(PendingSlot::new()),
                work: AssignableSubscription::new(),
                upstream: AssignableSubscription::new(),
            });

            let upstream = source.materialize().subscribe(Enqueue {
                dispatcher: dispatcher.clone(),
            });
            dispatcher.upstream.set(upstream);

            Subscription::new(move || dispatcher.dispose())
        })
    }
}

struct PendingSlot<T> {
    pending: Option<Notification<T>>,
    active: bool,
}

impl<T> PendingSlot<T> {
    const fn new() -> Self {
        Self {
            pending: None,
            active: false,
        }
    }

    /// Stores `notification`, replacing whatever was pending. Returns `true` if the caller must
    /// start a delivery loop.
    fn enqueue_and_try_start(&mut self, notification: Notification<T>) -> bool {
        self.pending = Some(notification);
        if self.active {
            false
        } else {
            self.active = true;
            true
        }
    }

    fn take_pending(&mut self) -> Option<Notification<T>> {
        let pending = self.pending.take();
        if pending.is_none() {
            self.active = false;
        }
        pending
    }

    /// Returns `true` if a newer notification arrived during the last delivery.
    fn finish_and_check_for_next(&mut self) -> bool {
        self.active = self.pending.is_some();
        self.active
    }
}

struct Dispatcher<T, S> {
    scheduler: S,
    downstream: Subscriber<T>,
    slot: Mutex<PendingSlot<T>>,
    work: AssignableSubscription,
    upstream: AssignableSubscription,
}

impl<T, S> Dispatcher<T, S>
where
    T: Send + 'static,
    S: Scheduler,
{
    fn enqueue(self: &Arc<Self>, notification: Notification<T>) {
        if !self.slot.lock().enqueue_and_try_start(notification) {
            return;
        }

        let this = self.clone();
        let work = self
            .scheduler
            .schedule_recursive(Duration::ZERO, move |recurse| {
                if this.deliver_one() {
                    recurse.schedule_now();
                }
            });
        self.work.set(work);
    }

    /// Delivers the pending notification. Returns `true` if another delivery is due.
    fn deliver_one(&self) -> bool {
        let Some(notification) = self.slot.lock().take_pending() else {
            error!("observe_latest_on: work ran with no pending notification; marking idle");
            return false;
        };

        if self.downstream.is_closed() {
            return false;
        }

        if notification.is_terminal() {
            self.downstream.notify(notification);
            self.dispose();
            return false;
        }

        self.downstream.notify(notification);
        self.slot.lock().finish_and_check_for_next()
    }

    fn dispose(&self) {
        self.upstream.dispose();
        self.work.dispose();
    }
}

struct Enqueue<T, S> {
    dispatcher: Arc<Dispatcher<T, S>>,
}

impl<T, S> Observer<Notification<T>> for Enqueue<T, S>
where
    T: Send + 'static,
    S: Scheduler,
{
    fn on_next(&self, notification: Notification<T>) {
        self.dispatcher.enqueue(notification);
    }

    fn on_error(&self, _error: RxError) {
        // Materialized sequences carry errors as values
    }

    fn on_completed(&self) {}
}
