// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Self-rescheduling work without recursion.
//!
//! A recursive action asks for its own next run through the [`Recurse`] handle it receives. The
//! request is honoured after the action returns, by submitting a fresh work item to the
//! scheduler, so the call stack never grows however many times the action repeats.

use crate::scheduler::Scheduler;
use core::cell::Cell;
use core::time::Duration;
use parking_lot::Mutex;
use rxutils_core::{AssignableSubscription, Subscription};
use std::sync::Arc;

/// Handle passed to a recursive action to request its next run.
#[derive(Debug, Default)]
pub struct Recurse {
    next: Cell<Option<Duration>>,
}

impl Recurse {
    fn new() -> Self {
        Self::default()
    }

    /// Requests another run `delay` after the current one returns. The last request wins.
    pub fn schedule(&self, delay: Duration) {
        self.next.set(Some(delay));
    }

    /// Requests another run as soon as possible after the current one returns.
    pub fn schedule_now(&self) {
        self.schedule(Duration::ZERO);
    }
}

struct RecursiveState<S, F> {
    scheduler: S,
    action: Mutex<F>,
    current: AssignableSubscription,
}

impl<S, F> RecursiveState<S, F>
where
    S: Scheduler,
    F: FnMut(&Recurse) + Send + 'static,
{
    fn submit(state: &Arc<Self>, delay: Duration) {
        let next = state.clone();
        let work = state.scheduler.schedule_after(delay, move || Self::run(&next));
        state.current.set(work);
    }

    fn run(state: &Arc<Self>) {
        // A work item may outlive the assignment race on multi-threaded schedulers
        if state.current.is_disposed() {
            return;
        }

        let recurse = Recurse::new();
        {
            let mut action = state.action.lock();
            (*action)(&recurse);
        }

        match recurse.next.get() {
            Some(delay) if !state.current.is_disposed() => Self::submit(state, delay),
            Some(_) => trace!("recursive schedule: next run dropped, subscription disposed"),
            None => {}
        }
    }
}

/// Recursive scheduling on top of any [`Scheduler`].
pub trait ScheduleRecursiveExt: Scheduler {
    /// Runs `action` after `delay`, then again whenever the action requested it through its
    /// [`Recurse`] handle.
    ///
    /// Disposing the returned subscription cancels the pending run and stops the chain. A run
    /// already in progress finishes, but its request for a next run is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use rxutils_runtime::{ScheduleRecursiveExt, Scheduler, VirtualTimeScheduler};
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let scheduler = VirtualTimeScheduler::new();
    /// let runs = Arc::new(AtomicUsize::new(0));
    /// let counter = runs.clone();
    ///
    /// let _subscription = scheduler.schedule_recursive(Duration::ZERO, move |recurse| {
    ///     if counter.fetch_add(1, Ordering::SeqCst) < 4 {
    ///         recurse.schedule(Duration::from_secs(1));
    ///     }
    /// });
    ///
    /// scheduler.run();
    /// assert_eq!(runs.load(Ordering::SeqCst), 5);
    /// assert_eq!(scheduler.now(), Duration::from_secs(4));
    /// ```
    fn schedule_recursive<F>(&self, delay: Duration, action: F) -> Subscription
    where
        F: FnMut(&Recurse) + Send + 'static,
    {
        let state = Arc::new(RecursiveState {
            scheduler: self.clone(),
            action: Mutex::new(action),
            current: AssignableSubscription::new(),
        });
        RecursiveState::submit(&state, delay);
        state.current.clone().into()
    }
}

impl<S: Scheduler> ScheduleRecursiveExt for S {}
