// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic scheduler driven by a virtual clock.
//!
//! Nothing runs until the test moves the clock with [`advance_by`](VirtualTimeScheduler::advance_by),
//! [`advance_to`](VirtualTimeScheduler::advance_to) or [`run`](VirtualTimeScheduler::run). Work
//! due at the same virtual time runs in the order it was scheduled, on the thread that moves the
//! clock.

use crate::scheduler::Scheduler;
use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use rxutils_core::Subscription;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

type Work = Box<dyn FnOnce() + Send + 'static>;

struct ScheduledWork {
    work: Work,
    subscription: Subscription,
}

#[derive(Default)]
struct VirtualState {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), ScheduledWork>,
}

/// Scheduler whose clock only moves when told to. Its instants are offsets from time zero.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct VirtualTimeScheduler {
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualTimeScheduler {
    /// Scheduler at virtual time zero with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every work item due up to `now + duration`, then leaves the clock there.
    pub fn advance_by(&self, duration: Duration) {
        let target = self.state.lock().now + duration;
        self.advance_to(target);
    }

    /// Runs every work item due up to `target`, then leaves the clock there.
    ///
    /// Work scheduled by running work is picked up too if it falls due before `target`. The clock
    /// never moves backwards: a `target` in the past runs what is already due and nothing else.
    pub fn advance_to(&self, target: Duration) {
        while let Some(item) = self.pop_due(Some(target)) {
            Self::execute(item);
        }

        let mut state = self.state.lock();
        if state.now < target {
            state.now = target;
        }
    }

    /// Runs queued work until the queue is empty, moving the clock to each item's due time.
    ///
    /// Work that keeps rescheduling itself keeps this running; dispose it from inside or use
    /// [`advance_to`](Self::advance_to) instead.
    pub fn run(&self) {
        while let Some(item) = self.pop_due(None) {
            Self::execute(item);
        }
    }

    /// Moves the clock forward without running anything.
    ///
    /// Called from inside a work item, this simulates an action that takes `duration` to run.
    pub fn sleep(&self, duration: Duration) {
        self.state.lock().now += duration;
    }

    /// Number of work items waiting to run.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.lock().queue.len()
    }

    fn pop_due(&self, limit: Option<Duration>) -> Option<ScheduledWork> {
        let mut state = self.state.lock();
        let (&key, _) = state.queue.iter().next()?;
        let (due, _) = key;
        if limit.is_some_and(|limit| due > limit) {
            return None;
        }
        let item = state.queue.remove(&key)?;
        if state.now < due {
            state.now = due;
        }
        Some(item)
    }

    fn execute(item: ScheduledWork) {
        if !item.subscription.is_disposed() {
            (item.work)();
        }
    }

    fn unschedule(state: &Weak<Mutex<VirtualState>>, key: (Duration, u64)) {
        if let Some(state) = state.upgrade() {
            // Dropped outside the lock: the work's captures may dispose other work
            let removed = state.lock().queue.remove(&key);
            drop(removed);
        }
    }
}

impl Scheduler for VirtualTimeScheduler {
    type Instant = Duration;

    fn now(&self) -> Duration {
        self.state.lock().now
    }

    fn schedule_after<F>(&self, delay: Duration, work: F) -> Subscription
    where
        F: FnOnce() + Send + 'static,
    {
        let subscription = Subscription::empty();
        let key = {
            let mut state = self.state.lock();
            let key = (state.now + delay, state.next_seq);
            state.next_seq += 1;
            state.queue.insert(
                key,
                ScheduledWork {
                    work: Box::new(work),
                    subscription: subscription.clone(),
                },
            );
            key
        };

        let state = Arc::downgrade(&self.state);
        subscription.add_teardown(move || Self::unschedule(&state, key));
        subscription
    }
}

impl fmt::Debug for VirtualTimeScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("VirtualTimeScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}
