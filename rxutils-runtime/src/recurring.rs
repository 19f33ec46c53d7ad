// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recursive::ScheduleRecursiveExt;
use crate::scheduler::Scheduler;
use core::time::Duration;
use rxutils_core::Subscription;

/// Runs `action` every `interval`, measured from the end of the previous run.
///
/// The first run happens `interval` after the call. Each following run is scheduled `interval`
/// after the scheduler's `now()` at the moment the previous run returned, so an action that takes
/// longer than `interval` is never invoked back-to-back to catch up.
///
/// Disposing the returned subscription cancels the pending run and stops the rescheduling.
///
/// # Example
///
/// ```
/// use rxutils_runtime::{schedule_recurring_action, VirtualTimeScheduler};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = runs.clone();
///
/// let subscription = schedule_recurring_action(&scheduler, Duration::from_secs(5), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// scheduler.advance_by(Duration::from_secs(15));
/// assert_eq!(runs.load(Ordering::SeqCst), 3);
///
/// subscription.dispose();
/// scheduler.advance_by(Duration::from_secs(15));
/// assert_eq!(runs.load(Ordering::SeqCst), 3);
/// ```
pub fn schedule_recurring_action<S, F>(
    scheduler: &S,
    interval: Duration,
    mut action: F,
) -> Subscription
where
    S: Scheduler,
    F: FnMut() + Send + 'static,
{
    scheduler.schedule_recursive(interval, move |recurse| {
        action();
        recurse.schedule(interval);
    })
}

/// Method form of [`schedule_recurring_action`].
pub trait ScheduleRecurringExt: Scheduler {
    fn schedule_recurring_action<F>(&self, interval: Duration, action: F) -> Subscription
    where
        F: FnMut() + Send + 'static,
    {
        schedule_recurring_action(self, interval, action)
    }
}

impl<S: Scheduler> ScheduleRecurringExt for S {}
