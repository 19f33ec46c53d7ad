// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ord;
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use rxutils_core::Subscription;

/// Something that runs work now or after a delay, on a clock of its own.
///
/// Work never runs inline inside `schedule_after`; it always runs later, from the scheduler's own
/// execution context. Disposing the returned [`Subscription`] before the work starts cancels it.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// The scheduler's notion of the current time.
    fn now(&self) -> Self::Instant;

    /// Runs `work` once, `delay` after now.
    fn schedule_after<F>(&self, delay: Duration, work: F) -> Subscription
    where
        F: FnOnce() + Send + 'static;

    /// Runs `work` once, as soon as possible.
    fn schedule<F>(&self, work: F) -> Subscription
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_after(Duration::ZERO, work)
    }
}
