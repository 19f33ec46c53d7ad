// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::Scheduler;
use core::time::Duration;
use rxutils_core::Subscription;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::time::Instant;

/// Scheduler that runs every work item as a task on a tokio runtime.
///
/// Each task sleeps with `tokio::time`, so tests running with paused time control it, and races
/// the sleep against the disposal of the work item's subscription.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Scheduler bound to the runtime of the calling context.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime, like [`Handle::current`].
    #[must_use]
    pub fn current() -> Self {
        Self::from_handle(Handle::current())
    }

    /// Scheduler bound to the runtime of the calling context, if there is one.
    ///
    /// # Errors
    ///
    /// Returns the tokio error when called outside of a runtime.
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::from_handle)
    }

    /// Scheduler bound to the runtime behind `handle`.
    #[must_use]
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule_after<F>(&self, delay: Duration, work: F) -> Subscription
    where
        F: FnOnce() + Send + 'static,
    {
        let subscription = Subscription::empty();
        let cancel = subscription.clone();

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                () = cancel.disposed() => {
                    trace!("tokio scheduler: work cancelled before it ran");
                }
                () = tokio::time::sleep(delay) => {
                    if !cancel.is_disposed() {
                        work();
                    }
                }
            }
        });

        subscription
    }
}
