// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # rxutils
//!
//! Composable utilities for push-based event streams.
//!
//! ## Overview
//!
//! rxutils provides a small push-based observable primitive and a handful of operators built on
//! it for problems that come up in every event-driven program:
//!
//! - **[`observe_latest_on`](ObserveLatestOnExt::observe_latest_on)** re-dispatches a sequence
//!   onto a scheduler and drops whatever a slow consumer could not keep up with
//! - **[`AlternatingSubject`]** is a two-channel toggle for mutually exclusive "grab/release"
//!   state machines
//! - **[`pair_with_previous`](PairWithPreviousExt::pair_with_previous)** pairs every value with
//!   its predecessor
//! - **[`schedule_recurring_action`]** repeats an action without ever stacking runs
//! - **[`sample_on`](SampleOnExt::sample_on)** emits the latest value whenever a sampler fires
//!
//! ## Design Philosophy
//!
//! Schedulers are always passed explicitly. Production code uses
//! [`TokioScheduler`](rxutils_runtime::TokioScheduler); tests use [`VirtualTimeScheduler`] and
//! drive time by hand, so every timing-dependent behavior can be asserted deterministically.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxutils::prelude::*;
//! use std::time::Duration;
//!
//! let scheduler = VirtualTimeScheduler::new();
//! let readings = Subject::new();
//!
//! let _subscription = readings
//!     .observable()
//!     .pair_with_previous()
//!     .map(|(previous, current): (i32, i32)| current - previous)
//!     .observe_latest_on(scheduler.clone())
//!     .subscribe_next(|delta| println!("delta: {delta}"));
//!
//! readings.next(3).unwrap();
//! readings.next(5).unwrap();
//! scheduler.advance_by(Duration::ZERO); // prints "delta: 2" only
//! ```

// Re-export core types
pub use rxutils_core::{
    AlternatingSubject, AssignableSubscription, IntoRxError, Notification, Observable,
    ObservableStream, Observer, Result, RxError, StreamItem, Subject, SubjectError, Subscriber,
    Subscription,
};

// Re-export scheduling
#[cfg(feature = "runtime-tokio")]
pub use rxutils_runtime::TokioScheduler;
pub use rxutils_runtime::{
    interval, schedule_recurring_action, ScheduleRecurringExt, ScheduleRecursiveExt, Scheduler,
    VirtualTimeScheduler,
};

// Re-export operators
pub use rxutils_stream::{
    CombineWithPreviousExt, LogNotificationsExt, ObserveLatestOnExt, PairWithPreviousExt,
    SampleOnExt, TapNotificationsExt, WithPrevious,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rxutils_core::{
        AlternatingSubject, Notification, Observable, Observer, RxError, StreamItem, Subject,
        Subscription,
    };
    #[cfg(feature = "runtime-tokio")]
    pub use rxutils_runtime::TokioScheduler;
    pub use rxutils_runtime::{
        interval, schedule_recurring_action, ScheduleRecurringExt, Scheduler,
        VirtualTimeScheduler,
    };
    pub use rxutils_stream::prelude::*;
}
