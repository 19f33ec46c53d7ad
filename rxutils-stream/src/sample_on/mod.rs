// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sampling operator that emits the source's latest value whenever a sampler fires.
//!
//! # Behavior
//!
//! - Source values are cached, never emitted on their own.
//! - Every sampler value emits a clone of the cached value; before the source's first value,
//!   sampler values are ignored. The cache is not cleared by sampling, so two samples without a
//!   source value in between emit the same value twice.
//! - The source is subscribed exactly once per output subscription.
//! - An error from either side ends the output with that error.
//! - Completion of either side completes the output.
//! - Notifications from the two sides are delivered one at a time; an observer may feed either
//!   side from inside its callback.
//!
//! # Examples
//!
//! ```
//! use rxutils_core::Subject;
//! use rxutils_stream::SampleOnExt;
//! use std::sync::{Arc, Mutex};
//!
//! let readings = Subject::<u32>::new();
//! let ticks = Subject::<()>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let _subscription = readings
//!     .observable()
//!     .sample_on(ticks.observable())
//!     .subscribe_next(move |v| sink.lock().unwrap().push(v));
//!
//! ticks.next(()).unwrap(); // nothing to sample yet
//! readings.next(10).unwrap();
//! readings.next(11).unwrap();
//! ticks.next(()).unwrap();
//! ticks.next(()).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![11, 11]);
//! ```
//!
//! # See Also
//!
//! - [`observe_latest_on`](crate::ObserveLatestOnExt::observe_latest_on) - Latest value, paced
//!   by a scheduler instead of a sampler

mod implementation;

pub use implementation::SampleOnExt;
