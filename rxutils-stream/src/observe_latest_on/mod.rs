// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Coalescing re-dispatch onto a scheduler.
//!
//! The [`observe_latest_on`](ObserveLatestOnExt::observe_latest_on) operator re-emits a source's
//! notifications from a target [`Scheduler`](rxutils_runtime::Scheduler). When the consumer is
//! slower than the producer, notifications that arrive while a previous one is still waiting or
//! being delivered replace each other: only the most recent one is kept.
//!
//! # Behavior
//!
//! - Values, errors and completion travel through the same single pending slot, so a terminal
//!   notification also replaces a value that was still waiting.
//! - Delivery runs on the scheduler, one notification per work item. After each delivery the
//!   work item resubmits itself if something new arrived meanwhile, instead of recursing.
//! - An error or completion ends the output after it is delivered; the source subscription and
//!   any scheduled work are disposed.
//! - Disposing the output disposes the source subscription and cancels the scheduled work. A
//!   delivery racing with disposal is dropped silently.
//!
//! State machine of one subscription:
//!
//! ```text
//! idle --notification--> scheduled --work runs--> delivering --newer pending--> scheduled
//!                                                          \--nothing new-----> idle
//! ```
//!
//! # Examples
//!
//! ```
//! use rxutils_core::{Observable, Subject};
//! use rxutils_runtime::VirtualTimeScheduler;
//! use rxutils_stream::ObserveLatestOnExt;
//! use std::sync::{Arc, Mutex};
//!
//! let scheduler = VirtualTimeScheduler::new();
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let _subscription = subject
//!     .observable()
//!     .observe_latest_on(scheduler.clone())
//!     .subscribe_next(move |v| sink.lock().unwrap().push(v));
//!
//! // Three values arrive before the scheduler gets a chance to run
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.next(3).unwrap();
//! scheduler.run();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![3]);
//! ```
//!
//! # Use Cases
//!
//! - UI or dashboard updates where only the latest state matters
//! - Moving a chatty producer off a latency-sensitive thread

mod implementation;

pub use implementation::ObserveLatestOnExt;
