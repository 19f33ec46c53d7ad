// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Schedulers for rxutils.
//!
//! A [`Scheduler`] decides where and when work runs. Operators that move delivery in time take
//! one as an explicit argument; there is no process-wide default.
//!
//! - [`TokioScheduler`] runs work as tasks on a tokio runtime (`runtime-tokio` feature, on by
//!   default).
//! - [`VirtualTimeScheduler`] runs work on a virtual clock that tests move by hand.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod impls;
pub mod interval;
pub mod recurring;
pub mod recursive;
pub mod scheduler;

#[cfg(feature = "runtime-tokio")]
pub use self::impls::tokio::TokioScheduler;
pub use self::impls::virtual_time::VirtualTimeScheduler;
pub use self::interval::interval;
pub use self::recurring::{schedule_recurring_action, ScheduleRecurringExt};
pub use self::recursive::{Recurse, ScheduleRecursiveExt};
pub use self::scheduler::Scheduler;
