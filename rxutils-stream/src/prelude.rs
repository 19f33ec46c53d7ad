// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```
//! use rxutils_core::Observable;
//! use rxutils_stream::prelude::*;
//!
//! let _subscription = Observable::from_iter(vec![1, 2, 3])
//!     .pair_with_previous()
//!     .log_notifications("pairs")
//!     .subscribe_next(|_| {});
//! ```
//!
//! # Contents
//!
//! - [`CombineWithPreviousExt`] - Pair each value with its predecessor
//! - [`PairWithPreviousExt`] - Pair each value with its predecessor, defaulting the first
//! - [`ObserveLatestOnExt`] - Coalescing re-dispatch onto a scheduler
//! - [`SampleOnExt`] - Sample the latest value when a sampler fires
//! - [`TapNotificationsExt`] - Side-effect observation of every notification
//! - [`LogNotificationsExt`] - Log every notification
//! - [`WithPrevious`] - Pair of current and previous values

pub use crate::combine_with_previous::{CombineWithPreviousExt, PairWithPreviousExt};
pub use crate::log::LogNotificationsExt;
pub use crate::observe_latest_on::ObserveLatestOnExt;
pub use crate::sample_on::SampleOnExt;
pub use crate::tap::TapNotificationsExt;
pub use crate::types::WithPrevious;
