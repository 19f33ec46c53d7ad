// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for rxutils observables.
//!
//! Each operator is provided via an extension trait on
//! [`Observable`](rxutils_core::Observable), so they chain like the built-in `map` and `filter`.
//!
//! ## Operator Categories
//!
//! ### Scheduling
//!
//! - **[`observe_latest_on`](ObserveLatestOnExt::observe_latest_on)**: Re-emits on a scheduler,
//!   coalescing notifications a slow consumer could not keep up with
//!
//! ### Combination
//!
//! - **[`sample_on`](SampleOnExt::sample_on)**: Emits the source's latest value whenever a
//!   sampler fires
//!
//! ### Transformation
//!
//! - **[`combine_with_previous`](CombineWithPreviousExt::combine_with_previous)**: Pairs each
//!   value with the previous value, if any
//! - **[`pair_with_previous`](PairWithPreviousExt::pair_with_previous)**: Pairs each value with
//!   the previous value, defaulting the first
//!
//! ### Observation
//!
//! - **[`tap_notifications`](TapNotificationsExt::tap_notifications)**: Side effect on every
//!   notification
//! - **[`log_notifications`](LogNotificationsExt::log_notifications)** and
//!   **[`subscribe_logged`](LogNotificationsExt::subscribe_logged)**: Log every notification

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod logging;

pub mod combine_with_previous;
pub mod log;
pub mod observe_latest_on;
pub mod prelude;
pub mod sample_on;
pub mod tap;
pub mod types;

pub use self::combine_with_previous::{CombineWithPreviousExt, PairWithPreviousExt};
pub use self::log::LogNotificationsExt;
pub use self::observe_latest_on::ObserveLatestOnExt;
pub use self::sample_on::SampleOnExt;
pub use self::tap::TapNotificationsExt;
pub use self::types::WithPrevious;
