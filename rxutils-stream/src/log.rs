// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Logging operators.
//!
//! Every notification is written at `info` level as `<key>: OnNext(..)`, `<key>: OnError(..)`
//! or `<key>: OnCompleted()`. With the `tracing` feature (on by default) the lines go through
//! `tracing`; without it they are printed to stdout.

use crate::logging::info;
use crate::tap::TapNotificationsExt;
use core::fmt::Debug;
use rxutils_core::{Observable, Subscription};
use std::sync::Arc;

/// Extension trait providing the `log_notifications` and `subscribe_logged` operators.
pub trait LogNotificationsExt<T> {
    /// Logs every notification prefixed with `key`, then forwards it unchanged.
    fn log_notifications(&self, key: impl Into<String>) -> Observable<T>;

    /// Subscribes only to log every notification prefixed with `key`.
    fn subscribe_logged(&self, key: impl Into<String>) -> Subscription;
}

impl<T> LogNotificationsExt<T> for Observable<T>
where
    T: Debug + Send + 'static,
{
    fn log_notifications(&self, key: impl Into<String>) -> Observable<T> {
        let key: Arc<str> = Arc::from(key.into());
        self.tap_notifications(move |notification| info!("{}: {}", key, notification))
    }

    fn subscribe_logged(&self, key: impl Into<String>) -> Subscription {
        self.log_notifications(key)
            .subscribe_with(|_| {}, |_| {}, || {})
    }
}
