// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for debugging and troubleshooting sequences.
//!
//! The [`tap_notifications`](TapNotificationsExt::tap_notifications) operator invokes a
//! side-effect function for every notification without affecting the sequence. Unlike a plain
//! value tap it also sees the error or completion that ends the sequence.
//!
//! ```
//! use rxutils_core::{Notification, Observable};
//! use rxutils_stream::TapNotificationsExt;
//! use std::sync::{Arc, Mutex};
//!
//! let observed = Arc::new(Mutex::new(Vec::new()));
//! let sink = observed.clone();
//!
//! Observable::from_iter(vec![42])
//!     .tap_notifications(move |n| sink.lock().unwrap().push(n.to_string()))
//!     .subscribe_next(|_| {});
//!
//! assert_eq!(*observed.lock().unwrap(), vec!["OnNext(42)", "OnCompleted()"]);
//! ```

use rxutils_core::{Notification, Observable, Observer, RxError, Subscriber};
use std::sync::Arc;

/// Extension trait providing the `tap_notifications` operator.
pub trait TapNotificationsExt<T> {
    /// Calls `f` with every notification, then forwards it unchanged.
    fn tap_notifications<F>(&self, f: F) -> Observable<T>
    where
        F: Fn(&Notification<T>) + Send + Sync + 'static;
}

impl<T: Send + 'static> TapNotificationsExt<T> for Observable<T> {
    fn tap_notifications<F>(&self, f: F) -> Observable<T>
    where
        F: Fn(&Notification<T>) + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Observable::create(move |downstream: Subscriber<T>| {
            source.subscribe(Tap {
                downstream,
                f: f.clone(),
            })
        })
    }
}

struct Tap<T, F> {
    downstream: Subscriber<T>,
    f: Arc<F>,
}

impl<T, F> Tap<T, F>
where
    F: Fn(&Notification<T>),
{
    fn forward(&self, notification: Notification<T>) {
        (self.f)(&notification);
        self.downstream.notify(notification);
    }
}

impl<T, F> Observer<T> for Tap<T, F>
where
    F: Fn(&Notification<T>) + Send + Sync,
{
    fn on_next(&self, value: T) {
        self.forward(Notification::Value(value));
    }

    fn on_error(&self, error: RxError) {
        self.forward(Notification::Error(error));
    }

    fn on_completed(&self) {
        self.forward(Notification::Completed);
    }
}
