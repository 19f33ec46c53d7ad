// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`Subject`] broadcasts each value to all current subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values pushed after subscribing.
//! - **Terminal replay**: Subscribing after `error` or `complete` immediately delivers that
//!   terminal notification.
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Lock-free delivery**: Observers are invoked outside the internal lock, so an observer may
//!   push into the same subject or unsubscribe while being notified.
//!
//! ## Example
//!
//! ```
//! use rxutils_core::Subject;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let _subscription = subject.observable().subscribe_next(move |v| sink.lock().unwrap().push(v));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.complete().unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! assert!(subject.next(3).is_err());
//! ```

use crate::error::RxError;
use crate::notification::Notification;
use crate::observable::Observable;
use crate::subject_error::SubjectError;
use crate::subscriber::Subscriber;
use crate::subscription::Subscription;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

struct SubjectState<T> {
    terminal: Option<Notification<T>>,
    subscribers: Vec<(u64, Subscriber<T>)>,
    next_id: u64,
}

/// A hot subject that broadcasts values to all current subscribers.
///
/// See the [module documentation](self) for examples and more details.
pub struct Subject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Subject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The subscriber-facing side of the subject.
    ///
    /// Every subscription registers a new subscriber; disposing it unregisters that subscriber.
    pub fn observable(&self) -> Observable<T> {
        let state = Arc::downgrade(&self.state);
        Observable::create(move |subscriber: Subscriber<T>| Self::register(&state, subscriber))
    }

    fn register(state: &Weak<Mutex<SubjectState<T>>>, subscriber: Subscriber<T>) -> Subscription {
        let Some(shared) = state.upgrade() else {
            // Every handle to the subject is gone, nothing can ever be pushed
            subscriber.complete();
            return Subscription::empty();
        };

        let mut guard = shared.lock();
        if let Some(terminal) = guard.terminal.clone() {
            drop(guard);
            subscriber.notify(terminal);
            return Subscription::empty();
        }

        let id = guard.next_id;
        guard.next_id += 1;
        guard.subscribers.push((id, subscriber));
        drop(guard);

        let state = state.clone();
        Subscription::new(move || {
            if let Some(shared) = state.upgrade() {
                shared.lock().subscribers.retain(|(other, _)| *other != id);
            }
        })
    }

    /// Pushes a value to all current subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        let subscribers = {
            let state = self.state.lock();
            if state.terminal.is_some() {
                return Err(SubjectError::Closed);
            }
            Self::snapshot(&state.subscribers)
        };

        for subscriber in subscribers {
            subscriber.next(value.clone());
        }
        Ok(())
    }

    /// Fails every subscriber with `error` and terminates the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn error(&self, error: RxError) -> Result<(), SubjectError> {
        self.terminate(Notification::Error(error))
    }

    /// Completes every subscriber and terminates the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn complete(&self) -> Result<(), SubjectError> {
        self.terminate(Notification::Completed)
    }

    fn terminate(&self, terminal: Notification<T>) -> Result<(), SubjectError> {
        let subscribers = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                return Err(SubjectError::Closed);
            }
            state.terminal = Some(terminal.clone());
            core::mem::take(&mut state.subscribers)
        };

        for (_, subscriber) in subscribers {
            subscriber.notify(terminal.clone());
        }
        Ok(())
    }

    fn snapshot(subscribers: &[(u64, Subscriber<T>)]) -> Vec<Subscriber<T>> {
        subscribers.iter().map(|(_, s)| s.clone()).collect()
    }

    /// Returns `true` once `error` or `complete` has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns the number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
