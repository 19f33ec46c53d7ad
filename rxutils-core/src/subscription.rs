// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable subscription handles.
//!
//! A [`Subscription`] is the live relationship between a producer and a consumer. Disposing it
//! runs its teardown actions exactly once, from whichever thread gets there first, and wakes
//! every task awaiting [`Subscription::disposed`].

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::sync::Arc;

enum Teardown {
    Action(Box<dyn FnOnce() + Send + 'static>),
    Child(Subscription),
}

impl Teardown {
    fn run(self) {
        match self {
            Teardown::Action(action) => action(),
            Teardown::Child(child) => child.dispose(),
        }
    }
}

struct Inner {
    disposed: AtomicBool,
    event: Event,
    teardowns: Mutex<Vec<Teardown>>,
}

/// Cloneable, thread-safe handle whose disposal stops delivery and releases resources.
///
/// Clones share the same state. A subscription also acts as a composite: children registered
/// with [`add`](Self::add) are disposed together with it, and a child added after disposal is
/// disposed on the spot.
///
/// # Example
///
/// ```
/// use rxutils_core::Subscription;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicUsize::new(0));
/// let counter = released.clone();
/// let subscription = Subscription::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// subscription.dispose();
/// subscription.dispose();
///
/// assert!(subscription.is_disposed());
/// assert_eq!(released.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    /// A subscription with no teardown.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Inner {
                disposed: AtomicBool::new(false),
                event: Event::new(),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// A subscription that runs `teardown` when disposed.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let subscription = Self::empty();
        subscription.add_teardown(teardown);
        subscription
    }

    /// Registers another teardown action.
    pub fn add_teardown<F>(&self, teardown: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.push(Teardown::Action(Box::new(teardown)));
    }

    /// Ties `child` to this subscription's lifetime.
    pub fn add(&self, child: Subscription) {
        if Arc::ptr_eq(&self.inner, &child.inner) {
            return;
        }
        self.push(Teardown::Child(child));
    }

    fn push(&self, teardown: Teardown) {
        let mut teardowns = self.inner.teardowns.lock();
        // Checked under the lock so a concurrent dispose either sees the entry or we see its flag
        if self.inner.disposed.load(Ordering::Acquire) {
            drop(teardowns);
            teardown.run();
            return;
        }
        teardowns.push(teardown);
    }

    /// Disposes the subscription. Idempotent and safe to call from any thread.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let teardowns = core::mem::take(&mut *self.inner.teardowns.lock());
        for teardown in teardowns {
            teardown.run();
        }

        self.inner.event.notify(usize::MAX);
    }

    /// Check if the subscription has been disposed (non-blocking).
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Wait asynchronously until the subscription is disposed.
    ///
    /// If it is already disposed, this returns immediately.
    pub fn disposed(&self) -> Disposed<'_> {
        Disposed {
            subscription: self,
            listener: None,
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Future returned by [`Subscription::disposed()`].
pub struct Disposed<'a> {
    subscription: &'a Subscription,
    listener: Option<EventListener>,
}

impl Future for Disposed<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.subscription.is_disposed() {
            return Poll::Ready(());
        }

        if self.listener.is_none() {
            self.listener = Some(self.subscription.inner.event.listen());

            // dispose() may have run between the first check and listen()
            if self.subscription.is_disposed() {
                return Poll::Ready(());
            }
        }

        match self.listener.as_mut() {
            Some(listener) => Pin::new(listener).poll(cx),
            None => Poll::Pending,
        }
    }
}

struct AssignableState {
    disposed: bool,
    current: Option<Subscription>,
}

/// Holder for one replaceable inner subscription.
///
/// Assigning a new subscription forgets the previous one without disposing it, which suits a
/// chain of scheduled work items where each item has already finished when the next is
/// assigned. Once the holder is disposed, anything assigned later is disposed immediately.
#[derive(Clone)]
pub struct AssignableSubscription {
    state: Arc<Mutex<AssignableState>>,
}

impl AssignableSubscription {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AssignableState {
                disposed: false,
                current: None,
            })),
        }
    }

    /// Replaces the inner subscription.
    pub fn set(&self, subscription: Subscription) {
        let mut state = self.state.lock();
        if state.disposed {
            drop(state);
            subscription.dispose();
            return;
        }
        state.current = Some(subscription);
    }

    /// Disposes the current inner subscription and every later assignment.
    pub fn dispose(&self) {
        let current = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.current.take()
        };

        if let Some(current) = current {
            current.dispose();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl Default for AssignableSubscription {
    fn default() -> Self {
        Self::new()
    }
}

impl From<AssignableSubscription> for Subscription {
    fn from(assignable: AssignableSubscription) -> Self {
        Subscription::new(move || assignable.dispose())
    }
}
