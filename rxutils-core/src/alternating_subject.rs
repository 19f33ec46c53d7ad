// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-channel toggle for mutually exclusive "grab/release" state machines.
//!
//! An [`AlternatingSubject`] holds one bit of state: either the *first* or the *second* side is
//! active. Triggering the inactive side flips the bit and emits one edge on that side's channel;
//! triggering the side that is already active does nothing. Observers of both channels therefore
//! see strictly alternating edges, starting with `first`.
//!
//! ## Example
//!
//! ```
//! use rxutils_core::AlternatingSubject;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let toggle = AlternatingSubject::new();
//! let grabs = Arc::new(AtomicUsize::new(0));
//! let counter = grabs.clone();
//! let _subscription = toggle.first().subscribe_next(move |()| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! toggle.trigger_first();
//! toggle.trigger_first(); // already active
//! toggle.trigger_second();
//! toggle.trigger_first();
//!
//! assert_eq!(grabs.load(Ordering::SeqCst), 2);
//! ```

use crate::observable::Observable;
use crate::subject::Subject;
use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    First,
    Second,
}

impl Edge {
    /// Parity of the transition counter after an edge of this kind.
    const fn parity(self) -> u64 {
        match self {
            Edge::First => 1,
            Edge::Second => 0,
        }
    }
}

struct EmitQueue {
    emitting: bool,
    // Set by `dispose` while another caller drains; that caller completes the channels
    completion_pending: bool,
    next_expected: u64,
    ready: BTreeMap<u64, Edge>,
}

struct Inner {
    // Number of accepted transitions; odd means first is active
    transitions: AtomicU64,
    first: Subject<()>,
    second: Subject<()>,
    queue: Mutex<EmitQueue>,
    disposed: AtomicBool,
}

/// Toggle between two mutually exclusive states, each with its own edge channel.
///
/// Transitions are single compare-and-swap operations on a transition counter, so concurrent
/// triggers never both succeed for the same side. Each accepted transition gets a sequence
/// number and edges are delivered in that order by whichever thread currently drains the emit
/// queue; a trigger issued from inside an observer is queued and delivered after the current
/// edge instead of recursing.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct AlternatingSubject {
    inner: Arc<Inner>,
}

impl AlternatingSubject {
    /// Creates a toggle in the second-active state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                transitions: AtomicU64::new(0),
                first: Subject::new(),
                second: Subject::new(),
                queue: Mutex::new(EmitQueue {
                    emitting: false,
                    completion_pending: false,
                    next_expected: 1,
                    ready: BTreeMap::new(),
                }),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Edges emitted when the first side becomes active.
    pub fn first(&self) -> Observable<()> {
        self.inner.first.observable()
    }

    /// Edges emitted when the second side becomes active.
    pub fn second(&self) -> Observable<()> {
        self.inner.second.observable()
    }

    /// Activates the first side; a no-op if it is already active.
    pub fn trigger_first(&self) {
        self.trigger(Edge::First);
    }

    /// Activates the second side; a no-op if it is already active.
    pub fn trigger_second(&self) {
        self.trigger(Edge::Second);
    }

    fn trigger(&self, edge: Edge) {
        let mut current = self.inner.transitions.load(Ordering::Acquire);
        loop {
            if current % 2 == edge.parity() {
                return;
            }
            if self.is_disposed() {
                trace!("alternating subject: {:?} trigger ignored after dispose", edge);
                return;
            }
            match self.inner.transitions.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        self.enqueue(current + 1, edge);
    }

    fn enqueue(&self, sequence: u64, edge: Edge) {
        let mut queue = self.inner.queue.lock();
        queue.ready.insert(sequence, edge);
        if queue.emitting {
            return;
        }
        queue.emitting = true;

        loop {
            if queue.completion_pending {
                // The emit role is kept: nothing is delivered after completion
                drop(queue);
                self.complete_channels();
                return;
            }
            let expected = queue.next_expected;
            let Some(edge) = queue.ready.remove(&expected) else {
                // The owner of `expected` has not queued it yet and will drain on arrival
                queue.emitting = false;
                return;
            };
            queue.next_expected += 1;
            drop(queue);

            self.emit(edge);

            queue = self.inner.queue.lock();
        }
    }

    fn emit(&self, edge: Edge) {
        let channel = match edge {
            Edge::First => &self.inner.first,
            Edge::Second => &self.inner.second,
        };
        if channel.next(()).is_err() {
            trace!("alternating subject: {:?} edge dropped, channel closed", edge);
        }
    }

    /// Completes both channels. Later calls and later triggers do nothing.
    ///
    /// Completion never overlaps an edge delivery: if another caller is delivering an edge, that
    /// caller completes the channels once the edge returns, and queued edges are dropped.
    pub fn dispose(&self) {
        {
            let mut queue = self.inner.queue.lock();
            if self.inner.disposed.swap(true, Ordering::AcqRel) {
                return;
            }
            if queue.emitting {
                queue.completion_pending = true;
                return;
            }
            // Held for good, so edges queued by racing triggers are never delivered
            queue.emitting = true;
        }

        self.complete_channels();
    }

    fn complete_channels(&self) {
        let _ = self.inner.first.complete();
        let _ = self.inner.second.complete();
    }

    /// Returns `true` while the first side is active.
    #[must_use]
    pub fn is_first_active(&self) -> bool {
        self.inner.transitions.load(Ordering::Acquire) % 2 == 1
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }
}

impl Default for AlternatingSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AlternatingSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlternatingSubject")
            .field("first_active", &self.is_first_active())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
