// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RxError;
use crate::observer::Observer;
use core::fmt;

/// One materialized event of a sequence.
///
/// A sequence is `Value* (Error | Completed)?`. Materializing it turns every case, terminal or
/// not, into a plain value that can be stored, compared and replayed later with
/// [`accept`](Self::accept).
#[derive(Debug, Clone, PartialEq)]
pub enum Notification<T> {
    /// A value; the sequence continues
    Value(T),
    /// The sequence failed
    Error(RxError),
    /// The sequence ended successfully
    Completed,
}

impl<T> Notification<T> {
    /// Returns `true` for `Error` and `Completed`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Notification::Error(_) | Notification::Completed)
    }

    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Notification::Value(_))
    }

    /// Converts into the carried value, discarding terminal notifications.
    pub fn value(self) -> Option<T> {
        match self {
            Notification::Value(v) => Some(v),
            Notification::Error(_) | Notification::Completed => None,
        }
    }

    /// Maps the carried value; terminal notifications pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Notification<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Notification::Value(v) => Notification::Value(f(v)),
            Notification::Error(e) => Notification::Error(e),
            Notification::Completed => Notification::Completed,
        }
    }

    /// Applies the effect of this notification to `observer`.
    pub fn accept<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Value(v) => observer.on_next(v),
            Notification::Error(e) => observer.on_error(e),
            Notification::Completed => observer.on_completed(),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Notification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Value(v) => write!(f, "OnNext({v:?})"),
            Notification::Error(e) => write!(f, "OnError({e})"),
            Notification::Completed => write!(f, "OnCompleted()"),
        }
    }
}
