// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rxutils workspace.
//!
//! This crate provides recording observers, hot test sources and assertion helpers for testing
//! observables and operators. It is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! ## `TestObserver<T>`
//!
//! Records every notification for later inspection:
//!
//! ```rust
//! use rxutils_core::Observable;
//! use rxutils_test_utils::SubscribeTestExt;
//!
//! let (observer, _subscription) = Observable::from_iter(vec![1, 2, 3]).subscribe_test();
//! assert_eq!(observer.values(), vec![1, 2, 3]);
//! assert!(observer.is_completed());
//! ```
//!
//! ## Using Assertion Helpers
//!
//! ```rust
//! use rxutils_test_utils::assert_no_element_emitted;
//! use futures::stream;
//!
//! # async fn example() {
//! let mut empty = stream::pending::<i32>();
//! assert_no_element_emitted(&mut empty, 10).await;
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `test_observer` - `TestObserver<T>` and `subscribe_test`
//! - `error_injection` - Failing sources and the `TestError` type
//! - `helpers` - Async assertion and unwrapping functions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod test_observer;

use rxutils_core::{ObservableStream, Subject};

// Re-export commonly used test utilities
pub use error_injection::{error_after, injected_error, TestError};
pub use helpers::{assert_no_element_emitted, unwrap_stream, unwrap_value};
pub use test_observer::{SubscribeTestExt, TestObserver};

/// Creates a hot test source and a stream subscribed to it.
///
/// Values pushed into the subject arrive on the stream as `StreamItem::Value`, an error pushed
/// with `Subject::error` arrives as `StreamItem::Error`, and `Subject::complete` ends the stream.
///
/// # Example
///
/// ```rust
/// use rxutils_core::StreamItem;
/// use rxutils_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.next(42).unwrap();
///
/// assert_eq!(stream.next().await, Some(StreamItem::Value(42)));
/// # }
/// ```
pub fn test_channel<T>() -> (Subject<T>, ObservableStream<T>)
where
    T: Clone + Send + Sync + 'static,
{
    let subject = Subject::new();
    let stream = subject.observable().into_stream();
    (subject, stream)
}
