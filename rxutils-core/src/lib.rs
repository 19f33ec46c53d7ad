// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based observable primitive for rxutils.
//!
//! This crate holds the small event model every rxutils operator is built on: [`Observer`],
//! [`Observable`], [`Subscription`], the hot [`Subject`] and the two-channel
//! [`AlternatingSubject`] toggle, together with the [`RxError`] type that terminates a
//! sequence and the [`Notification`] sum type that materializes one.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod alternating_subject;
pub mod error;
pub mod into_stream;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod sources;
pub mod stream_item;
pub mod subject;
pub mod subject_error;
pub mod subscriber;
pub mod subscription;

pub use self::alternating_subject::AlternatingSubject;
pub use self::error::{IntoRxError, Result, RxError};
pub use self::into_stream::ObservableStream;
pub use self::notification::Notification;
pub use self::observable::Observable;
pub use self::observer::{FnObserver, Observer};
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::subscriber::{ForwardObserver, Subscriber};
pub use self::subscription::{AssignableSubscription, Disposed, Subscription};
