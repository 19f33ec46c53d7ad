// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types carried through rxutils sequences.
//!
//! [`RxError`] is the error payload of [`Notification::Error`](crate::Notification::Error) and
//! [`StreamItem::Error`](crate::StreamItem::Error). An error terminates the sequence that carries
//! it; operators forward it verbatim and never retry.
//!
//! # Examples
//!
//! ```
//! use rxutils_core::{RxError, Result};
//!
//! fn parse_level(raw: &str) -> Result<u8> {
//!     raw.parse()
//!         .map_err(|_| RxError::stream_error(format!("not a level: {raw}")))
//! }
//!
//! assert!(parse_level("7").is_ok());
//! assert!(parse_level("x").is_err());
//! ```

use std::sync::Arc;

/// Root error type for all rxutils sequences.
#[derive(Debug, thiserror::Error)]
pub enum RxError {
    /// A source or operator failed while producing the sequence.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error raised by user code and pushed into a sequence.
    ///
    /// Shared so that every subscriber of a multicast sequence sees the same error value.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl RxError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Returns the wrapped user error, if any, downcast to `E`.
    #[must_use]
    pub fn downcast_user_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::UserError(inner) => inner.downcast_ref::<E>(),
            Self::StreamProcessingError { .. } => None,
        }
    }
}

/// Specialized Result type for rxutils operations
pub type Result<T> = std::result::Result<T, RxError>;

/// Conversion of arbitrary errors into [`RxError`].
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so sources can write
/// `subscriber.error(io_err.into_rx_error())`.
pub trait IntoRxError {
    /// Convert this error into an `RxError`
    fn into_rx_error(self) -> RxError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRxError for E {
    fn into_rx_error(self) -> RxError {
        RxError::user_error(self)
    }
}

impl Clone for RxError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::UserError(e) => Self::UserError(Arc::clone(e)),
        }
    }
}

impl PartialEq for RxError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
