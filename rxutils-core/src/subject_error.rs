// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations (lifecycle and broadcasting).
///
/// These are distinct from [`RxError`](crate::RxError): they describe misuse of the producer
/// side of a subject, never something a subscriber observes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has already completed or errored and accepts nothing more.
    #[error("Subject is closed")]
    Closed,
}
