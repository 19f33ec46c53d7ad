// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use rxutils_core::StreamItem;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _state = stream.next() => {
            panic!(
                "Unexpected element emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits at most `timeout_ms` for the next item of `stream`.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            item.expect("stream ended while an item was expected")
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: no item received within {timeout_ms} ms");
        }
    }
}

/// Extracts the value of a stream item.
///
/// # Panics
///
/// Panics on `None` or on an error item.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("expected a value, got error: {e}"),
        None => panic!("expected a value, got end of stream"),
    }
}
