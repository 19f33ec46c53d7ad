// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rxutils_core::{Notification, Observable, RxError, StreamItem};
use rxutils_test_utils::{
    error_after, injected_error, test_channel, unwrap_stream, unwrap_value, SubscribeTestExt,
    TestError, TestObserver,
};

#[tokio::test]
async fn test_channel_delivers_values_errors_and_end() -> anyhow::Result<()> {
    // Arrange
    let (tx, mut stream) = test_channel::<i32>();

    // Act & Assert
    tx.next(1)?;
    assert_eq!(unwrap_value(stream.next().await), 1);

    tx.error(RxError::stream_error("closed"))?;
    assert_eq!(
        unwrap_stream(&mut stream, 100).await,
        StreamItem::Error(RxError::stream_error("closed"))
    );
    assert_eq!(stream.next().await, None);
    Ok(())
}

#[tokio::test]
async fn test_channel_drop_of_stream_detaches() -> anyhow::Result<()> {
    let (tx, stream) = test_channel::<u8>();
    assert_eq!(tx.subscriber_count(), 1);

    drop(stream);

    assert_eq!(tx.subscriber_count(), 0);
    tx.next(1)?;
    Ok(())
}

#[test]
#[should_panic(expected = "expected a value, got end of stream")]
fn test_unwrap_value_panics_on_end() {
    let _ = unwrap_value::<i32>(None);
}

#[test]
fn test_observer_records_and_clears() {
    // Arrange
    let observer = TestObserver::new();

    // Act
    Observable::from_iter(vec!['a', 'b']).subscribe(observer.clone());

    // Assert
    assert_eq!(observer.len(), 3);
    assert!(observer.is_terminated());
    assert_eq!(observer.error(), None);

    observer.clear();
    assert!(observer.is_empty());
    assert!(!observer.is_terminated());
}

#[test]
fn test_error_after_terminates_with_error_only() {
    let (observer, _subscription) = error_after(vec![1], injected_error("late")).subscribe_test();

    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Value(1),
            Notification::Error(injected_error("late")),
        ]
    );
    assert!(observer.is_terminated());
    assert!(!observer.is_completed());
    assert_eq!(
        observer
            .error()
            .and_then(|e| e.downcast_user_error::<TestError>().cloned()),
        Some(TestError::Injected("late".to_string()))
    );
}
