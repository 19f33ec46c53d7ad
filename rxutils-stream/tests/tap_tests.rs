// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxutils_core::{Notification, Observable, RxError, Subject};
use rxutils_stream::{LogNotificationsExt, PairWithPreviousExt, TapNotificationsExt};
use rxutils_test_utils::{error_after, SubscribeTestExt};
use std::sync::Arc;

#[test]
fn test_tap_notifications_sees_values_and_completion() {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    // Act
    let (observer, _subscription) = Observable::from_iter(vec![1, 2])
        .tap_notifications(move |n| sink.lock().push(n.to_string()))
        .subscribe_test();

    // Assert
    assert_eq!(*seen.lock(), vec!["OnNext(1)", "OnNext(2)", "OnCompleted()"]);
    assert_eq!(observer.values(), vec![1, 2]);
    assert!(observer.is_completed());
}

#[test]
fn test_tap_notifications_sees_error() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let (observer, _subscription) = error_after(vec![7], RxError::stream_error("boom"))
        .tap_notifications(move |n| sink.lock().push(n.clone()))
        .subscribe_test();

    assert_eq!(
        *seen.lock(),
        vec![
            Notification::Value(7),
            Notification::Error(RxError::stream_error("boom")),
        ]
    );
    assert_eq!(observer.notifications(), *seen.lock());
}

#[test]
fn test_tap_notifications_runs_before_downstream() -> anyhow::Result<()> {
    let order = Arc::new(Mutex::new(Vec::new()));
    let tap_sink = order.clone();
    let next_sink = order.clone();
    let subject = Subject::new();

    let _subscription = subject
        .observable()
        .tap_notifications(move |_| tap_sink.lock().push("tap"))
        .subscribe_next(move |_: i32| next_sink.lock().push("next"));

    subject.next(1)?;

    assert_eq!(*order.lock(), vec!["tap", "next"]);
    Ok(())
}

#[test]
fn test_log_notifications_forwards_unchanged() {
    let (observer, _subscription) = Observable::from_iter(vec![1, 2, 3])
        .pair_with_previous()
        .log_notifications("pairs")
        .subscribe_test();

    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Value((0, 1)),
            Notification::Value((1, 2)),
            Notification::Value((2, 3)),
            Notification::Completed,
        ]
    );
}

#[test]
fn test_subscribe_logged_keeps_source_alive_until_disposed() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::new();
    let subscription = subject.observable().subscribe_logged(String::from("gauge"));
    assert_eq!(subject.subscriber_count(), 1);

    // Act
    subject.next(42)?;
    subscription.dispose();

    // Assert
    assert_eq!(subject.subscriber_count(), 0);
    Ok(())
}

#[test]
fn test_subscribe_logged_swallows_error() -> anyhow::Result<()> {
    let subject = Subject::<u8>::new();
    let subscription = subject.observable().subscribe_logged("failing");

    subject.error(RxError::stream_error("logged, not raised"))?;

    assert!(subscription.is_disposed());
    Ok(())
}
