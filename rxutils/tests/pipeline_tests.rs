// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxutils::prelude::*;
use rxutils_test_utils::{injected_error, SubscribeTestExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_sampled_deltas_dispatched_latest() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let readings = Subject::new();
    let (observer, subscription) = readings
        .observable()
        .pair_with_previous()
        .map(|(previous, current): (i64, i64)| current - previous)
        .sample_on(interval(Duration::from_secs(1), scheduler.clone()))
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    // Act
    readings.next(10)?;
    readings.next(15)?;
    scheduler.advance_by(Duration::from_secs(1));
    readings.next(12)?;
    scheduler.advance_by(Duration::from_secs(1));
    scheduler.advance_by(Duration::from_secs(1));
    subscription.dispose();

    // Assert
    assert_eq!(observer.values(), vec![5, -3, -3]);
    assert_eq!(scheduler.pending_count(), 0);
    Ok(())
}

#[test]
fn test_polling_with_recurring_action() -> anyhow::Result<()> {
    // Arrange: a counter polled every 2s, with each poll taking 500ms
    let scheduler = VirtualTimeScheduler::new();
    let counter = Arc::new(AtomicU64::new(0));
    let polls = Subject::new();

    let (observer, _subscription) = polls.observable().pair_with_previous().subscribe_test();

    let clock = scheduler.clone();
    let source = counter.clone();
    let sink = polls.clone();
    let poller = schedule_recurring_action(&scheduler, Duration::from_secs(2), move || {
        clock.sleep(Duration::from_millis(500));
        let _ = sink.next(source.load(Ordering::SeqCst));
    });

    // Act
    counter.store(3, Ordering::SeqCst);
    scheduler.advance_to(Duration::from_secs(2));
    counter.store(7, Ordering::SeqCst);
    scheduler.advance_to(Duration::from_millis(4_500));
    poller.dispose();
    scheduler.advance_to(Duration::from_secs(20));

    // Assert: polls ran at 2s and 4.5s
    assert_eq!(observer.values(), vec![(0, 3), (3, 7)]);
    assert_eq!(scheduler.pending_count(), 0);
    Ok(())
}

#[test]
fn test_error_flows_through_whole_pipeline() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let readings = Subject::<i32>::new();
    let taps = Arc::new(Mutex::new(Vec::new()));
    let sink = taps.clone();
    let (observer, _subscription) = readings
        .observable()
        .pair_with_previous()
        .tap_notifications(move |n| sink.lock().push(n.is_terminal()))
        .log_notifications("pipeline")
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    readings.next(1)?;
    readings.error(injected_error("sensor lost"))?;
    scheduler.run();

    assert_eq!(
        observer.notifications(),
        vec![Notification::Error(injected_error("sensor lost"))]
    );
    assert_eq!(*taps.lock(), vec![false, true]);
    Ok(())
}

#[cfg(feature = "runtime-tokio")]
#[tokio::test(start_paused = true)]
async fn test_tokio_pipeline_end_to_end() -> anyhow::Result<()> {
    use futures::StreamExt;
    use rxutils_test_utils::unwrap_stream;

    // Arrange
    let scheduler = TokioScheduler::current();
    let readings = Subject::new();
    let mut result = readings
        .observable()
        .combine_with_previous()
        .sample_on(interval(Duration::from_millis(100), scheduler.clone()))
        .observe_latest_on(scheduler)
        .into_stream();

    // Act
    readings.next("idle")?;
    readings.next("busy")?;

    // Assert
    let sampled = unwrap_stream(&mut result, 1_000).await;
    assert_eq!(
        sampled,
        StreamItem::Value(WithPrevious::new(Some("idle"), "busy"))
    );

    readings.complete()?;
    assert_eq!(result.next().await, None);
    Ok(())
}
