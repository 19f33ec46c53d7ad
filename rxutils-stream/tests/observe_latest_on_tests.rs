// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxutils_core::{Notification, Observable, RxError, Subject};
use rxutils_runtime::VirtualTimeScheduler;
use rxutils_stream::ObserveLatestOnExt;
use rxutils_test_utils::{injected_error, SubscribeTestExt};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_observe_latest_on_delivers_only_latest_of_a_burst() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    // Act
    subject.next("a")?;
    subject.next("b")?;
    subject.next("c")?;
    assert!(observer.is_empty());
    scheduler.run();

    // Assert
    assert_eq!(observer.values(), vec!["c"]);
    assert_eq!(scheduler.pending_count(), 0);
    Ok(())
}

#[test]
fn test_observe_latest_on_delivers_each_value_when_consumer_keeps_up() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    for value in 1..=3 {
        subject.next(value)?;
        scheduler.run();
    }

    assert_eq!(observer.values(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_observe_latest_on_separate_bursts() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    subject.next(1)?;
    scheduler.run();
    subject.next(2)?;
    subject.next(3)?;
    scheduler.run();

    assert_eq!(observer.values(), vec![1, 3]);
    Ok(())
}

#[test]
fn test_observe_latest_on_error_replaces_pending_values() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    // Act
    subject.next(1)?;
    subject.next(2)?;
    subject.error(injected_error("broken pipe"))?;
    scheduler.run();

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![Notification::Error(injected_error("broken pipe"))]
    );
    Ok(())
}

#[test]
fn test_observe_latest_on_completion_replaces_pending_value() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    subject.next(1)?;
    subject.complete()?;
    scheduler.run();

    assert_eq!(observer.notifications(), vec![Notification::Completed]);
    Ok(())
}

#[test]
fn test_observe_latest_on_error_after_delivered_value() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, _subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    subject.next(1)?;
    scheduler.run();
    subject.error(RxError::stream_error("late failure"))?;
    scheduler.run();

    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Value(1),
            Notification::Error(RxError::stream_error("late failure")),
        ]
    );
    assert_eq!(observer.terminal_count(), 1);
    Ok(())
}

#[test]
fn test_observe_latest_on_does_not_deliver_synchronously() {
    let scheduler = VirtualTimeScheduler::new();
    let (observer, _subscription) = Observable::from_iter(vec![1, 2, 3])
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    assert!(observer.is_empty());
    assert_eq!(scheduler.pending_count(), 1);

    scheduler.run();

    assert_eq!(observer.notifications(), vec![Notification::Completed]);
}

#[test]
fn test_observe_latest_on_dispose_before_work_runs_delivers_nothing() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();
    subject.next(1)?;
    subject.next(2)?;

    // Act
    subscription.dispose();
    scheduler.run();

    // Assert
    assert!(observer.is_empty());
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(subject.subscriber_count(), 0);
    Ok(())
}

#[test]
fn test_observe_latest_on_dispose_between_deliveries() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let (observer, subscription) = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_test();

    subject.next(1)?;
    scheduler.run();
    subscription.dispose();
    let _ = subject.next(2);
    scheduler.run();

    assert_eq!(observer.values(), vec![1]);
    Ok(())
}

#[test]
fn test_observe_latest_on_value_pushed_during_delivery_is_delivered_next() -> anyhow::Result<()> {
    // Arrange: the consumer feeds the source while handling a value
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let received = Arc::new(Mutex::new(Vec::new()));

    let feedback = subject.clone();
    let sink = received.clone();
    let _subscription = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_next(move |value: i32| {
            sink.lock().push(value);
            if value < 3 {
                let _ = feedback.next(value + 1);
            }
        });

    // Act
    subject.next(1)?;
    scheduler.run();

    // Assert
    assert_eq!(*received.lock(), vec![1, 2, 3]);
    assert_eq!(scheduler.pending_count(), 0);
    Ok(())
}

#[test]
fn test_observe_latest_on_runs_at_scheduler_time() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    scheduler.advance_by(Duration::from_secs(3));
    let subject = Subject::new();
    let clock = scheduler.clone();
    let delivered_at = Arc::new(Mutex::new(Vec::new()));
    let sink = delivered_at.clone();
    let _subscription = subject
        .observable()
        .observe_latest_on(scheduler.clone())
        .subscribe_next(move |_: u8| {
            use rxutils_runtime::Scheduler;
            sink.lock().push(clock.now());
        });

    subject.next(1)?;
    scheduler.advance_by(Duration::ZERO);

    assert_eq!(*delivered_at.lock(), vec![Duration::from_secs(3)]);
    Ok(())
}

#[test]
fn test_observe_latest_on_independent_subscriptions() -> anyhow::Result<()> {
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::new();
    let latest = subject.observable().observe_latest_on(scheduler.clone());

    let (first, _first_subscription) = latest.subscribe_test();
    subject.next(1)?;
    scheduler.run();
    let (second, _second_subscription) = latest.subscribe_test();
    subject.next(2)?;
    scheduler.run();

    assert_eq!(first.values(), vec![1, 2]);
    assert_eq!(second.values(), vec![2]);
    Ok(())
}

#[cfg(feature = "runtime-tokio")]
mod tokio_scheduler {
    use super::*;
    use futures::StreamExt;
    use rxutils_core::StreamItem;
    use rxutils_runtime::TokioScheduler;
    use rxutils_test_utils::{assert_no_element_emitted, unwrap_stream};

    #[tokio::test]
    async fn test_observe_latest_on_tokio_coalesces_synchronous_burst() -> anyhow::Result<()> {
        // Arrange
        let subject = Subject::new();
        let mut result = subject
            .observable()
            .observe_latest_on(TokioScheduler::current())
            .into_stream();

        // Act: no await between pushes, so the spawned delivery has not run yet
        subject.next(1)?;
        subject.next(2)?;
        subject.next(3)?;

        // Assert
        assert_eq!(unwrap_stream(&mut result, 500).await, StreamItem::Value(3));
        assert_no_element_emitted(&mut result, 50).await;

        subject.complete()?;
        assert_eq!(result.next().await, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_observe_latest_on_tokio_forwards_error() -> anyhow::Result<()> {
        let subject = Subject::<i32>::new();
        let mut result = subject
            .observable()
            .observe_latest_on(TokioScheduler::current())
            .into_stream();

        subject.next(1)?;
        subject.error(RxError::stream_error("Error"))?;

        assert_eq!(
            unwrap_stream(&mut result, 500).await,
            StreamItem::Error(RxError::stream_error("Error"))
        );
        assert_eq!(result.next().await, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_observe_latest_on_tokio_cross_thread_producer() -> anyhow::Result<()> {
        use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

        for _ in 0..20 {
            // Arrange: a slow consumer on the runtime, a fast producer on its own thread
            let subject = Subject::<u64>::new();
            let delivered = Arc::new(Mutex::new(Vec::new()));
            let delivering = Arc::new(AtomicBool::new(false));
            let overlaps = Arc::new(AtomicUsize::new(0));
            let completed = Arc::new(AtomicBool::new(false));

            let (sink, in_next, overlap_count) =
                (delivered.clone(), delivering.clone(), overlaps.clone());
            let (in_complete, complete_overlap_count, done) =
                (delivering.clone(), overlaps.clone(), completed.clone());
            let _subscription = subject
                .observable()
                .observe_latest_on(TokioScheduler::current())
                .subscribe_with(
                    move |value| {
                        if in_next.swap(true, Ordering::SeqCst) {
                            overlap_count.fetch_add(1, Ordering::SeqCst);
                        }
                        sink.lock().push(value);
                        std::thread::sleep(Duration::from_micros(50));
                        in_next.store(false, Ordering::SeqCst);
                    },
                    |e| panic!("unexpected error: {e}"),
                    move || {
                        if in_complete.load(Ordering::SeqCst) {
                            complete_overlap_count.fetch_add(1, Ordering::SeqCst);
                        }
                        done.store(true, Ordering::SeqCst);
                    },
                );

            // Act
            let producer = {
                let subject = subject.clone();
                std::thread::spawn(move || -> Result<(), rxutils_core::SubjectError> {
                    for value in 1..=2_000 {
                        subject.next(value)?;
                    }
                    subject.complete()
                })
            };
            tokio::time::timeout(Duration::from_secs(10), async {
                while !completed.load(Ordering::SeqCst) {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            })
            .await?;
            producer
                .join()
                .map_err(|_| anyhow::anyhow!("producer thread panicked"))??;

            // Assert
            assert_eq!(overlaps.load(Ordering::SeqCst), 0);
            let delivered = delivered.lock();
            assert!(
                delivered.windows(2).all(|pair| pair[0] < pair[1]),
                "delivery out of order: {delivered:?}"
            );
            assert!(delivered.len() <= 2_000);
        }
        Ok(())
    }
}
