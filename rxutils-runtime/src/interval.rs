// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recursive::ScheduleRecursiveExt;
use crate::scheduler::Scheduler;
use core::time::Duration;
use rxutils_core::{Observable, Subscriber};

/// Emits `0, 1, 2, …` on `scheduler`, one value per `period`.
///
/// Each tick is scheduled one period after the previous tick was delivered. The sequence never
/// completes; dispose the subscription to stop it.
pub fn interval<S: Scheduler>(period: Duration, scheduler: S) -> Observable<u64> {
    Observable::create(move |subscriber: Subscriber<u64>| {
        let mut tick = 0u64;
        scheduler.schedule_recursive(period, move |recurse| {
            subscriber.next(tick);
            tick += 1;
            if !subscriber.is_closed() {
                recurse.schedule(period);
            }
        })
    })
}
