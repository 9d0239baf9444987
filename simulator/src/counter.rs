//! Elapsed-time counter component.
//!
//! Mounting fixes the start instant, publishes the first value right away and
//! registers a 1 s tick. Every tick samples the wall clock and republishes.
//! Dropping the counter drops its [`TimerHandle`], which cancels the tick.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anniversary_common::{ElapsedDuration, StartInstant};

use crate::clock::Clock;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::timing::TICK_PERIOD;

pub struct TimeCounter {
    start: StartInstant,
    shown: Rc<Cell<ElapsedDuration>>,
    _tick: TimerHandle,
}

impl TimeCounter {
    /// Mount a counter whose start instant is `offset` before the clock's now.
    pub fn mount(
        scheduler: &Scheduler,
        clock: Rc<dyn Clock>,
        offset: Duration,
    ) -> Self {
        let start = StartInstant::before(clock.wall(), offset);
        Self::mount_at(scheduler, clock, start)
    }

    /// Mount a counter measuring from a known start instant.
    pub fn mount_at(
        scheduler: &Scheduler,
        clock: Rc<dyn Clock>,
        start: StartInstant,
    ) -> Self {
        let shown = Rc::new(Cell::new(start.elapsed_at(clock.wall())));
        log::info!("counter mounted, start={} ms, showing {}", start.instant().0, shown.get());

        let published = Rc::clone(&shown);
        let tick = scheduler.every(TICK_PERIOD, move |_| {
            let elapsed = start.elapsed_at(clock.wall());
            log::trace!("tick {elapsed}");
            published.set(elapsed);
        });

        Self {
            start,
            shown,
            _tick: tick,
        }
    }

    /// Value published by the latest tick.
    pub fn elapsed(&self) -> ElapsedDuration { self.shown.get() }

    pub const fn start(&self) -> StartInstant { self.start }
}

impl Drop for TimeCounter {
    fn drop(&mut self) { log::debug!("counter unmounted"); }
}

#[cfg(test)]
mod tests {
    use anniversary_common::config::START_OFFSET;
    use anniversary_common::EpochMillis;

    use super::*;
    use crate::clock::ManualClock;

    const NOW_MS: i64 = 1_760_000_000_000;

    fn span(
        d: u64,
        h: u64,
        m: u64,
        s: u64,
    ) -> Duration {
        Duration::from_secs(((d * 24 + h) * 60 + m) * 60 + s)
    }

    /// Advance the clock by one tick and run the scheduler.
    fn tick(
        clock: &ManualClock,
        sched: &Scheduler,
    ) {
        clock.advance(TICK_PERIOD);
        sched.run_until(clock.monotonic());
    }

    #[test]
    fn test_counter_end_to_end() {
        let clock = ManualClock::new(NOW_MS);
        let sched = Scheduler::new();
        let counter = TimeCounter::mount(&sched, Rc::new(clock.clone()), span(5, 3, 10, 2));

        tick(&clock, &sched);
        let first = counter.elapsed();
        assert_eq!((first.days, first.hours, first.minutes), (5, 3, 10));
        assert!(first.seconds == 2 || first.seconds == 3, "got {first}");

        let mut last = first.total_seconds();
        for _ in 0..120 {
            tick(&clock, &sched);
            let now = counter.elapsed().total_seconds();
            assert!(now >= last, "Counter went backwards: {last} -> {now}");
            last = now;
        }
        assert_eq!(last, span(5, 3, 10, 2).as_secs() + 121);
    }

    #[test]
    fn test_counter_publishes_on_mount() {
        let clock = ManualClock::new(NOW_MS);
        let sched = Scheduler::new();
        let counter = TimeCounter::mount(&sched, Rc::new(clock), START_OFFSET);
        let shown = counter.elapsed();
        assert_eq!((shown.days, shown.hours, shown.minutes, shown.seconds), (152, 4, 25, 30));
    }

    #[test]
    fn test_counter_clamps_when_clock_goes_back() {
        let clock = ManualClock::new(NOW_MS);
        let sched = Scheduler::new();
        let counter = TimeCounter::mount(&sched, Rc::new(clock.clone()), span(0, 0, 0, 10));

        clock.set_wall(NOW_MS - 60_000);
        tick(&clock, &sched);
        assert_eq!(counter.elapsed(), ElapsedDuration::ZERO);
    }

    #[test]
    fn test_start_is_fixed_at_mount() {
        let clock = ManualClock::new(NOW_MS);
        let sched = Scheduler::new();
        let counter = TimeCounter::mount(&sched, Rc::new(clock.clone()), span(1, 0, 0, 0));
        let start = counter.start();
        for _ in 0..5 {
            tick(&clock, &sched);
        }
        assert_eq!(counter.start(), start);
        assert_eq!(start.instant(), EpochMillis(NOW_MS - 86_400_000));
    }

    #[test]
    fn test_unmount_cancels_tick() {
        let clock = ManualClock::new(NOW_MS);
        let sched = Scheduler::new();
        let counter = TimeCounter::mount(&sched, Rc::new(clock.clone()), span(0, 0, 0, 0));
        assert_eq!(sched.pending(), 1);
        drop(counter);
        assert_eq!(sched.pending(), 0);
        tick(&clock, &sched);
        assert_eq!(sched.run_until(clock.monotonic() + Duration::from_secs(10)), 0);
    }
}
