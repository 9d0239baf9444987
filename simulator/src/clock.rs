//! Time sources.
//!
//! Two clocks are involved: a monotonic one that drives the scheduler and the
//! animations, and the wall clock the elapsed counter measures against. The
//! wall clock can jump (NTP, manual changes); the monotonic one cannot.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anniversary_common::EpochMillis;

/// Source of monotonic and wall-clock time.
pub trait Clock {
    /// Time since the clock was created. Never goes backwards.
    fn monotonic(&self) -> Duration;

    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn wall(&self) -> EpochMillis;
}

/// The host's clocks.
pub struct SystemClock {
    boot: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { boot: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn monotonic(&self) -> Duration { self.boot.elapsed() }

    fn wall(&self) -> EpochMillis {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => EpochMillis(since.as_millis() as i64),
            // Host clock set before 1970
            Err(err) => EpochMillis(-(err.duration().as_millis() as i64)),
        }
    }
}

/// Hand-driven clock for tests. Clones share the same time.
#[cfg(test)]
#[derive(Clone)]
pub struct ManualClock {
    mono: std::rc::Rc<std::cell::Cell<Duration>>,
    wall_ms: std::rc::Rc<std::cell::Cell<i64>>,
}

#[cfg(test)]
impl ManualClock {
    /// Monotonic time 0 at wall-clock `wall_ms`.
    pub fn new(wall_ms: i64) -> Self {
        Self {
            mono: std::rc::Rc::new(std::cell::Cell::new(Duration::ZERO)),
            wall_ms: std::rc::Rc::new(std::cell::Cell::new(wall_ms)),
        }
    }

    /// Move both clocks forward.
    pub fn advance(
        &self,
        by: Duration,
    ) {
        self.mono.set(self.mono.get() + by);
        self.wall_ms.set(self.wall_ms.get() + by.as_millis() as i64);
    }

    /// Jump the wall clock without touching monotonic time.
    pub fn set_wall(
        &self,
        wall_ms: i64,
    ) {
        self.wall_ms.set(wall_ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn monotonic(&self) -> Duration { self.mono.get() }

    fn wall(&self) -> EpochMillis { EpochMillis(self.wall_ms.get()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_epoch() {
        let clock = SystemClock::new();
        assert!(clock.wall().0 > 0);
        let a = clock.monotonic();
        let b = clock.monotonic();
        assert!(b >= a, "Monotonic clock went backwards");
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let other = clock.clone();
        clock.advance(Duration::from_millis(1_500));
        assert_eq!(other.monotonic(), Duration::from_millis(1_500));
        assert_eq!(other.wall(), EpochMillis(2_500));

        other.set_wall(0);
        assert_eq!(clock.wall(), EpochMillis(0));
        assert_eq!(clock.monotonic(), Duration::from_millis(1_500), "Wall jump leaves monotonic time alone");
    }
}
