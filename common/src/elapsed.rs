//! Time-together arithmetic.
//!
//! The counter shows how long it has been since a fixed start instant. Both
//! instants are wall-clock milliseconds since the Unix epoch so that a clock
//! change on the host is visible here (and clamped, see [`between`]).
//!
//! ```text
//! total = floor((now - start) / 1000)
//! days    = total / 86400
//! hours   = total / 3600 % 24
//! minutes = total / 60 % 60
//! seconds = total % 60
//! ```

use core::fmt;
use core::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Wall-clock instant in milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    /// Shift this instant back by `offset`, saturating at `i64::MIN`.
    #[must_use]
    pub fn saturating_sub(self, offset: Duration) -> Self {
        let offset_ms = i64::try_from(offset.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_sub(offset_ms))
    }

    /// Shift this instant forward by `offset`, saturating at `i64::MAX`.
    #[must_use]
    pub fn saturating_add(self, offset: Duration) -> Self {
        let offset_ms = i64::try_from(offset.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(offset_ms))
    }
}

/// The fixed instant the counter measures from.
///
/// Established once when the counter mounts and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StartInstant(EpochMillis);

impl StartInstant {
    /// Start instant `offset` before `now`.
    pub fn before(
        now: EpochMillis,
        offset: Duration,
    ) -> Self {
        Self(now.saturating_sub(offset))
    }

    /// Start instant at an explicit wall-clock time.
    pub const fn at(instant: EpochMillis) -> Self { Self(instant) }

    #[inline]
    pub const fn instant(&self) -> EpochMillis { self.0 }

    /// Elapsed duration between this start and `now`.
    #[inline]
    pub fn elapsed_at(
        &self,
        now: EpochMillis,
    ) -> ElapsedDuration {
        between(self.0, now)
    }
}

/// A span decomposed into days, hours, minutes and seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct ElapsedDuration {
    pub days: u64,
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl ElapsedDuration {
    /// All fields zero.
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Reassemble the total number of whole seconds.
    pub const fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours as u64 * SECS_PER_HOUR
            + self.minutes as u64 * SECS_PER_MINUTE
            + self.seconds as u64
    }

    /// `(label, value)` pairs in display order.
    pub const fn components(&self) -> [(&'static str, u64); 4] {
        [
            ("DAYS", self.days),
            ("HOURS", self.hours as u64),
            ("MINS", self.minutes as u64),
            ("SECS", self.seconds as u64),
        ]
    }
}

impl fmt::Display for ElapsedDuration {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}d {:02}:{:02}:{:02}", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Split a whole number of seconds into its components.
pub const fn decompose(total_secs: u64) -> ElapsedDuration {
    ElapsedDuration {
        days: total_secs / SECS_PER_DAY,
        hours: ((total_secs / SECS_PER_HOUR) % 24) as u8,
        minutes: ((total_secs / SECS_PER_MINUTE) % 60) as u8,
        seconds: (total_secs % 60) as u8,
    }
}

/// Elapsed duration from `start` to `now`, floored to whole seconds.
///
/// If `now` is earlier than `start` (the host clock was set back), every
/// field is zero.
pub fn between(
    start: EpochMillis,
    now: EpochMillis,
) -> ElapsedDuration {
    let diff_ms = now.0.saturating_sub(start.0);
    if diff_ms <= 0 {
        if diff_ms < 0 {
            log::trace!("clock is {} ms behind the start instant, clamping", -diff_ms);
        }
        return ElapsedDuration::ZERO;
    }
    decompose(diff_ms as u64 / 1000)
}
