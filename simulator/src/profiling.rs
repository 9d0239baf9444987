//! Frame timing and per-frame counters for the debug page.
//!
//! The `EventLog` ring buffer lives in the common crate since it has no time
//! dependency.

use std::time::{Duration, Instant};

use anniversary_common::profiling::push_padded;
use heapless::String;

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub timers_fired: u64,
    pub pending_timers: usize,

    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            timers_fired: 0,
            pending_timers: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;
        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds (exponential moving average).
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Frames per second implied by the average frame time.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us <= 0.0 {
            0.0
        } else {
            1_000_000.0 / self.frame_time_avg_us
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn hms(secs: u64) -> String<12> {
    let mut s = String::new();
    push_padded(&mut s, secs / 3600, 2);
    s.push(':').ok();
    push_padded(&mut s, (secs % 3600) / 60, 2);
    s.push(':').ok();
    push_padded(&mut s, secs % 60, 2);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hms() {
        assert_eq!(hms(0).as_str(), "00:00:00");
        assert_eq!(hms(3_725).as_str(), "01:02:05");
        assert_eq!(hms(360_000).as_str(), "100:00:00");
    }

    #[test]
    fn test_record_frame_stats() {
        let mut m = ProfilingMetrics::new();
        m.record_frame(Duration::from_millis(20), Duration::from_millis(5), Duration::from_millis(15));
        m.record_frame(Duration::from_millis(30), Duration::from_millis(25), Duration::from_millis(5));
        assert_eq!(m.total_frames, 2);
        assert_eq!(m.frame_time_min_us, 20_000);
        assert_eq!(m.frame_time_max_us, 30_000);
        assert_eq!(m.frame_time_us, 30_000);
        assert_eq!(m.frame_time_avg_us(), 21_000);
        assert!((m.fps() - 47.6).abs() < 0.1);
    }
}
