//! Timing constants for the simulator.
//!
//! The common crate keeps periods as plain milliseconds; the `Duration` forms
//! live here next to the frame pacing values.

use std::time::Duration;

use anniversary_common::config::{HEART_SPAWN_PERIOD_MS, REASON_FADE_MS, TICK_PERIOD_MS};

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Elapsed counter refresh.
pub const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// One new heart per period.
pub const HEART_SPAWN_PERIOD: Duration = Duration::from_millis(HEART_SPAWN_PERIOD_MS);

/// Delay between starting a reason change and committing it.
pub const REASON_FADE: Duration = Duration::from_millis(REASON_FADE_MS);

/// Period of the intro card glow and the "tap to unlock" pulse.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Length of the background track; the playhead wraps here.
pub const SONG_LENGTH: Duration = Duration::from_secs(214);
