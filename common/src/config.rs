//! Card configuration constants.
//!
//! Layout values are `const` so drawing code never recomputes them. Timer
//! periods are plain milliseconds here because this crate has no clock; the
//! simulator wraps them in `Duration`s.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 22;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Elapsed Counter
// =============================================================================

/// Counter refresh period.
pub const TICK_PERIOD_MS: u64 = 1_000;

/// Seconds in one average Gregorian month (30.436875 days).
pub const SECS_PER_AVG_MONTH: u64 = 2_629_746;

/// How many months ago the counter starts.
pub const MONTHS_TOGETHER: u64 = 5;

/// Offset between "now" and the counter's start instant.
pub const START_OFFSET: Duration = Duration::from_secs(MONTHS_TOGETHER * SECS_PER_AVG_MONTH);

// =============================================================================
// Heart Particles
// =============================================================================

/// Maximum number of live hearts. The oldest is dropped first.
pub const HEART_CAPACITY: usize = 20;

/// One heart is spawned per period.
pub const HEART_SPAWN_PERIOD_MS: u64 = 1_000;

/// Horizontal position range (percent of screen width).
pub const HEART_LEFT_RANGE: (f32, f32) = (0.0, 100.0);

/// Time for one full float from bottom to top (seconds).
pub const HEART_DURATION_RANGE: (f32, f32) = (5.0, 10.0);

/// Delay before a freshly spawned heart starts moving (seconds).
pub const HEART_DELAY_RANGE: (f32, f32) = (0.0, 2.0);

/// Glyph size in pixels.
pub const HEART_SIZE_RANGE: (f32, f32) = (10.0, 30.0);

/// Opacity at the bottom of the float; fades to zero at the top.
pub const HEART_START_OPACITY: f32 = 0.4;

/// Hearts travel 110% of the screen height per loop.
pub const HEART_TRAVEL: f32 = 1.1;

// =============================================================================
// Star Particles
// =============================================================================

/// Stars generated once per mount.
pub const STAR_COUNT: usize = 50;

/// Horizontal position range (percent of screen width).
pub const STAR_LEFT_RANGE: (f32, f32) = (0.0, 100.0);

/// Vertical position range (percent of screen height).
pub const STAR_TOP_RANGE: (f32, f32) = (0.0, 100.0);

/// Star diameter in pixels.
pub const STAR_SIZE_RANGE: (f32, f32) = (1.0, 4.0);

/// Twinkle phase offset (seconds).
pub const STAR_DELAY_RANGE: (f32, f32) = (0.0, 3.0);

/// One full twinkle (fade in, grow, fade out) in seconds.
pub const STAR_TWINKLE_PERIOD: f32 = 3.0;

/// Peak scale reached halfway through a twinkle.
pub const STAR_PEAK_SCALE: f32 = 1.5;

// =============================================================================
// Reasons
// =============================================================================

/// Length of the fade between two reasons.
pub const REASON_FADE_MS: u64 = 300;

// =============================================================================
// Memories Grid
// =============================================================================

/// Tiles per row on the memories page.
pub const MEMORY_COLUMNS: u32 = 3;

/// Gap between memory tiles in pixels.
pub const MEMORY_GAP: u32 = 6;

/// Tile edge length (square tiles).
pub const MEMORY_TILE_SIZE: u32 = (SCREEN_WIDTH - MEMORY_GAP * (MEMORY_COLUMNS + 1)) / MEMORY_COLUMNS;
