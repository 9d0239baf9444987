//! Animation sampling for the decorative layers.
//!
//! Nothing in here owns time. Every function takes the elapsed time it
//! should render and returns where/how bright the element is at that
//! instant, so the same particle data can be drawn at any frame rate.
//!
//! - **Float up**: hearts rise linearly from below the bottom edge through
//!   110% of the screen height, spinning one full turn and fading out.
//! - **Twinkle**: stars fade in, grow to 1.5x, and fade out on a 3 s loop.
//! - **Gentle float**: the closed card bobs 10 px on a 3 s sine.
//! - **Color transitions**: text fades toward a target color over several
//!   frames (used for the reason cross-fade).
//!
//! Sine and absolute value go through `micromath` so the module stays
//! `no_std`.

use core::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};
use micromath::F32;

use crate::config::{
    HEART_START_OPACITY,
    HEART_TRAVEL,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    STAR_PEAK_SCALE,
    STAR_TWINKLE_PERIOD,
};
use crate::particles::{HeartParticle, StarParticle};

// =============================================================================
// Constants
// =============================================================================

/// Hearts start this far below the bottom edge.
const HEART_START_BELOW: f32 = 50.0;

/// Bob amplitude of the closed card in pixels.
const GENTLE_FLOAT_AMPLITUDE: f32 = 10.0;

/// Bob period of the closed card in seconds.
const GENTLE_FLOAT_PERIOD: f32 = 3.0;

/// Speed of color interpolation per frame (0.0-1.0).
/// At 0.15 a full fade takes about 15-20 frames (~300ms at 50 FPS), which
/// matches the reason transition delay.
const COLOR_LERP_SPEED: f32 = 0.15;

/// Threshold for considering colors "close enough" to snap to target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

const TAU: f32 = core::f32::consts::TAU;

// =============================================================================
// Hearts
// =============================================================================

/// Where a heart is drawn on one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeartFrame {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels. Can be negative once the heart leaves the screen.
    pub y: i32,
    /// Glyph size in pixels.
    pub size: u32,
    /// Rotation in turns (0.0-1.0).
    pub turn: f32,
    /// 0.0 (invisible) to `HEART_START_OPACITY`.
    pub opacity: f32,
}

/// Sample a heart's float animation at monotonic time `now`.
///
/// Returns `None` while the heart is still waiting out its start delay.
pub fn float_up(
    heart: &HeartParticle,
    now: Duration,
) -> Option<HeartFrame> {
    let since_born = now.checked_sub(heart.born)?.as_secs_f32();
    let t = since_born - heart.delay;
    if t < 0.0 || heart.animation_duration <= 0.0 {
        return None;
    }

    let progress = (t % heart.animation_duration) / heart.animation_duration;
    let height = SCREEN_HEIGHT as f32;
    let start_top = height + HEART_START_BELOW - heart.size;
    let y = start_top - progress * HEART_TRAVEL * height;

    Some(HeartFrame {
        x: (heart.left / 100.0 * SCREEN_WIDTH as f32) as i32,
        y: y as i32,
        size: heart.size as u32,
        turn: progress,
        opacity: HEART_START_OPACITY * (1.0 - progress),
    })
}

// =============================================================================
// Stars
// =============================================================================

/// How a star is drawn on one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StarFrame {
    /// Center in pixels.
    pub x: i32,
    pub y: i32,
    /// Diameter after scaling, at least 1 px.
    pub diameter: u32,
    /// 0.0-1.0
    pub opacity: f32,
}

/// Sample a star's twinkle `since_mount` after its field was generated.
pub fn twinkle(
    star: &StarParticle,
    since_mount: Duration,
) -> StarFrame {
    let t = since_mount.as_secs_f32() - star.delay;
    let level = if t < 0.0 {
        0.0
    } else {
        let cycle = (t % STAR_TWINKLE_PERIOD) / STAR_TWINKLE_PERIOD;
        // Triangle wave 0 -> 1 -> 0
        1.0 - F32(2.0 * cycle - 1.0).abs().0
    };
    let scale = 1.0 + (STAR_PEAK_SCALE - 1.0) * level;

    StarFrame {
        x: (star.left / 100.0 * SCREEN_WIDTH as f32) as i32,
        y: (star.top / 100.0 * SCREEN_HEIGHT as f32) as i32,
        diameter: ((star.size * scale) as u32).max(1),
        opacity: level,
    }
}

// =============================================================================
// Card Motion
// =============================================================================

/// Vertical offset of the closed card, 0 at rest and -10 at the top.
pub fn gentle_float(elapsed: Duration) -> i32 {
    let phase = elapsed.as_secs_f32() / GENTLE_FLOAT_PERIOD * TAU;
    let lift = F32(phase).sin().0 * 0.5 + 0.5;
    -(lift * GENTLE_FLOAT_AMPLITUDE) as i32
}

/// 0.0-1.0 pulse used for glows and "Tap to unlock".
pub fn pulse(
    elapsed: Duration,
    period: Duration,
) -> f32 {
    let period = period.as_secs_f32();
    if period <= 0.0 {
        return 1.0;
    }
    let phase = elapsed.as_secs_f32() / period * TAU;
    F32(phase).sin().0 * 0.5 + 0.5
}

// =============================================================================
// Color Transition State
// =============================================================================

/// Per-slot color fades that converge over multiple frames.
///
/// Each slot has a current color that moves toward its target every
/// [`update`](Self::update). Widgets read [`get_current`](Self::get_current).
pub struct ColorTransition<const N: usize> {
    current_colors: [Rgb565; N],
    target_colors: [Rgb565; N],
    transitioning: [bool; N],
}

impl<const N: usize> ColorTransition<N> {
    /// All slots start at `initial` with no transition running.
    pub const fn new(initial: Rgb565) -> Self {
        Self {
            current_colors: [initial; N],
            target_colors: [initial; N],
            transitioning: [false; N],
        }
    }

    /// Set target color for a slot. Returns `true` if a new transition started.
    pub fn set_target(
        &mut self,
        slot: usize,
        target: Rgb565,
    ) -> bool {
        if self.target_colors[slot] == target {
            false
        } else {
            self.target_colors[slot] = target;
            self.transitioning[slot] = true;
            true
        }
    }

    #[inline]
    pub const fn get_current(
        &self,
        slot: usize,
    ) -> Rgb565 {
        self.current_colors[slot]
    }

    #[inline]
    pub fn is_transitioning(
        &self,
        slot: usize,
    ) -> bool {
        self.transitioning[slot]
    }

    /// Advance every running transition by one frame.
    ///
    /// Returns a bitmask of the slots that changed color.
    pub fn update(&mut self) -> u32 {
        let mut changed: u32 = 0;

        for i in 0..N {
            if !self.transitioning[i] {
                continue;
            }
            let current = self.current_colors[i];
            let target = self.target_colors[i];

            if current == target {
                self.transitioning[i] = false;
                continue;
            }

            let new_color = lerp_rgb565(current, target, COLOR_LERP_SPEED);
            if colors_close_enough(new_color, target) {
                self.current_colors[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current_colors[i] = new_color;
            }

            changed |= 1 << i;
        }

        changed
    }
}

// =============================================================================
// Color Helpers
// =============================================================================

/// Mix `color` over `background` at `opacity` (0.0-1.0).
pub fn fade(
    color: Rgb565,
    background: Rgb565,
    opacity: f32,
) -> Rgb565 {
    lerp_rgb565(background, color, opacity.clamp(0.0, 1.0))
}

/// Linear interpolation between two Rgb565 colors in fixed point.
///
/// When the step `(delta * t_fixed) >> 8` truncates to zero for a non-zero
/// delta, a step of +-1 is forced so transitions cannot stall short of the
/// snap threshold.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let t_fixed = (t * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Manhattan distance in RGB565 space is within the snap threshold.
fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (a_r, a_g, a_b) = channels(a);
    let (b_r, b_g, b_b) = channels(b);
    let diff = (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs();
    diff <= COLOR_SNAP_THRESHOLD
}

#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, PINK, WHITE};

    fn heart(
        delay: f32,
        duration: f32,
    ) -> HeartParticle {
        HeartParticle {
            id: 0,
            left: 50.0,
            animation_duration: duration,
            delay,
            size: 20.0,
            born: Duration::from_secs(10),
        }
    }

    fn star(delay: f32) -> StarParticle {
        StarParticle {
            id: 0,
            left: 25.0,
            top: 50.0,
            size: 2.0,
            delay,
        }
    }

    // -------------------------------------------------------------------------
    // Float Up
    // -------------------------------------------------------------------------

    #[test]
    fn test_float_up_hidden_during_delay() {
        let h = heart(1.5, 6.0);
        assert!(float_up(&h, Duration::from_secs(5)).is_none(), "Before birth");
        assert!(float_up(&h, Duration::from_millis(11_000)).is_none(), "Inside the delay");
        assert!(float_up(&h, Duration::from_millis(11_600)).is_some(), "After the delay");
    }

    #[test]
    fn test_float_up_starts_below_screen() {
        let h = heart(0.0, 5.0);
        let frame = float_up(&h, h.born).unwrap();
        assert_eq!(frame.x, 160);
        assert_eq!(frame.y, (SCREEN_HEIGHT as f32 + 50.0 - 20.0) as i32);
        assert!((frame.opacity - HEART_START_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn test_float_up_rises_and_fades() {
        let h = heart(0.0, 8.0);
        let early = float_up(&h, h.born + Duration::from_secs(1)).unwrap();
        let late = float_up(&h, h.born + Duration::from_secs(7)).unwrap();
        assert!(late.y < early.y, "Heart should rise over time");
        assert!(late.opacity < early.opacity, "Heart should fade as it rises");
        assert!(late.turn > early.turn, "Heart should keep spinning");
    }

    #[test]
    fn test_float_up_loops() {
        let h = heart(0.0, 5.0);
        let first = float_up(&h, h.born + Duration::from_secs(1)).unwrap();
        let second = float_up(&h, h.born + Duration::from_secs(6)).unwrap();
        assert_eq!(first.y, second.y, "Float loops every animation_duration");
    }

    // -------------------------------------------------------------------------
    // Twinkle
    // -------------------------------------------------------------------------

    #[test]
    fn test_twinkle_invisible_before_delay() {
        let frame = twinkle(&star(2.0), Duration::from_secs(1));
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.diameter, 2);
    }

    #[test]
    fn test_twinkle_peaks_halfway() {
        let frame = twinkle(&star(0.0), Duration::from_millis(1_500));
        assert!((frame.opacity - 1.0).abs() < 1e-3, "opacity {}", frame.opacity);
        assert_eq!(frame.diameter, 3, "2px star scaled 1.5x");
        assert_eq!(frame.x, 80);
        assert_eq!(frame.y, 120);
    }

    #[test]
    fn test_twinkle_bounded() {
        for ms in (0..10_000).step_by(37) {
            let frame = twinkle(&star(0.3), Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&frame.opacity), "opacity out of range at {ms}ms");
            assert!(frame.diameter >= 1);
        }
    }

    // -------------------------------------------------------------------------
    // Card Motion
    // -------------------------------------------------------------------------

    #[test]
    fn test_gentle_float_bounded() {
        for ms in (0..6_000).step_by(50) {
            let offset = gentle_float(Duration::from_millis(ms));
            assert!((-10..=0).contains(&offset), "offset {offset} out of range at {ms}ms");
        }
    }

    #[test]
    fn test_pulse_bounded() {
        for ms in (0..4_000).step_by(25) {
            let p = pulse(Duration::from_millis(ms), Duration::from_secs(2));
            assert!((0.0..=1.0).contains(&p));
        }
        assert_eq!(pulse(Duration::from_secs(1), Duration::ZERO), 1.0);
    }

    // -------------------------------------------------------------------------
    // Colors
    // -------------------------------------------------------------------------

    #[test]
    fn test_fade_extremes() {
        assert_eq!(fade(WHITE, BLACK, 1.0), WHITE);
        assert_eq!(fade(WHITE, BLACK, 0.0), BLACK);
        assert_eq!(fade(PINK, BLACK, 2.0), PINK, "Opacity is clamped");
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let (r, g, b) = channels(lerp_rgb565(BLACK, WHITE, 0.5));
        assert!(r > 10 && r < 20);
        assert!(g > 25 && g < 40);
        assert!(b > 10 && b < 20);
    }

    #[test]
    fn test_colors_close_enough() {
        assert!(colors_close_enough(PINK, PINK));
        assert!(!colors_close_enough(BLACK, WHITE));
        assert!(colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(15, 33, 15)));
    }

    #[test]
    fn test_color_transition_converges() {
        let mut ct: ColorTransition<2> = ColorTransition::new(WHITE);
        assert!(ct.set_target(0, BLACK));
        assert!(!ct.set_target(0, BLACK), "Same target does not restart");

        let mut frames = 0;
        while ct.get_current(0) != BLACK && frames < 150 {
            ct.update();
            frames += 1;
        }
        assert_eq!(ct.get_current(0), BLACK);
        assert!(!ct.is_transitioning(0));
        assert_eq!(ct.get_current(1), WHITE, "Untouched slot keeps its color");
    }

    #[test]
    fn test_color_transition_changed_bitmask() {
        let mut ct: ColorTransition<3> = ColorTransition::new(BLACK);
        ct.set_target(0, PINK);
        ct.set_target(2, WHITE);
        let changed = ct.update();
        assert!(changed & 0b001 != 0);
        assert!(changed & 0b010 == 0);
        assert!(changed & 0b100 != 0);
    }
}
