//! Background particle layers: twinkling stars and floating hearts.

use core::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use super::primitives::{draw_heart, draw_star_dot, sway};
use crate::{
    animations::{fade, float_up, twinkle},
    colors::{BLUE, PINK, WHITE},
    particles::{HeartField, StarField},
};

/// Draw every star of `stars` sampled `since_mount` after generation.
///
/// Stars fade over `background`; fully faded stars are skipped.
pub fn draw_stars<D>(
    display: &mut D,
    stars: &StarField,
    since_mount: Duration,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for star in stars.iter() {
        let frame = twinkle(star, since_mount);
        if frame.opacity <= 0.0 {
            continue;
        }
        // Odd ids lean blue, even ids lean white
        let tint = if star.id % 2 == 0 { WHITE } else { BLUE };
        draw_star_dot(display, Point::new(frame.x, frame.y), frame.diameter, fade(tint, background, frame.opacity));
    }
}

/// Draw the live hearts of `hearts` at monotonic time `now`.
///
/// Hearts still inside their start delay are not drawn.
pub fn draw_hearts<D>(
    display: &mut D,
    hearts: &HeartField,
    now: Duration,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for heart in hearts.iter() {
        let Some(frame) = float_up(heart, now) else {
            continue;
        };
        let top_left = Point::new(frame.x + sway(frame.turn, frame.size), frame.y);
        draw_heart(display, top_left, frame.size, fade(PINK, background, frame.opacity));
    }
}
