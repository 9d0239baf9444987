//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, Triangle};
use embedded_graphics::text::Text;
use heapless::Vec;
use micromath::F32;

use crate::animations::fade;
use crate::colors::Gradient;
use crate::styles::CENTERED;

/// Width of one gradient band in pixels.
const GRADIENT_BAND: u32 = 4;

/// Corner radius of panels and tiles.
pub const PANEL_RADIUS: u32 = 6;

/// Fill `area` with a left-to-right two-stop gradient.
pub fn draw_gradient_rect<D>(
    display: &mut D,
    area: Rectangle,
    (from, to): Gradient,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let width = area.size.width;
    if width == 0 || area.size.height == 0 {
        return;
    }
    let mut x = 0;
    while x < width {
        let band = GRADIENT_BAND.min(width - x);
        let t = x as f32 / width as f32;
        Rectangle::new(area.top_left + Point::new(x as i32, 0), Size::new(band, area.size.height))
            .into_styled(PrimitiveStyle::with_fill(fade(to, from, t)))
            .draw(display)
            .ok();
        x += band;
    }
}

/// Rounded panel with a 1px border.
pub fn draw_panel<D>(
    display: &mut D,
    area: Rectangle,
    fill: Rgb565,
    border: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(1)
        .build();
    RoundedRectangle::with_equal_corners(area, Size::new(PANEL_RADIUS, PANEL_RADIUS))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Heart glyph whose bounding box starts at `top_left`.
///
/// Two lobes and a point; sizes below 4px collapse to a single dot.
pub fn draw_heart<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    if size < 4 {
        Rectangle::new(top_left, Size::new(size.max(1), size.max(1)))
            .into_styled(fill)
            .draw(display)
            .ok();
        return;
    }

    let s = size as i32;
    let lobe = size / 2 + 1;
    let half = s / 2;
    let quarter = s / 4;

    Circle::new(top_left, lobe).into_styled(fill).draw(display).ok();
    Circle::new(top_left + Point::new(half - 1, 0), lobe)
        .into_styled(fill)
        .draw(display)
        .ok();
    Triangle::new(
        top_left + Point::new(0, quarter + 1),
        top_left + Point::new(s, quarter + 1),
        top_left + Point::new(half, s),
    )
    .into_styled(fill)
    .draw(display)
    .ok();
}

/// Round star dot centered on `center`.
pub fn draw_star_dot<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if diameter <= 1 {
        Pixel(center, color).draw(display).ok();
        return;
    }
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Horizontal sway for a rotating glyph, in pixels.
///
/// Mono glyphs cannot rotate, so a full turn is drawn as one side-to-side
/// swing of a quarter of the glyph size.
pub fn sway(
    turn: f32,
    size: u32,
) -> i32 {
    (F32(turn * core::f32::consts::TAU).sin().0 * size as f32 / 4.0) as i32
}

/// Split `text` into at most `N` lines of `max_chars` characters.
///
/// Breaks at the last space that fits; words longer than a line are cut.
/// Lines past `N` are dropped.
pub fn wrap_lines<const N: usize>(
    text: &str,
    max_chars: usize,
) -> Vec<&str, N> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    let mut rest = text.trim();
    while !rest.is_empty() {
        let Some((limit, _)) = rest.char_indices().nth(max_chars) else {
            lines.push(rest).ok();
            break;
        };
        let split = if rest[limit..].starts_with(' ') {
            limit
        } else {
            rest[..limit].rfind(' ').unwrap_or(limit)
        };
        let (line, tail) = rest.split_at(split);
        if lines.push(line.trim_end()).is_err() {
            break;
        }
        rest = tail.trim_start();
    }
    lines
}

/// Draw wrapped, centered text starting at `top_center`. Returns the number
/// of lines drawn.
pub fn draw_wrapped<D>(
    display: &mut D,
    text: &str,
    top_center: Point,
    max_chars: usize,
    style: MonoTextStyle<'_, Rgb565>,
) -> usize
where
    D: DrawTarget<Color = Rgb565>,
{
    let line_height = style.font.character_size.height as i32 + 2;
    let baseline = style.font.baseline as i32;
    let lines = wrap_lines::<8>(text, max_chars);
    for (i, line) in lines.iter().enumerate() {
        let pos = top_center + Point::new(0, baseline + i as i32 * line_height);
        Text::with_text_style(line, pos, style, CENTERED).draw(display).ok();
    }
    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_at_spaces() {
        let lines = wrap_lines::<4>("the quick brown fox", 10);
        assert_eq!(lines.as_slice(), &["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = wrap_lines::<4>("  hello  ", 10);
        assert_eq!(lines.as_slice(), &["hello"]);
    }

    #[test]
    fn test_wrap_cuts_long_words() {
        let lines = wrap_lines::<4>("abcdefghij", 4);
        assert_eq!(lines.as_slice(), &["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_exact_fit_before_space() {
        let lines = wrap_lines::<4>("abcd efgh", 4);
        assert_eq!(lines.as_slice(), &["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_drops_overflow_lines() {
        let lines = wrap_lines::<2>("a b c d e f", 1);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert!(wrap_lines::<2>("anything", 0).is_empty());
    }

    #[test]
    fn test_sway_is_zero_at_rest() {
        assert_eq!(sway(0.0, 20), 0);
        let peak = sway(0.25, 20);
        assert!((4..=5).contains(&peak), "quarter turn should swing right, got {peak}");
    }
}
