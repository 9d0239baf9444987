//! The letter page.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};

use super::primitives::{draw_panel, draw_wrapped, wrap_lines};
use crate::{
    colors::{SLATE_700, SLATE_900},
    config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH},
    content::{LETTER, LETTER_SIGNATURE, LETTER_TITLE},
    styles::{BODY_STYLE, CENTERED, LABEL_STYLE_PINK, TITLE_STYLE_PINK},
};

const PANEL: Rectangle = Rectangle::new(
    Point::new(8, HEADER_HEIGHT as i32 + 30),
    Size::new(SCREEN_WIDTH - 16, SCREEN_HEIGHT - HEADER_HEIGHT - 38),
);
const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, HEADER_HEIGHT as i32 + 22);
const SIGNATURE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 - 14);

/// Characters per body line (7px glyphs, 8px padding each side).
const CHARS_PER_LINE: usize = (SCREEN_WIDTH as usize - 32) / 7;
const LINE_HEIGHT: i32 = 15;
const PARAGRAPH_GAP: i32 = 4;

/// Draw the letter, `scroll` paragraphs in.
///
/// The whole letter does not fit one screen; the caller scrolls by whole
/// paragraphs and wraps `scroll` with [`LETTER`]'s length.
pub fn draw_letter<D>(
    display: &mut D,
    scroll: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(LETTER_TITLE, TITLE_POS, TITLE_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();
    draw_panel(display, PANEL, SLATE_900, SLATE_700);

    let bottom = PANEL.top_left.y + PANEL.size.height as i32 - 20;
    let mut y = PANEL.top_left.y + 6;
    for paragraph in LETTER.iter().skip(scroll % LETTER.len().max(1)) {
        let lines = wrap_lines::<8>(paragraph, CHARS_PER_LINE).len() as i32;
        if y + lines * LINE_HEIGHT > bottom {
            break;
        }
        draw_wrapped(display, paragraph, Point::new(SCREEN_WIDTH as i32 / 2, y), CHARS_PER_LINE, BODY_STYLE);
        y += lines * LINE_HEIGHT + PARAGRAPH_GAP;
    }

    Text::with_text_style(LETTER_SIGNATURE, SIGNATURE_POS, LABEL_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();
}
