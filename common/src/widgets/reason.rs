//! The "Why I Love You" reason card.
//!
//! The reason text fades toward the panel color while the selector is
//! transitioning. The caller owns the fade (see
//! [`ColorTransition`](crate::animations::ColorTransition)) and passes the
//! current text color, so this module stays free of timing.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::{draw_gradient_rect, draw_panel, draw_wrapped};
use crate::{
    colors::{PINK_ROSE, SLATE_300, SLATE_700, SLATE_800, WHITE},
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    content::{REASONS_BUTTON, REASONS_TITLE},
    reasons::ReasonSelector,
    styles::{BODY_FONT, CENTERED, LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, TITLE_STYLE_PINK},
};

const CARD_X: i32 = 14;
const CARD_WIDTH: u32 = SCREEN_WIDTH - 28;
const CARD_TOP: i32 = HEADER_HEIGHT as i32 + 34;
const CARD_HEIGHT: u32 = 120;
const CARD: Rectangle = Rectangle::new(Point::new(CARD_X, CARD_TOP), Size::new(CARD_WIDTH, CARD_HEIGHT));

const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, HEADER_HEIGHT as i32 + 24);
const TEXT_TOP: Point = Point::new(SCREEN_WIDTH as i32 / 2, CARD_TOP + 12);
const POSITION_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, CARD_TOP + CARD_HEIGHT as i32 - 8);

const BUTTON: Rectangle = Rectangle::new(
    Point::new(CARD_X + 40, CARD_TOP + CARD_HEIGHT as i32 + 10),
    Size::new(CARD_WIDTH - 80, 20),
);
const BUTTON_TEXT_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, CARD_TOP + CARD_HEIGHT as i32 + 24);

/// Characters per line inside the card (7px glyphs).
const CHARS_PER_LINE: usize = (CARD_WIDTH as usize - 20) / 7;

/// Panel color the reason text fades into.
pub const CARD_FILL: Rgb565 = SLATE_800;

/// Resting color of the reason text.
pub const TEXT_COLOR: Rgb565 = WHITE;

/// Draw the reason page body with the reason text in `text_color`.
pub fn draw_reason_card<D>(
    display: &mut D,
    selector: &ReasonSelector,
    text_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(REASONS_TITLE, TITLE_POS, TITLE_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();

    draw_panel(display, CARD, CARD_FILL, SLATE_700);

    if let Some(reason) = selector.current() {
        draw_wrapped(display, reason, TEXT_TOP, CHARS_PER_LINE, MonoTextStyle::new(BODY_FONT, text_color));
    }

    let (n, total) = selector.position();
    let mut caption: String<16> = String::new();
    write!(caption, "{n} of {total}").ok();
    Text::with_text_style(&caption, POSITION_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    draw_gradient_rect(display, BUTTON, PINK_ROSE);
    let button_style = if selector.is_transitioning() {
        MonoTextStyle::new(LABEL_STYLE_WHITE.font, SLATE_300)
    } else {
        LABEL_STYLE_WHITE
    };
    Text::with_text_style(REASONS_BUTTON, BUTTON_TEXT_POS, button_style, CENTERED)
        .draw(display)
        .ok();
}
