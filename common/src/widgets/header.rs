//! Header bar: heart badge, card title and the music indicator.
//!
//! Positions are `const` so nothing is recomputed per frame.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};

use super::primitives::draw_heart;
use crate::{
    colors::{PINK, PURPLE_LIGHT, SLATE_500, SLATE_700, SLATE_900, WHITE},
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    content::{HEADER_BADGE, HEADER_TITLE},
    styles::{BODY_FONT, CENTERED, LABEL_FONT, LEFT_ALIGNED, LABEL_STYLE_PINK, RIGHT_ALIGNED},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

const HEART_POS: Point = Point::new(6, 5);
const HEART_SIZE: u32 = 12;

const TITLE_POS: Point = Point::new(24, 15);
const BADGE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 14);
const MUSIC_POS: Point = Point::new(SCREEN_WIDTH as i32 - 5, 14);

const DIVIDER_START: Point = Point::new(0, HEADER_HEIGHT as i32 - 1);
const DIVIDER_END: Point = Point::new(SCREEN_WIDTH as i32 - 1, HEADER_HEIGHT as i32 - 1);

const HEADER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE_900);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(SLATE_700, 1);

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(BODY_FONT, WHITE);
const MUSIC_ON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, PURPLE_LIGHT);
const MUSIC_OFF_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, SLATE_500);

/// Draw the header bar.
///
/// `playing` selects the music indicator text and color.
pub fn draw_header<D>(
    display: &mut D,
    playing: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL).draw(display).ok();
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    draw_heart(display, HEART_POS, HEART_SIZE, PINK);
    Text::with_text_style(HEADER_TITLE, TITLE_POS, TITLE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(HEADER_BADGE, BADGE_POS, LABEL_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();

    let (label, style) = if playing {
        ("[B] MUSIC ON", MUSIC_ON_STYLE)
    } else {
        ("[B] MUSIC OFF", MUSIC_OFF_STYLE)
    };
    Text::with_text_style(label, MUSIC_POS, style, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
