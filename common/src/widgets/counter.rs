//! Time-together counter tiles.
//!
//! ```text
//! ┌──────┐ ┌──────┐ ┌──────┐ ┌──────┐
//! │ 152  │ │  04  │ │  25  │ │  30  │
//! │ DAYS │ │HOURS │ │ MINS │ │ SECS │
//! └──────┘ └──────┘ └──────┘ └──────┘
//! ```
//!
//! Days are drawn unpadded, the other three fields with two digits.

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::draw_panel;
use crate::{
    colors::{PINK, SLATE_700, SLATE_900, WHITE},
    config::SCREEN_WIDTH,
    elapsed::ElapsedDuration,
    profiling::{push_padded, push_u64},
    styles::{CENTERED, LABEL_STYLE_MUTED, VALUE_FONT},
};

const TILE_COUNT: u32 = 4;
const TILE_GAP: u32 = 8;
const TILE_WIDTH: u32 = (SCREEN_WIDTH - TILE_GAP * (TILE_COUNT + 1)) / TILE_COUNT;
pub const TILE_HEIGHT: u32 = 46;

const VALUE_BASELINE: i32 = 24;
const LABEL_BASELINE: i32 = 39;

const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, WHITE);
const SECONDS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, PINK);

/// Draw the four counter tiles with their top edge at `top`.
pub fn draw_counter<D>(
    display: &mut D,
    elapsed: &ElapsedDuration,
    top: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, (label, value)) in elapsed.components().into_iter().enumerate() {
        let x = (TILE_GAP + i as u32 * (TILE_WIDTH + TILE_GAP)) as i32;
        let area = Rectangle::new(Point::new(x, top), Size::new(TILE_WIDTH, TILE_HEIGHT));
        draw_panel(display, area, SLATE_900, SLATE_700);

        let mut digits: String<20> = String::new();
        if i == 0 {
            push_u64(&mut digits, value);
        } else {
            push_padded(&mut digits, value, 2);
        }

        let center_x = x + TILE_WIDTH as i32 / 2;
        let style = if i == 3 { SECONDS_STYLE } else { VALUE_STYLE };
        Text::with_text_style(&digits, Point::new(center_x, top + VALUE_BASELINE), style, CENTERED)
            .draw(display)
            .ok();
        Text::with_text_style(label, Point::new(center_x, top + LABEL_BASELINE), LABEL_STYLE_MUTED, CENTERED)
            .draw(display)
            .ok();
    }
}
