//! Memories grid: one gradient tile per memory, three per row.
//!
//! Photos are not decoded. Each tile draws its icon glyph over the gradient
//! with the month badge, title and description underneath.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, Triangle},
    text::Text,
};
use heapless::String;

use super::primitives::{draw_gradient_rect, draw_heart, wrap_lines};
use crate::{
    colors::WHITE,
    config::{HEADER_HEIGHT, MEMORY_COLUMNS, MEMORY_GAP, MEMORY_TILE_SIZE, SCREEN_WIDTH},
    content::{Icon, MEMORIES, MEMORIES_TITLE, Memory},
    styles::{CENTERED, LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, LEFT_ALIGNED, TITLE_STYLE_WHITE},
};

const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, HEADER_HEIGHT as i32 + 20);
const GRID_TOP: i32 = HEADER_HEIGHT as i32 + 28;

/// Gradient band height; the caption sits below it.
const ART_HEIGHT: u32 = MEMORY_TILE_SIZE / 2;
const ROW_HEIGHT: u32 = ART_HEIGHT + 36;

/// Description characters per line (6px glyphs).
const CAPTION_CHARS: usize = (MEMORY_TILE_SIZE as usize - 4) / 6;
const ICON_SIZE: u32 = 18;

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const WHITE_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

/// Top-left corner of tile `index` in the grid.
pub const fn tile_origin(index: usize) -> Point {
    let col = index as u32 % MEMORY_COLUMNS;
    let row = index as u32 / MEMORY_COLUMNS;
    Point::new(
        (MEMORY_GAP + col * (MEMORY_TILE_SIZE + MEMORY_GAP)) as i32,
        GRID_TOP + (row * (ROW_HEIGHT + MEMORY_GAP)) as i32,
    )
}

/// Draw the memories page body.
pub fn draw_memories<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(MEMORIES_TITLE, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    for (i, memory) in MEMORIES.iter().enumerate() {
        draw_memory_tile(display, tile_origin(i), memory);
    }
}

fn draw_memory_tile<D>(
    display: &mut D,
    origin: Point,
    memory: &Memory,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let art = Rectangle::new(origin, Size::new(MEMORY_TILE_SIZE, ART_HEIGHT));
    draw_gradient_rect(display, art, memory.gradient);

    let icon_top_left = art.center() - Point::new(ICON_SIZE as i32 / 2, ICON_SIZE as i32 / 2);
    draw_icon(display, memory.icon, icon_top_left);

    let mut badge: String<12> = String::new();
    write!(badge, "MONTH {}", memory.month).ok();
    Text::with_text_style(&badge, origin + Point::new(4, 10), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let center_x = origin.x + MEMORY_TILE_SIZE as i32 / 2;
    let caption_y = origin.y + ART_HEIGHT as i32;
    Text::with_text_style(memory.title, Point::new(center_x, caption_y + 11), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    for (i, line) in wrap_lines::<2>(memory.description, CAPTION_CHARS).iter().enumerate() {
        let pos = Point::new(center_x, caption_y + 22 + i as i32 * 10);
        Text::with_text_style(line, pos, LABEL_STYLE_MUTED, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Simple vector icons sized to `ICON_SIZE`.
fn draw_icon<D>(
    display: &mut D,
    icon: Icon,
    top_left: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let s = ICON_SIZE as i32;
    match icon {
        Icon::Heart => draw_heart(display, top_left, ICON_SIZE, WHITE),
        Icon::MapPin => {
            Circle::new(top_left + Point::new(3, 0), 12)
                .into_styled(WHITE_STROKE)
                .draw(display)
                .ok();
            Triangle::new(
                top_left + Point::new(4, 9),
                top_left + Point::new(14, 9),
                top_left + Point::new(9, s),
            )
            .into_styled(WHITE_FILL)
            .draw(display)
            .ok();
        }
        Icon::Gift => {
            Rectangle::new(top_left + Point::new(1, 6), Size::new(16, 12))
                .into_styled(WHITE_STROKE)
                .draw(display)
                .ok();
            Rectangle::new(top_left + Point::new(8, 2), Size::new(2, 16))
                .into_styled(WHITE_FILL)
                .draw(display)
                .ok();
        }
        Icon::Coffee => {
            Rectangle::new(top_left + Point::new(1, 5), Size::new(12, 12))
                .into_styled(WHITE_STROKE)
                .draw(display)
                .ok();
            Circle::new(top_left + Point::new(11, 8), 6)
                .into_styled(WHITE_STROKE)
                .draw(display)
                .ok();
        }
        Icon::Music => {
            Circle::new(top_left + Point::new(0, 11), 7)
                .into_styled(WHITE_FILL)
                .draw(display)
                .ok();
            Rectangle::new(top_left + Point::new(5, 1), Size::new(2, 14))
                .into_styled(WHITE_FILL)
                .draw(display)
                .ok();
            Rectangle::new(top_left + Point::new(5, 1), Size::new(9, 3))
                .into_styled(WHITE_FILL)
                .draw(display)
                .ok();
        }
    }
}
