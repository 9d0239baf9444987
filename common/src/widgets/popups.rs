//! Non-modal popup overlays for short status messages.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{PURPLE, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 54;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y + 6);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

fn draw_frame<D>(
    display: &mut D,
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
}

/// Music toggled.
pub fn draw_music_popup<D>(
    display: &mut D,
    playing: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, PURPLE);
    let status = if playing { "MUSIC ON" } else { "MUSIC OFF" };
    Text::with_text_style(status, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
