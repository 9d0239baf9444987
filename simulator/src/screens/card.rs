//! Content pages of the opened card.

use anniversary_common::colors::{PINK, WHITE};
use anniversary_common::config::CENTER_X;
use anniversary_common::content::{COUNTER_CAPTION, FOOTER, HERO_BADGE, HERO_LINE_1, HERO_LINE_2, HERO_TAGLINE};
use anniversary_common::styles::{BODY_STYLE, CENTERED, HERO_FONT, LABEL_STYLE_MUTED, LABEL_STYLE_PINK};
use anniversary_common::widgets::{
    COUNTER_TILE_HEIGHT,
    draw_counter,
    draw_letter,
    draw_memories,
    draw_reason_card,
    draw_wrapped,
};
use anniversary_common::{ElapsedDuration, Page};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::reasons::ReasonCard;

const BADGE_POS: Point = Point::new(CENTER_X, 36);
const HERO_LINE_1_POS: Point = Point::new(CENTER_X, 62);
const HERO_LINE_2_POS: Point = Point::new(CENTER_X, 88);
const TAGLINE_TOP: Point = Point::new(CENTER_X, 96);
const TAGLINE_CHARS: usize = 40;
const COUNTER_TOP: i32 = 136;
const CAPTION_POS: Point = Point::new(CENTER_X, COUNTER_TOP + COUNTER_TILE_HEIGHT as i32 + 14);
const FOOTER_POS: Point = Point::new(CENTER_X, 232);

const HERO_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(HERO_FONT, WHITE);
const HERO_STYLE_PINK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(HERO_FONT, PINK);

/// What the content pages read each frame.
pub struct CardView<'a> {
    pub elapsed: ElapsedDuration,
    pub reasons: &'a ReasonCard,
    pub letter_scroll: usize,
}

/// Draw one content page over the particle layers. The debug page has its
/// own full-screen renderer and is ignored here.
pub fn draw_content_page(
    display: &mut SimulatorDisplay<Rgb565>,
    page: Page,
    view: &CardView<'_>,
) {
    match page {
        Page::Counter => draw_counter_page(display, &view.elapsed),
        Page::Reasons => draw_reason_card(display, &view.reasons.selector(), view.reasons.text_color()),
        Page::Memories => draw_memories(display),
        Page::Letter => draw_letter(display, view.letter_scroll),
        Page::Debug => {}
    }
}

fn draw_counter_page(
    display: &mut SimulatorDisplay<Rgb565>,
    elapsed: &ElapsedDuration,
) {
    Text::with_text_style(HERO_BADGE, BADGE_POS, LABEL_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(HERO_LINE_1, HERO_LINE_1_POS, HERO_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(HERO_LINE_2, HERO_LINE_2_POS, HERO_STYLE_PINK, CENTERED)
        .draw(display)
        .ok();
    draw_wrapped(display, HERO_TAGLINE, TAGLINE_TOP, TAGLINE_CHARS, BODY_STYLE);

    draw_counter(display, elapsed, COUNTER_TOP);
    Text::with_text_style(COUNTER_CAPTION, CAPTION_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(FOOTER, FOOTER_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}
