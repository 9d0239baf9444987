//! Closed-card intro with a floating gift card over the particle layers.
//!
//! Any key press or mouse click opens the card. That interaction also counts
//! as the user gesture the music autoplay policy waits for.

use std::thread;
use std::time::Instant;

use anniversary_common::animations::{fade, gentle_float, pulse};
use anniversary_common::colors::{PINK, PINK_ROSE, PURPLE, SLATE_500, SLATE_900, SLATE_950, WHITE};
use anniversary_common::config::{CENTER_X, SCREEN_WIDTH};
use anniversary_common::content::{INTRO_BUTTON, INTRO_HINT, INTRO_SUBTITLE, INTRO_TITLE};
use anniversary_common::styles::{BODY_FONT, CENTERED, LABEL_FONT, TITLE_STYLE_WHITE};
use anniversary_common::widgets::{draw_gradient_rect, draw_heart, draw_hearts, draw_panel, draw_stars};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::ambient::{FloatingHearts, SharedRng, TwinklingStars};
use crate::clock::Clock;
use crate::scheduler::Scheduler;
use crate::timing::{FRAME_TIME, PULSE_PERIOD};

const CARD_WIDTH: u32 = 220;
const CARD_HEIGHT: u32 = 150;
const CARD_X: i32 = (SCREEN_WIDTH - CARD_WIDTH) as i32 / 2;
const CARD_Y: i32 = 36;
const GLOW: u32 = 3;

const HEART_SIZE: u32 = 28;
const HEART_Y: i32 = 14;
const TITLE_Y: i32 = 70;
const SUBTITLE_Y: i32 = 90;
const BUTTON_WIDTH: u32 = 160;
const BUTTON_HEIGHT: u32 = 24;
const BUTTON_Y: i32 = 106;
const HINT_Y: i32 = 212;

/// How the intro ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntroOutcome {
    Open,
    Quit,
}

pub fn run_intro_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    scheduler: &Scheduler,
    clock: &dyn Clock,
    rng: &SharedRng,
) -> IntroOutcome {
    let stars = TwinklingStars::mount(scheduler, rng);
    let hearts = FloatingHearts::mount(scheduler, rng.clone());
    let intro_start = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return IntroOutcome::Quit,
                SimulatorEvent::KeyDown { repeat: false, .. } | SimulatorEvent::MouseButtonUp { .. } => {
                    return IntroOutcome::Open;
                }
                _ => {}
            }
        }

        let now = clock.monotonic();
        scheduler.run_until(now);

        display.clear(SLATE_950).ok();
        draw_stars(display, stars.field(), stars.since_mount(now), SLATE_950);
        draw_hearts(display, &hearts.field(), now, SLATE_950);
        draw_card(display, intro_start.elapsed());

        window.update(display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

fn draw_card(
    display: &mut SimulatorDisplay<Rgb565>,
    elapsed: std::time::Duration,
) {
    let lift = gentle_float(elapsed);
    let glow = pulse(elapsed, PULSE_PERIOD);
    let top = CARD_Y + lift;

    // Glow ring behind the card
    let glow_color = fade(PINK, PURPLE, glow);
    draw_panel(
        display,
        Rectangle::new(
            Point::new(CARD_X - GLOW as i32, top - GLOW as i32),
            Size::new(CARD_WIDTH + 2 * GLOW, CARD_HEIGHT + 2 * GLOW),
        ),
        fade(glow_color, SLATE_950, 0.5),
        glow_color,
    );
    draw_panel(
        display,
        Rectangle::new(Point::new(CARD_X, top), Size::new(CARD_WIDTH, CARD_HEIGHT)),
        SLATE_900,
        PINK,
    );

    draw_heart(
        display,
        Point::new(CENTER_X - HEART_SIZE as i32 / 2, top + HEART_Y),
        HEART_SIZE,
        PINK,
    );

    Text::with_text_style(INTRO_TITLE, Point::new(CENTER_X, top + TITLE_Y), TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        INTRO_SUBTITLE,
        Point::new(CENTER_X, top + SUBTITLE_Y),
        MonoTextStyle::new(BODY_FONT, SLATE_500),
        CENTERED,
    )
    .draw(display)
    .ok();

    let button = Rectangle::new(
        Point::new(CENTER_X - BUTTON_WIDTH as i32 / 2, top + BUTTON_Y),
        Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    );
    draw_gradient_rect(display, button, PINK_ROSE);
    Text::with_text_style(
        INTRO_BUTTON,
        button.center() + Point::new(0, 4),
        MonoTextStyle::new(BODY_FONT, WHITE),
        CENTERED,
    )
    .draw(display)
    .ok();

    let hint = fade(SLATE_500, SLATE_950, 0.3 + 0.7 * glow);
    Text::with_text_style(
        INTRO_HINT,
        Point::new(CENTER_X, HINT_Y),
        MonoTextStyle::new(LABEL_FONT, hint),
        CENTERED,
    )
    .draw(display)
    .ok();
}
