//! Anniversary card simulator for desktop.
//!
//! Runs the card in an `embedded-graphics-simulator` window. Keyboard
//! buttons mirror a four-button display board:
//!
//! - `X`: next page
//! - `Y`: debug page on/off
//! - `A`: next reason (reasons page), scroll the letter (letter page)
//! - `B`: music on/off
//! - `C`: close the card and return to the intro

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod ambient;
mod clock;
mod counter;
mod logging;
mod music;
mod popup;
mod profiling;
mod reasons;
mod scheduler;
mod screens;
mod timing;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Instant;

use anniversary_common::Page;
use anniversary_common::colors::SLATE_950;
use anniversary_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, START_OFFSET};
use anniversary_common::content::{MEMORIES, REASONS, SONG_PATH};
use anniversary_common::profiling::EventLog;
use anniversary_common::widgets::{
    draw_header,
    draw_hearts,
    draw_music_popup,
    draw_stars,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rand_xoshiro::Xoroshiro128StarStar;
use rand_xoshiro::rand_core::SeedableRng;

use crate::ambient::{FloatingHearts, SharedRng, TwinklingStars};
use crate::clock::{Clock, SystemClock};
use crate::counter::TimeCounter;
use crate::logging::init_logging;
use crate::music::{LoopingTrack, MusicPlayer};
use crate::popup::Popup;
use crate::profiling::ProfilingMetrics;
use crate::reasons::ReasonCard;
use crate::scheduler::Scheduler;
use crate::screens::{CardStats, CardView, IntroOutcome, draw_content_page, draw_debug_page, run_intro_screen};
use crate::timing::{FRAME_TIME, SONG_LENGTH};

/// Fallback seed when the OS entropy source is unavailable.
const FALLBACK_SEED: u64 = 0x0005_a11c_e5ee_d000;

/// Everything mounted while the card is open. Dropping it cancels every
/// timer the card registered.
struct OpenCard {
    stars: TwinklingStars,
    hearts: FloatingHearts,
    counter: TimeCounter,
    reasons: ReasonCard,
    page: Page,
    letter_scroll: usize,
}

impl OpenCard {
    fn mount(
        scheduler: &Scheduler,
        clock: &Rc<dyn Clock>,
        rng: &SharedRng,
    ) -> Self {
        Self {
            stars: TwinklingStars::mount(scheduler, rng),
            hearts: FloatingHearts::mount(scheduler, rng.clone()),
            counter: TimeCounter::mount(scheduler, Rc::clone(clock), START_OFFSET),
            reasons: ReasonCard::new(scheduler, REASONS),
            page: Page::default(),
            letter_scroll: 0,
        }
    }
}

/// How the open-card loop ended.
enum CardExit {
    Closed,
    Quit,
}

fn main() {
    // Keep the handle alive until exit so buffered lines are flushed
    let _logger = match init_logging() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("{err}; continuing without logs");
            None
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Happy Anniversary", &output_settings);

    display.clear(SLATE_950).ok();
    window.update(&display);

    let clock: Rc<dyn Clock> = Rc::new(SystemClock::new());
    let scheduler = Scheduler::new();
    let rng: SharedRng = Rc::new(RefCell::new(Xoroshiro128StarStar::seed_from_u64(seed())));
    let mut music = MusicPlayer::new(LoopingTrack::new(SONG_PATH, SONG_LENGTH));

    let mut metrics = ProfilingMetrics::new();
    let mut event_log = EventLog::new();
    event_log.push_at(0, "Card ready");
    check_memory_images(&mut event_log);

    loop {
        scheduler.run_until(clock.monotonic());
        match run_intro_screen(&mut display, &mut window, &scheduler, clock.as_ref(), &rng) {
            IntroOutcome::Quit => break,
            IntroOutcome::Open => music.element_mut().notify_gesture(),
        }
        // The intro returns mid-frame; mount from the current time
        scheduler.run_until(clock.monotonic());

        log::info!("event=card_open");
        event_log.push_at(metrics.uptime().as_secs(), "Card opened");
        let card = OpenCard::mount(&scheduler, &clock, &rng);

        let exit = run_card(
            &mut display,
            &mut window,
            &scheduler,
            clock.as_ref(),
            card,
            &mut music,
            &mut metrics,
            &mut event_log,
        );

        music.stop_for_close();
        music.pump();
        match exit {
            CardExit::Closed => {
                log::info!("event=card_close");
                event_log.push_at(metrics.uptime().as_secs(), "Card closed");
            }
            CardExit::Quit => break,
        }
    }

    log::info!("event=app_exit frames={}", metrics.total_frames);
}

#[allow(clippy::too_many_arguments)]
fn run_card(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    scheduler: &Scheduler,
    clock: &dyn Clock,
    mut card: OpenCard,
    music: &mut MusicPlayer<LoopingTrack>,
    metrics: &mut ProfilingMetrics,
    event_log: &mut EventLog,
) -> CardExit {
    let mut active_popup: Option<Popup> = None;

    // Best effort: a refusal is only logged
    match music.autoplay() {
        Ok(Some(_)) => event_log.push_at(metrics.uptime().as_secs(), "Music: autoplay"),
        Ok(None) => {}
        Err(err) => {
            log::warn!("event=autoplay_refused reason=\"{err}\"");
            event_log.push_at(metrics.uptime().as_secs(), err.short());
        }
    }

    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let uptime = metrics.uptime().as_secs();

        // Timers first, so input schedules from this frame's time
        let now = clock.monotonic();
        metrics.timers_fired += scheduler.run_until(now) as u64;

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return CardExit::Quit,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::X => {
                            card.page = card.page.next();
                            event_log.push_at(uptime, card.page.title());
                        }
                        Keycode::Y => {
                            card.page = card.page.toggle_debug();
                            active_popup = None;
                            event_log.push_at(uptime, card.page.title());
                        }
                        Keycode::A if card.page == Page::Reasons => {
                            card.reasons.advance();
                            event_log.push_at(uptime, "Reason: next");
                        }
                        Keycode::A if card.page == Page::Letter => {
                            card.letter_scroll = card.letter_scroll.wrapping_add(1);
                        }
                        Keycode::B => {
                            match music.toggle() {
                                Ok(request) => {
                                    log::info!("event=music_toggle request={request:?}");
                                    event_log.push_at(uptime, "Music: toggled");
                                }
                                Err(err) => event_log.push_at(uptime, err.short()),
                            }
                            active_popup = Some(Popup::Music(now));
                        }
                        Keycode::C => return CardExit::Closed,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Media notifications and fades
        metrics.pending_timers = scheduler.pending();
        music.pump();
        music.element_mut().advance(frame_start.duration_since(last_frame));
        last_frame = frame_start;
        card.reasons.update_fade();

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired(now)
        {
            active_popup = None;
        }

        if card.page == Page::Debug {
            let stats = CardStats {
                hearts: card.hearts.field().len(),
                hearts_spawned: card.hearts.field().spawned(),
                stars: card.stars.field().len(),
                reason: card.reasons.selector().position(),
                playing: music.is_playing(),
                track_position: music.element().position(),
            };
            draw_debug_page(display, metrics, &stats, event_log);
        } else {
            display.clear(SLATE_950).ok();
            draw_stars(display, card.stars.field(), card.stars.since_mount(now), SLATE_950);
            draw_hearts(display, &card.hearts.field(), now, SLATE_950);

            draw_header(display, music.is_playing());
            let view = CardView {
                elapsed: card.counter.elapsed(),
                reasons: &card.reasons,
                letter_scroll: card.letter_scroll,
            };
            draw_content_page(display, card.page, &view);

            if let Some(Popup::Music(_)) = active_popup {
                draw_music_popup(display, music.is_playing());
            }
        }

        let render_time = frame_start.elapsed();
        window.update(display);

        let pre_sleep = frame_start.elapsed();
        if let Some(rest) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(rest);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

/// Seed for the particle RNG, from the OS when possible.
fn seed() -> u64 {
    getrandom::u64().unwrap_or_else(|err| {
        log::warn!("event=entropy_unavailable error=\"{err}\"; using fixed seed");
        FALLBACK_SEED
    })
}

/// Memory tiles show icons; the photos are only checked for presence so a
/// broken asset folder shows up in the logs.
fn check_memory_images(event_log: &mut EventLog) {
    let missing = MEMORIES
        .iter()
        .filter_map(|memory| memory.image)
        .filter(|path| !Path::new(path).is_file())
        .inspect(|path| log::warn!("event=asset_missing path={path}"))
        .count();
    if missing > 0 {
        event_log.push_at(0, "Some memory photos missing");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_open_card_registers_two_timers() {
        let sched = Scheduler::new();
        let clock: Rc<dyn Clock> = Rc::new(SystemClock::new());
        let rng: SharedRng = Rc::new(RefCell::new(Xoroshiro128StarStar::seed_from_u64(1)));
        let card = OpenCard::mount(&sched, &clock, &rng);
        assert_eq!(sched.pending(), 2, "Counter tick and heart spawner");
        assert_eq!(card.page, Page::Counter);

        drop(card);
        assert_eq!(sched.pending(), 0, "Closing the card cancels its timers");
    }

    #[test]
    fn test_reopen_starts_fresh() {
        let sched = Scheduler::new();
        let clock: Rc<dyn Clock> = Rc::new(SystemClock::new());
        let rng: SharedRng = Rc::new(RefCell::new(Xoroshiro128StarStar::seed_from_u64(2)));

        let mut card = OpenCard::mount(&sched, &clock, &rng);
        card.reasons.advance();
        sched.run_until(sched.now() + Duration::from_secs(1));
        assert_eq!(card.reasons.selector().index(), 1);
        drop(card);

        let card = OpenCard::mount(&sched, &clock, &rng);
        assert_eq!(card.reasons.selector().index(), 0);
        assert!(card.hearts.field().is_empty());
    }
}
