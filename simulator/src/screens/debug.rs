//! Debug/profiling page rendering.

use core::fmt::Write;
use core::mem::size_of;
use std::time::Duration;

use anniversary_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use anniversary_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use anniversary_common::profiling::EventLog;
use anniversary_common::styles::LABEL_FONT;
use anniversary_common::{HeartField, StarField};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const LOG_DIVIDER_Y: i32 = 122;
const LOG_Y: i32 = 134;
const LOG_LINE_HEIGHT: i32 = 11;
const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;
const STAT_LINE_HEIGHT: i32 = 13;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Live card state shown in the middle column.
pub struct CardStats {
    pub hearts: usize,
    pub hearts_spawned: u32,
    pub stars: usize,
    pub reason: (usize, usize),
    pub playing: bool,
    pub track_position: Duration,
}

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    stats: &CardStats,
    log: &EventLog,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_card_column(display, metrics, stats);
    draw_memory_column(display);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{:.0} FPS", metrics.fps());
    Text::new(&fps_str, Point::new(270, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("CARD", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("MEMORY", Point::new(COL3_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

/// Draw `lines` top to bottom from `STATS_Y` in column `x`.
fn draw_column(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    lines: &[(String<20>, bool)],
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let mut y = STATS_Y;
    for (text, highlight) in lines {
        let style = if *highlight { highlight_style } else { value_style };
        Text::new(text, Point::new(x, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn line(args: core::fmt::Arguments<'_>) -> String<20> {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    s
}

fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let min_ms = if metrics.frame_time_min_us == u32::MAX {
        0.0
    } else {
        metrics.frame_time_min_us as f32 / 1000.0
    };
    let lines = [
        (line(format_args!("Frame: {:.1}ms", metrics.frame_time_us as f32 / 1000.0)), false),
        (line(format_args!("Render:{:.1}ms", metrics.render_time_us as f32 / 1000.0)), false),
        (line(format_args!("Sleep: {:.1}ms", metrics.sleep_time_us as f32 / 1000.0)), false),
        (line(format_args!("Min:   {min_ms:.1}ms")), true),
        (line(format_args!("Max:   {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0)), true),
        (line(format_args!("Avg:   {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0)), true),
    ];
    draw_column(display, COL1_X, &lines);
}

fn draw_card_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    stats: &CardStats,
) {
    let (reason, reasons) = stats.reason;
    let lines = [
        (line(format_args!("Hearts:{}/{}", stats.hearts, stats.hearts_spawned)), false),
        (line(format_args!("Stars: {}", stats.stars)), false),
        (line(format_args!("Timers:{}", metrics.pending_timers)), false),
        (line(format_args!("Fired: {}", metrics.timers_fired)), false),
        (line(format_args!("Reason:{reason}/{reasons}")), false),
        (
            line(format_args!(
                "Music: {} {}s",
                if stats.playing { "ON" } else { "OFF" },
                stats.track_position.as_secs()
            )),
            true,
        ),
    ];
    draw_column(display, COL2_X, &lines);
}

fn draw_memory_column(display: &mut SimulatorDisplay<Rgb565>) {
    let hearts = size_of::<HeartField>();
    let stars = size_of::<StarField>();
    let log = size_of::<EventLog>();
    let total = hearts + stars + log;
    let lines = [
        (line(format_args!("Hearts:{hearts}B")), false),
        (line(format_args!("Stars: {stars}B")), false),
        (line(format_args!("Log:   {log}B")), false),
        (line(format_args!("Total: {total}B")), true),
    ];
    draw_column(display, COL3_X, &lines);
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &EventLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
