//! Full simulator panel: digits, session statistics and the event log.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;
use profont::{PROFONT_9_POINT, PROFONT_12_POINT};
use speedo_common::display::DIGIT_COUNT;
use speedo_common::event_log::EventLog;

use super::seven_segment::{DIGIT_HEIGHT, DIGIT_WIDTH, draw_digit};
use crate::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE};
use crate::state::SessionStats;

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

const TITLE_Y: i32 = 14;
const DIGITS_Y: i32 = 24;
const DIGIT_GAP: u32 = 16;
const UNIT_Y: i32 = DIGITS_Y + DIGIT_HEIGHT as i32 - 2;
const STATS_Y: i32 = 144;
const STATS_LINE_HEIGHT: i32 = 12;
const LOG_DIVIDER_Y: i32 = 164;
const LOG_Y: i32 = 176;
const LOG_LINE_HEIGHT: i32 = 12;
const MARGIN_X: i32 = 4;

const DIGITS_WIDTH: u32 = DIGIT_COUNT as u32 * DIGIT_WIDTH + (DIGIT_COUNT as u32 - 1) * DIGIT_GAP;
const DIGITS_X: i32 = ((SCREEN_WIDTH - DIGITS_WIDTH) / 2) as i32;

const _: () = assert!(DIGITS_WIDTH < SCREEN_WIDTH);
const _: () = assert!(UNIT_Y < STATS_Y);

/// Top-left corner of the digit at `index`, most significant first.
fn digit_origin(index: usize) -> Point {
    let step = (DIGIT_WIDTH + DIGIT_GAP) as i32;
    Point::new(DIGITS_X + index as i32 * step, DIGITS_Y)
}

/// Redraw the whole panel.
pub fn draw_panel<D>(
    display: &mut D,
    frame: &[Option<u8>; DIGIT_COUNT],
    stats: &SessionStats,
    log: &EventLog,
    time_s: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_title(display, time_s);

    for (index, pattern) in frame.iter().enumerate() {
        draw_digit(display, digit_origin(index), *pattern);
    }
    let unit_x = DIGITS_X + DIGITS_WIDTH as i32 + 6;
    Text::new("MPH", Point::new(unit_x, UNIT_Y), MonoTextStyle::new(&PROFONT_9_POINT, GRAY))
        .draw(display)
        .ok();

    draw_stats(display, stats);
    draw_log(display, log);
}

fn draw_title<D>(
    display: &mut D,
    time_s: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("HO SONAR SPEEDOMETER", Point::new(MARGIN_X, TITLE_Y), MonoTextStyle::new(&PROFONT_12_POINT, WHITE))
        .draw(display)
        .ok();

    let mut clock: String<16> = String::new();
    write!(clock, "t={time_s:.1}s").ok();
    let x = SCREEN_WIDTH as i32 - MARGIN_X - 6 * clock.len() as i32;
    Text::new(&clock, Point::new(x, TITLE_Y), MonoTextStyle::new(&PROFONT_9_POINT, GRAY))
        .draw(display)
        .ok();
}

fn draw_stats<D>(
    display: &mut D,
    stats: &SessionStats,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);

    let mut line: String<48> = String::new();
    write!(
        line,
        "CYCLES {}  SHOWN {}  QUIET {}",
        stats.cycles, stats.displayed, stats.suppressed
    )
    .ok();
    Text::new(&line, Point::new(MARGIN_X, STATS_Y), style).draw(display).ok();

    line.clear();
    write!(line, "PEAK {}  SAT {}  LAST ", stats.peak, stats.saturated).ok();
    match stats.last {
        Some(last) => write!(line, "{last}").ok(),
        None => line.push_str("---").ok(),
    };
    Text::new(&line, Point::new(MARGIN_X, STATS_Y + STATS_LINE_HEIGHT), style)
        .draw(display)
        .ok();
}

fn draw_log<D>(
    display: &mut D,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(0, LOG_DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 1, LOG_DIVIDER_Y))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    let prompt_style = MonoTextStyle::new(&PROFONT_9_POINT, GREEN);
    let text_style = MonoTextStyle::new(&PROFONT_9_POINT, ORANGE);

    let mut y = LOG_Y;
    for entry in log.iter() {
        Text::new(">", Point::new(MARGIN_X, y), prompt_style).draw(display).ok();
        Text::new(entry, Point::new(MARGIN_X + 10, y), text_style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use speedo_common::display::SEGMENT_PATTERNS;

    use super::*;
    use crate::colors::SEGMENT_ON;

    #[test]
    fn test_digits_fit_on_screen() {
        let last = digit_origin(DIGIT_COUNT - 1);
        assert!(digit_origin(0).x >= 0);
        assert!(last.x + DIGIT_WIDTH as i32 <= SCREEN_WIDTH as i32);
        assert!(DIGITS_Y + (DIGIT_HEIGHT as i32) < STATS_Y);
    }

    #[test]
    fn test_log_fits_on_screen() {
        let last_line = LOG_Y + (speedo_common::event_log::EVENT_LOG_LINES as i32 - 1) * LOG_LINE_HEIGHT;
        assert!(last_line < SCREEN_HEIGHT as i32);
    }

    #[test]
    fn test_draw_panel_lights_segments() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let frame = [None, Some(SEGMENT_PATTERNS[3]), Some(SEGMENT_PATTERNS[2])];
        let mut log = EventLog::new();
        log.push("#1 32 mph");

        draw_panel(&mut display, &frame, &SessionStats::new(), &log, 4.5);

        // Segment A is lit for both 3 and 2
        let a_center = digit_origin(1) + Point::new(DIGIT_WIDTH as i32 / 2, 5);
        assert_eq!(display.get_pixel(a_center), SEGMENT_ON);
        let dark_center = digit_origin(0) + Point::new(DIGIT_WIDTH as i32 / 2, 5);
        assert_ne!(display.get_pixel(dark_center), SEGMENT_ON);
    }
}
