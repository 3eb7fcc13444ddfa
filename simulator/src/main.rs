//! HO Sonar Speedometer Simulator for Windows/Desktop.
//!
//! Runs the speedometer pipeline against a synthetic train on a virtual clock
//! and writes a PNG of the panel for every displayed reading into
//! `sim-output/`. A full session simulates a little over a minute of trains
//! and finishes almost instantly.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod colors;
mod ports;
mod sonar;
mod state;
mod timing;
mod widgets;

use std::fs;
use std::path::Path;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use heapless::String;
use speedo_common::config::{MINIMUM_DISPLAY_SPEED, POSITION_SAMPLES, READ_TIME_MS};
use speedo_common::event_log::{EVENT_LINE_LENGTH, EventLog, push_u32};
use speedo_common::synthetic::SyntheticTrain;
use speedo_common::{CycleReport, Speedometer};

use crate::ports::PersistencePorts;
use crate::sonar::SimulatedSonar;
use crate::state::SessionStats;
use crate::timing::{OUTPUT_DIR, SIMULATED_DURATION_S, VirtualClock, VirtualDelay};
use crate::widgets::{SCREEN_HEIGHT, SCREEN_WIDTH, draw_panel};

fn main() {
    let clock = VirtualClock::new();
    let sonar = SimulatedSonar::new(SyntheticTrain::demo(), clock.clone());
    let delay = VirtualDelay::new(clock.clone());
    let mut speedometer: Speedometer<_, _, _> = Speedometer::new(sonar, PersistencePorts::new(), delay);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();

    let mut stats = SessionStats::new();
    let mut log = EventLog::new();

    if let Err(e) = fs::create_dir_all(OUTPUT_DIR) {
        eprintln!("Cannot create {OUTPUT_DIR}: {e}");
        log.push("output directory unavailable");
    }

    println!(
        "Simulating {SIMULATED_DURATION_S} s: {POSITION_SAMPLES} samples per {READ_TIME_MS} ms window, threshold {MINIMUM_DISPLAY_SPEED} mph"
    );

    while clock.now_s() < SIMULATED_DURATION_S {
        speedometer.display_mut().ports_mut().reset();
        let report = speedometer.run_cycle();
        stats.record(&report);

        let line = event_line(stats.cycles, &report);
        println!("[{:>6.1}s] {}  readings {:?}", clock.now_s(), line, speedometer.last_readings());
        log.push(&line);

        if !report.displayed() {
            continue;
        }

        let frame = speedometer.display().ports().frame();
        draw_panel(&mut display, &frame, &stats, &log, clock.now_s());

        let path = Path::new(OUTPUT_DIR).join(format!("cycle_{:03}.png", stats.cycles));
        if let Err(e) = display.to_rgb_output_image(&output_settings).save_png(&path) {
            eprintln!("Failed to write {}: {e}", path.display());
            log.push("png write failed");
        }
    }

    println!(
        "Done: {} cycles, {} shown, {} below threshold, {} saturated, peak {} mph",
        stats.cycles, stats.displayed, stats.suppressed, stats.saturated, stats.peak
    );
}

/// One event log line describing a cycle.
fn event_line(
    cycle: u32,
    report: &CycleReport,
) -> String<EVENT_LINE_LENGTH> {
    let mut line: String<EVENT_LINE_LENGTH> = String::new();
    line.push('#').ok();
    push_u32(&mut line, cycle);
    line.push(' ').ok();
    push_u32(&mut line, report.speed());
    line.push_str(" mph").ok();

    match report.render {
        Some(render) if render.saturated => {
            line.push_str(" shown as ").ok();
            push_u32(&mut line, render.shown);
        }
        Some(_) => {
            line.push_str(" shown").ok();
        }
        None => {
            line.push_str(" below threshold").ok();
        }
    }
    line
}
