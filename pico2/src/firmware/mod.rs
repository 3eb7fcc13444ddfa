//! Embassy entry point and board drivers.

#[cfg(feature = "demo-sensor")]
mod demo;
mod gpio_ports;
#[cfg(not(feature = "demo-sensor"))]
mod sonar;

// Re-export testable modules from library for local use
mod pins {
    pub use speedo_pico2::pins::*;
}
mod echo {
    pub use speedo_pico2::echo::*;
}

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use speedo_common::config::{POSITION_SAMPLES, READ_TIME_MS};
use speedo_common::{CycleReport, Speedometer};
use {defmt_rtt as _, panic_probe as _};

use self::gpio_ports::GpioPorts;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-speedo"),
    embassy_rp::binary_info::rp_program_description!(c"HO sonar speedometer with 3-digit seven-segment display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Main Entry Point
// =============================================================================

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Starting HO speedometer...");
    info!("{} samples over {} ms per window", POSITION_SAMPLES, READ_TIME_MS);

    let p = embassy_rp::init(Default::default());

    // Segment data port a-g on GPIO0-6, all low (blank)
    let segments = [
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
    ];
    // Position select port on GPIO7-9, no digit enabled
    let control = [
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ];
    let ports = GpioPorts::new(segments, control);
    info!("Display ports initialized");

    #[cfg(not(feature = "demo-sensor"))]
    let sensor = {
        use embassy_rp::gpio::{Input, Pull};

        let trigger = Output::new(p.PIN_14, Level::Low);
        let echo = Input::new(p.PIN_15, Pull::None);
        info!("HC-SR04 on TRIG=GPIO14 ECHO=GPIO15");
        sonar::HcSr04::new(trigger, echo)
    };

    #[cfg(feature = "demo-sensor")]
    let sensor = {
        info!("Demo mode: synthetic train instead of HC-SR04");
        demo::DemoSonar::new()
    };

    let mut speedometer: Speedometer<_, _, _> = Speedometer::new(sensor, ports, Delay);

    info!("Starting main loop...");
    let mut cycle: u32 = 0;
    speedometer.run(|report, readings| {
        cycle = cycle.wrapping_add(1);
        debug!("Cycle {}: readings {}", cycle, readings);
        log_cycle(cycle, report);
    });
}

fn log_cycle(
    cycle: u32,
    report: &CycleReport,
) {
    let estimate = &report.estimate;
    debug!(
        "Cycle {}: {} cm/s -> {} mph",
        cycle, estimate.average_cm_s, estimate.prototype_mph
    );
    match report.render {
        Some(render) if render.saturated => {
            warn!("Cycle {}: {} mph exceeds the display, showing {}", cycle, estimate.display, render.shown);
        }
        Some(render) => info!("Cycle {}: showing {} mph", cycle, render.shown),
        None => debug!("Cycle {}: {} mph below threshold, display blank", cycle, estimate.display),
    }
}
