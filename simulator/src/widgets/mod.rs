//! Drawing for the simulated speedometer panel.

mod panel;
mod seven_segment;

pub use panel::{SCREEN_HEIGHT, SCREEN_WIDTH, draw_panel};
