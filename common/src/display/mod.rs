//! Three-digit seven-segment display.
//!
//! - `segments`: Digit-to-segment and position-to-control lookup tables
//! - `digits`: Decimal decomposition into a fixed-capacity digit buffer
//! - `multiplexer`: Time-division refresh driving the two output ports

pub mod digits;
pub mod multiplexer;
pub mod segments;

pub use digits::{DigitFrame, Digits, MAX_DIGITS, MAX_DISPLAY_VALUE, digit_count};
pub use multiplexer::{DisplayPorts, Multiplexer, RenderReport};
pub use segments::{
    CONTROL_MASK,
    CONTROL_OFF,
    DIGIT_COUNT,
    Position,
    SEGMENT_DATA_MASK,
    SEGMENT_PATTERNS,
    SEGMENTS_OFF,
    Segment,
    decode_pattern,
    is_lit,
    segment_pattern,
};
