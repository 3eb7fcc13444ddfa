//! One seven-segment digit drawn from its data port pattern.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use speedo_common::display::{Segment, is_lit};

use crate::colors::{SEGMENT_OFF, SEGMENT_ON};

pub const DIGIT_WIDTH: u32 = 60;
pub const DIGIT_HEIGHT: u32 = 100;
const THICKNESS: u32 = 10;

const HALF_HEIGHT: u32 = DIGIT_HEIGHT / 2;
const HORIZONTAL_LENGTH: u32 = DIGIT_WIDTH - 2 * THICKNESS;
const VERTICAL_LENGTH: u32 = HALF_HEIGHT - THICKNESS - THICKNESS / 2;

const _: () = assert!(DIGIT_WIDTH > 2 * THICKNESS);
const _: () = assert!(HALF_HEIGHT > THICKNESS + THICKNESS / 2);

/// Area covered by `segment` of a digit whose top-left corner is `origin`.
pub fn segment_rect(
    origin: Point,
    segment: Segment,
) -> Rectangle {
    let t = THICKNESS as i32;
    let right = (DIGIT_WIDTH - THICKNESS) as i32;
    let upper = t;
    let lower = (HALF_HEIGHT + THICKNESS / 2) as i32;

    let horizontal = Size::new(HORIZONTAL_LENGTH, THICKNESS);
    let vertical = Size::new(THICKNESS, VERTICAL_LENGTH);

    let (offset, size) = match segment {
        Segment::A => (Point::new(t, 0), horizontal),
        Segment::B => (Point::new(right, upper), vertical),
        Segment::C => (Point::new(right, lower), vertical),
        Segment::D => (Point::new(t, (DIGIT_HEIGHT - THICKNESS) as i32), horizontal),
        Segment::E => (Point::new(0, lower), vertical),
        Segment::F => (Point::new(0, upper), vertical),
        Segment::G => (Point::new(t, (HALF_HEIGHT - THICKNESS / 2) as i32), horizontal),
    };
    Rectangle::new(origin + offset, size)
}

/// Draw a digit. `None` draws a dark position.
pub fn draw_digit<D>(
    display: &mut D,
    origin: Point,
    pattern: Option<u8>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for segment in Segment::ALL {
        let lit = pattern.is_some_and(|p| is_lit(p, segment));
        let color = if lit { SEGMENT_ON } else { SEGMENT_OFF };
        segment_rect(origin, segment)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}
