// Brush-shaped cursor: a small RGBA buffer the window loop composites at
// the pointer each frame, standing in for the platform cursor. Derived
// from brush parameters alone, never from the image.

use crate::brush::stamp_disc;
use crate::buffer::{PixelBuffer, Rgba};

/// Square RGBA buffer of side `pen_size`: transparent background with a
/// centered filled disc of radius pen_size / 2 in `color`. Rebuilt
/// whenever the pen size changes.
pub fn render(pen_size: i32, color: Rgba) -> PixelBuffer {
    let side = pen_size.max(1) as usize;
    let mut preview = PixelBuffer::filled(side, side, &[0, 0, 0, 0]);
    let center = (side / 2) as i32;
    let opaque = [color[0], color[1], color[2], 255];
    stamp_disc(&mut preview, center, center, pen_size.max(1) / 2, opaque);
    preview
}
