// Brush rasterization: a filled disc per pointer sample, plus a thick
// segment between consecutive samples so fast drags stay gap-free.
// Everything here overwrites pixels outright (no blending), which makes
// every stamp idempotent: re-applying the same stamp changes nothing.

use crate::buffer::{PixelBuffer, Rgba};

pub const MIN_PEN_SIZE: i32 = 1;
pub const MAX_PEN_SIZE: i32 = 50;

/// Brush parameters. The paint color is fixed to black; alpha is an
/// optional knob, fully opaque by default.
pub struct Brush {
    pen_size: i32,
    alpha: u8,
}

impl Brush {
    pub fn new(pen_size: i32) -> Self {
        Self {
            pen_size: pen_size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE),
            alpha: 255,
        }
    }

    pub fn pen_size(&self) -> i32 {
        self.pen_size
    }

    pub fn set_pen_size(&mut self, size: i32) {
        self.pen_size = size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE);
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Disc radius is *half* the nominal pen size (integer division), so
    /// pen size 5 stamps a radius-2 disc. The connecting segment uses the
    /// full pen size as its width instead; the asymmetry is intentional.
    pub fn radius(&self) -> i32 {
        self.pen_size / 2
    }

    pub fn color(&self) -> Rgba {
        [0, 0, 0, self.alpha]
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Fill every pixel within `radius` of (cx, cy) with `color`.
/// Radius 0 still marks the single center pixel; anything falling
/// outside the buffer is clipped silently.
pub fn stamp_disc(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    let r = radius.max(0);
    let r2 = r * r;
    // Scan just the bounding box; the membership test trims the corners.
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r2 {
                buf.set_clipped(x, y, &color);
            }
        }
    }
}

/// Fill a thick line of width `thickness` from (ax, ay) to (bx, by):
/// a disc of radius thickness/2 is stamped at every point of the
/// Bresenham walk between the endpoints, so two samples an arbitrary
/// distance apart still read as one continuous stroke.
pub fn stamp_segment(
    buf: &mut PixelBuffer,
    ax: i32,
    ay: i32,
    bx: i32,
    by: i32,
    thickness: i32,
    color: Rgba,
) {
    let r = (thickness / 2).max(0);
    let (mut x, mut y) = (ax, ay);
    let dx = (bx - ax).abs();
    let sx = if ax < bx { 1 } else { -1 };
    let dy = -(by - ay).abs();
    let sy = if ay < by { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_disc(buf, x, y, r, color);
        if x == bx && y == by {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [255, 255, 255, 255];
    const BLACK: Rgba = [0, 0, 0, 255];

    fn white_buf(w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::filled(w, h, &WHITE)
    }

    fn is_black(buf: &PixelBuffer, x: usize, y: usize) -> bool {
        buf.get(x, y).unwrap()[..3] == [0, 0, 0]
    }

    #[test]
    fn disc_covers_exactly_its_footprint() {
        let mut buf = white_buf(10, 10);
        stamp_disc(&mut buf, 5, 5, 2, BLACK);
        for y in 0..10usize {
            for x in 0..10usize {
                let dx = x as i32 - 5;
                let dy = y as i32 - 5;
                let inside = dx * dx + dy * dy <= 4;
                assert_eq!(is_black(&buf, x, y), inside, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_radius_still_marks_one_pixel() {
        let mut buf = white_buf(5, 5);
        stamp_disc(&mut buf, 2, 2, 0, BLACK);
        assert!(is_black(&buf, 2, 2));
        assert!(!is_black(&buf, 1, 2));
        assert!(!is_black(&buf, 2, 3));
    }

    #[test]
    fn out_of_bounds_stamps_never_panic() {
        let mut buf = white_buf(8, 8);
        let before = buf.clone();
        stamp_disc(&mut buf, -10, -10, 3, BLACK);
        stamp_disc(&mut buf, 100, 4, 3, BLACK);
        assert!(buf == before);
        // Partially off the edge: the inside part paints, the rest clips.
        stamp_disc(&mut buf, 0, 0, 2, BLACK);
        assert!(is_black(&buf, 0, 0));
        assert!(is_black(&buf, 2, 0));
    }

    #[test]
    fn segment_leaves_no_gaps() {
        let mut buf = white_buf(20, 20);
        stamp_segment(&mut buf, 2, 2, 17, 13, 5, BLACK);
        // Every Bresenham sample along the way must be painted.
        let (mut x, mut y) = (2i32, 2i32);
        let (bx, by) = (17i32, 13i32);
        let dx = (bx - x).abs();
        let dy = -(by - y).abs();
        let mut err = dx + dy;
        loop {
            assert!(is_black(&buf, x as usize, y as usize), "gap at ({x}, {y})");
            if x == bx && y == by {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += 1;
            }
            if e2 <= dx {
                err += dx;
                y += 1;
            }
        }
    }

    #[test]
    fn degenerate_segment_equals_one_disc() {
        let mut via_segment = white_buf(9, 9);
        stamp_segment(&mut via_segment, 4, 4, 4, 4, 5, BLACK);
        let mut via_disc = white_buf(9, 9);
        stamp_disc(&mut via_disc, 4, 4, 2, BLACK);
        assert!(via_segment == via_disc);
    }

    #[test]
    fn stamps_are_idempotent() {
        let mut once = white_buf(12, 12);
        stamp_disc(&mut once, 6, 6, 3, BLACK);
        stamp_segment(&mut once, 1, 1, 10, 4, 4, BLACK);
        let mut twice = once.clone();
        stamp_disc(&mut twice, 6, 6, 3, BLACK);
        stamp_segment(&mut twice, 1, 1, 10, 4, 4, BLACK);
        assert!(once == twice);
    }

    #[test]
    fn pen_size_clamps_and_halves() {
        let mut brush = Brush::new(5);
        assert_eq!(brush.radius(), 2);
        brush.set_pen_size(0);
        assert_eq!(brush.pen_size(), MIN_PEN_SIZE);
        brush.set_pen_size(999);
        assert_eq!(brush.pen_size(), MAX_PEN_SIZE);
    }
}
