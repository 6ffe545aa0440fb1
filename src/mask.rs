// The exported artifact: a binary map of which pixels the user painted,
// computed by diffing the live buffer against the frozen original.

use crate::buffer::PixelBuffer;
use crate::error::Error;

/// Single-channel W x H grid, each cell 0 or 255. Derived on demand;
/// never stored between extractions.
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Mask {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at (x, y); out-of-range reads as 0 (unpainted).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.cells[y * self.width + x]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Compare `live` against `original` pixel by pixel: 255 where any of the
/// first three channels differ, 0 elsewhere. Alpha never contributes.
/// A dimension mismatch is a state bug, not a user action, so it errors.
pub fn extract(original: &PixelBuffer, live: &PixelBuffer) -> Result<Mask, Error> {
    if original.width() != live.width() || original.height() != live.height() {
        return Err(Error::SizeMismatch(
            original.width(),
            original.height(),
            live.width(),
            live.height(),
        ));
    }
    let (w, h) = (original.width(), original.height());
    let mut cells = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            if !original.equals_at(live, x, y) {
                cells[y * w + x] = 255;
            }
        }
    }
    Ok(Mask {
        width: w,
        height: h,
        cells,
    })
}
