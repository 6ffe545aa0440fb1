// The fundamental storage unit: a row-major 8-bit pixel grid.
// Two of these exist per open document — `original` (frozen at load)
// and `live` (what the brush mutates) — plus the snapshots the
// history stacks hold.

use crate::error::Error;

/// One RGBA pixel. Paint color and cursor color both use this shape;
/// 3-channel buffers simply ignore the last byte on write.
pub type Rgba = [u8; 4];

#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize, // 3 (RGB) or 4 (RGBA), fixed for the buffer's lifetime
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Buffer of `width` x `height`, every pixel set to `pixel`.
    /// The channel count is taken from the fill pixel's length.
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Self {
        let channels = pixel.len();
        let mut data = Vec::with_capacity(width * height * channels);
        for _ in 0..width * height {
            data.extend_from_slice(pixel);
        }
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Wrap raw row-major bytes (e.g. a decoded image). Length must be
    /// exactly width * height * channels.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height * channels);
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * self.channels
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&[u8], Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        Ok(&self.data[i..i + self.channels])
    }

    /// Overwrite the pixel at (x, y). Extra channels in `pixel` beyond the
    /// buffer's own are ignored; no implicit resizing ever happens.
    pub fn set(&mut self, x: usize, y: usize, pixel: &[u8]) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let c = self.channels.min(pixel.len());
        let i = self.index(x, y);
        self.data[i..i + c].copy_from_slice(&pixel[..c]);
        Ok(())
    }

    /// Like `set` but with signed coordinates and silent clipping: writes
    /// outside the buffer are simply dropped. This is the write path the
    /// brush uses, so stamping near (or past) an edge never errors.
    #[inline]
    pub fn set_clipped(&mut self, x: i32, y: i32, pixel: &[u8]) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let c = self.channels.min(pixel.len());
        let i = self.index(x, y);
        self.data[i..i + c].copy_from_slice(&pixel[..c]);
    }

    /// True when the first three channels match `other` at (x, y).
    /// The alpha channel is deliberately excluded — the mask only cares
    /// about visible color differences. Out-of-range coordinates count
    /// as equal (nothing differs where nothing exists).
    pub fn equals_at(&self, other: &PixelBuffer, x: usize, y: usize) -> bool {
        match (self.get(x, y), other.get(x, y)) {
            (Ok(a), Ok(b)) => {
                let n = 3.min(a.len()).min(b.len());
                a[..n] == b[..n]
            }
            _ => true,
        }
    }

    /// Pack into the 0x00RRGGBB layout minifb wants for presentation.
    pub fn to_packed_argb(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for px in self.data.chunks_exact(self.channels) {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            out.push((r << 16) | (g << 8) | b);
        }
        out
    }

    /// Flatten to 3-channel RGB bytes, dropping alpha. Used for export.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height * 3);
        for px in self.data.chunks_exact(self.channels) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}
