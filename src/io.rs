// File boundary: decode whatever `image` can read into an RGBA
// PixelBuffer, and encode the two export products (painted copy, binary
// mask) as PNG. The editor itself never touches the filesystem.

use std::path::Path;

use image::ExtendedColorType;
use log::info;

use crate::buffer::PixelBuffer;
use crate::error::Error;
use crate::mask::Mask;

/// Decode an image file and normalize it to 4-channel RGBA, whatever the
/// source format carried. The caller installs the result in the editor
/// only on success, so a failed load never disturbs the current document.
pub fn load_image(path: &Path) -> Result<PixelBuffer, Error> {
    let decoded = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    info!("loaded {} ({w}x{h})", path.display());
    Ok(PixelBuffer::from_raw(w, h, 4, rgba.into_raw()))
}

/// Write the painted buffer as a conventional 3-channel PNG.
pub fn save_painted(path: &Path, live: &PixelBuffer) -> Result<(), Error> {
    let (w, h) = (live.width() as u32, live.height() as u32);
    image::save_buffer(path, &live.to_rgb_bytes(), w, h, ExtendedColorType::Rgb8).map_err(
        |source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        },
    )?;
    info!("saved painted image to {}", path.display());
    Ok(())
}

/// Write the mask as a 3-channel PNG with the 0/255 cells replicated
/// into every channel: white where painted, black elsewhere.
pub fn save_mask(path: &Path, mask: &Mask) -> Result<(), Error> {
    let (w, h) = (mask.width() as u32, mask.height() as u32);
    let mut bytes = Vec::with_capacity(mask.cells().len() * 3);
    for &cell in mask.cells() {
        bytes.extend_from_slice(&[cell, cell, cell]);
    }
    image::save_buffer(path, &bytes, w, h, ExtendedColorType::Rgb8).map_err(|source| {
        Error::ImageSave {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("saved mask to {}", path.display());
    Ok(())
}
