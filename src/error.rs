// Every variant states *where* things went wrong. Silent conditions
// (empty history, clipped stamps, actions before a load) never show up
// here on purpose; only genuine failures do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A direct get/set outside the buffer. Brush stamping clips instead
    /// of returning this.
    #[error("coordinate ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Mask extraction over buffers of different dimensions. This means
    /// state management broke somewhere, so it is surfaced rather than
    /// clipped away.
    #[error("buffer sizes differ: {0}x{1} vs {2}x{3}")]
    SizeMismatch(usize, usize, usize, usize),

    #[error("failed to load {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to save {path}: {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}
