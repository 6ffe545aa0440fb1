// Window + input wrapper around minifb, plus the software compositing
// the loop needs: the image is presented as a packed u32 buffer and the
// brush-preview cursor is overlaid at the pointer each frame.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::buffer::PixelBuffer;
use crate::error::Error;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the loaded image.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // ~60 fps cap; pointer sampling happens once per frame anyway.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the composed frame to the screen.
    pub fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), Error> {
        self.window
            .update_with_buffer(pixels, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer position in window pixel coordinates, clamped to the
    /// window. These are already buffer-local: the window is sized 1:1
    /// to the image and there is no scroll offset.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.round() as i32, y.round() as i32))
    }

    /// True while the left button is held; the loop turns the edges of
    /// this into press/release and the held frames into drags.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn undo_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::U, KeyRepeat::No)
    }

    pub fn redo_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    pub fn save_mask_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::M, KeyRepeat::No)
    }

    pub fn save_painted_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::P, KeyRepeat::No)
    }

    /// Pen size nudges; repeat enabled so holding the key sweeps the
    /// whole 1..=50 range comfortably.
    pub fn pen_smaller_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::LeftBracket, KeyRepeat::Yes)
    }

    pub fn pen_larger_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::RightBracket, KeyRepeat::Yes)
    }
}

/// Composite the cursor preview over the frame, centered at (cx, cy).
/// Only the preview's opaque pixels land; its transparent background and
/// anything clipped by the frame edge are skipped.
pub fn overlay_cursor(
    frame: &mut [u32],
    width: usize,
    height: usize,
    preview: &PixelBuffer,
    cx: i32,
    cy: i32,
) {
    let side = preview.width() as i32;
    let half = side / 2;
    for py in 0..side {
        for px in 0..side {
            let Ok(pixel) = preview.get(px as usize, py as usize) else {
                continue;
            };
            if pixel[3] == 0 {
                continue;
            }
            let x = cx - half + px;
            let y = cy - half + py;
            if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
                continue;
            }
            let (r, g, b) = (pixel[0] as u32, pixel[1] as u32, pixel[2] as u32);
            frame[y as usize * width + x as usize] = (r << 16) | (g << 8) | b;
        }
    }
}
