// Mask painter:
// • Load an image, paint opaque black strokes over it with the mouse.
// • One press-drag-release is one undo unit.  U undoes, R redoes.
// • [ and ] shrink/grow the pen (1..=50); the cursor shows the footprint.
// • M saves the binary difference mask, P saves the painted image. ESC quits.

mod brush;
mod buffer;
mod cursor;
mod draw;
mod editor;
mod error;
mod history;
mod io;
mod mask;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info, warn};

use draw::{overlay_cursor, Drawer};
use editor::Editor;
use error::Error;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: mask-painter <image>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("mask-painter: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), Error> {
    /* --- Document setup ---
       Decode first; the editor only ever sees a complete image. */
    let decoded = io::load_image(path)?;
    let (width, height) = (decoded.width(), decoded.height());
    let mut editor = Editor::new();
    editor.load(decoded);

    let mask_path = path.with_extension("mask.png");
    let painted_path = path.with_extension("painted.png");

    let mut drawer = Drawer::new("Mask Painter", width, height)?;

    /* --- Presentation buffers (reused every frame) ---
       `base` is the live image packed for minifb, rebuilt only when the
       editor mutates; `frame` is base plus the cursor overlay. */
    let mut base = editor
        .live()
        .map(|live| live.to_packed_argb())
        .unwrap_or_default();
    let mut frame = base.clone();

    let mut preview = cursor::render(editor.brush().pen_size(), editor.brush().color());
    let mut was_down = false;

    while drawer.is_open() && !drawer.esc_pressed() {
        let mut dirty = false;

        /* 1) Pen size keys (cursor footprint follows immediately). */
        let mut pen = editor.brush().pen_size();
        if drawer.pen_smaller_pressed() {
            pen -= 1;
        }
        if drawer.pen_larger_pressed() {
            pen += 1;
        }
        if pen != editor.brush().pen_size() {
            editor.set_pen_size(pen);
            preview = cursor::render(editor.brush().pen_size(), editor.brush().color());
            info!("pen size {}", editor.brush().pen_size());
        }

        /* 2) Pointer: turn the held-button state into stroke events.
           Every sampled position contributes its stamp before we redraw. */
        let is_down = drawer.left_mouse_down();
        if let Some((mx, my)) = drawer.mouse_pos() {
            if is_down && !was_down {
                editor.press(mx, my);
            }
            if is_down {
                dirty |= editor.drag(mx, my);
            }
        }
        if !is_down && was_down {
            editor.release();
        }
        was_down = is_down;

        /* 3) History keys. */
        if drawer.undo_pressed() && editor.undo() {
            info!("undo ({} left)", editor.undo_depth());
            dirty = true;
        }
        if drawer.redo_pressed() && editor.redo() {
            info!("redo");
            dirty = true;
        }

        /* 4) Exports. Failures are logged, not fatal; the session goes on. */
        if drawer.save_mask_pressed() {
            match editor.extract_mask()? {
                Some(mask) => {
                    if let Err(e) = io::save_mask(&mask_path, &mask) {
                        warn!("{e}");
                    }
                }
                None => warn!("no image loaded; nothing to save"),
            }
        }
        if drawer.save_painted_pressed() {
            match editor.live() {
                Some(live) => {
                    if let Err(e) = io::save_painted(&painted_path, live) {
                        warn!("{e}");
                    }
                }
                None => warn!("no image loaded; nothing to save"),
            }
        }

        /* 5) Present: repack only when the image changed, then overlay
           the brush cursor at the pointer. */
        if dirty {
            if let Some(live) = editor.live() {
                base = live.to_packed_argb();
            }
        }
        frame.copy_from_slice(&base);
        if let Some((mx, my)) = drawer.mouse_pos() {
            overlay_cursor(&mut frame, width, height, &preview, mx, my);
        }
        drawer.present(&frame, width, height)?;
    }

    Ok(())
}
