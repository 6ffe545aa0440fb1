// One editor per open document. Owns the frozen original, the live
// buffer the brush mutates, the brush parameters, and the undo/redo
// history, and runs the stroke state machine:
//
//   Idle --press--> Active --release--> Idle
//
// A whole press-drag-release stroke is a single undo unit: the only
// snapshot is taken at press time, before the first stamp lands.

use log::trace;

use crate::brush::{self, Brush};
use crate::buffer::PixelBuffer;
use crate::error::Error;
use crate::history::History;
use crate::mask::{self, Mask};

pub struct Editor {
    original: Option<PixelBuffer>, // frozen at load, the diff baseline
    live: Option<PixelBuffer>,     // what the brush paints into
    history: History,
    brush: Brush,
    last_point: Option<(i32, i32)>,
    drawing: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    pub fn with_history(history: History) -> Self {
        Self {
            original: None,
            live: None,
            history,
            brush: Brush::default(),
            last_point: None,
            drawing: false,
        }
    }

    /// Install a freshly decoded image. Both buffers are replaced
    /// together and all prior history is dropped; nothing of the old
    /// document survives. All-or-nothing: a failed decode never reaches
    /// this point, so `live` is never left half-loaded.
    pub fn load(&mut self, decoded: PixelBuffer) {
        self.live = Some(decoded.clone());
        self.original = Some(decoded);
        self.history.clear();
        self.last_point = None;
        self.drawing = false;
    }

    pub fn is_loaded(&self) -> bool {
        self.live.is_some()
    }

    pub fn live(&self) -> Option<&PixelBuffer> {
        self.live.as_ref()
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_pen_size(&mut self, size: i32) {
        self.brush.set_pen_size(size);
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.brush.set_alpha(alpha);
    }

    /// Pointer pressed: snapshot the pre-stroke state onto the undo
    /// stack (killing any redo branch) and arm the stroke. Nothing is
    /// painted yet; the first stamp comes with the first move sample.
    /// Without a loaded image this is a silent no-op.
    pub fn press(&mut self, x: i32, y: i32) {
        let Some(live) = self.live.as_ref() else {
            return;
        };
        if self.drawing {
            return; // already mid-stroke; one snapshot per stroke
        }
        self.history.record(live.clone());
        self.drawing = true;
        self.last_point = Some((x, y));
        trace!("stroke start at ({x}, {y})");
    }

    /// Pointer moved while pressed: stamp a disc at the new sample and a
    /// thick segment back to the previous one, then advance the anchor.
    /// Returns true when the live buffer changed (the caller redraws).
    pub fn drag(&mut self, x: i32, y: i32) -> bool {
        if !self.drawing {
            return false;
        }
        let Some(live) = self.live.as_mut() else {
            return false;
        };
        let color = self.brush.color();
        brush::stamp_disc(live, x, y, self.brush.radius(), color);
        if let Some((lx, ly)) = self.last_point {
            brush::stamp_segment(live, lx, ly, x, y, self.brush.pen_size(), color);
        }
        self.last_point = Some((x, y));
        true
    }

    /// Pointer released: back to Idle. No snapshot here — the one taken
    /// at press already covers the whole stroke.
    pub fn release(&mut self) {
        if self.drawing {
            trace!("stroke end");
        }
        self.drawing = false;
        self.last_point = None;
    }

    /// Step the live buffer back one stroke. No-op with empty history,
    /// mid-stroke, or before a load. Returns true when a redraw is due.
    pub fn undo(&mut self) -> bool {
        if self.drawing {
            return false;
        }
        match self.live.as_mut() {
            Some(live) => self.history.undo(live),
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.drawing {
            return false;
        }
        match self.live.as_mut() {
            Some(live) => self.history.redo(live),
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_len()
    }

    /// Diff the live buffer against the original. None before a load
    /// (nothing to diff, matching the tool's silent-ignore behavior).
    pub fn extract_mask(&self) -> Result<Option<Mask>, Error> {
        match (&self.original, &self.live) {
            (Some(original), Some(live)) => Ok(Some(mask::extract(original, live)?)),
            _ => Ok(None),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn loaded_editor(w: usize, h: usize) -> Editor {
        let mut editor = Editor::new();
        editor.load(PixelBuffer::filled(w, h, &WHITE));
        editor
    }

    fn stroke(editor: &mut Editor, points: &[(i32, i32)]) {
        let (x0, y0) = points[0];
        editor.press(x0, y0);
        for &(x, y) in points {
            editor.drag(x, y);
        }
        editor.release();
    }

    #[test]
    fn actions_before_load_are_no_ops() {
        let mut editor = Editor::new();
        editor.press(1, 1);
        assert!(!editor.drag(2, 2));
        editor.release();
        assert!(!editor.undo());
        assert!(!editor.redo());
        assert_eq!(editor.undo_depth(), 0);
        assert!(editor.extract_mask().unwrap().is_none());
    }

    #[test]
    fn degenerate_stroke_paints_once_and_records_once() {
        let mut editor = loaded_editor(8, 8);
        stroke(&mut editor, &[(2, 2)]);
        assert_eq!(editor.undo_depth(), 1);
        let mask = editor.extract_mask().unwrap().unwrap();
        assert_eq!(mask.get(2, 2), 255);
    }

    #[test]
    fn undo_depth_is_one_per_stroke_regardless_of_moves() {
        let mut editor = loaded_editor(30, 30);
        stroke(&mut editor, &[(2, 2), (3, 3), (4, 4), (5, 5)]);
        stroke(&mut editor, &[(10, 10), (11, 10)]);
        stroke(&mut editor, &[(20, 20)]);
        assert_eq!(editor.undo_depth(), 3);
    }

    #[test]
    fn undo_n_then_redo_n_restores_the_last_state() {
        let mut editor = loaded_editor(30, 30);
        stroke(&mut editor, &[(5, 5), (6, 6)]);
        stroke(&mut editor, &[(15, 15), (16, 16)]);
        stroke(&mut editor, &[(25, 25)]);
        let after_third = editor.live().unwrap().clone();

        for _ in 0..3 {
            assert!(editor.undo());
        }
        // Back to the freshly loaded image.
        assert!(editor
            .extract_mask()
            .unwrap()
            .unwrap()
            .cells()
            .iter()
            .all(|&c| c == 0));

        for _ in 0..3 {
            assert!(editor.redo());
        }
        assert!(*editor.live().unwrap() == after_third);
    }

    #[test]
    fn painting_after_undo_kills_redo() {
        let mut editor = loaded_editor(20, 20);
        stroke(&mut editor, &[(5, 5)]);
        assert!(editor.undo());
        stroke(&mut editor, &[(10, 10)]);
        let before = editor.live().unwrap().clone();
        assert!(!editor.redo());
        assert!(*editor.live().unwrap() == before);
    }

    #[test]
    fn undo_and_redo_are_ignored_mid_stroke() {
        let mut editor = loaded_editor(20, 20);
        stroke(&mut editor, &[(5, 5)]);
        editor.press(10, 10);
        editor.drag(10, 10);
        assert!(!editor.undo());
        assert!(!editor.redo());
        editor.release();
        assert_eq!(editor.undo_depth(), 2);
    }

    #[test]
    fn load_replaces_everything_atomically() {
        let mut editor = loaded_editor(10, 10);
        stroke(&mut editor, &[(3, 3)]);
        assert_eq!(editor.undo_depth(), 1);

        editor.load(PixelBuffer::filled(6, 6, &[9, 9, 9, 255]));
        assert_eq!(editor.undo_depth(), 0);
        assert!(!editor.undo());
        let mask = editor.extract_mask().unwrap().unwrap();
        assert_eq!(mask.width(), 6);
        assert!(mask.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn history_cap_is_respected_through_the_editor() {
        let mut editor = Editor::with_history(History::with_cap(2));
        editor.load(PixelBuffer::filled(10, 10, &WHITE));
        for i in 0..4 {
            stroke(&mut editor, &[(i, i)]);
        }
        assert_eq!(editor.undo_depth(), 2);
    }

    #[test]
    fn stroke_between_samples_is_continuous() {
        let mut editor = loaded_editor(40, 40);
        editor.press(5, 20);
        editor.drag(5, 20);
        editor.drag(35, 20); // one fast drag across the buffer
        editor.release();
        let mask = editor.extract_mask().unwrap().unwrap();
        for x in 5..=35usize {
            assert_eq!(mask.get(x, 20), 255, "gap at x = {x}");
        }
    }
}
