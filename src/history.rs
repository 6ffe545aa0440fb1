// Undo/redo as two stacks of full-buffer snapshots. A snapshot lives in
// exactly one stack at a time and moves (never copies) between them as
// the live buffer swaps through. The undo side is capped and evicts its
// oldest entry, so week-long sessions cannot eat all memory.

use std::collections::VecDeque;

use crate::buffer::PixelBuffer;

pub const DEFAULT_HISTORY_CAP: usize = 64;

pub struct History {
    undo: VecDeque<PixelBuffer>, // most-recent-last; front is evicted at cap
    redo: Vec<PixelBuffer>,      // most-recent-last
    cap: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Record the pre-stroke state. Any pending redo branch dies here:
    /// once a new stroke lands, the undone future is gone.
    pub fn record(&mut self, snapshot: PixelBuffer) {
        self.redo.clear();
        if self.undo.len() == self.cap {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    /// Swap `live` back one step. Returns false (leaving `live` alone)
    /// when there is nothing to undo.
    pub fn undo(&mut self, live: &mut PixelBuffer) -> bool {
        match self.undo.pop_back() {
            Some(prev) => {
                self.redo.push(std::mem::replace(live, prev));
                true
            }
            None => false,
        }
    }

    /// Symmetric to `undo`, replaying one undone step.
    pub fn redo(&mut self, live: &mut PixelBuffer) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push_back(std::mem::replace(live, next));
                true
            }
            None => false,
        }
    }

    /// Drop everything. History is meaningless across image loads.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
