//! Whole-surface operations for the history engine

use tracing::{debug, info};

use crate::constants::SEED_STROKE_MAX_OPS;
use crate::log::{History, Page, Stroke};
use crate::surface::DrawingSurface;
use crate::types::Operation;

use super::HistoryEngine;

impl<S: DrawingSurface> HistoryEngine<S> {
    /// Wipe the surface and start a new page
    ///
    /// Ignored when nothing was drawn since the last clear, so repeated
    /// clears do not pile up empty pages. Otherwise the new page is seeded
    /// with `[ClearMarker, SetStroke]`, `ClearMarker` is sent outbound and
    /// pending redo history is discarded.
    pub fn clear(&mut self) -> bool {
        if self.drawing {
            self.end_stroke();
        }

        if self.history.current_page().is_untouched(SEED_STROKE_MAX_OPS) {
            debug!("Clear: nothing drawn since the last clear, ignoring");
            return false;
        }

        let seed = Stroke::clear_seed(self.style);
        self.renderer.apply_all(&seed);
        self.history.open_page(Page::with_stroke(seed));
        self.outbound.push(Operation::ClearMarker);
        self.undo_stack.clear();

        debug!("Cleared surface, now {} pages", self.history.page_count());
        true
    }

    /// Wipe the raster and replay the current page
    pub fn redraw(&mut self) {
        self.renderer.replay(self.history.current_page().operations());
    }

    /// Replace the log, e.g. with a snapshot on initial load or resync
    ///
    /// Pending redo history and any stroke in progress are discarded; the
    /// outbound queue is left untouched.
    pub fn load(&mut self, history: History) {
        info!(
            "Loading history: {} pages, {} strokes",
            history.page_count(),
            history.stroke_count()
        );
        self.history = history;
        self.undo_stack.clear();
        self.drawing = false;
        self.redraw();
    }
}
