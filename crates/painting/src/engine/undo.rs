//! Undo and redo for the history engine
//!
//! Undo and redo are local: neither touches the outbound queue.

use tracing::debug;

use crate::log::Page;
use crate::surface::DrawingSurface;

use super::HistoryEngine;

impl<S: DrawingSurface> HistoryEngine<S> {
    /// Undo the last stroke of the current page
    ///
    /// The stroke moves to the undo stack. A page emptied this way is dropped
    /// (unless it is the only page), which makes the page before it current
    /// again. The raster is then rebuilt by replaying the current page.
    ///
    /// Returns true if an undo was performed, false if the current page is empty.
    pub fn undo(&mut self) -> bool {
        if self.drawing {
            self.end_stroke();
        }

        let Some(stroke) = self.history.pop_stroke() else {
            debug!("Undo: current page is empty");
            return false;
        };

        debug!(
            "Undoing stroke of {} operations ({} pages, {} on undo stack)",
            stroke.len(),
            self.history.page_count(),
            self.undo_stack.len() + 1
        );
        self.undo_stack.push(stroke);
        self.redraw();
        true
    }

    /// Redo the most recently undone stroke
    ///
    /// A stroke that begins with a clear marker reopens its page. Redo is
    /// strictly additive, so the stroke is drawn on top of the current raster
    /// rather than replaying the page.
    ///
    /// Returns true if a redo was performed, false if the undo stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undo_stack.pop() else {
            debug!("Redo: undo stack is empty");
            return false;
        };

        if stroke.opens_page() {
            self.history.open_page(Page::new());
        }
        self.renderer.apply_all(&stroke);
        self.history.push_stroke(stroke);
        true
    }
}
