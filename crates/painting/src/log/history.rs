//! The outer level of the operation log: pages of strokes.

use serde::{Deserialize, Serialize};

use super::stroke::{Page, Stroke};

/// The full ordered sequence of pages for a drawing session.
///
/// Always holds at least one page. Only the last (current) page is ever
/// mutated; earlier pages become reachable again only once undo has emptied
/// every page after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Page>", into = "Vec<Page>")]
pub struct History {
    pages: Vec<Page>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            pages: vec![Page::new()],
        }
    }
}

impl From<Vec<Page>> for History {
    fn from(pages: Vec<Page>) -> Self {
        Self::from_pages(pages)
    }
}

impl From<History> for Vec<Page> {
    fn from(history: History) -> Self {
        history.pages
    }
}

impl History {
    /// A history with a single page holding `seed`
    pub fn new(seed: Stroke) -> Self {
        Self {
            pages: vec![Page::with_stroke(seed)],
        }
    }

    /// Build from existing pages; an empty list yields one empty page
    ///
    /// Empty pages after the first are dropped, since undo could never move
    /// past them.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        let pages: Vec<Page> = pages
            .into_iter()
            .enumerate()
            .filter(|(index, page)| *index == 0 || !page.is_empty())
            .map(|(_, page)| page)
            .collect();
        if pages.is_empty() {
            return Self::default();
        }
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total strokes across all pages
    pub fn stroke_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// The page receiving new strokes
    pub fn current_page(&self) -> &Page {
        // Invariant: pages is never empty
        &self.pages[self.pages.len() - 1]
    }

    pub(crate) fn current_page_mut(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// The last stroke of the current page, if any
    pub(crate) fn current_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.current_page_mut().last_mut()
    }

    pub(crate) fn push_stroke(&mut self, stroke: Stroke) {
        self.current_page_mut().push(stroke);
    }

    pub(crate) fn open_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove the last stroke of the current page.
    ///
    /// A page emptied this way is dropped unless it is the only one left, in
    /// which case it stays as the single empty page.
    pub(crate) fn pop_stroke(&mut self) -> Option<Stroke> {
        let stroke = self.current_page_mut().pop()?;
        if self.current_page().is_empty() && self.pages.len() > 1 {
            self.pages.pop();
        }
        Some(stroke)
    }
}
