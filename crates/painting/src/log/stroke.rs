//! Strokes and pages: the two inner levels of the operation log.

use serde::{Deserialize, Serialize};

use crate::types::{Operation, StrokeStyle};

/// One logical drawing action, logged as an ordered list of operations.
///
/// A complete stroke is `[SetStroke, StrokeStart, StrokeExtend*, StrokeEnd]`.
/// A page's seed stroke is `[SetStroke]` or `[ClearMarker, SetStroke]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    ops: Vec<Operation>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `[SetStroke]` stroke that opens a fresh history
    pub fn seed(style: StrokeStyle) -> Self {
        Self {
            ops: vec![Operation::SetStroke(style)],
        }
    }

    /// The `[ClearMarker, SetStroke]` stroke that opens a page after a clear
    pub fn clear_seed(style: StrokeStyle) -> Self {
        Self {
            ops: vec![Operation::ClearMarker, Operation::SetStroke(style)],
        }
    }

    pub fn from_operations(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn first(&self) -> Option<&Operation> {
        self.ops.first()
    }

    /// Whether redoing this stroke must open a new page
    pub fn opens_page(&self) -> bool {
        matches!(self.ops.first(), Some(Operation::ClearMarker))
    }

    /// Whether the pen was lifted at the end of this stroke
    pub fn is_finished(&self) -> bool {
        matches!(self.ops.last(), Some(Operation::StrokeEnd))
    }
}

impl<'a> IntoIterator for &'a Stroke {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// All strokes drawn since the last clear
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    strokes: Vec<Stroke>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke(stroke: Stroke) -> Self {
        Self {
            strokes: vec![stroke],
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// True when nothing was drawn on this page: a single seed stroke of at
    /// most `max_ops` operations
    pub fn is_untouched(&self, max_ops: usize) -> bool {
        self.strokes.len() == 1 && self.strokes[0].len() <= max_ops
    }

    /// Every operation of every stroke, in log order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.strokes.iter().flat_map(|stroke| stroke.iter())
    }
}
