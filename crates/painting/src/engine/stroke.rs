//! Stroke input for the history engine

use tracing::debug;

use crate::log::Stroke;
use crate::types::{Color, Operation, Point, StrokeStyle};
use crate::validation::{validate_operation, validate_point};

use super::HistoryEngine;
use crate::surface::DrawingSurface;

impl<S: DrawingSurface> HistoryEngine<S> {
    /// Pen down: open a new stroke at `point`
    ///
    /// Logs the current style followed by `StrokeStart`, draws the start dot
    /// and invalidates pending redo history. A stroke still in progress is
    /// concluded first.
    pub fn start_stroke(&mut self, point: Point) -> bool {
        if validate_point(point).is_err() {
            debug!("start_stroke: non-finite point ({}, {}), ignoring", point.x, point.y);
            return false;
        }
        if self.drawing {
            debug!("start_stroke: previous stroke still open, concluding it");
            self.end_stroke();
        }

        self.history.push_stroke(Stroke::new());
        let style = self.style;
        self.commit(Operation::SetStroke(style));
        self.commit(Operation::StrokeStart(point));

        self.renderer.apply_style(style);
        self.renderer.begin_stroke(point);

        self.undo_stack.clear();
        self.drawing = true;
        true
    }

    /// Pen moved: extend the stroke in progress to `point`
    ///
    /// Ignored when no stroke is in progress (pointer moved without the button down).
    pub fn continue_stroke(&mut self, point: Point) -> bool {
        if !self.drawing {
            return false;
        }
        if validate_point(point).is_err() {
            debug!("continue_stroke: non-finite point ({}, {}), ignoring", point.x, point.y);
            return false;
        }

        self.commit(Operation::StrokeExtend(point));
        self.renderer.extend_stroke(point);
        true
    }

    /// Pen up: conclude the stroke in progress
    ///
    /// Ignored when no stroke is in progress.
    pub fn end_stroke(&mut self) -> bool {
        if !self.drawing {
            debug!("end_stroke: no active stroke, ignoring");
            return false;
        }

        self.commit(Operation::StrokeEnd);
        self.renderer.end_stroke();
        self.drawing = false;
        true
    }

    /// Change the style used by the next stroke
    ///
    /// A stroke already in progress keeps its style. Nothing is logged until
    /// the next `start_stroke`, but pending redo history is discarded.
    /// A non-positive or non-finite width is ignored.
    pub fn set_style(&mut self, color: Color, width: f32) -> bool {
        let style = StrokeStyle::new(color, width);
        if validate_operation(&Operation::SetStroke(style)).is_err() {
            debug!("set_style: invalid width {}, ignoring", width);
            return false;
        }
        self.style = style;
        self.undo_stack.clear();
        true
    }
}
