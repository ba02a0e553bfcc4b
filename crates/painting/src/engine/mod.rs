//! History engine
//!
//! This module owns the nested operation log and connects:
//! - Input actions (start/continue/end stroke, style, clear, undo, redo)
//! - The log (pages of strokes) and the undo stack
//! - The outbound queue mirroring every committed operation
//! - The surface renderer, driven incrementally or by full replay
//!
//! Every operation runs to completion synchronously; the engine provides no
//! internal locking, so hosts must call it from a single writer.

mod stroke;
mod surface_ops;
mod undo;

use sketchpad_config::CanvasConfig;
use tracing::info;

use crate::log::{History, OutboundQueue, Page, Stroke};
use crate::renderer::{RendererError, SurfaceRenderer};
use crate::surface::DrawingSurface;
use crate::types::{Operation, StrokeStyle};

/// Translates drawing actions into logged operations and keeps the raster
/// in sync with the log.
pub struct HistoryEngine<S: DrawingSurface> {
    pub(crate) renderer: SurfaceRenderer<S>,
    pub(crate) history: History,
    /// Strokes removed by undo, most recent at the end
    pub(crate) undo_stack: Vec<Stroke>,
    pub(crate) outbound: OutboundQueue,
    /// Style embedded in the next stroke
    pub(crate) style: StrokeStyle,
    /// Whether a stroke is in progress
    pub(crate) drawing: bool,
}

impl<S: DrawingSurface> HistoryEngine<S> {
    /// Create an engine drawing onto `surface`
    ///
    /// The history starts with one page holding the `[SetStroke]` seed for the
    /// configured default style; the seed is also the first outbound operation.
    pub fn new(surface: S, config: &CanvasConfig) -> Result<Self, RendererError> {
        let renderer = SurfaceRenderer::new(surface, config)?;
        let style = renderer.default_style();
        let seed = Stroke::seed(style);

        let mut outbound = OutboundQueue::new();
        for op in &seed {
            outbound.push(*op);
        }

        info!(
            "HistoryEngine created: {}x{} canvas, default stroke {} w{}",
            config.width, config.height, style.color, style.width
        );

        Ok(Self {
            renderer,
            history: History::new(seed),
            undo_stack: Vec::new(),
            outbound,
            style,
            drawing: false,
        })
    }

    /// Append an operation to the open stroke and mirror it outbound
    pub(crate) fn commit(&mut self, op: Operation) {
        match self.history.current_stroke_mut() {
            Some(stroke) => stroke.push(op),
            None => self.history.push_stroke(Stroke::from_operations(vec![op])),
        }
        self.outbound.push(op);
    }

    /// The full log
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The page receiving new strokes
    pub fn current_page(&self) -> &Page {
        self.history.current_page()
    }

    /// Strokes available to redo, most recent last
    pub fn undo_stack(&self) -> &[Stroke] {
        &self.undo_stack
    }

    /// Check if undo would remove a stroke
    pub fn can_undo(&self) -> bool {
        !self.history.current_page().is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if a stroke is currently in progress
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Style the next stroke will use
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Operations awaiting the transport
    pub fn outbound(&self) -> &OutboundQueue {
        &self.outbound
    }

    /// Mutable access for the transport (drain, listeners)
    pub fn outbound_mut(&mut self) -> &mut OutboundQueue {
        &mut self.outbound
    }

    /// Remove and return all pending outbound operations
    pub fn drain_outbound(&mut self) -> Vec<Operation> {
        self.outbound.drain()
    }

    pub fn renderer(&self) -> &SurfaceRenderer<S> {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn into_surface(self) -> S {
        self.renderer.into_surface()
    }
}
