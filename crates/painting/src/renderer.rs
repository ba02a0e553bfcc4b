//! Surface renderer: maps an ordered operation sequence onto a raster surface
//!
//! The renderer's only state is the applied stroke style and the current pen
//! position, so replaying the same operations from a wiped surface always
//! produces the same pixels.

use sketchpad_config::CanvasConfig;
use thiserror::Error;
use tracing::{debug, trace};

use crate::surface::{DrawingSurface, Paint, SurfaceError};
use crate::types::{ColorParseError, Operation, Point, StrokeStyle};
use crate::validation::{validate_operation, ValidationError};

/// Fatal errors raised while constructing a renderer
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Raster context unavailable: {0}")]
    ContextUnavailable(#[from] SurfaceError),
    #[error("Invalid default stroke style: {0}")]
    InvalidStyle(#[from] ColorParseError),
    #[error("Invalid default stroke width: {0}")]
    InvalidWidth(#[from] ValidationError),
}

pub struct SurfaceRenderer<S: DrawingSurface> {
    surface: S,
    /// Style restored at the start of every replay
    default_style: StrokeStyle,
    /// Style currently applied to the surface
    style: StrokeStyle,
    /// Last pen position; None between strokes
    pen: Option<Point>,
    width: u32,
    height: u32,
}

impl<S: DrawingSurface> SurfaceRenderer<S> {
    /// Acquire the surface at the configured canvas size and apply the default style
    pub fn new(mut surface: S, config: &CanvasConfig) -> Result<Self, RendererError> {
        let default_style = StrokeStyle::from_config(config)?;
        validate_operation(&Operation::SetStroke(default_style))?;
        surface.acquire(config.width, config.height)?;

        let mut renderer = Self {
            surface,
            default_style,
            style: default_style,
            pen: None,
            width: config.width,
            height: config.height,
        };
        renderer.apply_style(default_style);
        Ok(renderer)
    }

    /// Set color and width for subsequent drawing
    pub fn apply_style(&mut self, style: StrokeStyle) {
        self.style = style;
        self.surface.set_paint(&Paint {
            color: style.color.to_rgba_f32(),
            width: style.width,
        });
    }

    /// Move the pen to `point` and stamp a dot so single taps are visible
    pub fn begin_stroke(&mut self, point: Point) {
        self.surface.fill_circle(point, self.style.width / 2.0);
        self.pen = Some(point);
    }

    /// Draw a segment from the pen to `point`
    ///
    /// Without a preceding `begin_stroke` this starts a stroke at `point` instead.
    pub fn extend_stroke(&mut self, point: Point) {
        match self.pen {
            Some(from) => {
                self.surface.stroke_segment(from, point);
                self.pen = Some(point);
            }
            None => {
                debug!("extend_stroke without a pen position, starting at ({:.1}, {:.1})", point.x, point.y);
                self.begin_stroke(point);
            }
        }
    }

    /// Lift the pen; the next stroke starts a fresh path
    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Wipe the raster
    pub fn clear_surface(&mut self) {
        self.surface.clear();
        self.pen = None;
    }

    /// Apply a single operation to the surface
    pub fn apply(&mut self, op: &Operation) {
        trace!("apply {}", op.kind());
        match *op {
            Operation::SetStroke(style) => self.apply_style(style),
            Operation::StrokeStart(point) => self.begin_stroke(point),
            Operation::StrokeExtend(point) => self.extend_stroke(point),
            Operation::StrokeEnd => self.end_stroke(),
            Operation::ClearMarker => self.clear_surface(),
        }
    }

    /// Apply operations on top of the current raster, without wiping it
    pub fn apply_all<'a>(&mut self, ops: impl IntoIterator<Item = &'a Operation>) {
        for op in ops {
            self.apply(op);
        }
    }

    /// Reconstruct the raster from scratch: wipe, restore the default style,
    /// then apply `ops` in order
    pub fn replay<'a>(&mut self, ops: impl IntoIterator<Item = &'a Operation>) {
        self.clear_surface();
        self.apply_style(self.default_style);
        self.apply_all(ops);
    }

    /// Style currently applied to the surface
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Style every replay starts from
    pub fn default_style(&self) -> StrokeStyle {
        self.default_style
    }

    /// Current pen position, if a stroke is open
    pub fn pen(&self) -> Option<Point> {
        self.pen
    }

    /// Logical canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CpuSurface;
    use crate::types::Color;

    /// Records draw calls instead of rasterizing
    #[derive(Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl DrawingSurface for CallLog {
        fn acquire(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
            self.calls.push(format!("acquire {width}x{height}"));
            Ok(())
        }

        fn set_paint(&mut self, paint: &Paint) {
            self.calls.push(format!("paint {}", paint.width));
        }

        fn fill_circle(&mut self, center: Point, radius: f32) {
            self.calls.push(format!("circle {},{} r{}", center.x, center.y, radius));
        }

        fn stroke_segment(&mut self, from: Point, to: Point) {
            self.calls.push(format!("segment {},{} -> {},{}", from.x, from.y, to.x, to.y));
        }

        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }
    }

    fn small_config() -> CanvasConfig {
        CanvasConfig::new(32, 32)
    }

    #[test]
    fn test_construction_acquires_surface_and_applies_default_style() {
        let renderer = SurfaceRenderer::new(CallLog::default(), &small_config()).unwrap();
        assert_eq!(renderer.surface().calls, vec!["acquire 32x32", "paint 2"]);
        assert_eq!(renderer.style(), StrokeStyle::default());
        assert_eq!(renderer.dimensions(), (32, 32));
    }

    #[test]
    fn test_construction_fails_without_context() {
        let result = SurfaceRenderer::new(CpuSurface::new(0, 0), &CanvasConfig::new(0, 0));
        assert!(matches!(result, Err(RendererError::ContextUnavailable(_))));
    }

    #[test]
    fn test_construction_fails_with_bad_default_color() {
        let config = small_config().with_stroke("not-a-color", 2.0);
        let result = SurfaceRenderer::new(CpuSurface::new(32, 32), &config);
        assert!(matches!(result, Err(RendererError::InvalidStyle(_))));
    }

    #[test]
    fn test_construction_fails_with_bad_default_width() {
        for width in [0.0, -3.0, f32::NAN] {
            let config = small_config().with_stroke("#000", width);
            let result = SurfaceRenderer::new(CallLog::default(), &config);
            assert!(matches!(result, Err(RendererError::InvalidWidth(_))), "width={width}");
        }
    }

    #[test]
    fn test_dispatch() {
        let mut renderer = SurfaceRenderer::new(CallLog::default(), &small_config()).unwrap();
        renderer.surface_mut().calls.clear();

        renderer.apply_all(&[
            Operation::SetStroke(StrokeStyle::new(Color::BLACK, 4.0)),
            Operation::StrokeStart(Point::new(1.0, 1.0)),
            Operation::StrokeExtend(Point::new(2.0, 3.0)),
            Operation::StrokeEnd,
        ]);

        assert_eq!(
            renderer.surface().calls,
            vec!["paint 4", "circle 1,1 r2", "segment 1,1 -> 2,3"]
        );
        assert_eq!(renderer.pen(), None);
    }

    #[test]
    fn test_extend_without_begin_recovers_as_begin() {
        let mut renderer = SurfaceRenderer::new(CallLog::default(), &small_config()).unwrap();
        renderer.surface_mut().calls.clear();

        renderer.extend_stroke(Point::new(5.0, 5.0));
        renderer.extend_stroke(Point::new(6.0, 5.0));

        assert_eq!(renderer.surface().calls, vec!["circle 5,5 r1", "segment 5,5 -> 6,5"]);
    }

    #[test]
    fn test_replay_resets_style_and_wipes() {
        let mut renderer = SurfaceRenderer::new(CallLog::default(), &small_config()).unwrap();
        renderer.apply_style(StrokeStyle::new(Color::WHITE, 9.0));
        renderer.surface_mut().calls.clear();

        renderer.replay(&[Operation::StrokeStart(Point::new(0.0, 0.0))]);

        assert_eq!(renderer.surface().calls, vec!["clear", "paint 2", "circle 0,0 r1"]);
        assert_eq!(renderer.style(), StrokeStyle::default());
    }

    #[test]
    fn test_replay_is_pixel_identical() {
        let ops = [
            Operation::SetStroke(StrokeStyle::new(Color::rgba(200, 10, 10, 128), 5.0)),
            Operation::StrokeStart(Point::new(4.0, 4.0)),
            Operation::StrokeExtend(Point::new(20.0, 12.0)),
            Operation::StrokeExtend(Point::new(8.0, 28.0)),
            Operation::StrokeEnd,
        ];

        let mut a = SurfaceRenderer::new(CpuSurface::new(32, 32), &small_config()).unwrap();
        let mut b = SurfaceRenderer::new(CpuSurface::new(32, 32), &small_config()).unwrap();
        a.replay(&ops);
        b.replay(&ops);
        assert!(!a.surface().is_blank());
        assert_eq!(a.surface(), b.surface());

        // Replaying again over the drawn raster gives the same result
        a.replay(&ops);
        assert_eq!(a.surface(), b.surface());
    }

    #[test]
    fn test_clear_marker_wipes() {
        let mut renderer = SurfaceRenderer::new(CpuSurface::new(32, 32), &small_config()).unwrap();
        renderer.apply_all(&[
            Operation::StrokeStart(Point::new(10.0, 10.0)),
            Operation::StrokeEnd,
        ]);
        assert!(!renderer.surface().is_blank());
        renderer.apply(&Operation::ClearMarker);
        assert!(renderer.surface().is_blank());
    }
}
