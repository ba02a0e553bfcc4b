/// Largest canvas edge a surface will allocate. Not a magic number - may change.
pub const MAX_SURFACE_DIMENSION: u32 = 16384;

/// Operation count of a page's seed stroke when nothing was drawn since the
/// last clear: `[SetStroke]` on a fresh canvas, `[ClearMarker, SetStroke]` on a
/// cleared one.
pub const SEED_STROKE_MAX_OPS: usize = 2;

/// Background the surface is wiped to (transparent black).
pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
