//! Raster surface contract and a CPU RGBA implementation

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::constants::{BACKGROUND, MAX_SURFACE_DIMENSION};
use crate::types::Point;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Failed to encode surface: {0}")]
    Encode(#[from] image::ImageError),
}

/// Paint state applied to subsequent draw calls
///
/// Line caps and joins are always round; they are not part of the paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Stroke and fill color, normalized RGBA
    pub color: [f32; 4],
    /// Line width in logical units
    pub width: f32,
}

/// The primitive drawing calls the renderer needs from a raster context.
///
/// Implementations own the pixels; the renderer only issues draw calls and
/// never reads them back.
pub trait DrawingSurface {
    /// Fix the logical canvas size. Failure means no usable raster context.
    fn acquire(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Set color and line width for subsequent fills and strokes
    fn set_paint(&mut self, paint: &Paint);

    /// Fill a disc centered at `center`
    fn fill_circle(&mut self, center: Point, radius: f32);

    /// Stroke a straight, round-capped segment with the current line width
    fn stroke_segment(&mut self, from: Point, to: Point);

    /// Wipe the whole surface to the background
    fn clear(&mut self);
}

/// A CPU RGBA surface
/// Stores pixels as [f32; 4] in row-major order, initialized transparent
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    paint: Paint,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; pixel_count],
            paint: Paint {
                color: [0.0, 0.0, 0.0, 1.0],
                width: 1.0,
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Source-over blend of `color` onto the pixel at (x, y)
    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        let index = self.index(x, y);
        let dst = self.pixels[index];
        let src_alpha = color[3];
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = [
            color[0] * src_alpha + dst[0] * inv_src_alpha,
            color[1] * src_alpha + dst[1] * inv_src_alpha,
            color[2] * src_alpha + dst[2] * inv_src_alpha,
            src_alpha + dst[3] * inv_src_alpha,
        ];
    }

    /// Blend the current paint into every pixel whose center satisfies `covers`,
    /// scanning only the clamped bounding box [x0, x1) x [y0, y1).
    fn cover(&mut self, bounds: (f32, f32, f32, f32), covers: impl Fn(f32, f32) -> bool) {
        let (x0, y0, x1, y1) = bounds;
        let x_min = (x0.floor().max(0.0) as u32).min(self.width);
        let y_min = (y0.floor().max(0.0) as u32).min(self.height);
        let x_max = (x1.ceil().max(0.0) as u32).min(self.width);
        let y_max = (y1.ceil().max(0.0) as u32).min(self.height);

        let color = self.paint.color;
        for py in y_min..y_max {
            for px in x_min..x_max {
                if covers(px as f32 + 0.5, py as f32 + 0.5) {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// True when no pixel differs from the background
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == BACKGROUND)
    }

    /// Number of pixels that differ from the background
    pub fn painted_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p != BACKGROUND).count()
    }

    /// Get raw pixel data, suitable for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Quantize to an 8-bit RGBA image
    pub fn to_rgba8(&self) -> image::RgbaImage {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, a] = self.pixels[self.index(x, y)];
            image::Rgba([quantize(r), quantize(g), quantize(b), quantize(a)])
        })
    }

    /// Write the surface to a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        self.to_rgba8()
            .save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        debug!("Saved {}x{} surface to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

impl DrawingSurface for CpuSurface {
    fn acquire(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 || width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        if width != self.width || height != self.height {
            debug!("CpuSurface: resizing {}x{} -> {}x{}", self.width, self.height, width, height);
            *self = CpuSurface {
                paint: self.paint,
                ..CpuSurface::new(width, height)
            };
        }
        Ok(())
    }

    fn set_paint(&mut self, paint: &Paint) {
        self.paint = *paint;
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        if radius <= 0.0 || !radius.is_finite() {
            return;
        }
        let r_sq = radius * radius;
        self.cover(
            (center.x - radius, center.y - radius, center.x + radius, center.y + radius),
            |px, py| {
                let dx = px - center.x;
                let dy = py - center.y;
                dx * dx + dy * dy <= r_sq
            },
        );
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        let half = self.paint.width / 2.0;
        if half <= 0.0 || !half.is_finite() {
            return;
        }

        let seg_x = to.x - from.x;
        let seg_y = to.y - from.y;
        let len_sq = seg_x * seg_x + seg_y * seg_y;
        let half_sq = half * half;

        self.cover(
            (
                from.x.min(to.x) - half,
                from.y.min(to.y) - half,
                from.x.max(to.x) + half,
                from.y.max(to.y) + half,
            ),
            |px, py| {
                // Distance from the pixel center to the closest point of the segment
                let t = if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    (((px - from.x) * seg_x + (py - from.y) * seg_y) / len_sq).clamp(0.0, 1.0)
                };
                let dx = px - (from.x + t * seg_x);
                let dy = py - (from.y + t * seg_y);
                dx * dx + dy * dy <= half_sq
            },
        );
    }

    fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }
}
