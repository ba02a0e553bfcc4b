//! Shared configuration for Sketchpad
//!
//! This crate provides the single source of truth for the logical canvas
//! dimensions, display scaling and the default stroke style used by the
//! drawing engine and by whatever host embeds it.

use serde::{Deserialize, Serialize};

/// Default logical canvas width
pub const DEFAULT_WIDTH: u32 = 1500;

/// Default logical canvas height
pub const DEFAULT_HEIGHT: u32 = 800;

/// Default scale factor (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default stroke color (CSS hex notation)
pub const DEFAULT_STROKE_COLOR: &str = "#000";

/// Default stroke width in logical units
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Canvas configuration, read once when the engine is constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in logical units (raster pixels)
    pub width: u32,
    /// Canvas height in logical units (raster pixels)
    pub height: u32,
    /// Display scale factor applied by the host
    pub scale: f32,
    /// Stroke color in effect before the user picks one
    pub stroke_color: String,
    /// Stroke width in effect before the user picks one
    pub stroke_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl CanvasConfig {
    /// Create a config with the given canvas dimensions and default style
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Builder-style override of the default stroke style
    pub fn with_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.stroke_color = color.into();
        self.stroke_width = width;
        self
    }

    /// Get scaled width (for physical pixel calculations)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale) as u32
    }

    /// Get scaled height (for physical pixel calculations)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale) as u32
    }

    /// Width divided by height, or 0.0 for a degenerate canvas
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }
}
