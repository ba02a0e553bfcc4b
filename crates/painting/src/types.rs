use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sketchpad_config::CanvasConfig;
use thiserror::Error;

/// A position in logical canvas coordinates (raster pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Unrecognised color: {0:?}")]
    Unrecognised(String),
    #[error("Invalid hex color {0:?}: expected 3, 4, 6 or 8 hex digits")]
    InvalidHex(String),
}

/// An sRGB color with 8-bit channels
///
/// Parsed from and serialized to CSS-style strings (`#rgb`, `#rrggbb`,
/// `#rrggbbaa`, or a handful of names) so that the wire payload matches what
/// browser peers send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized [r, g, b, a] for the raster surface
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        // #rgb -> #rrggbb
        let short = |s: &str| channel(s).map(|v| v * 17);

        match hex.len() {
            3 => Ok(Self::rgb(short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?)),
            4 => Ok(Self::rgba(
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
                short(&hex[3..4])?,
            )),
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            8 => Ok(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "transparent" => Ok(Self::TRANSPARENT),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            _ => Err(ColorParseError::Unrecognised(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Stroke style: applies to all drawing until the next style change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: sketchpad_config::DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// The default style declared by the canvas configuration
    pub fn from_config(config: &CanvasConfig) -> Result<Self, ColorParseError> {
        Ok(Self {
            color: config.stroke_color.parse()?,
            width: config.stroke_width,
        })
    }
}

/// A single logged pen action
///
/// Serialized adjacently tagged (`{"type": "...", "data": {...}}`) using the
/// names collaboration peers exchange on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Operation {
    /// Style change, in effect for all subsequent drawing
    #[serde(rename = "setStroke")]
    SetStroke(StrokeStyle),
    /// Pen down
    #[serde(rename = "start")]
    StrokeStart(Point),
    /// Pen moved while down
    #[serde(rename = "draw")]
    StrokeExtend(Point),
    /// Pen up
    #[serde(rename = "stop")]
    StrokeEnd,
    /// Page boundary: the surface was wiped
    #[serde(rename = "clear")]
    ClearMarker,
}

impl Operation {
    /// Wire name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::SetStroke(_) => "setStroke",
            Operation::StrokeStart(_) => "start",
            Operation::StrokeExtend(_) => "draw",
            Operation::StrokeEnd => "stop",
            Operation::ClearMarker => "clear",
        }
    }

    /// The point carried by pen-down / pen-move operations
    pub fn point(&self) -> Option<Point> {
        match self {
            Operation::StrokeStart(p) | Operation::StrokeExtend(p) => Some(*p),
            _ => None,
        }
    }
}
