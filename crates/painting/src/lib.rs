//! Sketchpad painting system - stroke history, replay and input routing
//!
//! This crate provides the drawing core of the sketchpad:
//! - [`types::Operation`] - A single logged pen action (wire-compatible)
//! - [`log`] - Pages of strokes, the outbound feed and the JSON wire batches
//! - [`surface`] - Drawing surface abstraction and a CPU RGBA raster
//! - [`renderer`] - Deterministic replay of operations onto a surface
//! - [`engine`] - History engine with undo, redo and page-aware clear
//! - [`input`] - Pointer and keyboard routing onto the engine
//! - [`validation`] - Checks applied to operations received from peers

pub mod constants;
pub mod engine;
pub mod input;
pub mod log;
pub mod renderer;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use engine::HistoryEngine;
pub use input::{
    FocusTarget, InputRouter, KeyboardEvent, Modifiers, MouseButton, MouseEvent, ShortcutAction, Viewport,
};
pub use log::*;
pub use renderer::{RendererError, SurfaceRenderer};
pub use surface::{CpuSurface, DrawingSurface, Paint, SurfaceError};
pub use types::*;
pub use validation::*;
