//! Input routing from host pointer/keyboard events to the history engine.
//!
//! The engine itself only knows semantic actions. This module maps raw
//! events onto them: pointer buttons drive strokes, keyboard combos drive
//! undo/redo/clear, and shortcuts are suppressed while a text field has focus.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::HistoryEngine;
use crate::surface::DrawingSurface;
use crate::types::Point;

/// Mouse input events, in display coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MouseEvent {
    Move { x: f32, y: f32 },
    ButtonDown { button: MouseButton, x: f32, y: f32 },
    ButtonUp { button: MouseButton, x: f32, y: f32 },
    Scroll { delta_x: f32, delta_y: f32, x: f32, y: f32 },
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard input event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub key: String,
    pub pressed: bool,
    pub modifiers: Modifiers,
}

/// Keyboard modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Element holding keyboard focus when a key event arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    #[default]
    Canvas,
    /// An input, textarea or content-editable element
    TextInput,
}

/// Engine action bound to a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutAction {
    Undo,
    Redo,
    Clear,
}

impl ShortcutAction {
    /// Match a key press against the shortcut table:
    /// Mod+Z undo, Mod+Shift+Z redo, Mod+D clear.
    pub fn from_event(event: &KeyboardEvent) -> Option<Self> {
        if !event.pressed || !event.modifiers.command() {
            return None;
        }
        match event.key.to_ascii_lowercase().as_str() {
            "z" if event.modifiers.shift => Some(ShortcutAction::Redo),
            "z" => Some(ShortcutAction::Undo),
            "d" => Some(ShortcutAction::Clear),
            _ => None,
        }
    }
}

/// Where the canvas is displayed, in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a display position onto the logical canvas of `canvas_width` x `canvas_height`
    pub fn to_canvas(&self, client_x: f32, client_y: f32, canvas_width: u32, canvas_height: u32) -> Point {
        let scale_x = if self.width > 0.0 { canvas_width as f32 / self.width } else { 1.0 };
        let scale_y = if self.height > 0.0 { canvas_height as f32 / self.height } else { 1.0 };
        Point::new((client_x - self.left) * scale_x, (client_y - self.top) * scale_y)
    }
}

/// Routes host events to a [`HistoryEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRouter {
    viewport: Viewport,
}

impl InputRouter {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Router for a canvas displayed 1:1 at the display origin
    pub fn unscaled(canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(Viewport::new(0.0, 0.0, canvas_width as f32, canvas_height as f32))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update after the canvas element moved or was resized on screen
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Left button down starts a stroke, move extends it, left button up ends it.
    ///
    /// Returns whether the engine acted on the event.
    pub fn handle_mouse<S: DrawingSurface>(&self, engine: &mut HistoryEngine<S>, event: &MouseEvent) -> bool {
        let (width, height) = engine.renderer().dimensions();
        match *event {
            MouseEvent::ButtonDown {
                button: MouseButton::Left,
                x,
                y,
            } => engine.start_stroke(self.viewport.to_canvas(x, y, width, height)),
            MouseEvent::Move { x, y } => engine.continue_stroke(self.viewport.to_canvas(x, y, width, height)),
            MouseEvent::ButtonUp {
                button: MouseButton::Left,
                ..
            } => engine.end_stroke(),
            _ => false,
        }
    }

    /// Dispatch a keyboard shortcut, unless a text field has focus.
    ///
    /// Returns the action taken so the host can suppress the default key behavior.
    pub fn handle_key<S: DrawingSurface>(
        &self,
        engine: &mut HistoryEngine<S>,
        event: &KeyboardEvent,
        focus: FocusTarget,
    ) -> Option<ShortcutAction> {
        if focus == FocusTarget::TextInput {
            return None;
        }
        let action = ShortcutAction::from_event(event)?;
        debug!("Shortcut {:?} ({})", action, event.key);
        match action {
            ShortcutAction::Undo => engine.undo(),
            ShortcutAction::Redo => engine.redo(),
            ShortcutAction::Clear => engine.clear(),
        };
        Some(action)
    }
}
