//! Pointer input from winit window events.
//!
//! [`PointerInput`] turns raw `WindowEvent`s into [`PointerEvent`]s in
//! normalized device coordinates. It only reports while attached. A scene
//! attaches it on mount and detaches it on unmount, so no pointer event
//! reaches a field after teardown.
//!
//! # Usage
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if let Some(PointerEvent::Moved { ndc }) = self.pointer.handle_event(&event) {
//!         // project ndc and apply it to the field
//!     }
//! }
//! ```

use glam::Vec2;
use winit::event::WindowEvent;

use crate::projection::Viewport;

/// What the pointer did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to `ndc` (-1 to 1, Y up).
    Moved { ndc: Vec2 },
    /// Pointer left the window.
    Left,
}

/// Cursor tracker with an attach/detach switch.
#[derive(Debug, Clone)]
pub struct PointerInput {
    attached: bool,
    viewport: Viewport,
    /// Last cursor position in pixels.
    position: Option<Vec2>,
    ndc: Option<Vec2>,
}

impl PointerInput {
    /// A detached tracker for an 800x600 window.
    pub fn new() -> Self {
        Self {
            attached: false,
            viewport: Viewport::default(),
            position: None,
            ndc: None,
        }
    }

    // ========== Subscription ==========

    /// Start reporting pointer events.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop reporting pointer events and forget the cursor.
    pub fn detach(&mut self) {
        self.attached = false;
        self.position = None;
        self.ndc = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ========== Queries ==========

    /// Cursor position in pixels, if it is over the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Cursor position in normalized device coordinates.
    pub fn ndc(&self) -> Option<Vec2> {
        self.ndc
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ========== Updates ==========

    /// Update window size for NDC calculations.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        if let Some(pos) = self.position {
            self.ndc = self.viewport.to_ndc(pos.x, pos.y);
        }
    }

    /// Record a cursor move in pixels.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<PointerEvent> {
        if !self.attached {
            return None;
        }
        self.position = Some(Vec2::new(x, y));
        self.ndc = self.viewport.to_ndc(x, y);
        self.ndc.map(|ndc| PointerEvent::Moved { ndc })
    }

    /// Record the cursor leaving the window.
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        if !self.attached {
            return None;
        }
        self.position = None;
        self.ndc = None;
        Some(PointerEvent::Left)
    }

    /// Process a winit window event.
    ///
    /// Resize events are tracked even while detached.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            _ => None,
        }
    }
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new()
    }
}
