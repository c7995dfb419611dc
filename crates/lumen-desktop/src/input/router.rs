//! Gesture state machine

use crate::math::{Size, Vec2};
use crate::window::{WindowKey, WindowRegion};
use super::DragState;

/// Holds the single in-flight pointer gesture, if any
pub struct InputRouter {
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get the current gesture
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The in-flight gesture targets `key`
    pub fn targets(&self, key: &str) -> bool {
        self.drag.as_ref().map(|d| d.key() == key).unwrap_or(false)
    }

    /// Start a window move gesture
    pub fn start_window_move(&mut self, key: WindowKey, grab_offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { key, grab_offset });
    }

    /// Start a window resize gesture
    pub fn start_window_resize(
        &mut self,
        key: WindowKey,
        corner: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            key,
            corner,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    /// End the current gesture
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Cancel the current gesture (alias for end_drag)
    #[inline]
    pub fn cancel(&mut self) {
        self.end_drag();
    }
}
