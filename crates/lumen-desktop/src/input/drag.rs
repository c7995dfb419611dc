//! Drag state for pointer gestures

use crate::math::{Size, Vec2};
use crate::window::{WindowKey, WindowRegion};

/// Current pointer gesture
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window by its header
    MoveWindow {
        /// Window being moved
        key: WindowKey,
        /// Pointer offset from the window's top-left corner at grab time
        grab_offset: Vec2,
    },
    /// Resizing a window by a corner handle
    ResizeWindow {
        /// Window being resized
        key: WindowKey,
        /// Which corner is active
        corner: WindowRegion,
        /// Window position at gesture start
        start_pos: Vec2,
        /// Window size at gesture start
        start_size: Size,
        /// Pointer position at gesture start (display coords)
        start_pointer: Vec2,
    },
}

impl DragState {
    /// The window this gesture targets
    pub fn key(&self) -> &str {
        match self {
            DragState::MoveWindow { key, .. } => key,
            DragState::ResizeWindow { key, .. } => key,
        }
    }

    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }
}
