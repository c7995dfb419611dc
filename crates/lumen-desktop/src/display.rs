//! Display area: the bounded container all windows live in

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};

/// The positioned region windows are placed and clamped within
///
/// Window geometry is stored in display coordinates (origin at the
/// container's top-left corner). Trajectory math for minimize/restore
/// animations happens in screen coordinates; `to_screen`/`to_display`
/// are the one sanctioned conversion between the two spaces.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DisplayArea {
    /// Screen position of the container's top-left corner
    pub origin: Vec2,
    /// Container extent in pixels
    pub size: Size,
}

impl Default for DisplayArea {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl DisplayArea {
    /// Create a display area at a screen origin
    pub fn new(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// Bounds in display coordinates (always anchored at the origin)
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Convert a display-coordinate point to screen coordinates
    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.origin + p
    }

    /// Convert a screen-coordinate point to display coordinates
    #[inline]
    pub fn to_display(&self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    /// Clamp a window rectangle so it lies fully inside the display
    #[inline]
    pub fn clamp_window(&self, rect: Rect) -> Rect {
        rect.shifted_into(self.size)
    }
}
