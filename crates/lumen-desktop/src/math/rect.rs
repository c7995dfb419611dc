//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// All fields are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position().is_finite() && self.size().is_finite()
    }

    /// Shift this rectangle so its full footprint lies inside `bounds`
    ///
    /// Right/bottom overflow is corrected first, then the position is
    /// floored at the top-left corner, so a rectangle larger than the
    /// bounds ends up anchored at the origin.
    pub fn shifted_into(&self, bounds: Size) -> Rect {
        let mut x = self.x;
        let mut y = self.y;
        if x + self.width > bounds.width {
            x = bounds.width - self.width;
        }
        if y + self.height > bounds.height {
            y = bounds.height - self.height;
        }
        Rect::new(x.max(0.0), y.max(0.0), self.width, self.height)
    }
}
