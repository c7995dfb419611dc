//! Pointer interaction: gesture state and resize arithmetic

mod drag;
mod router;

pub use drag::DragState;
pub use router::InputRouter;

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Outcome of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The shell consumed the event
    Handled,
    /// Nothing under the pointer; the host may handle it
    Unhandled,
}

/// Compute the rectangle produced by a corner resize gesture
///
/// Right/bottom edges grow with positive deltas; left/top edges shrink
/// the size and shift the position so the opposite edge stays put. The
/// minimum size is enforced first, then the result is clamped inside the
/// display on all four sides, adjusting position when a left/top
/// boundary is hit.
pub fn calculate_resize(
    corner: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
    display: Size,
) -> (Vec2, Size) {
    let start_right = start_pos.x + start_size.width;
    let start_bottom = start_pos.y + start_size.height;

    let mut width = if corner.grabs_left() {
        start_size.width - delta.x
    } else {
        start_size.width + delta.x
    };
    let mut height = if corner.grabs_top() {
        start_size.height - delta.y
    } else {
        start_size.height + delta.y
    };

    width = width.max(min_size.width);
    height = height.max(min_size.height);

    // Keep the opposite edge fixed for left/top grabs
    let mut x = if corner.grabs_left() { start_right - width } else { start_pos.x };
    let mut y = if corner.grabs_top() { start_bottom - height } else { start_pos.y };

    if corner.grabs_left() {
        if x < 0.0 {
            x = 0.0;
            width = start_right;
        }
    } else {
        width = width.min(display.width - x);
    }

    if corner.grabs_top() {
        if y < 0.0 {
            y = 0.0;
            height = start_bottom;
        }
    } else {
        height = height.min(display.height - y);
    }

    (Vec2::new(x, y), Size::new(width, height))
}
