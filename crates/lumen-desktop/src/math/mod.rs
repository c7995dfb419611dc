//! Geometry primitives shared across the shell
//!
//! All window placement happens in display-area coordinates: the origin is
//! the top-left corner of the display container and the unit is a CSS pixel.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, TaskbarStyle, FRAME_STYLE, TASKBAR_STYLE};
pub use vec2::Vec2;
