//! Window record and per-window lifecycle state

use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::transition::{VisualState, WindowAnimation};
use super::WindowKey;

/// Lifecycle phase of a window
///
/// Exactly one phase at a time. `Minimizing` and `Closing` carry their
/// running animation and reject every other lifecycle operation until
/// the animation completes or the safety deadline forces cleanup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowPhase {
    Idle,
    /// Header drag in progress; transitions are frozen while set
    Dragging,
    /// Corner resize in progress; transitions are frozen while set
    Resizing,
    /// Fly-out toward the taskbar is running
    Minimizing(WindowAnimation),
    /// Exit transition is running; the record is removed on completion
    Closing(WindowAnimation),
}

impl WindowPhase {
    /// The window is mid minimize/close animation and refuses other
    /// lifecycle operations
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, WindowPhase::Minimizing(_) | WindowPhase::Closing(_))
    }

    /// A pointer gesture (drag or resize) is in progress
    #[inline]
    pub fn is_gesture(&self) -> bool {
        matches!(self, WindowPhase::Dragging | WindowPhase::Resizing)
    }
}

/// Non-blocking entry/restore visual effect
///
/// Unlike `WindowPhase`, an entrance never gates operations: a window
/// can be dragged or closed while it is still fading in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// No effect running
    None,
    /// Created but not yet revealed; armed by the next engine tick so a
    /// window closed before its first frame never animates in
    Staged,
    /// Reveal or fly-in running
    Animating(WindowAnimation),
}

/// A window record: the authoritative state for one floating panel
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub key: WindowKey,
    /// Window title
    pub title: String,
    /// Markup for the content region
    pub content: String,
    /// Top-left corner in display coordinates
    pub position: Vec2,
    /// Window size including frame
    pub size: Size,
    /// Minimum size enforced during resize
    pub min_size: Size,
    /// Stacking order (higher = in front)
    pub z_order: u32,
    /// Hidden with its last geometry preserved for restore
    pub minimized: bool,
    /// Filling the display area
    pub maximized: bool,
    /// Geometry snapshot taken immediately before maximizing;
    /// Some if and only if `maximized`
    pub(crate) original_rect: Option<Rect>,
    /// Current lifecycle phase
    pub phase: WindowPhase,
    /// Current entry/restore effect
    pub(crate) entrance: Entrance,
    /// Cleared while closing so no further pointer input reaches the
    /// window
    pub pointer_enabled: bool,
    /// Display-none equivalent; set once a minimize completes
    pub hidden: bool,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Geometry saved before maximizing, if any
    #[inline]
    pub fn original_rect(&self) -> Option<Rect> {
        self.original_rect
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.control_button_rect(0.0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.control_button_rect(1.0)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.control_button_rect(2.0)
    }

    /// Control buttons are right-aligned in the title bar; slot 0 is the
    /// rightmost
    fn control_button_rect(&self, slot: f32) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Interpolated visual parameters for rendering at `now_ms`
    ///
    /// Phase animations (minimize/close) take precedence over entrance
    /// effects; a resting window renders at identity.
    pub fn visual(&self, now_ms: f64) -> VisualState {
        match &self.phase {
            WindowPhase::Minimizing(anim) | WindowPhase::Closing(anim) => anim.visual(now_ms),
            _ => match &self.entrance {
                Entrance::Staged => VisualState::STAGED,
                Entrance::Animating(anim) => anim.visual(now_ms),
                Entrance::None => VisualState::IDENTITY,
            },
        }
    }

    /// Transitions must be suppressed this frame (mid drag or resize)
    #[inline]
    pub fn transitions_frozen(&self) -> bool {
        self.phase.is_gesture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_window() -> Window {
        Window {
            key: "alpha".to_string(),
            title: "Alpha".to_string(),
            content: String::new(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(400.0, 300.0),
            min_size: Size::new(150.0, 100.0),
            z_order: 1,
            minimized: false,
            maximized: false,
            original_rect: None,
            phase: WindowPhase::Idle,
            entrance: Entrance::None,
            pointer_enabled: true,
            hidden: false,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 400.0).abs() < 0.001);
        assert!((r.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_control_buttons_ordered_right_to_left() {
        let w = test_window();
        let close = w.close_button_rect();
        let maximize = w.maximize_button_rect();
        let minimize = w.minimize_button_rect();

        assert!(close.x > maximize.x);
        assert!(maximize.x > minimize.x);
        assert!(close.right() <= w.rect().right());
    }

    #[test]
    fn test_buttons_inside_title_bar() {
        let w = test_window();
        let title = w.title_bar_rect();
        for r in [w.close_button_rect(), w.maximize_button_rect(), w.minimize_button_rect()] {
            assert!(r.y >= title.y);
            assert!(r.bottom() <= title.bottom() + 0.001);
        }
    }

    #[test]
    fn test_staged_window_is_invisible() {
        let mut w = test_window();
        w.entrance = Entrance::Staged;
        let v = w.visual(0.0);
        assert!(v.opacity < 0.001);
        assert!((v.scale - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_phase_guards() {
        use crate::transition::{AnimationKind, WindowAnimation};

        assert!(!WindowPhase::Idle.is_animating());
        assert!(!WindowPhase::Dragging.is_animating());
        assert!(WindowPhase::Dragging.is_gesture());

        let anim = WindowAnimation::new(AnimationKind::Close, 0.0);
        assert!(WindowPhase::Closing(anim).is_animating());
        assert!(!WindowPhase::Closing(anim).is_gesture());
    }
}
