//! Pointer event routing and drag/resize execution
//!
//! Events arrive in screen coordinates and are converted to display
//! coordinates before hit testing. Display bounds are re-read on every
//! move step, not cached for the gesture, so mid-gesture viewport
//! resizes still clamp correctly.

use crate::input::{calculate_resize, DragState, InputResult};
use crate::math::Vec2;
use crate::window::{WindowPhase, WindowRegion};
use super::ShellEngine;

impl ShellEngine {
    /// Handle pointer down (screen coordinates, primary button is 0)
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8, now_ms: f64) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }
        let pos = self.display.to_display(Vec2::new(x, y));

        let Some((window, region)) = self.registry.region_at(pos) else {
            return InputResult::Unhandled;
        };
        let key = window.key.clone();
        let maximized = window.maximized;
        let animating = window.phase.is_animating();
        let win_pos = window.position;
        let win_size = window.size;

        match region {
            WindowRegion::CloseButton => self.close_window(&key, now_ms),
            WindowRegion::MinimizeButton => self.minimize_window(&key, now_ms),
            WindowRegion::MaximizeButton => self.maximize_window(&key, now_ms),
            WindowRegion::TitleBar => {
                self.focus_window(&key, now_ms);
                if !maximized && !animating {
                    if let Some(win) = self.registry.get_mut(&key) {
                        win.phase = WindowPhase::Dragging;
                    }
                    self.input.start_window_move(key, pos - win_pos);
                }
            }
            corner if corner.is_resize() => {
                self.focus_window(&key, now_ms);
                if !maximized && !animating {
                    if let Some(win) = self.registry.get_mut(&key) {
                        win.phase = WindowPhase::Resizing;
                    }
                    self.input
                        .start_window_resize(key, corner, win_pos, win_size, pos);
                }
            }
            _ => {
                // Content clicks only focus
                self.focus_window(&key, now_ms);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer move (screen coordinates)
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let Some(drag) = self.input.drag_state().cloned() else {
            return InputResult::Unhandled;
        };
        let pos = self.display.to_display(Vec2::new(x, y));
        let bounds = self.display.size;

        match drag {
            DragState::MoveWindow { key, grab_offset } => {
                if let Some(win) = self.registry.get_mut(&key) {
                    let desired = pos - grab_offset;
                    let max_x = (bounds.width - win.size.width).max(0.0);
                    let max_y = (bounds.height - win.size.height).max(0.0);
                    let clamped = Vec2::new(
                        desired.x.clamp(0.0, max_x),
                        desired.y.clamp(0.0, max_y),
                    );
                    if clamped.is_finite() {
                        win.position = clamped;
                    }
                }
            }
            DragState::ResizeWindow {
                key,
                corner,
                start_pos,
                start_size,
                start_pointer,
            } => {
                if let Some(win) = self.registry.get_mut(&key) {
                    let delta = pos - start_pointer;
                    let (new_pos, new_size) =
                        calculate_resize(corner, start_pos, start_size, delta, win.min_size, bounds);
                    if new_pos.is_finite() && new_size.is_finite() {
                        win.position = new_pos;
                        win.size = new_size;
                    }
                }
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up, or the pointer leaving the viewport
    pub fn pointer_up(&mut self) -> InputResult {
        let Some(drag) = self.input.drag_state().cloned() else {
            return InputResult::Unhandled;
        };
        if let Some(win) = self.registry.get_mut(drag.key()) {
            if win.phase.is_gesture() {
                win.phase = WindowPhase::Idle;
            }
        }
        self.input.end_drag();
        InputResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, FRAME_STYLE};
    use crate::window::WindowConfig;

    fn engine_with_window() -> ShellEngine {
        let mut engine = ShellEngine::new();
        engine.init(1000.0, 800.0);
        let mut cfg = WindowConfig::new("a", "Alpha", "");
        cfg.position = Some(Vec2::new(200.0, 150.0));
        cfg.size = Some(Size::new(400.0, 300.0));
        engine.create_window(cfg, 0.0);
        engine
    }

    #[test]
    fn test_title_drag_moves_window() {
        let mut engine = engine_with_window();

        // Grab the title bar 50px in from the window corner
        assert_eq!(engine.pointer_down(250.0, 160.0, 0, 1.0), InputResult::Handled);
        assert_eq!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Dragging
        );

        engine.pointer_move(350.0, 260.0);
        let win = engine.windows().get("a").unwrap();
        assert!((win.position.x - 300.0).abs() < 0.001);
        assert!((win.position.y - 250.0).abs() < 0.001);

        engine.pointer_up();
        assert_eq!(engine.windows().get("a").unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_drag_clamps_to_display_bounds() {
        let mut engine = engine_with_window();
        engine.pointer_down(250.0, 160.0, 0, 1.0);

        engine.pointer_move(-500.0, -500.0);
        let win = engine.windows().get("a").unwrap();
        assert!((win.position.x - 0.0).abs() < 0.001);
        assert!((win.position.y - 0.0).abs() < 0.001);

        engine.pointer_move(5000.0, 5000.0);
        let win = engine.windows().get("a").unwrap();
        assert!((win.rect().right() - 1000.0).abs() < 0.001);
        assert!((win.rect().bottom() - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_start_focuses_window() {
        let mut engine = engine_with_window();
        let mut cfg = WindowConfig::new("b", "Beta", "");
        cfg.position = Some(Vec2::new(650.0, 500.0));
        engine.create_window(cfg, 0.0);
        assert_eq!(engine.active_window(), Some("b"));

        engine.pointer_down(250.0, 160.0, 0, 1.0);
        assert_eq!(engine.active_window(), Some("a"));
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut engine = engine_with_window();
        assert_eq!(engine.pointer_down(250.0, 160.0, 2, 1.0), InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_corner_resize_gesture() {
        let mut engine = engine_with_window();

        // Southeast corner of the 400x300 window at (200, 150)
        engine.pointer_down(598.0, 448.0, 0, 1.0);
        assert_eq!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Resizing
        );

        engine.pointer_move(678.0, 508.0);
        let win = engine.windows().get("a").unwrap();
        assert!((win.size.width - 480.0).abs() < 0.001);
        assert!((win.size.height - 360.0).abs() < 0.001);

        engine.pointer_up();
        assert_eq!(engine.windows().get("a").unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_resize_respects_minimum_size() {
        let mut engine = engine_with_window();
        engine.pointer_down(598.0, 448.0, 0, 1.0);
        engine.pointer_move(0.0, 0.0);

        let win = engine.windows().get("a").unwrap();
        assert!(win.size.width >= win.min_size.width - 0.001);
        assert!(win.size.height >= win.min_size.height - 0.001);
    }

    #[test]
    fn test_maximized_window_cannot_be_dragged() {
        let mut engine = engine_with_window();
        engine.maximize_window("a", 0.0);

        engine.pointer_down(250.0, 10.0, 0, 1.0);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.windows().get("a").unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_minimizing_window_cannot_start_gesture() {
        let mut engine = engine_with_window();
        engine.minimize_window("a", 0.0);

        // Mid fly-out the window is still visible; grabbing it does
        // nothing
        engine.pointer_down(250.0, 160.0, 0, 1.0);
        assert!(!engine.input.is_dragging());
        assert!(matches!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Minimizing(_)
        ));
    }

    #[test]
    fn test_close_button_closes() {
        let mut engine = engine_with_window();
        let button = engine.windows().get("a").unwrap().close_button_rect();
        let center = button.center();

        engine.pointer_down(center.x, center.y, 0, 1.0);
        assert!(matches!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Closing(_)
        ));
    }

    #[test]
    fn test_minimize_button_minimizes() {
        let mut engine = engine_with_window();
        let button = engine.windows().get("a").unwrap().minimize_button_rect();
        let center = button.center();

        engine.pointer_down(center.x, center.y, 0, 1.0);
        assert!(matches!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Minimizing(_)
        ));
    }

    #[test]
    fn test_content_click_focuses_without_gesture() {
        let mut engine = engine_with_window();
        let mut cfg = WindowConfig::new("b", "Beta", "");
        cfg.position = Some(Vec2::new(650.0, 500.0));
        engine.create_window(cfg, 0.0);

        // Well inside the content area of "a"
        let y = 150.0 + FRAME_STYLE.title_bar_height + 100.0;
        engine.pointer_down(400.0, y, 0, 1.0);

        assert_eq!(engine.active_window(), Some("a"));
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_pointer_down_respects_display_origin() {
        let mut engine = engine_with_window();
        engine.set_display_origin(100.0, 60.0);

        // Same title-bar point, now expressed in screen coordinates
        engine.pointer_down(350.0, 220.0, 0, 1.0);
        assert_eq!(
            engine.windows().get("a").unwrap().phase,
            WindowPhase::Dragging
        );
    }
}
