//! Shell engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: window lifecycle operations and active-window promotion
//! - `input`: pointer event routing and drag/resize execution
//! - `transitions`: animation completion, safety expiry, deferred ops
//! - `scene`: renderable view of the current state

mod input;
mod scene;
mod transitions;
mod windows;

pub use scene::WindowView;
pub(crate) use transitions::DeferredOp;

use crate::display::DisplayArea;
use crate::input::InputRouter;
use crate::math::{Size, Vec2};
use crate::taskbar::{TaskbarEntry, TaskbarManager};
use crate::window::{WindowKey, WindowRegistry};

/// Fly trajectory used when the taskbar entry or display bounds are
/// unavailable: straight up, off the window's own center
pub(crate) const FALLBACK_TRAJECTORY: Vec2 = Vec2::new(0.0, -100.0);

/// The window manager: creates, tracks, focuses, minimizes, maximizes,
/// and closes floating panels, and keeps the taskbar in sync
///
/// One engine per application instance; the registry, stacking counter,
/// and active-window pointer are private to it. All public operations
/// swallow their own failures: a missing target is a no-op, a stalled
/// animation is recovered by `tick`, and nothing here panics or returns
/// an error to the caller.
pub struct ShellEngine {
    /// Bounded container the windows live in
    pub(crate) display: DisplayArea,
    /// Window records and the stacking counter
    pub(crate) registry: WindowRegistry,
    /// Taskbar entries mirroring window lifecycle
    pub(crate) taskbar: TaskbarManager,
    /// In-flight pointer gesture
    pub(crate) input: InputRouter,
    /// The single active window, if any
    pub(crate) active: Option<WindowKey>,
    /// Operations waiting on an animation to land
    pub(crate) deferred: Vec<DeferredOp>,
}

impl Default for ShellEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self {
            display: DisplayArea::default(),
            registry: WindowRegistry::new(),
            taskbar: TaskbarManager::new(),
            input: InputRouter::new(),
            active: None,
            deferred: Vec::new(),
        }
    }

    /// Initialize with the display container's extent
    pub fn init(&mut self, width: f32, height: f32) {
        self.display.size = Size::new(width, height);
    }

    /// Set the display container's screen position, used to convert
    /// between screen and display coordinates
    pub fn set_display_origin(&mut self, x: f32, y: f32) {
        self.display.origin = Vec2::new(x, y);
    }

    /// The display container was resized; maximized windows track the
    /// new bounds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.display.size = Size::new(width, height);
        let bounds = self.display.bounds();
        for win in self.registry.values_mut() {
            if win.maximized {
                win.position = bounds.position();
                win.size = bounds.size();
            }
        }
    }

    /// The display area
    pub fn display(&self) -> &DisplayArea {
        &self.display
    }

    /// The window registry (read-only)
    pub fn windows(&self) -> &WindowRegistry {
        &self.registry
    }

    /// The active window's key, if any
    pub fn active_window(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Taskbar entries in display order
    pub fn taskbar_entries(&self) -> &[TaskbarEntry] {
        self.taskbar.entries()
    }

    /// A taskbar entry was clicked: focus (and restore) its window
    pub fn taskbar_click(&mut self, key: &str, now_ms: f64) {
        self.focus_window(key, now_ms);
    }

    /// A taskbar entry was double-clicked: minimize its window
    pub fn taskbar_double_click(&mut self, key: &str, now_ms: f64) {
        self.minimize_window(key, now_ms);
    }

    /// A taskbar entry's close affordance was clicked; closes without
    /// focusing first
    pub fn taskbar_close_click(&mut self, key: &str, now_ms: f64) {
        self.close_window(key, now_ms);
    }

    /// An entry was dropped onto another: insert before or after based
    /// on which half of the target the pointer (screen x) is over
    pub fn taskbar_drop(&mut self, dragged: &str, target: &str, pointer_x: f32) {
        let local_x = self.display.to_display(Vec2::new(pointer_x, 0.0)).x;
        if let Some(position) = self.taskbar.drop_position(target, local_x) {
            self.taskbar.reorder(dragged, target, position);
        }
    }

    /// An entry was dropped on empty strip space: append to the end
    pub fn taskbar_drop_to_strip(&mut self, dragged: &str) {
        self.taskbar.move_to_end(dragged);
    }

    /// Screen-space delta from a window's center to its taskbar entry's
    /// center, or the fixed fallback when either side is unavailable
    pub(crate) fn taskbar_trajectory(&self, key: &str) -> Vec2 {
        let Some(win) = self.registry.get(key) else {
            return FALLBACK_TRAJECTORY;
        };
        let Some(entry_center) = self.taskbar.entry_center(key, &self.display) else {
            return FALLBACK_TRAJECTORY;
        };
        let win_center = self.display.to_screen(win.rect().center());
        let delta = entry_center - win_center;
        if delta.is_finite() {
            delta
        } else {
            FALLBACK_TRAJECTORY
        }
    }
}
