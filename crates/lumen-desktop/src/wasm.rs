//! WASM exports for the shell engine
//!
//! Wraps [`ShellEngine`] with a JS-friendly API. The DOM layer renders
//! from the JSON scene snapshot each frame, forwards pointer and taskbar
//! events here, and reports transition-end/cancel events through
//! `notify_transition_end`.

use wasm_bindgen::prelude::*;

use crate::engine::ShellEngine;
use crate::input::InputResult;
use crate::math::{Size, Vec2};
use crate::window::WindowConfig;

fn date_now() -> f64 {
    js_sys::Date::now()
}

/// Shell controller for WASM - wraps ShellEngine with a JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    engine: ShellEngine,
}

impl Default for ShellController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ShellController {
    /// Create a new shell controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        web_sys::console::debug_1(&JsValue::from_str("lumen-desktop: shell controller ready"));
        Self {
            engine: ShellEngine::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize with the display container's extent
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the display container
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Set the display container's bounding-box origin (from
    /// getBoundingClientRect), so screen events convert correctly
    pub fn set_display_origin(&mut self, x: f32, y: f32) {
        self.engine.set_display_origin(x, y);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Create a window (or focus it if the key exists); returns the key
    pub fn create_window(&mut self, key: &str, title: &str, content: &str) -> String {
        self.engine
            .create_window(WindowConfig::new(key, title, content), date_now())
    }

    /// Create a window with explicit geometry; returns the key
    #[allow(clippy::too_many_arguments)]
    pub fn create_window_at(
        &mut self,
        key: &str,
        title: &str,
        content: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> String {
        let config = WindowConfig {
            position: Some(Vec2::new(x, y)),
            size: Some(Size::new(width, height)),
            ..WindowConfig::new(key, title, content)
        };
        self.engine.create_window(config, date_now())
    }

    /// Focus a window, restoring it if minimized
    pub fn focus_window(&mut self, key: &str) {
        self.engine.focus_window(key, date_now());
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, key: &str) {
        self.engine.minimize_window(key, date_now());
    }

    /// Maximize or restore a window
    pub fn maximize_window(&mut self, key: &str) {
        self.engine.maximize_window(key, date_now());
    }

    /// Close a window
    pub fn close_window(&mut self, key: &str) {
        self.engine.close_window(key, date_now());
    }

    /// The active window's key, or an empty string
    pub fn active_window(&self) -> String {
        self.engine.active_window().unwrap_or_default().to_string()
    }

    /// Number of live windows
    pub fn window_count(&self) -> usize {
        self.engine.windows().count()
    }

    /// Highest stacking value handed out so far
    pub fn stacking_top(&self) -> u32 {
        self.engine.windows().stacking_top()
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Advance animations; returns true while another frame is needed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.engine.tick(now_ms)
    }

    /// A window's CSS transition finished or was canceled
    pub fn notify_transition_end(&mut self, key: &str) {
        self.engine.notify_transition_end(key);
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Pointer down in screen coordinates; true if the shell consumed it
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> bool {
        self.engine.pointer_down(x, y, button, date_now()) == InputResult::Handled
    }

    /// Pointer move in screen coordinates
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(x, y) == InputResult::Handled
    }

    /// Pointer released or left the viewport
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up() == InputResult::Handled
    }

    // =========================================================================
    // Taskbar
    // =========================================================================

    /// Taskbar entry clicked
    pub fn taskbar_click(&mut self, key: &str) {
        self.engine.taskbar_click(key, date_now());
    }

    /// Taskbar entry double-clicked
    pub fn taskbar_double_click(&mut self, key: &str) {
        self.engine.taskbar_double_click(key, date_now());
    }

    /// Taskbar entry close affordance clicked
    pub fn taskbar_close_click(&mut self, key: &str) {
        self.engine.taskbar_close_click(key, date_now());
    }

    /// Entry dropped onto another entry (pointer x in screen coords)
    pub fn taskbar_drop(&mut self, dragged: &str, target: &str, pointer_x: f32) {
        self.engine.taskbar_drop(dragged, target, pointer_x);
    }

    /// Entry dropped on empty strip space
    pub fn taskbar_drop_to_strip(&mut self, dragged: &str) {
        self.engine.taskbar_drop_to_strip(dragged);
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Renderable windows as JSON, back to front
    pub fn scene_json(&self, now_ms: f64) -> String {
        serde_json::to_string(&self.engine.scene(now_ms)).unwrap_or_else(|_| "[]".to_string())
    }

    /// Taskbar entries as JSON, in display order
    pub fn taskbar_json(&self) -> String {
        serde_json::to_string(self.engine.taskbar_entries())
            .unwrap_or_else(|_| "[]".to_string())
    }
}
