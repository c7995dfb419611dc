//! Diagnostic window spawned by the debug hotkey
//!
//! Keys use the shell's reserved `debug_` prefix, so repeated spawns
//! never trip the duplicate-creation warning. Each window captures a
//! snapshot of the shell's counters at spawn time.

use lumen_desktop::{ShellEngine, Size, Vec2, WindowConfig, WindowKey, DEBUG_WINDOW_PREFIX};

/// Spawns numbered debug windows at a cascading offset
#[derive(Default)]
pub struct DebugSpawner {
    spawned: u32,
}

impl DebugSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh diagnostic window; `serial` disambiguates keys when
    /// several spawn within the same tick
    pub fn spawn(&mut self, shell: &mut ShellEngine, serial: u64, now_ms: f64) -> WindowKey {
        self.spawned += 1;
        let key = format!("{}{}", DEBUG_WINDOW_PREFIX, serial);

        let content = format!(
            concat!(
                "<h4>Debug Info ({count})</h4>",
                "<p class=\"debug-line\">Key: {key}</p>",
                "<p class=\"debug-line\">Active window: {active}</p>",
                "<p class=\"debug-line\">Total windows: {total}</p>",
                "<p class=\"debug-line\">Highest stacking value: {stacking}</p>"
            ),
            count = self.spawned,
            key = key,
            active = shell.active_window().unwrap_or("none"),
            total = shell.windows().count() + 1,
            stacking = shell.windows().stacking_top() + 1,
        );

        let offset = (self.spawned % 8) as f32 * 25.0;
        let config = WindowConfig {
            key: key.clone(),
            title: format!("Debug Console {}", self.spawned),
            content,
            position: Some(Vec2::new(280.0 + offset, 80.0 + offset)),
            size: Some(Size::new(450.0, 350.0)),
            min_size: None,
        };
        shell.create_window(config, now_ms)
    }
}
