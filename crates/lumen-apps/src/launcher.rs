//! Per-app window sizing and the open helper

use lumen_desktop::{Size, ShellEngine, WindowConfig, WindowKey};
use crate::menu::MenuAction;

/// Preferred window metrics for an app
pub struct AppSpec {
    /// Stable window key; reopening focuses the existing window
    pub key: &'static str,
    pub title: &'static str,
    pub size: Size,
    pub min_size: Size,
}

/// Sizing table for the built-in apps
pub fn spec_for(action: MenuAction) -> AppSpec {
    match action {
        MenuAction::Settings => AppSpec {
            key: "settings",
            title: "Settings",
            size: Size::new(480.0, 420.0),
            min_size: Size::new(320.0, 260.0),
        },
        MenuAction::Files => AppSpec {
            key: "files",
            title: "Files",
            size: Size::new(420.0, 520.0),
            min_size: Size::new(260.0, 200.0),
        },
        MenuAction::Search => AppSpec {
            key: "search",
            title: "Search",
            size: Size::new(520.0, 180.0),
            min_size: Size::new(320.0, 140.0),
        },
        MenuAction::Clock => AppSpec {
            key: "clock",
            title: "Clock",
            size: Size::new(280.0, 220.0),
            min_size: Size::new(200.0, 160.0),
        },
    }
}

/// Open an app window with the given content, clamping the preferred
/// size to the current display bounds
pub fn open_app(
    shell: &mut ShellEngine,
    action: MenuAction,
    content: String,
    now_ms: f64,
) -> WindowKey {
    let spec = spec_for(action);
    let display = shell.display().size;

    let padding = 20.0;
    let max_w = (display.width - padding * 2.0).max(spec.min_size.width);
    let max_h = (display.height - padding * 2.0).max(spec.min_size.height);

    let config = WindowConfig {
        key: spec.key.to_string(),
        title: spec.title.to_string(),
        content,
        position: None,
        size: Some(Size::new(spec.size.width.min(max_w), spec.size.height.min(max_h))),
        min_size: Some(spec.min_size),
    };
    shell.create_window(config, now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_app_is_singleton() {
        let mut shell = ShellEngine::new();
        shell.init(1000.0, 800.0);

        let k1 = open_app(&mut shell, MenuAction::Settings, String::new(), 0.0);
        let k2 = open_app(&mut shell, MenuAction::Settings, String::new(), 1.0);

        assert_eq!(k1, k2);
        assert_eq!(shell.windows().count(), 1);
        assert_eq!(shell.active_window(), Some("settings"));
    }

    #[test]
    fn test_open_app_clamps_to_small_display() {
        let mut shell = ShellEngine::new();
        shell.init(400.0, 300.0);

        open_app(&mut shell, MenuAction::Files, String::new(), 0.0);

        let win = shell.windows().get("files").unwrap();
        assert!(win.size.width <= 400.0);
        assert!(win.size.height <= 300.0);
    }
}
