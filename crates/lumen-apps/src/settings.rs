//! Settings dialog: content builder and persisted blob
//!
//! The blob is stored by the host in browser local storage; the shell
//! core never touches it.

use serde::{Deserialize, Serialize};

use lumen_desktop::{ShellEngine, WindowKey};
use crate::launcher::open_app;
use crate::markup::escape;
use crate::menu::MenuAction;

/// Persisted user settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Version for migration support
    pub version: u32,
    /// UI language tag
    pub language: String,
    /// Chosen desktop icon set
    pub icon: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            language: "en".to_string(),
            icon: "classic".to_string(),
        }
    }
}

impl Settings {
    /// Current blob version
    pub const CURRENT_VERSION: u32 = 1;

    /// Serialize for local storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from local storage
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if the blob needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate the blob to the current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}

/// Build the settings dialog content
pub fn markup(settings: &Settings) -> String {
    format!(
        concat!(
            "<form class=\"settings-form\">",
            "<div class=\"setting-row\"><label>Language</label>",
            "<select name=\"language\" disabled><option selected>{lang}</option></select></div>",
            "<div class=\"setting-row\"><label>Icons</label>",
            "<button type=\"button\" data-setting=\"icon\">{icon}</button></div>",
            "<div class=\"setting-row\" id=\"btnRow\">",
            "<button type=\"button\" data-setting=\"save\">Save</button>",
            "<button type=\"button\" data-setting=\"cancel\">Cancel</button></div>",
            "</form>"
        ),
        lang = escape(&settings.language),
        icon = escape(&settings.icon),
    )
}

/// Open (or focus) the settings window
pub fn open(shell: &mut ShellEngine, settings: &Settings, now_ms: f64) -> WindowKey {
    open_app(shell, MenuAction::Settings, markup(settings), now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            version: Settings::CURRENT_VERSION,
            language: "hu".to_string(),
            icon: "mono".to_string(),
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_settings_migration_is_idempotent() {
        let mut settings = Settings {
            version: 0,
            ..Settings::default()
        };
        assert!(settings.needs_migration());

        settings.migrate();
        assert!(!settings.needs_migration());

        let snapshot = settings.clone();
        settings.migrate();
        assert_eq!(settings, snapshot);
    }

    #[test]
    fn test_markup_escapes_values() {
        let settings = Settings {
            icon: "<img>".to_string(),
            ..Settings::default()
        };
        let html = markup(&settings);
        assert!(html.contains("&lt;img&gt;"));
        assert!(!html.contains("<img>"));
    }

    #[test]
    fn test_open_uses_stable_key() {
        let mut shell = ShellEngine::new();
        shell.init(1000.0, 800.0);
        let key = open(&mut shell, &Settings::default(), 0.0);
        assert_eq!(key, "settings");
    }
}
