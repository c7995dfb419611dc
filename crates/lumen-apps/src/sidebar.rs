//! Sidebar toggle state
//!
//! The open/closed flag is persisted by the host in local storage; the
//! width pair is what the frontend animates between.

use serde::{Deserialize, Serialize};

/// Expanded sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 250.0;

/// Persisted sidebar state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// Flip the state, returning the new value
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Current target width for the layout column
    pub fn width(&self) -> f32 {
        if self.open {
            SIDEBAR_WIDTH
        } else {
            0.0
        }
    }

    /// Serialize for local storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from local storage; malformed input falls back to
    /// closed
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}
