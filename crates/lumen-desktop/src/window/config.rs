//! Window configuration for creation

use crate::math::{Size, Vec2};
use super::WindowKey;

/// Default size for windows that do not request one
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(400.0, 300.0);

/// Minimum window size when none is declared
pub const DEFAULT_MIN_SIZE: Size = Size::new(150.0, 100.0);

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Unique identifier; creating an existing key focuses it instead
    pub key: WindowKey,
    /// Window title, mirrored onto the taskbar entry
    pub title: String,
    /// Markup embedded in the content region; the shell does not
    /// interpret it
    pub content: String,
    /// Initial position (None = cascade from the current window count)
    pub position: Option<Vec2>,
    /// Initial size (None = `DEFAULT_WINDOW_SIZE`)
    pub size: Option<Size>,
    /// Minimum size (None = `DEFAULT_MIN_SIZE`)
    pub min_size: Option<Size>,
}

impl WindowConfig {
    /// Convenience constructor for the common key/title/content case
    pub fn new(key: impl Into<WindowKey>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }
}
