//! Peripheral widgets for the Lumen desktop shell
//!
//! Each widget is a content provider: it builds markup and a window
//! configuration, then opens itself through the shell engine's public
//! create-or-focus API. None of them reach into the engine's internals.
//!
//! - [`menu`]: start menu with an explicit action-to-handler registry
//! - [`launcher`]: per-app window sizing table and open helper
//! - [`settings`]: settings dialog content and persisted blob
//! - [`sidebar`]: sidebar toggle state and persisted flag
//! - [`clock`]: taskbar clock formatting
//! - [`files`]: file-tree browser content
//! - [`search`]: search overlay content and filtering
//! - [`debug`]: diagnostic window spawned by the debug hotkey

pub mod clock;
pub mod debug;
pub mod files;
pub mod launcher;
pub mod menu;
pub mod search;
pub mod settings;
pub mod sidebar;

mod markup;

pub use launcher::{open_app, AppSpec};
pub use menu::{MenuAction, MenuEntry, StartMenu};
pub use settings::Settings;
pub use sidebar::SidebarState;
