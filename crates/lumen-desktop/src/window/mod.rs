//! Window records, lifecycle state, and the registry

mod config;
mod region;
mod registry;
#[allow(clippy::module_inception)]
mod window;

pub use config::{WindowConfig, DEFAULT_MIN_SIZE, DEFAULT_WINDOW_SIZE};
pub use region::WindowRegion;
pub use registry::WindowRegistry;
pub use window::{Entrance, Window, WindowPhase};

/// Unique window identifier, assigned by the creator and stable for the
/// record's lifetime
pub type WindowKey = String;

/// Identifier prefix reserved for system-generated debug windows; the
/// duplicate-creation warning is suppressed for these
pub const DEBUG_WINDOW_PREFIX: &str = "debug_";
