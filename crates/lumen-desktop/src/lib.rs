//! Window manager core for the Lumen desktop shell
//!
//! This crate provides the shell's window lifecycle and focus
//! coordination:
//! - Window management (create-or-focus, minimize, maximize, close)
//! - Z-order and single-active-window tracking
//! - Minimize/restore/close animation sequencing with safety timeouts
//! - Taskbar synchronization and manual entry reordering
//! - Pointer-driven drag and resize with display-bounds clamping
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`) and chrome
//!   metrics
//! - [`display`]: The bounded display area and its coordinate spaces
//! - [`window`]: Window records, lifecycle phases, and the registry
//! - [`taskbar`]: Ordered taskbar entries mirroring window lifecycle
//! - [`input`]: Drag/resize gesture state machine
//! - [`transition`]: Time-driven window animations
//! - [`engine`]: The orchestrating [`ShellEngine`]
//!
//! ## Example
//!
//! ```rust
//! use lumen_desktop::{ShellEngine, WindowConfig};
//!
//! let mut shell = ShellEngine::new();
//! shell.init(1280.0, 720.0);
//!
//! let key = shell.create_window(
//!     WindowConfig::new("notes", "Notes", "<p>hello</p>"),
//!     0.0,
//! );
//! shell.tick(16.0);
//! assert_eq!(shell.active_window(), Some(key.as_str()));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser
//! 2. **Time Abstraction**: Animations take `now_ms` as input for
//!    deterministic testing
//! 3. **Swallowed Failures**: No public operation throws; missing
//!    targets no-op and stalled animations recover via safety deadlines

pub mod display;
pub mod input;
pub mod math;
pub mod taskbar;
pub mod transition;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use display::DisplayArea;
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, TaskbarStyle, Vec2, FRAME_STYLE, TASKBAR_STYLE};
pub use taskbar::{DropPosition, TaskbarEntry, TaskbarManager};
pub use transition::{AnimationKind, VisualState, WindowAnimation};
pub use window::{
    Entrance, Window, WindowConfig, WindowKey, WindowPhase, WindowRegion, WindowRegistry,
    DEBUG_WINDOW_PREFIX,
};

pub use engine::{ShellEngine, WindowView};

/// Nominal animation durations in milliseconds
pub use transition::{
    CLOSE_DURATION_MS, MINIMIZE_DURATION_MS, RESTORE_DURATION_MS, REVEAL_DURATION_MS,
    SAFETY_GRACE_MS,
};
