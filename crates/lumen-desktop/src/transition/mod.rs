//! Window transition timing and interpolation
//!
//! Animations are pure time functions: the engine stores a start
//! timestamp and derives everything else from the `now_ms` passed into
//! each call, so tests can drive the clock deterministically.

mod animation;
mod easing;

pub use animation::{AnimationKind, VisualState, WindowAnimation};
pub use easing::{ease_in_out, ease_out_cubic};

/// Duration of the window entry (fade/scale in) transition in milliseconds
pub const REVEAL_DURATION_MS: f64 = 250.0;

/// Duration of the minimize fly-out transition in milliseconds
pub const MINIMIZE_DURATION_MS: f64 = 350.0;

/// Duration of the restore fly-in transition in milliseconds
pub const RESTORE_DURATION_MS: f64 = 350.0;

/// Duration of the close (fade/scale out) transition in milliseconds
pub const CLOSE_DURATION_MS: f64 = 300.0;

/// Extra wait past the nominal duration before the safety path forces
/// cleanup of an animation whose completion event never arrived
pub const SAFETY_GRACE_MS: f64 = 50.0;
