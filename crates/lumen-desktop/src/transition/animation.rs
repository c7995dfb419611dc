//! Per-window animation state

use crate::math::Vec2;
use super::{
    ease_out_cubic, CLOSE_DURATION_MS, MINIMIZE_DURATION_MS, RESTORE_DURATION_MS,
    REVEAL_DURATION_MS, SAFETY_GRACE_MS,
};

/// What a window animation is doing
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationKind {
    /// Entry transition: fade in and scale up from the staged state
    Reveal,
    /// Restore from the taskbar: fly in from `from` (screen-space offset
    /// of the taskbar entry's center relative to the window's center)
    FlyIn { from: Vec2 },
    /// Minimize toward the taskbar: fly out to `to` (same convention)
    FlyOut { to: Vec2 },
    /// Exit transition: fade out and scale down in place
    Close,
}

/// Interpolated visual parameters for one frame
///
/// `offset` is a screen-space translation applied on top of the window's
/// stored position; `scale` and `opacity` are applied about the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub scale: f32,
    pub offset: Vec2,
}

impl VisualState {
    /// Resting state: fully visible, untransformed
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Pre-entry state a window is created in
    pub const STAGED: VisualState = VisualState {
        opacity: 0.0,
        scale: 0.8,
        offset: Vec2::ZERO,
    };
}

/// A running window transition, anchored at its start timestamp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowAnimation {
    kind: AnimationKind,
    start_ms: f64,
}

impl WindowAnimation {
    /// Start an animation at the given timestamp
    pub fn new(kind: AnimationKind, start_ms: f64) -> Self {
        Self { kind, start_ms }
    }

    /// The animation's kind
    #[inline]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Nominal duration for this animation's kind
    pub fn duration_ms(&self) -> f64 {
        match self.kind {
            AnimationKind::Reveal => REVEAL_DURATION_MS,
            AnimationKind::FlyIn { .. } => RESTORE_DURATION_MS,
            AnimationKind::FlyOut { .. } => MINIMIZE_DURATION_MS,
            AnimationKind::Close => CLOSE_DURATION_MS,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms() as f32).clamp(0.0, 1.0)
    }

    /// The nominal duration has elapsed
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// The safety deadline has passed; the tick-side fallback must run
    /// the same cleanup the completion event would have
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms() + SAFETY_GRACE_MS
    }

    /// Interpolated visual parameters at `now_ms`
    pub fn visual(&self, now_ms: f64) -> VisualState {
        let t = ease_out_cubic(self.progress(now_ms));
        match self.kind {
            AnimationKind::Reveal => VisualState {
                opacity: t,
                scale: 0.8 + 0.2 * t,
                offset: Vec2::ZERO,
            },
            AnimationKind::FlyIn { from } => VisualState {
                opacity: t,
                scale: 0.1 + 0.9 * t,
                offset: from * (1.0 - t),
            },
            AnimationKind::FlyOut { to } => VisualState {
                opacity: 1.0 - t,
                scale: 1.0 - 0.9 * t,
                offset: to * t,
            },
            AnimationKind::Close => VisualState {
                opacity: 1.0 - t,
                scale: 1.0 - 0.2 * t,
                offset: Vec2::ZERO,
            },
        }
    }
}
