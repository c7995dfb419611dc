//! Animation completion, safety expiry, and deferred operations
//!
//! Completion is exactly-once by construction: the platform's
//! transition-end notification and the tick-side safety deadline both
//! funnel into `finish_minimize`/`finish_close`, which check the phase
//! before acting. Whichever path runs first wins; the other is a no-op.

use crate::transition::{AnimationKind, WindowAnimation};
use crate::window::{Entrance, WindowPhase};
use super::ShellEngine;

/// An operation waiting for an animation to land
#[derive(Clone, Debug)]
pub(crate) enum DeferredOp {
    /// Maximize once the restore fly-in has had time to finish
    Maximize { key: String, due_ms: f64 },
}

impl ShellEngine {
    /// Advance time-driven state; returns whether anything is still
    /// animating (the host can stop scheduling frames when it is not)
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.arm_staged_entrances(now_ms);
        self.expire_entrances(now_ms);
        self.expire_phases(now_ms);
        self.run_deferred(now_ms);
        self.has_running_animation(now_ms)
    }

    /// The platform reported a window's transition finished or was
    /// canceled
    pub fn notify_transition_end(&mut self, key: &str) {
        let phase = match self.registry.get(key) {
            Some(w) => w.phase,
            None => return,
        };
        match phase {
            WindowPhase::Minimizing(_) => self.finish_minimize(key),
            WindowPhase::Closing(_) => self.finish_close(key),
            _ => {
                if let Some(win) = self.registry.get_mut(key) {
                    if matches!(win.entrance, Entrance::Animating(_)) {
                        win.entrance = Entrance::None;
                    }
                }
            }
        }
    }

    /// Staged windows begin their reveal on the tick after creation, so
    /// a window closed before its first frame never animates in
    fn arm_staged_entrances(&mut self, now_ms: f64) {
        for win in self.registry.values_mut() {
            if matches!(win.entrance, Entrance::Staged) {
                win.entrance =
                    Entrance::Animating(WindowAnimation::new(AnimationKind::Reveal, now_ms));
            }
        }
    }

    /// Drop entrance effects whose expected duration has elapsed,
    /// whether or not a completion event ever arrived
    fn expire_entrances(&mut self, now_ms: f64) {
        for win in self.registry.values_mut() {
            if let Entrance::Animating(anim) = win.entrance {
                if anim.is_complete(now_ms) {
                    win.entrance = Entrance::None;
                }
            }
        }
    }

    /// Safety path: force cleanup of minimize/close animations whose
    /// completion event never arrived
    fn expire_phases(&mut self, now_ms: f64) {
        let stalled: Vec<(String, bool)> = self
            .registry
            .values()
            .filter_map(|w| match w.phase {
                WindowPhase::Minimizing(anim) if anim.is_expired(now_ms) => {
                    Some((w.key.clone(), true))
                }
                WindowPhase::Closing(anim) if anim.is_expired(now_ms) => {
                    Some((w.key.clone(), false))
                }
                _ => None,
            })
            .collect();

        for (key, is_minimize) in stalled {
            if is_minimize {
                self.finish_minimize(&key);
            } else {
                self.finish_close(&key);
            }
        }
    }

    /// Execute deferred operations that have come due
    fn run_deferred(&mut self, now_ms: f64) {
        let mut due = Vec::new();
        self.deferred.retain(|op| match op {
            DeferredOp::Maximize { key, due_ms } => {
                if *due_ms <= now_ms {
                    due.push(key.clone());
                    false
                } else {
                    true
                }
            }
        });

        for key in due {
            // Only proceed if the record survived and the restore landed
            let eligible = self
                .registry
                .get(&key)
                .map(|w| !w.minimized)
                .unwrap_or(false);
            if eligible {
                self.maximize_window(&key, now_ms);
            }
        }
    }

    /// Finish a minimize: hide the window, flip the record and taskbar
    /// markers, promote the next window if this one was active
    pub(crate) fn finish_minimize(&mut self, key: &str) {
        match self.registry.get_mut(key) {
            Some(win) if matches!(win.phase, WindowPhase::Minimizing(_)) => {
                win.phase = WindowPhase::Idle;
                win.entrance = Entrance::None;
                win.hidden = true;
                win.minimized = true;
            }
            _ => return,
        }
        self.taskbar.mark_minimized(key, true);
        if self.active.as_deref() == Some(key) {
            self.active = None;
            self.promote_top_window();
        }
    }

    /// Finish a close: delete the record and promote the next window if
    /// this one was active (the taskbar entry went away at close start)
    pub(crate) fn finish_close(&mut self, key: &str) {
        let closing = self
            .registry
            .get(key)
            .map(|w| matches!(w.phase, WindowPhase::Closing(_)))
            .unwrap_or(false);
        if !closing {
            return;
        }
        self.registry.remove(key);
        if self.active.as_deref() == Some(key) {
            self.active = None;
            self.promote_top_window();
        }
    }

    /// Anything still moving or pending
    fn has_running_animation(&self, now_ms: f64) -> bool {
        if !self.deferred.is_empty() {
            return true;
        }
        self.registry.values().any(|w| match w.phase {
            WindowPhase::Minimizing(anim) | WindowPhase::Closing(anim) => !anim.is_expired(now_ms),
            _ => matches!(w.entrance, Entrance::Staged | Entrance::Animating(_)),
        })
    }
}
