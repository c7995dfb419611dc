//! Window lifecycle operations and active-window promotion

use tracing::{debug, warn};

use crate::math::{Rect, Vec2};
use crate::transition::{AnimationKind, WindowAnimation, RESTORE_DURATION_MS};
use crate::window::{
    Entrance, Window, WindowConfig, WindowKey, WindowPhase, DEBUG_WINDOW_PREFIX, DEFAULT_MIN_SIZE,
    DEFAULT_WINDOW_SIZE,
};
use super::{DeferredOp, ShellEngine};

/// Cascade placement so successive windows do not perfectly overlap
fn cascade_position(window_count: usize) -> Vec2 {
    let offset = (window_count % 10) as f32 * 20.0;
    Vec2::new(50.0 + offset, 50.0 + offset)
}

impl ShellEngine {
    /// Create a window, or focus it if the key already exists
    ///
    /// New windows get a fresh stacking value, a cascading position when
    /// none was requested, geometry clamped to the display bounds, a
    /// taskbar entry, and the staged pre-entry visual state; the reveal
    /// animation is armed by the next `tick` only if the record still
    /// exists then. Returns the key either way.
    pub fn create_window(&mut self, config: WindowConfig, now_ms: f64) -> WindowKey {
        let key = config.key.clone();
        if self.registry.contains(&key) {
            if !key.starts_with(DEBUG_WINDOW_PREFIX) {
                warn!(key = %key, "window already exists, focusing instead");
            }
            self.focus_window(&key, now_ms);
            return key;
        }

        let size = config.size.unwrap_or(DEFAULT_WINDOW_SIZE);
        let position = config
            .position
            .unwrap_or_else(|| cascade_position(self.registry.count()));
        let rect = self
            .display
            .clamp_window(Rect::from_pos_size(position, size));

        let z = self.registry.bump_z();
        let window = Window {
            key: key.clone(),
            title: config.title.clone(),
            content: config.content,
            position: rect.position(),
            size: rect.size(),
            min_size: config.min_size.unwrap_or(DEFAULT_MIN_SIZE),
            z_order: z,
            minimized: false,
            maximized: false,
            original_rect: None,
            phase: WindowPhase::Idle,
            entrance: Entrance::Staged,
            pointer_enabled: true,
            hidden: false,
        };

        self.taskbar.add(key.clone(), config.title);
        self.registry.insert(window);
        self.set_active(Some(key.clone()));
        debug!(key = %key, "window created");
        key
    }

    /// Focus a window: restore it if minimized and bring it to the front
    pub fn focus_window(&mut self, key: &str, now_ms: f64) {
        if !self.registry.contains(key) {
            return;
        }

        let mut needs_active = false;

        let minimized = self.registry.get(key).map(|w| w.minimized).unwrap_or(false);
        if minimized {
            // Fly in from the taskbar entry toward the restored position
            let trajectory = self.taskbar_trajectory(key);
            if let Some(win) = self.registry.get_mut(key) {
                win.hidden = false;
                win.minimized = false;
                win.entrance = Entrance::Animating(WindowAnimation::new(
                    AnimationKind::FlyIn { from: trajectory },
                    now_ms,
                ));
            }
            self.taskbar.mark_minimized(key, false);
            needs_active = true;
        }

        if self.active.as_deref() != Some(key) {
            let z = self.registry.bump_z();
            if let Some(win) = self.registry.get_mut(key) {
                win.z_order = z;
            }
            needs_active = true;
        }

        if needs_active {
            self.set_active(Some(key.to_string()));
        }
    }

    /// Minimize a window: fly out toward its taskbar entry, then hide
    ///
    /// A maximized window restores its saved geometry instantly first so
    /// only the fly-out is animated.
    pub fn minimize_window(&mut self, key: &str, now_ms: f64) {
        let (minimized, animating, maximized) = match self.registry.get(key) {
            Some(w) => (w.minimized, w.phase.is_animating(), w.maximized),
            None => return,
        };
        if minimized || animating {
            return;
        }

        if maximized {
            if let Some(win) = self.registry.get_mut(key) {
                win.maximized = false;
                if let Some(rect) = win.original_rect.take() {
                    if rect.is_finite() {
                        win.position = rect.position();
                        win.size = rect.size();
                    }
                }
            }
        }

        if self.input.targets(key) {
            self.input.cancel();
        }

        let trajectory = self.taskbar_trajectory(key);
        if let Some(win) = self.registry.get_mut(key) {
            win.entrance = Entrance::None;
            win.phase = WindowPhase::Minimizing(WindowAnimation::new(
                AnimationKind::FlyOut { to: trajectory },
                now_ms,
            ));
        }
        debug!(key, "minimize started");
    }

    /// Maximize a window, restore it if already maximized, or restore
    /// from the taskbar first when minimized
    pub fn maximize_window(&mut self, key: &str, now_ms: f64) {
        let (animating, maximized, minimized) = match self.registry.get(key) {
            Some(w) => (w.phase.is_animating(), w.maximized, w.minimized),
            None => return,
        };
        if animating {
            return;
        }

        if self.input.targets(key) {
            self.input.cancel();
        }

        if maximized {
            if let Some(win) = self.registry.get_mut(key) {
                if win.phase.is_gesture() {
                    win.phase = WindowPhase::Idle;
                }
                win.entrance = Entrance::None;
                win.maximized = false;
                if let Some(rect) = win.original_rect.take() {
                    if rect.is_finite() {
                        win.position = rect.position();
                        win.size = rect.size();
                    }
                }
            }
        } else if !minimized {
            let bounds = self.display.bounds();
            if let Some(win) = self.registry.get_mut(key) {
                if win.phase.is_gesture() {
                    win.phase = WindowPhase::Idle;
                }
                win.entrance = Entrance::None;
                win.original_rect = Some(win.rect());
                win.maximized = true;
                win.position = bounds.position();
                win.size = bounds.size();
            }
            self.focus_window(key, now_ms);
        } else {
            // Restore from the taskbar first; finish maximizing once the
            // fly-in has had time to land
            self.focus_window(key, now_ms);
            self.deferred.push(DeferredOp::Maximize {
                key: key.to_string(),
                due_ms: now_ms + RESTORE_DURATION_MS,
            });
        }
    }

    /// Close a window
    ///
    /// The taskbar entry is removed immediately in every case. A
    /// minimized window has nothing visible to animate and is removed on
    /// the spot; otherwise the exit transition runs and cleanup happens
    /// on its completion event or the safety deadline, whichever first.
    pub fn close_window(&mut self, key: &str, now_ms: f64) {
        let (animating, minimized) = match self.registry.get(key) {
            Some(w) => (w.phase.is_animating(), w.minimized),
            None => return,
        };
        if animating {
            return;
        }

        self.taskbar.remove(key);

        if minimized {
            self.registry.remove(key);
            debug!(key, "minimized window closed immediately");
            if self.active.as_deref() == Some(key) {
                self.active = None;
                self.promote_top_window();
            }
            return;
        }

        if self.input.targets(key) {
            self.input.cancel();
        }

        if let Some(win) = self.registry.get_mut(key) {
            win.pointer_enabled = false;
            win.entrance = Entrance::None;
            win.phase = WindowPhase::Closing(WindowAnimation::new(AnimationKind::Close, now_ms));
        }
        debug!(key, "close started");
    }

    /// Promote the top eligible window to active after the current
    /// active window went away, or clear active state if none qualifies
    pub(crate) fn promote_top_window(&mut self) {
        let next = self.registry.top_eligible().map(|w| w.key.clone());
        self.set_active(next);
    }

    /// Move the active-window pointer and the taskbar's active marker
    pub(crate) fn set_active(&mut self, key: Option<WindowKey>) {
        self.taskbar.set_active(key.as_deref());
        self.active = key;
    }
}
