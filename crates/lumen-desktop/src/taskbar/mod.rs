//! Taskbar: the ordered strip of per-window entries
//!
//! One entry per live window, created with the window and removed the
//! moment the window starts closing. Entry order is purely presentational:
//! reordering never touches the registry or stacking order.

use serde::Serialize;
use crate::display::DisplayArea;
use crate::math::{Vec2, TASKBAR_STYLE};
use crate::window::WindowKey;

/// Which side of a drop target an entry lands on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

/// One taskbar entry mirroring a window
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub key: WindowKey,
    pub title: String,
    /// Bears the active marker; at most one entry does
    pub active: bool,
    /// The mirrored window is currently minimized
    pub minimized: bool,
}

/// Ordered collection of taskbar entries
pub struct TaskbarManager {
    entries: Vec<TaskbarEntry>,
}

impl Default for TaskbarManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskbarManager {
    /// Create an empty taskbar
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry for a new window
    pub fn add(&mut self, key: impl Into<WindowKey>, title: impl Into<String>) {
        self.entries.push(TaskbarEntry {
            key: key.into(),
            title: title.into(),
            active: false,
            minimized: false,
        });
    }

    /// Remove the entry for a window; true if one was present
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// An entry for this key exists
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Number of entries
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order
    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    /// Keys in display order
    pub fn order(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Move the active marker: set on `key` (clearing its minimized
    /// marker), cleared everywhere else. `None` clears all markers.
    pub fn set_active(&mut self, key: Option<&str>) {
        for entry in &mut self.entries {
            let is_target = key == Some(entry.key.as_str());
            entry.active = is_target;
            if is_target {
                entry.minimized = false;
            }
        }
    }

    /// Update the minimized marker; minimizing also drops the active
    /// marker, un-minimizing leaves active for the focus path to set
    pub fn mark_minimized(&mut self, key: &str, minimized: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.minimized = minimized;
            if minimized {
                entry.active = false;
            }
        }
    }

    /// Index of an entry in display order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Screen-space center of an entry, for minimize/restore trajectories
    ///
    /// The strip sits directly below the display area; entries run left
    /// to right in display order. Returns None when the entry is absent
    /// so callers can fall back to the default trajectory.
    pub fn entry_center(&self, key: &str, display: &DisplayArea) -> Option<Vec2> {
        let index = self.index_of(key)? as f32;
        let x = TASKBAR_STYLE.edge_inset
            + index * (TASKBAR_STYLE.entry_width + TASKBAR_STYLE.entry_gap)
            + TASKBAR_STYLE.entry_width / 2.0;
        let y = display.size.height + TASKBAR_STYLE.height / 2.0;
        Some(display.to_screen(Vec2::new(x, y)))
    }

    /// Which half of `target` the pointer is over, in display coords
    pub fn drop_position(&self, target: &str, pointer_x: f32) -> Option<DropPosition> {
        let index = self.index_of(target)? as f32;
        let left = TASKBAR_STYLE.edge_inset + index * (TASKBAR_STYLE.entry_width + TASKBAR_STYLE.entry_gap);
        let mid = left + TASKBAR_STYLE.entry_width / 2.0;
        Some(if pointer_x < mid { DropPosition::Before } else { DropPosition::After })
    }

    /// Reorder: drop `dragged` before or after `target`
    ///
    /// No-op when either entry is missing or they are the same.
    pub fn reorder(&mut self, dragged: &str, target: &str, position: DropPosition) {
        if dragged == target {
            return;
        }
        let (Some(from), Some(_)) = (self.index_of(dragged), self.index_of(target)) else {
            return;
        };
        let entry = self.entries.remove(from);
        // Target index may have shifted after the removal
        let Some(target_index) = self.index_of(target) else {
            self.entries.insert(from.min(self.entries.len()), entry);
            return;
        };
        let insert_at = match position {
            DropPosition::Before => target_index,
            DropPosition::After => target_index + 1,
        };
        self.entries.insert(insert_at, entry);
    }

    /// Drop on empty strip space: move `dragged` to the end
    pub fn move_to_end(&mut self, dragged: &str) {
        if let Some(from) = self.index_of(dragged) {
            let entry = self.entries.remove(from);
            self.entries.push(entry);
        }
    }
}
