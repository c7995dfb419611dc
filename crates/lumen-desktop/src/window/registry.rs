//! Window registry: key-to-record map and the stacking counter

use std::collections::HashMap;
use crate::math::{Vec2, FRAME_STYLE};
use super::{Window, WindowRegion};

/// Authoritative mapping from window key to record, plus the global
/// monotonically increasing stacking counter
///
/// Records enter only through `insert` (creation) and leave only through
/// `remove` (close cleanup). The counter never decreases; every focus
/// transfer or creation takes a fresh maximum.
pub struct WindowRegistry {
    windows: HashMap<String, Window>,
    next_z: u32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            next_z: 10,
        }
    }

    /// Take the next stacking value
    pub fn bump_z(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }

    /// Highest stacking value handed out so far
    #[inline]
    pub fn stacking_top(&self) -> u32 {
        self.next_z
    }

    /// Insert a freshly created record
    pub fn insert(&mut self, window: Window) {
        self.windows.insert(window.key.clone(), window);
    }

    /// Remove a record (close cleanup only)
    pub fn remove(&mut self, key: &str) -> Option<Window> {
        self.windows.remove(key)
    }

    /// Check if a key is registered
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.windows.contains_key(key)
    }

    /// Get a record by key
    pub fn get(&self, key: &str) -> Option<&Window> {
        self.windows.get(key)
    }

    /// Get a mutable record by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Window> {
        self.windows.get_mut(key)
    }

    /// Get the number of records
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Iterate all records
    pub fn values(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Iterate all records mutably
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    /// Records sorted back to front
    pub fn by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// The record that should become active when the current active
    /// window goes away: highest stacking value among windows that are
    /// not minimized and not mid minimize/close animation
    pub fn top_eligible(&self) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| !w.minimized && !w.phase.is_animating())
            .max_by_key(|w| w.z_order)
    }

    /// Find which region of which window is at a display-space position
    ///
    /// Tests front to back; hidden, minimized, and pointer-disabled
    /// windows are transparent to hits.
    pub fn region_at(&self, pos: Vec2) -> Option<(&Window, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        for window in windows {
            if window.hidden || window.minimized || !window.pointer_enabled {
                continue;
            }
            if !window.rect().contains(pos) {
                continue;
            }
            return Some((window, hit_test_window(window, pos)));
        }
        None
    }
}

/// Hit test a single window, assuming `pos` is inside its rect
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    if let Some(region) = hit_test_buttons(window, pos) {
        return region;
    }
    // Corners win over the title bar so the top corners stay grabbable
    if let Some(region) = hit_test_resize_corners(window, pos) {
        return region;
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    if window.close_button_rect().contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if window.maximize_button_rect().contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }
    if window.minimize_button_rect().contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

/// Hit test the four corner resize handles
fn hit_test_resize_corners(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let handle = FRAME_STYLE.resize_handle_size;
    let rect = window.rect();

    let in_left = pos.x < rect.x + handle;
    let in_right = pos.x > rect.right() - handle;
    let in_top = pos.y < rect.y + handle;
    let in_bottom = pos.y > rect.bottom() - handle;

    if in_top && in_left {
        return Some(WindowRegion::ResizeNW);
    }
    if in_top && in_right {
        return Some(WindowRegion::ResizeNE);
    }
    if in_bottom && in_left {
        return Some(WindowRegion::ResizeSW);
    }
    if in_bottom && in_right {
        return Some(WindowRegion::ResizeSE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};
    use crate::window::{Entrance, WindowPhase};

    fn make_window(key: &str, z: u32) -> Window {
        Window {
            key: key.to_string(),
            title: key.to_string(),
            content: String::new(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(400.0, 300.0),
            min_size: Size::new(150.0, 100.0),
            z_order: z,
            minimized: false,
            maximized: false,
            original_rect: None,
            phase: WindowPhase::Idle,
            entrance: Entrance::None,
            pointer_enabled: true,
            hidden: false,
        }
    }

    #[test]
    fn test_stacking_counter_monotonic() {
        let mut registry = WindowRegistry::new();
        let a = registry.bump_z();
        let b = registry.bump_z();
        let c = registry.bump_z();
        assert!(a < b && b < c);
        assert_eq!(registry.stacking_top(), c);
    }

    #[test]
    fn test_insert_get_remove() {
        let mut registry = WindowRegistry::new();
        registry.insert(make_window("a", 1));

        assert!(registry.contains("a"));
        assert_eq!(registry.count(), 1);
        assert!(registry.get("a").is_some());

        registry.remove("a");
        assert!(!registry.contains("a"));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_top_eligible_skips_minimized_and_animating() {
        use crate::transition::{AnimationKind, WindowAnimation};

        let mut registry = WindowRegistry::new();
        registry.insert(make_window("low", 1));

        let mut minimized = make_window("min", 5);
        minimized.minimized = true;
        registry.insert(minimized);

        let mut closing = make_window("closing", 9);
        closing.phase = WindowPhase::Closing(WindowAnimation::new(AnimationKind::Close, 0.0));
        registry.insert(closing);

        assert_eq!(registry.top_eligible().map(|w| w.key.as_str()), Some("low"));
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let mut registry = WindowRegistry::new();
        registry.insert(make_window("back", 1));
        registry.insert(make_window("front", 2));

        let (win, region) = registry.region_at(Vec2::new(300.0, 250.0)).unwrap();
        assert_eq!(win.key, "front");
        assert_eq!(region, WindowRegion::Content);
    }

    #[test]
    fn test_region_at_title_and_corners() {
        let mut registry = WindowRegistry::new();
        registry.insert(make_window("a", 1));

        let (_, region) = registry.region_at(Vec2::new(200.0, 110.0)).unwrap();
        assert_eq!(region, WindowRegion::TitleBar);

        let (_, region) = registry.region_at(Vec2::new(102.0, 102.0)).unwrap();
        assert_eq!(region, WindowRegion::ResizeNW);

        let (_, region) = registry.region_at(Vec2::new(498.0, 398.0)).unwrap();
        assert_eq!(region, WindowRegion::ResizeSE);

        assert!(registry.region_at(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_region_at_ignores_pointer_disabled() {
        let mut registry = WindowRegistry::new();
        let mut win = make_window("a", 1);
        win.pointer_enabled = false;
        registry.insert(win);

        assert!(registry.region_at(Vec2::new(300.0, 250.0)).is_none());
    }
}
