//! End-to-end shell behavior
//!
//! Drives the engine through a full create/focus/minimize/maximize/close
//! sequence the way the DOM layer would, with the clock advanced
//! manually.

use lumen_desktop::{
    InputResult, ShellEngine, Size, Vec2, WindowConfig, MINIMIZE_DURATION_MS, SAFETY_GRACE_MS,
};

fn shell() -> ShellEngine {
    let mut shell = ShellEngine::new();
    shell.init(1000.0, 800.0);
    shell
}

#[test]
fn full_window_lifecycle() {
    let mut shell = shell();
    let mut now = 0.0;

    // Create "A": in bounds and active
    shell.create_window(WindowConfig::new("A", "Alpha", "<p>a</p>"), now);
    now += 16.0;
    shell.tick(now);

    let a = shell.windows().get("A").unwrap();
    let rect = a.rect();
    assert!(rect.x >= 0.0 && rect.y >= 0.0);
    assert!(rect.right() <= 1000.0 && rect.bottom() <= 800.0);
    assert_eq!(shell.active_window(), Some("A"));

    // Create "B": takes the active marker with a higher stacking value
    shell.create_window(WindowConfig::new("B", "Beta", "<p>b</p>"), now);
    assert_eq!(shell.active_window(), Some("B"));
    let za = shell.windows().get("A").unwrap().z_order;
    let zb = shell.windows().get("B").unwrap().z_order;
    assert!(zb > za);

    let active_entries: Vec<&str> = shell
        .taskbar_entries()
        .iter()
        .filter(|e| e.active)
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(active_entries, vec!["B"]);

    // Minimize "B": hidden, not active; "A" is promoted
    now += 16.0;
    shell.minimize_window("B", now);
    now += MINIMIZE_DURATION_MS + 1.0;
    shell.notify_transition_end("B");

    let b = shell.windows().get("B").unwrap();
    assert!(b.minimized && b.hidden);
    assert_eq!(shell.active_window(), Some("A"));

    // Focus "B": visible again, active, stacking above "A"'s latest
    let za_latest = shell.windows().get("A").unwrap().z_order;
    now += 16.0;
    shell.focus_window("B", now);

    let b = shell.windows().get("B").unwrap();
    assert!(!b.minimized && !b.hidden);
    assert!(b.z_order > za_latest);
    assert_eq!(shell.active_window(), Some("B"));

    // Maximize "A": fills the display; restore returns the old rect
    let before = shell.windows().get("A").unwrap().rect();
    now += 16.0;
    shell.maximize_window("A", now);
    {
        let a = shell.windows().get("A").unwrap();
        assert!((a.rect().width - 1000.0).abs() < 0.001);
        assert!((a.rect().height - 800.0).abs() < 0.001);
        assert_eq!(shell.active_window(), Some("A"));
    }
    now += 16.0;
    shell.maximize_window("A", now);
    let after = shell.windows().get("A").unwrap().rect();
    assert!((after.x - before.x).abs() < 0.5);
    assert!((after.y - before.y).abs() < 0.5);
    assert!((after.width - before.width).abs() < 0.5);
    assert!((after.height - before.height).abs() < 0.5);

    // Close "A": record and taskbar entry both gone
    now += 16.0;
    shell.close_window("A", now);
    assert!(shell.taskbar_entries().iter().all(|e| e.key != "A"));
    shell.notify_transition_end("A");
    assert!(!shell.windows().contains("A"));
    assert_eq!(shell.active_window(), Some("B"));
}

#[test]
fn duplicate_create_never_duplicates_records() {
    let mut shell = shell();
    for i in 0..5 {
        shell.create_window(WindowConfig::new("solo", "Solo", ""), i as f64);
    }
    assert_eq!(shell.windows().count(), 1);
    assert_eq!(shell.taskbar_entries().len(), 1);
}

#[test]
fn stacking_is_strictly_monotonic_across_operations() {
    let mut shell = shell();
    let mut last = shell.windows().stacking_top();

    shell.create_window(WindowConfig::new("a", "A", ""), 0.0);
    let z = shell.windows().get("a").unwrap().z_order;
    assert!(z > last);
    last = z;

    shell.create_window(WindowConfig::new("b", "B", ""), 0.0);
    let z = shell.windows().get("b").unwrap().z_order;
    assert!(z > last);
    last = z;

    shell.focus_window("a", 1.0);
    let z = shell.windows().get("a").unwrap().z_order;
    assert!(z > last);
}

#[test]
fn close_while_minimized_skips_animation_entirely() {
    let mut shell = shell();
    shell.create_window(WindowConfig::new("a", "A", ""), 0.0);
    shell.minimize_window("a", 0.0);
    shell.tick(MINIMIZE_DURATION_MS + SAFETY_GRACE_MS + 1.0);
    assert!(shell.windows().get("a").unwrap().minimized);

    // No transition-end, no tick: removal happens synchronously
    shell.close_window("a", 2000.0);
    assert!(!shell.windows().contains("a"));
    assert!(shell.taskbar_entries().is_empty());
}

#[test]
fn taskbar_reorder_leaves_registry_and_stacking_untouched() {
    let mut shell = shell();
    shell.create_window(WindowConfig::new("a", "A", ""), 0.0);
    shell.create_window(WindowConfig::new("b", "B", ""), 0.0);
    shell.create_window(WindowConfig::new("c", "C", ""), 0.0);

    let z_before: Vec<u32> = ["a", "b", "c"]
        .iter()
        .map(|k| shell.windows().get(k).unwrap().z_order)
        .collect();

    // Drop "c" on the left half of "a", then "a" onto empty space
    shell.taskbar_drop("c", "a", 0.0);
    shell.taskbar_drop_to_strip("a");

    let order: Vec<&str> = shell.taskbar_entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(order, vec!["c", "b", "a"]);

    let z_after: Vec<u32> = ["a", "b", "c"]
        .iter()
        .map(|k| shell.windows().get(k).unwrap().z_order)
        .collect();
    assert_eq!(z_before, z_after);
    assert_eq!(shell.active_window(), Some("c"));
}

#[test]
fn drag_gesture_survives_display_resize_mid_move() {
    let mut shell = shell();
    let mut cfg = WindowConfig::new("a", "A", "");
    cfg.position = Some(Vec2::new(500.0, 300.0));
    cfg.size = Some(Size::new(400.0, 300.0));
    shell.create_window(cfg, 0.0);

    assert_eq!(shell.pointer_down(600.0, 310.0, 0, 1.0), InputResult::Handled);

    // The display shrinks mid-gesture; the next step clamps against the
    // new bounds, not the cached ones
    shell.resize(700.0, 500.0);
    shell.pointer_move(5000.0, 5000.0);

    let rect = shell.windows().get("a").unwrap().rect();
    assert!(rect.right() <= 700.0 + 0.001);
    assert!(rect.bottom() <= 500.0 + 0.001);
    shell.pointer_up();
}

mod clamp_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any drag end state keeps the full window footprint inside the
        /// display area.
        #[test]
        fn drag_end_state_is_always_in_bounds(
            start_x in -200.0f32..1200.0,
            start_y in -200.0f32..1000.0,
            move_x in -3000.0f32..3000.0,
            move_y in -3000.0f32..3000.0,
        ) {
            let mut shell = ShellEngine::new();
            shell.init(1000.0, 800.0);
            let mut cfg = WindowConfig::new("w", "W", "");
            cfg.position = Some(Vec2::new(start_x, start_y));
            cfg.size = Some(Size::new(400.0, 300.0));
            shell.create_window(cfg, 0.0);

            // Creation clamps the requested position already
            let rect = shell.windows().get("w").unwrap().rect();
            prop_assert!(rect.x >= 0.0 && rect.y >= 0.0);

            // Grab the title bar and fling the pointer
            let grab = Vec2::new(rect.x + 50.0, rect.y + 10.0);
            shell.pointer_down(grab.x, grab.y, 0, 1.0);
            shell.pointer_move(move_x, move_y);
            shell.pointer_up();

            let rect = shell.windows().get("w").unwrap().rect();
            prop_assert!(rect.x >= 0.0);
            prop_assert!(rect.y >= 0.0);
            prop_assert!(rect.right() <= 1000.0 + 0.001);
            prop_assert!(rect.bottom() <= 800.0 + 0.001);
        }

        /// Any resize end state stays in bounds and at or above the
        /// minimum size.
        #[test]
        fn resize_end_state_respects_bounds_and_minimum(
            move_x in -3000.0f32..3000.0,
            move_y in -3000.0f32..3000.0,
            corner_idx in 0usize..4,
        ) {
            let mut shell = ShellEngine::new();
            shell.init(1000.0, 800.0);
            let mut cfg = WindowConfig::new("w", "W", "");
            cfg.position = Some(Vec2::new(300.0, 250.0));
            cfg.size = Some(Size::new(400.0, 300.0));
            shell.create_window(cfg, 0.0);

            let rect = shell.windows().get("w").unwrap().rect();
            let corners = [
                Vec2::new(rect.x + 2.0, rect.y + 2.0),
                Vec2::new(rect.right() - 2.0, rect.y + 2.0),
                Vec2::new(rect.x + 2.0, rect.bottom() - 2.0),
                Vec2::new(rect.right() - 2.0, rect.bottom() - 2.0),
            ];
            let grab = corners[corner_idx];

            shell.pointer_down(grab.x, grab.y, 0, 1.0);
            shell.pointer_move(move_x, move_y);
            shell.pointer_up();

            let win = shell.windows().get("w").unwrap();
            let rect = win.rect();
            prop_assert!(rect.x >= -0.001);
            prop_assert!(rect.y >= -0.001);
            prop_assert!(rect.right() <= 1000.0 + 0.001);
            prop_assert!(rect.bottom() <= 800.0 + 0.001);
            prop_assert!(rect.width >= win.min_size.width - 0.001);
            prop_assert!(rect.height >= win.min_size.height - 0.001);
        }
    }
}
