//! Renderable view of the current shell state
//!
//! The host renders from these snapshots; nothing here mutates state.

use serde::Serialize;
use crate::window::WindowPhase;
use super::ShellEngine;

/// One window's render parameters for a frame
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub key: String,
    pub title: String,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_order: u32,
    pub maximized: bool,
    pub focused: bool,
    pub pointer_enabled: bool,
    /// Host must suppress CSS transitions this frame (mid drag/resize)
    pub transitions_frozen: bool,
    pub closing: bool,
    pub minimizing: bool,
    pub opacity: f32,
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ShellEngine {
    /// Renderable windows, back to front, with interpolated visuals
    ///
    /// Hidden (fully minimized) windows are excluded; windows mid
    /// minimize animation are still present and moving.
    pub fn scene(&self, now_ms: f64) -> Vec<WindowView> {
        self.registry
            .by_z()
            .into_iter()
            .filter(|w| !w.hidden && !w.minimized)
            .map(|w| {
                let visual = w.visual(now_ms);
                WindowView {
                    key: w.key.clone(),
                    title: w.title.clone(),
                    content: w.content.clone(),
                    x: w.position.x,
                    y: w.position.y,
                    width: w.size.width,
                    height: w.size.height,
                    z_order: w.z_order,
                    maximized: w.maximized,
                    focused: self.active.as_deref() == Some(w.key.as_str()),
                    pointer_enabled: w.pointer_enabled,
                    transitions_frozen: w.transitions_frozen(),
                    closing: matches!(w.phase, WindowPhase::Closing(_)),
                    minimizing: matches!(w.phase, WindowPhase::Minimizing(_)),
                    opacity: visual.opacity,
                    scale: visual.scale,
                    offset_x: visual.offset.x,
                    offset_y: visual.offset.y,
                }
            })
            .collect()
    }
}
