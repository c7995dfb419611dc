//! Chrome metric constants

/// Frame metrics for window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
    pub resize_handle_size: f32,
}

/// Default frame metrics matching the shell stylesheet
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    button_size: 18.0,
    button_spacing: 6.0,
    button_margin: 10.0,
    resize_handle_size: 12.0,
};

/// Taskbar strip metrics
///
/// The strip sits directly below the display area; entries are laid out
/// left to right in display order.
pub struct TaskbarStyle {
    pub height: f32,
    pub entry_width: f32,
    pub entry_height: f32,
    pub entry_gap: f32,
    pub edge_inset: f32,
}

/// Default taskbar metrics matching the shell stylesheet
pub const TASKBAR_STYLE: TaskbarStyle = TaskbarStyle {
    height: 48.0,
    entry_width: 160.0,
    entry_height: 36.0,
    entry_gap: 8.0,
    edge_inset: 12.0,
};
