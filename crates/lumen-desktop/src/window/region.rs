//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// Northwest corner handle
    ResizeNW,
    /// Northeast corner handle
    ResizeNE,
    /// Southwest corner handle
    ResizeSW,
    /// Southeast corner handle
    ResizeSE,
}

impl WindowRegion {
    /// Check if this is a resize handle
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeNW
                | WindowRegion::ResizeNE
                | WindowRegion::ResizeSW
                | WindowRegion::ResizeSE
        )
    }

    /// The handle touches the left edge
    #[inline]
    pub fn grabs_left(&self) -> bool {
        matches!(self, WindowRegion::ResizeNW | WindowRegion::ResizeSW)
    }

    /// The handle touches the top edge
    #[inline]
    pub fn grabs_top(&self) -> bool {
        matches!(self, WindowRegion::ResizeNW | WindowRegion::ResizeNE)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton
            | WindowRegion::MinimizeButton
            | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }
}
