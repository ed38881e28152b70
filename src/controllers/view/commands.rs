/// Commands the view controller understands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewCommand {
    /// Zoom in centred on a plane coordinate.
    ZoomIn { x: f64, y: f64 },
    /// Return to the previous view.
    ZoomOut,
}

/// What a command did to the view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewTransition {
    ZoomedIn,
    ZoomedOut,
    /// Zoom-out with no history.
    Unchanged,
    /// Click outside the current viewport.
    Ignored,
}
