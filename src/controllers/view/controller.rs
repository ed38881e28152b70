use std::time::Instant;

use crate::controllers::view::commands::{ViewCommand, ViewTransition};
use crate::controllers::view::data::frame::Frame;
use crate::controllers::view::errors::ViewError;
use crate::controllers::view::history::ViewHistory;
use crate::controllers::view::ports::display_sink::DisplaySink;
use crate::core::actions::render_grid::errors::RenderGridError;
use crate::core::actions::render_grid::render_grid;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Owns the current view and its history, and re-renders on every change.
///
/// Each command runs to completion on the caller's thread: the grid is
/// rendered, handed to the sink, and only then does the call return.
pub struct ViewController<S: DisplaySink> {
    viewport: Viewport,
    history: ViewHistory,
    width: usize,
    height: usize,
    sink: S,
}

impl<S: DisplaySink> ViewController<S> {
    pub fn new(viewport: Viewport, width: usize, height: usize, sink: S) -> Result<Self, ViewError> {
        if width == 0 || height == 0 {
            return Err(RenderGridError::InvalidDimension { width, height }.into());
        }

        Ok(Self {
            viewport,
            history: ViewHistory::new(),
            width,
            height,
            sink,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Renders and presents the current view without changing it.
    pub fn refresh(&mut self) -> Result<(), ViewError> {
        let start = Instant::now();
        let grid = render_grid(&self.viewport, self.width, self.height)?;
        let render_duration = start.elapsed();

        let frame = Frame::new(grid, self.viewport.extent(), self.viewport.max_iterations());
        self.sink.present(&frame)?;

        tracing::info!(
            extent = %frame.extent,
            max_iterations = frame.max_iterations,
            history_depth = self.history.len(),
            ?render_duration,
            "presented frame"
        );

        Ok(())
    }

    /// Zooms in around `(x, y)`. Clicks outside the current view are ignored.
    ///
    /// The state is only touched once the deeper view is known to be valid.
    pub fn zoom_in(&mut self, x: f64, y: f64) -> Result<ViewTransition, ViewError> {
        let centre = Complex::new(x, y);

        if !self.viewport.contains(centre) {
            tracing::debug!(x, y, "ignoring click outside the viewport");
            return Ok(ViewTransition::Ignored);
        }

        let zoomed = self.viewport.zoomed_in(centre)?;
        self.history.push(self.viewport);
        self.viewport = zoomed;
        self.refresh()?;

        Ok(ViewTransition::ZoomedIn)
    }

    /// Restores the most recent previous view, if any.
    pub fn zoom_out(&mut self) -> Result<ViewTransition, ViewError> {
        let Some(previous) = self.history.pop() else {
            tracing::debug!("zoom history is empty");
            return Ok(ViewTransition::Unchanged);
        };

        self.viewport = previous;
        self.refresh()?;

        Ok(ViewTransition::ZoomedOut)
    }

    pub fn dispatch(&mut self, command: ViewCommand) -> Result<ViewTransition, ViewError> {
        tracing::debug!(?command, "dispatching");

        match command {
            ViewCommand::ZoomIn { x, y } => self.zoom_in(x, y),
            ViewCommand::ZoomOut => self.zoom_out(),
        }
    }
}
