use thiserror::Error;

use crate::controllers::view::ports::display_sink::DisplayError;
use crate::core::actions::render_grid::errors::RenderGridError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("render failed: {0}")]
    Render(#[from] RenderGridError),
    #[error("display failed: {0}")]
    Display(#[from] DisplayError),
    #[error("cannot zoom further: {0}")]
    Viewport(#[from] ViewportError),
}
