//! Escape-grid rendering for a viewport.
//!
//! [`render_grid`] is the entry point used by the view controller. The
//! serial and rayon variants take any `FractalAlgorithm` so they can be
//! compared against each other.

pub mod errors;
pub mod ports;
pub mod render_grid_parallel_rayon;
pub mod render_grid_serial;
mod sampling;

use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use errors::RenderGridError;
use render_grid_parallel_rayon::render_grid_parallel_rayon;

/// Mandelbrot escape counts for `width × height` evenly spaced samples of
/// `viewport`, corners included.
pub fn render_grid(
    viewport: &Viewport,
    width: usize,
    height: usize,
) -> Result<EscapeGrid, RenderGridError> {
    let algorithm = MandelbrotAlgorithm::new(viewport.max_iterations())?;

    render_grid_parallel_rayon(viewport.extent(), width, height, &algorithm)
}
