use crate::core::actions::render_grid::errors::RenderGridError;
use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_grid::sampling::GridSamples;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
use crate::core::data::extent::Extent;

/// Single-threaded grid evaluation, column by column.
///
/// Reference for the rayon renderer; both must produce identical grids.
pub fn render_grid_serial<Alg: FractalAlgorithm>(
    extent: Extent,
    width: usize,
    height: usize,
    algorithm: &Alg,
) -> Result<EscapeGrid, RenderGridError> {
    let samples = GridSamples::new(extent, width, height)?;
    let mut cells = Vec::with_capacity(samples.cell_count());

    for &real in &samples.reals {
        for &imag in &samples.imags {
            cells.push(algorithm.compute(Complex::new(real, imag)));
        }
    }

    EscapeGrid::from_columns(width, height, cells).map_err(|e| match e {
        EscapeGridError::SizeMismatch { width, height, .. } => {
            RenderGridError::InvalidDimension { width, height }
        }
    })
}
