use rayon::prelude::*;

use crate::core::actions::render_grid::errors::RenderGridError;
use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_grid::sampling::GridSamples;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
use crate::core::data::extent::Extent;

/// Evaluates the grid on rayon's work-stealing pool, one task per column.
///
/// Every column is written by exactly one task and reads only the shared,
/// immutable sample axes, so the result does not depend on scheduling.
#[tracing::instrument(skip_all, fields(width = width, height = height, max_iterations = algorithm.max_iterations()))]
pub fn render_grid_parallel_rayon<Alg>(
    extent: Extent,
    width: usize,
    height: usize,
    algorithm: &Alg,
) -> Result<EscapeGrid, RenderGridError>
where
    Alg: FractalAlgorithm + Sync,
{
    let samples = GridSamples::new(extent, width, height)?;
    let mut cells = vec![0; samples.cell_count()];

    cells
        .par_chunks_mut(height)
        .zip(samples.reals.par_iter())
        .for_each(|(column, &real)| {
            for (cell, &imag) in column.iter_mut().zip(&samples.imags) {
                *cell = algorithm.compute(Complex::new(real, imag));
            }
        });

    EscapeGrid::from_columns(width, height, cells).map_err(|e| match e {
        EscapeGridError::SizeMismatch { width, height, .. } => {
            RenderGridError::InvalidDimension { width, height }
        }
    })
}
