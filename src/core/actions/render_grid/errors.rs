use thiserror::Error;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RenderGridError {
    #[error("grid dimensions must be positive and addressable: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
}
