use crate::core::data::complex::Complex;

/// Escape-time evaluation of one point of the plane.
///
/// Implementations must be pure: the grid renderer calls `compute` from many
/// threads at once and in no particular order.
pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
