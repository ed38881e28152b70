use std::ops::ControlFlow;

use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of completed iterations of `z ← z² + c` before `|z| > 2`, or
/// `max_iterations` if the orbit never leaves the radius.
///
/// The orbit starts at `z = c`, not `z = 0`, so any `c` already outside the
/// radius escapes at iteration 0.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let outcome = (0..max_iterations).try_fold(c, |z, iteration| {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z.square() + c)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        escape_iterations(point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [0, 1, 10, 256, 1000] {
            assert_eq!(escape_iterations(Complex::ZERO, max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        assert_eq!(escape_iterations(Complex::new(2.5, 0.0), 100), 0);
        assert_eq!(escape_iterations(Complex::new(-1.5, -1.5), 100), 0);
        assert_eq!(escape_iterations(Complex::new(0.0, 2.000001), 1), 0);
    }

    #[test]
    fn test_point_on_radius_is_not_outside() {
        // c = -2 stays at z = 2 forever: -2 -> 2 -> 2 -> ...
        assert_eq!(escape_iterations(Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn test_orbit_starts_at_c() {
        // c = 1: z = 1 -> 2 -> 5, escaping when z = 5 is checked at n = 2.
        // Starting from z = 0 would give 0 -> 1 -> 2 -> 5 and report 3 instead.
        assert_eq!(escape_iterations(Complex::new(1.0, 0.0), 100), 2);
    }

    #[test]
    fn test_budget_caps_the_count() {
        assert_eq!(escape_iterations(Complex::new(1.0, 0.0), 1), 1);
        assert_eq!(escape_iterations(Complex::new(1.0, 0.0), 2), 2);
        assert_eq!(escape_iterations(Complex::new(1.0, 0.0), 3), 2);
    }

    #[test]
    fn test_main_cardioid_point_stays_bounded() {
        assert_eq!(escape_iterations(Complex::new(-0.5, 0.0), 500), 500);
        assert_eq!(escape_iterations(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn test_algorithm_delegates_to_escape_iterations() {
        let algorithm = MandelbrotAlgorithm::new(64).unwrap();
        let c = Complex::new(0.3, 0.5);

        assert_eq!(algorithm.compute(c), escape_iterations(c, 64));
        assert_eq!(algorithm.max_iterations(), 64);
    }
}
