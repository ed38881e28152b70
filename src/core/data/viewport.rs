use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::extent::Extent;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Fraction of each axis span kept by one zoom-in.
pub const ZOOM_FACTOR: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must be finite with min < max: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// The visible region of the complex plane together with the escape-time
/// budget used to render it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Viewport {
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        // negated comparisons so NaN never slips through
        if !finite || !(x_min < x_max) || !(y_min < y_max) {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            max_iterations,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }

    /// The view one zoom step deeper, centred on `centre`.
    ///
    /// Each span shrinks by [`ZOOM_FACTOR`] and the iteration budget grows by
    /// half, rounded down. Fails once the spans can no longer be represented.
    pub fn zoomed_in(&self, centre: Complex) -> Result<Self, ViewportError> {
        let x_range = (self.x_max - self.x_min) * ZOOM_FACTOR;
        let y_range = (self.y_max - self.y_min) * ZOOM_FACTOR;

        Self::new(
            centre.real - x_range / 2.0,
            centre.real + x_range / 2.0,
            centre.imag - y_range / 2.0,
            centre.imag + y_range / 2.0,
            grow_iterations(self.max_iterations),
        )
    }
}

/// `floor(n * 1.5)`, saturating at `u32::MAX`.
fn grow_iterations(max_iterations: u32) -> u32 {
    let grown = u64::from(max_iterations) * 3 / 2;

    u32::try_from(grown).unwrap_or(u32::MAX)
}
