use crate::core::actions::render_grid::errors::RenderGridError;
use crate::core::data::extent::Extent;
use crate::core::util::linspace::linspace;

/// Real and imaginary sample positions for a `width × height` grid.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GridSamples {
    pub reals: Vec<f64>,
    pub imags: Vec<f64>,
}

impl GridSamples {
    /// Fails before anything is allocated when either dimension is zero or
    /// the cell count overflows.
    pub(crate) fn new(extent: Extent, width: usize, height: usize) -> Result<Self, RenderGridError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(RenderGridError::InvalidDimension { width, height });
        }

        Ok(Self {
            reals: linspace(extent.x_min, extent.x_max, width),
            imags: linspace(extent.y_min, extent.y_max, height),
        })
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.reals.len() * self.imags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Extent {
        Extent {
            x_min: 0.0,
            x_max: 2.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }

    #[test]
    fn test_samples_follow_linspace() {
        let samples = GridSamples::new(extent(), 3, 1).unwrap();

        assert_eq!(samples.reals, vec![0.0, 1.0, 2.0]);
        assert_eq!(samples.imags, vec![-1.0]);
        assert_eq!(samples.cell_count(), 3);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            GridSamples::new(extent(), 0, 5),
            Err(RenderGridError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            GridSamples::new(extent(), 5, 0),
            Err(RenderGridError::InvalidDimension { width: 5, height: 0 })
        );
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        assert!(matches!(
            GridSamples::new(extent(), usize::MAX, 2),
            Err(RenderGridError::InvalidDimension { .. })
        ));
    }
}
