use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::extent::Extent;

/// One refresh of the display: the escape grid, where it sits in the plane,
/// and a caption naming the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub grid: EscapeGrid,
    pub extent: Extent,
    pub max_iterations: u32,
    pub title: String,
}

impl Frame {
    #[must_use]
    pub fn new(grid: EscapeGrid, extent: Extent, max_iterations: u32) -> Self {
        Self {
            grid,
            extent,
            max_iterations,
            title: title_for(extent),
        }
    }
}

#[must_use]
pub fn title_for(extent: Extent) -> String {
    format!("Mandelbrot Set\n{extent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_encodes_bounds() {
        let extent = Extent {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
        };

        assert_eq!(
            title_for(extent),
            "Mandelbrot Set\nxmin=-2.0, xmax=1.0, ymin=-1.5, ymax=1.5"
        );
    }
}
