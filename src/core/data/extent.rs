use std::fmt;

/// Bounds of the plotted region, as handed to a display sink.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xmin={:?}, xmax={:?}, ymin={:?}, ymax={:?}",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_display_keeps_decimal_point() {
        let extent = Extent {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -0.75,
            y_max: 0.75,
        };

        assert_eq!(
            extent.to_string(),
            "xmin=-2.0, xmax=1.0, ymin=-0.75, ymax=0.75"
        );
    }
}
