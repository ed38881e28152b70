use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;

// Breakpoints of the classic "hot" map: red ramps first, then green, then blue.
const RED_START: f64 = 0.0416;
const RED_FULL: f64 = 0.365079;
const GREEN_FULL: f64 = 0.746032;

/// Black → red → yellow → white, linearly normalised over `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HotColourMap {
    min: u32,
    max: u32,
}

impl HotColourMap {
    /// Map over `[min, max]`; the bounds are swapped if given in reverse.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    fn normalise(&self, value: u32) -> f64 {
        if self.max == self.min {
            return 0.0;
        }

        f64::from(value - self.min) / f64::from(self.max - self.min)
    }
}

fn ramp(t: f64, from: f64, to: f64) -> f64 {
    ((t - from) / (to - from)).clamp(0.0, 1.0)
}

fn channel(intensity: f64) -> u8 {
    (intensity * 255.0).round() as u8
}

impl ColourMap for HotColourMap {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        if value < self.min || value > self.max {
            return Err(ColourMapError::ValueOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        let t = self.normalise(value);
        let red = RED_START + (1.0 - RED_START) * ramp(t, 0.0, RED_FULL);

        Ok(Colour {
            r: channel(red),
            g: channel(ramp(t, RED_FULL, GREEN_FULL)),
            b: channel(ramp(t, GREEN_FULL, 1.0)),
        })
    }

    fn range(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    fn display_name(&self) -> &str {
        "Hot"
    }
}
