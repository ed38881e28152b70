use std::path::PathBuf;

use crate::controllers::view::{DisplayError, DisplaySink, Frame};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    ColourBar, generate_pixel_buffer_with_colour_bar,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_maps::hot::HotColourMap;
use crate::storage::write_ppm::write_ppm;

/// Display sink that redraws a single PPM image on every frame.
///
/// Colours are scaled to the frame's own count range with the hot colour map
/// and a legend is drawn down the right-hand side. The title and extent go
/// into the header comments.
pub struct PpmDisplaySink {
    filepath: PathBuf,
    colour_bar: ColourBar,
    frames_written: usize,
}

impl DisplaySink for PpmDisplaySink {
    fn present(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let (min, max) = frame.grid.value_range().unwrap_or((0, frame.max_iterations));
        let colour_map = HotColourMap::new(min, max);
        let image = generate_pixel_buffer_with_colour_bar(&frame.grid, &colour_map, self.colour_bar)?;

        let comments = [
            frame.title.clone(),
            format!("extent {}", frame.extent),
            format!("max_iterations={}", frame.max_iterations),
            format!("colour map {} over [{min}, {max}]", colour_map.display_name()),
        ];
        write_ppm(&image, &comments, &self.filepath)?;

        self.frames_written += 1;
        tracing::debug!(path = %self.filepath.display(), frame = self.frames_written, "wrote frame");

        Ok(())
    }
}

impl PpmDisplaySink {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            colour_bar: ColourBar::default(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn with_colour_bar(mut self, colour_bar: ColourBar) -> Self {
        self.colour_bar = colour_bar;
        self
    }

    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}
