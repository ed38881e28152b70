use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Placement of the colour scale legend to the right of the plot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColourBar {
    pub gap: usize,
    pub width: usize,
}

impl Default for ColourBar {
    fn default() -> Self {
        Self { gap: 8, width: 24 }
    }
}

/// Colours `grid` into an image oriented for viewing: real axis left to
/// right, imaginary axis bottom to top, so `y_max` lands on row 0.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    grid: &EscapeGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer = PixelBuffer::new(grid.width(), grid.height());

    paint_grid(&mut buffer, grid, mapper)?;

    Ok(buffer)
}

/// Like [`generate_pixel_buffer`] with a vertical legend appended on the right.
///
/// The legend runs from the top of the map's range at row 0 down to the
/// bottom of the range at the last row. The gap is left white.
pub fn generate_pixel_buffer_with_colour_bar<CMap: ColourMap>(
    grid: &EscapeGrid,
    mapper: &CMap,
    bar: ColourBar,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let bar_start = grid.width() + bar.gap;
    let mut buffer = PixelBuffer::new(bar_start + bar.width, grid.height());

    paint_grid(&mut buffer, grid, mapper)?;

    for y in 0..grid.height() {
        for x in grid.width()..bar_start {
            buffer.set_pixel(x, y, Colour::WHITE)?;
        }

        let colour = mapper.map(legend_value(mapper.range(), y, grid.height()))?;

        for x in bar_start..bar_start + bar.width {
            buffer.set_pixel(x, y, colour)?;
        }
    }

    Ok(buffer)
}

fn paint_grid<CMap: ColourMap>(
    buffer: &mut PixelBuffer,
    grid: &EscapeGrid,
    mapper: &CMap,
) -> Result<(), GeneratePixelBufferError> {
    for i in 0..grid.width() {
        let Some(column) = grid.column(i) else {
            continue;
        };

        for (j, &count) in column.iter().enumerate() {
            let row = grid.height() - 1 - j;
            buffer.set_pixel(i, row, mapper.map(count)?)?;
        }
    }

    Ok(())
}

fn legend_value((min, max): (u32, u32), row: usize, rows: usize) -> u32 {
    if rows <= 1 {
        return max;
    }

    let fraction = row as f64 / (rows - 1) as f64;
    let value = f64::from(max) - fraction * f64::from(max - min);

    (value.round() as u32).clamp(min, max)
}
