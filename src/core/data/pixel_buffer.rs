use thiserror::Error;

use crate::core::data::colour::Colour;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Packed RGB image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width + x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 4);

        assert_eq!(buffer.buffer().len(), 120); // 10 * 4 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_writes_rgb_row_major() {
        let mut buffer = PixelBuffer::new(2, 2);
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(1, 1, colour).unwrap();

        assert_eq!(&buffer.buffer()[9..12], &[1, 2, 3]);
        assert_eq!(buffer.pixel(1, 1), Ok(colour));
        assert_eq!(buffer.pixel(0, 1), Ok(Colour::BLACK));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(2, 3);

        assert_eq!(
            buffer.set_pixel(2, 0, Colour::WHITE),
            Err(PixelBufferError::PixelOutsideBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 3
            })
        );
        assert!(buffer.pixel(0, 3).is_err());
    }
}
