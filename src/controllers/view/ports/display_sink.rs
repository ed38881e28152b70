use thiserror::Error;

use crate::controllers::view::data::frame::Frame;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] GeneratePixelBufferError),
}

/// Receives every freshly rendered frame. Called once per view change and
/// expected to replace whatever it showed before.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame) -> Result<(), DisplayError>;
}
