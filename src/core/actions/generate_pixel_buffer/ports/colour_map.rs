use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("value {value} outside colour map range [{min}, {max}]")]
    ValueOutOfRange { value: u32, min: u32, max: u32 },
}

pub trait ColourMap {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError>;

    /// Inclusive value range the map is normalised over.
    fn range(&self) -> (u32, u32);

    fn display_name(&self) -> &str;
}
