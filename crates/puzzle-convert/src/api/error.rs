//! Error type for the puzzle-convert public API.

use thiserror::Error;

/// Why a conversion produced no puzzle.
///
/// # Example
///
/// ```
/// use puzzle_convert::{ConvertError, ConvertOptions};
///
/// let err = ConvertOptions::default().target_width(0).validate().unwrap_err();
/// assert!(matches!(err, ConvertError::InvalidOptions(_)));
/// ```
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source could not be decoded, or has zero width or height.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Every sample was below the opacity threshold.
    #[error("image has no opaque pixels, palette would be empty")]
    EmptyPalette,

    /// Conversion options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::InvalidImage(err.to_string())
    }
}
