use std::path::PathBuf;

use puzzle_convert::ConvertError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PuzzleError {
    /// True when the image simply had nothing opaque to paint.
    pub fn is_empty_palette(&self) -> bool {
        matches!(self, PuzzleError::Convert(ConvertError::EmptyPalette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_error_convert() {
        let error: PuzzleError = ConvertError::EmptyPalette.into();
        assert_eq!(
            error.to_string(),
            "Conversion failed: image has no opaque pixels, palette would be empty"
        );
        assert!(error.is_empty_palette());
    }

    #[test]
    fn test_puzzle_error_write_failure() {
        let error = PuzzleError::WriteFailure {
            path: PathBuf::from("out/heart.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Failed to write out/heart.json: denied");
        assert!(!error.is_empty_palette());
    }

    #[test]
    fn test_puzzle_error_config() {
        let error = PuzzleError::Config("unknown preset".to_string());
        assert_eq!(error.to_string(), "Config error: unknown preset");
    }

    #[test]
    fn test_puzzle_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: PuzzleError = io.into();
        match error {
            PuzzleError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_puzzle_error_from_invalid_image() {
        let error: PuzzleError = ConvertError::InvalidImage("bad header".to_string()).into();
        assert_eq!(error.to_string(), "Conversion failed: invalid image: bad header");
    }
}
