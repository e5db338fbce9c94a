//! Public API for the puzzle-convert crate.
//!
//! This module provides the high-level API: the [`PuzzleConverter`]
//! builder, [`ConvertOptions`] with its named [`Preset`]s, and the
//! [`ConvertError`] type every stage reports through.

mod builder;
mod error;
mod options;

pub use builder::PuzzleConverter;
pub use error::ConvertError;
pub use options::{ConvertOptions, Preset, DEFAULT_OPACITY_THRESHOLD};
