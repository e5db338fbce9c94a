//! puzzle-convert: turn raster images into paint-by-number pixel puzzles
//!
//! A puzzle is a small grid of cells, each either empty (`0`) or the
//! 1-based id of a color in a short named palette. This crate builds one
//! from any image the `image` crate can decode.
//!
//! # Quick Start
//!
//! The [`PuzzleConverter`] builder is the primary entry point:
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use puzzle_convert::{Difficulty, PuzzleConverter, PuzzleMeta};
//!
//! let img = RgbaImage::from_fn(64, 64, |x, y| {
//!     if (x / 8 + y / 8) % 2 == 0 { Rgba([20, 20, 20, 255]) } else { Rgba([240, 240, 240, 255]) }
//! });
//!
//! let converter = PuzzleConverter::default().target_width(16);
//! let puzzle = converter
//!     .convert(&DynamicImage::ImageRgba8(img), PuzzleMeta::new("checker", "Checker", "patterns"))
//!     .unwrap();
//!
//! assert_eq!(puzzle.width(), 16);
//! assert_eq!(puzzle.palette().len(), 2);
//! assert_eq!(puzzle.difficulty(), Difficulty::Easy);
//! ```
//!
//! # Pipeline
//!
//! Data flows strictly forward; every stage is deterministic.
//!
//! 1. [`sample`]: nearest-neighbor downsample to the target width, keeping
//!    the aspect ratio. One RGBA sample per cell.
//! 2. [`Histogram`]: count every distinct opaque color.
//! 3. [`quantize`]: weighted K-means down to at most K colors, seeded from
//!    the most frequent colors. K is requested explicitly or picked from
//!    the number of distinct colors.
//! 4. [`classify`]: each opaque sample gets the id of its nearest palette
//!    color, transparent samples get `0`. Palette entries no cell uses are
//!    dropped and ids renumbered.
//! 5. [`Difficulty`]: easy, medium or hard from cell count and palette size.
//! 6. [`assemble`]: name the colors and package the [`PuzzleArtifact`].
//!
//! # Presets
//!
//! [`Preset::Standard`] and [`Preset::Compact`] bundle width, K bounds,
//! difficulty bounds and naming table. See [`ConvertOptions::preset`].
//!
//! # Color distance
//!
//! All matching uses plain Euclidean distance in 8-bit RGB, compared as
//! squared integers. Ties always go to the lowest index, which keeps every
//! result reproducible bit for bit.

pub mod api;
pub mod color;
pub mod difficulty;
pub mod output;
pub mod palette;
pub mod sample;


pub use api::{ConvertError, ConvertOptions, Preset, PuzzleConverter, DEFAULT_OPACITY_THRESHOLD};
pub use color::{color_name, NameTable, ParseColorError, Rgb, Rgba, GENERIC_COLOR_NAME};
pub use difficulty::{Difficulty, DifficultyThresholds};
pub use output::{assemble, classify, prune_unreferenced, CellGrid, PuzzleArtifact, PuzzleMeta};
pub use palette::{
    nearest_index, quantize, Histogram, Palette, PaletteEntry, PaletteSizePolicy,
    DEFAULT_MAX_ITERATIONS,
};
pub use sample::SampleGrid;
