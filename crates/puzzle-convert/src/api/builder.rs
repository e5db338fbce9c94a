//! PuzzleConverter builder -- the primary entry point for the crate.
//!
//! [`PuzzleConverter`] wraps the conversion pipeline behind a fluent
//! builder with preset defaults.

use std::path::Path;

use image::DynamicImage;

use super::error::ConvertError;
use super::options::{ConvertOptions, Preset};
use crate::color::NameTable;
use crate::output::{assemble, classify, prune_unreferenced, PuzzleArtifact, PuzzleMeta};
use crate::palette::{quantize, Histogram, PaletteSizePolicy};
use crate::sample::{self, SampleGrid};

/// Converts images into paint-by-number puzzles.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - The `convert*` methods take `&self`, so one converter can be reused
///   across a whole batch
/// - Conversion is a pure function of (image, options): no randomness
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use puzzle_convert::{PuzzleConverter, PuzzleMeta};
///
/// let img = RgbaImage::from_fn(8, 8, |x, _| {
///     if x < 4 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 255, 255]) }
/// });
///
/// let converter = PuzzleConverter::default().target_width(4);
/// let puzzle = converter
///     .convert(&DynamicImage::ImageRgba8(img), PuzzleMeta::new("flag", "Flag", "objects"))
///     .unwrap();
///
/// assert_eq!((puzzle.width(), puzzle.height()), (4, 4));
/// assert_eq!(puzzle.palette().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleConverter {
    options: ConvertOptions,
}

impl PuzzleConverter {
    /// Create a converter from explicit options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Create a converter with a preset's defaults.
    pub fn preset(preset: Preset) -> Self {
        Self::new(ConvertOptions::preset(preset))
    }

    /// Set the puzzle width in cells.
    #[inline]
    pub fn target_width(mut self, width: u32) -> Self {
        self.options = self.options.target_width(width);
        self
    }

    /// Set the palette size (`0` = automatic).
    #[inline]
    pub fn colors(mut self, colors: usize) -> Self {
        self.options = self.options.colors(colors);
        self
    }

    /// Set the automatic palette size heuristic.
    #[inline]
    pub fn palette_size(mut self, policy: PaletteSizePolicy) -> Self {
        self.options = self.options.palette_size(policy);
        self
    }

    /// Set the minimum alpha for a sample to be painted.
    #[inline]
    pub fn opacity_threshold(mut self, threshold: u8) -> Self {
        self.options = self.options.opacity_threshold(threshold);
        self
    }

    /// Set the clustering iteration budget.
    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.options = self.options.max_iterations(iterations);
        self
    }

    /// Set the color naming table.
    #[inline]
    pub fn color_names(mut self, table: NameTable) -> Self {
        self.options = self.options.color_names(table);
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a decoded image.
    pub fn convert(
        &self,
        image: &DynamicImage,
        meta: PuzzleMeta,
    ) -> Result<PuzzleArtifact, ConvertError> {
        self.options.validate()?;
        let grid = sample::sample_dynamic(image, self.options.target_width)?;
        self.convert_samples(&grid, meta)
    }

    /// Decode `bytes` (format sniffed) and convert.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        meta: PuzzleMeta,
    ) -> Result<PuzzleArtifact, ConvertError> {
        let image = sample::decode(bytes)?;
        self.convert(&image, meta)
    }

    /// Open the image at `path` and convert.
    pub fn convert_path(
        &self,
        path: &Path,
        meta: PuzzleMeta,
    ) -> Result<PuzzleArtifact, ConvertError> {
        let image = sample::open(path)?;
        self.convert(&image, meta)
    }

    /// Run the pipeline on an already-sampled grid; the grid's size becomes
    /// the puzzle size.
    ///
    /// 1. Histogram of opaque samples
    /// 2. Choose K and quantize
    /// 3. Classify every sample, then drop palette entries no cell uses
    /// 4. Grade difficulty and assemble
    pub fn convert_samples(
        &self,
        grid: &SampleGrid,
        meta: PuzzleMeta,
    ) -> Result<PuzzleArtifact, ConvertError> {
        let opts = &self.options;
        opts.validate()?;

        let histogram = Histogram::build(grid.samples(), opts.opacity_threshold);
        if histogram.is_empty() {
            return Err(ConvertError::EmptyPalette);
        }

        let k = opts.palette_limit(histogram.unique_count());
        let centroids = quantize(&histogram, k, opts.max_iterations);

        let mut cells = classify(grid, &centroids, opts.opacity_threshold);
        let colors = prune_unreferenced(&mut cells, centroids);

        let difficulty = opts.difficulty.classify(cells.len(), colors.len());

        tracing::debug!(
            id = %meta.id,
            width = cells.width(),
            height = cells.height(),
            unique = histogram.unique_count(),
            k,
            colors = colors.len(),
            %difficulty,
            "Converted puzzle"
        );

        assemble(meta, &colors, cells, difficulty, opts.color_names)
    }
}
