//! Aspect-preserving nearest-neighbor sampler.

use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::api::ConvertError;
use crate::color::Rgba;

/// A grid of RGBA samples in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    samples: Vec<Rgba>,
    width: u32,
    height: u32,
}

impl SampleGrid {
    /// Wrap row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidImage`] when either dimension is zero
    /// or `samples.len() != width * height`.
    pub fn new(samples: Vec<Rgba>, width: u32, height: u32) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidImage(format!(
                "sample grid has zero size ({width}x{height})"
            )));
        }
        if samples.len() != width as usize * height as usize {
            return Err(ConvertError::InvalidImage(format!(
                "expected {} samples for {width}x{height}, got {}",
                width as usize * height as usize,
                samples.len()
            )));
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    /// Sample at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.samples[y as usize * self.width as usize + x as usize]
    }
}

/// Decode an in-memory image (format sniffed from the bytes).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Open and decode an image file.
///
/// The format is guessed from the file contents first, so a PNG saved with
/// a `.jpg` extension still decodes.
pub fn open(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| ConvertError::InvalidImage(format!("{}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| ConvertError::InvalidImage(format!("{}: {e}", path.display())))?;
    Ok(reader.decode()?)
}

/// Output height for a target width, preserving the aspect ratio.
///
/// `round(target_width * source_height / source_width)` with halves
/// rounded up, never less than one row.
///
/// ```
/// use puzzle_convert::sample::target_height;
///
/// assert_eq!(target_height(100, 50, 48), 24);
/// assert_eq!(target_height(3, 2, 2), 1); // 1.33 rounds down
/// assert_eq!(target_height(4, 3, 2), 2); // 1.5 rounds up
/// assert_eq!(target_height(1000, 1, 10), 1);
/// ```
pub fn target_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    let num = 2 * target_width as u64 * source_height as u64 + source_width as u64;
    let den = 2 * source_width as u64;
    ((num / den) as u32).max(1)
}

/// Source coordinate under the center of output cell `i`.
#[inline]
fn nearest_source(i: u32, dst_len: u32, src_len: u32) -> u32 {
    let pos = (2 * i as u64 + 1) * src_len as u64 / (2 * dst_len as u64);
    (pos as u32).min(src_len - 1)
}

/// Downsample `image` to `target_width` columns with nearest-neighbor
/// sampling.
///
/// # Errors
///
/// - [`ConvertError::InvalidImage`] if the image has zero width or height
/// - [`ConvertError::InvalidOptions`] if `target_width` is zero
pub fn sample_nearest(image: &RgbaImage, target_width: u32) -> Result<SampleGrid, ConvertError> {
    let (source_width, source_height) = image.dimensions();
    if source_width == 0 || source_height == 0 {
        return Err(ConvertError::InvalidImage(format!(
            "image has zero size ({source_width}x{source_height})"
        )));
    }
    if target_width == 0 {
        return Err(ConvertError::InvalidOptions(
            "target width must be at least 1".to_string(),
        ));
    }

    let height = target_height(source_width, source_height, target_width);
    let columns: Vec<u32> = (0..target_width)
        .map(|x| nearest_source(x, target_width, source_width))
        .collect();

    let mut samples = Vec::with_capacity(target_width as usize * height as usize);
    for y in 0..height {
        let sy = nearest_source(y, height, source_height);
        for &sx in &columns {
            samples.push(Rgba::from(*image.get_pixel(sx, sy)));
        }
    }

    tracing::debug!(
        source_width,
        source_height,
        width = target_width,
        height,
        "Sampled image"
    );

    SampleGrid::new(samples, target_width, height)
}

/// Convenience for callers holding a [`DynamicImage`]; images without an
/// alpha channel sample as fully opaque.
pub(crate) fn sample_dynamic(
    image: &DynamicImage,
    target_width: u32,
) -> Result<SampleGrid, ConvertError> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(ConvertError::InvalidImage(format!(
            "image has zero size ({w}x{h})"
        )));
    }
    sample_nearest(&image.to_rgba8(), target_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba as Pixel;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Pixel([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_target_height_preserves_aspect() {
        assert_eq!(target_height(200, 100, 48), 24);
        assert_eq!(target_height(100, 200, 48), 96);
        assert_eq!(target_height(64, 64, 32), 32);
    }

    #[test]
    fn test_target_height_never_zero() {
        assert_eq!(target_height(10_000, 1, 8), 1);
    }

    #[test]
    fn test_identity_when_sizes_match() {
        let img = gradient(4, 3);
        let grid = sample_nearest(&img, 4).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), Rgba::new(x as u8, y as u8, 0, 255));
            }
        }
    }

    #[test]
    fn test_downsample_picks_cell_centers() {
        // 8 columns -> 4: cell centers fall on source columns 1, 3, 5, 7
        let img = gradient(8, 8);
        let grid = sample_nearest(&img, 4).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 4));
        let row: Vec<u8> = (0..4).map(|x| grid.get(x, 0).r).collect();
        assert_eq!(row, vec![1, 3, 5, 7]);
        let col: Vec<u8> = (0..4).map(|y| grid.get(0, y).g).collect();
        assert_eq!(col, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_upsample_repeats_pixels() {
        let img = gradient(2, 1);
        let grid = sample_nearest(&img, 4).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        let row: Vec<u8> = (0..4).map(|x| grid.get(x, 0).r).collect();
        assert_eq!(row, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_no_averaging() {
        // Black/white checkerboard stays black and white after downsampling
        let img = RgbaImage::from_fn(9, 9, |x, y| {
            if (x + y) % 2 == 0 {
                Pixel([0, 0, 0, 255])
            } else {
                Pixel([255, 255, 255, 255])
            }
        });
        let grid = sample_nearest(&img, 4).unwrap();
        for s in grid.samples() {
            assert!(s.r == 0 || s.r == 255, "Sample {:?} was blended", s);
        }
    }

    #[test]
    fn test_zero_target_width_rejected() {
        let img = gradient(4, 4);
        let result = sample_nearest(&img, 0);
        assert!(matches!(result, Err(ConvertError::InvalidOptions(_))));
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let img = RgbaImage::new(0, 5);
        let result = sample_nearest(&img, 4);
        assert!(matches!(result, Err(ConvertError::InvalidImage(_))));
    }

    #[test]
    fn test_decode_garbage_is_invalid_image() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(ConvertError::InvalidImage(_))));
    }

    #[test]
    fn test_rgb_image_samples_opaque() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            2,
            2,
            image::Rgb([10, 20, 30]),
        ));
        let grid = sample_dynamic(&img, 2).unwrap();
        assert!(grid.samples().iter().all(|s| *s == Rgba::new(10, 20, 30, 255)));
    }

    #[test]
    fn test_sample_grid_length_checked() {
        let result = SampleGrid::new(vec![Rgba::default(); 3], 2, 2);
        assert!(matches!(result, Err(ConvertError::InvalidImage(_))));
    }
}
