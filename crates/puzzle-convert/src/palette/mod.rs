//! Palette construction: histogram, weighted K-means quantizer and the
//! final indexed [`Palette`].

mod histogram;
mod palette;
mod quantize;

pub use histogram::Histogram;
pub use palette::{nearest_index, Palette, PaletteEntry};
pub use quantize::{quantize, PaletteSizePolicy, DEFAULT_MAX_ITERATIONS};
