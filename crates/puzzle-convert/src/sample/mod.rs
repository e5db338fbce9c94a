//! Source image decoding and nearest-neighbor downsampling.
//!
//! The sampler turns an arbitrary image into a [`SampleGrid`] with one
//! RGBA sample per puzzle cell. No averaging happens, so hard pixel-art
//! edges survive the downscale.

mod sampler;

pub use sampler::{decode, open, sample_nearest, target_height, SampleGrid};
pub(crate) use sampler::sample_dynamic;
