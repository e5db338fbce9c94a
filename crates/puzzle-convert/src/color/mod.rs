//! Color types and the named-color lookup.
//!
//! - [`Rgba`]: one 8-bit sample as read from the source image
//! - [`Rgb`]: an opaque color with alpha discarded. Its total order
//!   (red, then green, then blue) is the canonical tie-break used by the
//!   quantizer.
//!
//! # Example
//!
//! ```
//! use puzzle_convert::{Rgb, Rgba};
//!
//! let sample = Rgba::new(255, 128, 0, 200);
//! assert!(sample.is_opaque(128));
//! assert_eq!(sample.rgb().to_hex(), "#FF8000");
//!
//! let parsed: Rgb = "#ff8000".parse().unwrap();
//! assert_eq!(parsed, sample.rgb());
//! ```

mod names;
mod rgb;

pub use names::{color_name, NameTable, GENERIC_COLOR_NAME};
pub use rgb::{ParseColorError, Rgb, Rgba};
