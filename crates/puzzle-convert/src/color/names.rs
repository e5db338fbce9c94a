//! Display names for palette colors.
//!
//! Names are cosmetic: they are looked up after the palette is final and
//! never influence palette order or cell indices.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// Label used when no table entry is available.
pub const GENERIC_COLOR_NAME: &str = "Color";

const BASIC: &[(Rgb, &str)] = &[
    (Rgb::new(0xFF, 0x00, 0x00), "Red"),
    (Rgb::new(0x00, 0xFF, 0x00), "Green"),
    (Rgb::new(0x00, 0x00, 0xFF), "Blue"),
    (Rgb::new(0xFF, 0xFF, 0x00), "Yellow"),
    (Rgb::new(0xFF, 0x00, 0xFF), "Magenta"),
    (Rgb::new(0x00, 0xFF, 0xFF), "Cyan"),
    (Rgb::new(0xFF, 0xA5, 0x00), "Orange"),
    (Rgb::new(0x80, 0x00, 0x80), "Purple"),
    (Rgb::new(0xFF, 0xC0, 0xCB), "Pink"),
    (Rgb::new(0xA5, 0x2A, 0x2A), "Brown"),
    (Rgb::new(0x80, 0x80, 0x80), "Gray"),
    (Rgb::new(0x00, 0x00, 0x00), "Black"),
    (Rgb::new(0xFF, 0xFF, 0xFF), "White"),
    (Rgb::new(0xFF, 0xD7, 0x00), "Gold"),
    (Rgb::new(0xC0, 0xC0, 0xC0), "Silver"),
];

const EXTENDED: &[(Rgb, &str)] = &[
    (Rgb::new(0xFF, 0x00, 0x00), "Red"),
    (Rgb::new(0x00, 0xFF, 0x00), "Green"),
    (Rgb::new(0x00, 0x00, 0xFF), "Blue"),
    (Rgb::new(0xFF, 0xFF, 0x00), "Yellow"),
    (Rgb::new(0xFF, 0x00, 0xFF), "Magenta"),
    (Rgb::new(0x00, 0xFF, 0xFF), "Cyan"),
    (Rgb::new(0xFF, 0xA5, 0x00), "Orange"),
    (Rgb::new(0x80, 0x00, 0x80), "Purple"),
    (Rgb::new(0xFF, 0xC0, 0xCB), "Pink"),
    (Rgb::new(0xA5, 0x2A, 0x2A), "Brown"),
    (Rgb::new(0x80, 0x80, 0x80), "Gray"),
    (Rgb::new(0x00, 0x00, 0x00), "Black"),
    (Rgb::new(0xFF, 0xFF, 0xFF), "White"),
    (Rgb::new(0xFF, 0xD7, 0x00), "Gold"),
    (Rgb::new(0xC0, 0xC0, 0xC0), "Silver"),
    (Rgb::new(0x8B, 0x45, 0x13), "Brown"),
    (Rgb::new(0x22, 0x8B, 0x22), "Forest Green"),
    (Rgb::new(0x41, 0x69, 0xE1), "Royal Blue"),
];

/// Which fixed reference table to name colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameTable {
    /// 15 primary, secondary and neutral names.
    #[default]
    Basic,
    /// [`NameTable::Basic`] plus saddle brown, forest green and royal blue.
    Extended,
    /// No table; every color gets [`GENERIC_COLOR_NAME`].
    None,
}

impl NameTable {
    /// The `(color, name)` pairs in lookup order.
    pub fn entries(self) -> &'static [(Rgb, &'static str)] {
        match self {
            NameTable::Basic => BASIC,
            NameTable::Extended => EXTENDED,
            NameTable::None => &[],
        }
    }
}

/// Name a color after its nearest entry in `table`.
///
/// An exact match always wins (its distance is zero). Among equally close
/// entries the first one in table order is used.
///
/// ```
/// use puzzle_convert::{color_name, NameTable, Rgb};
///
/// assert_eq!(color_name(Rgb::new(255, 0, 0), NameTable::Basic), "Red");
/// assert_eq!(color_name(Rgb::new(250, 10, 5), NameTable::Basic), "Red");
/// assert_eq!(color_name(Rgb::new(250, 10, 5), NameTable::None), "Color");
/// ```
pub fn color_name(color: Rgb, table: NameTable) -> &'static str {
    let mut best = GENERIC_COLOR_NAME;
    let mut best_dist = u32::MAX;

    for &(reference, name) in table.entries() {
        let dist = color.distance_squared(reference);
        if dist < best_dist {
            best_dist = dist;
            best = name;
        }
    }

    best
}
