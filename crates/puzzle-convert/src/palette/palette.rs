//! The final, indexed puzzle palette.

use serde::{Deserialize, Serialize};

use crate::api::ConvertError;
use crate::color::{color_name, NameTable, Rgb};

/// Index of the color in `colors` nearest to `color` by Euclidean RGB
/// distance. Ties go to the lowest index; `None` if `colors` is empty.
///
/// ```
/// use puzzle_convert::{nearest_index, Rgb};
///
/// let colors = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// assert_eq!(nearest_index(&colors, Rgb::new(40, 40, 40)), Some(0));
/// assert_eq!(nearest_index(&colors, Rgb::new(200, 200, 200)), Some(1));
/// assert_eq!(nearest_index(&[], Rgb::new(0, 0, 0)), None);
/// ```
#[inline]
pub fn nearest_index(colors: &[Rgb], color: Rgb) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &candidate) in colors.iter().enumerate() {
        let dist = candidate.distance_squared(color);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((i, dist));
            if dist == 0 {
                break;
            }
        }
    }
    best.map(|(i, _)| i)
}

/// One paintable color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// 1-based index referenced by puzzle cells.
    pub id: u32,
    /// Color, serialized as uppercase `#RRGGBB`.
    pub hex: Rgb,
    /// Human-friendly display name.
    pub name: String,
}

/// Ordered palette with contiguous 1-based ids.
///
/// Cell value `0` is reserved for transparent background, so entry `i` in
/// [`entries()`](Palette::entries) has id `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette from colors in index order, naming each from `names`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyPalette`] when `colors` is empty: an
    /// image with nothing to paint is not a puzzle.
    ///
    /// # Example
    ///
    /// ```
    /// use puzzle_convert::{NameTable, Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(255, 0, 0), Rgb::new(1, 1, 1)], NameTable::Basic).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.entries()[1].id, 2);
    /// assert_eq!(palette.entries()[1].name, "Black");
    /// ```
    pub fn new(colors: &[Rgb], names: NameTable) -> Result<Self, ConvertError> {
        if colors.is_empty() {
            return Err(ConvertError::EmptyPalette);
        }

        let entries = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| PaletteEntry {
                id: i as u32 + 1,
                hex: color,
                name: color_name(color, names).to_string(),
            })
            .collect();

        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for palettes built with [`Palette::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry with the given 1-based id.
    pub fn get(&self, id: u32) -> Option<&PaletteEntry> {
        let idx = (id as usize).checked_sub(1)?;
        self.entries.get(idx)
    }

    /// Colors in index order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.hex).collect()
    }

    /// Id of the entry nearest to `color` (ties to the lowest id).
    pub fn find_nearest(&self, color: Rgb) -> u32 {
        nearest_index(&self.colors(), color).map_or(0, |i| i as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        let result = Palette::new(&[], NameTable::Basic);
        assert!(matches!(result, Err(ConvertError::EmptyPalette)));
    }

    #[test]
    fn test_ids_are_contiguous_from_one() {
        let colors: Vec<Rgb> = (0..7).map(|i| Rgb::new(i * 30, 0, 0)).collect();
        let palette = Palette::new(&colors, NameTable::Basic).unwrap();
        let ids: Vec<u32> = palette.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(palette.colors(), colors);
    }

    #[test]
    fn test_get_by_id() {
        let palette = Palette::new(&[Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)], NameTable::None).unwrap();
        assert!(palette.get(0).is_none());
        assert_eq!(palette.get(2).unwrap().hex, Rgb::new(2, 2, 2));
        assert!(palette.get(3).is_none());
    }

    #[test]
    fn test_find_nearest_tie_goes_to_lowest_id() {
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(20, 0, 0)], NameTable::None).unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(10, 0, 0)), 1);
        assert_eq!(palette.find_nearest(Rgb::new(11, 0, 0)), 2);
    }

    #[test]
    fn test_names_do_not_affect_order() {
        let colors = [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)];
        let basic = Palette::new(&colors, NameTable::Basic).unwrap();
        let none = Palette::new(&colors, NameTable::None).unwrap();
        assert_eq!(basic.colors(), none.colors());
        assert_eq!(basic.entries()[0].name, "White");
        assert_eq!(none.entries()[0].name, "Color");
    }

    #[test]
    fn test_serialized_shape() {
        let palette = Palette::new(&[Rgb::new(255, 165, 0)], NameTable::Basic).unwrap();
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": 1, "hex": "#FFA500", "name": "Orange" }])
        );
    }
}
