//! Row-major grid of palette ids.

use serde::{Deserialize, Serialize, Serializer};

/// Palette id per puzzle cell; `0` marks transparent background.
///
/// Serializes as `height` arrays of `width` integers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>")]
pub struct CellGrid {
    cells: Vec<u32>,
    width: u32,
    height: u32,
}

impl CellGrid {
    /// Wrap row-major cell values.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`.
    pub fn new(cells: Vec<u32>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cells length ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Highest palette id referenced (0 if every cell is background).
    pub fn max_id(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }
}

impl Serialize for CellGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl TryFrom<Vec<Vec<u32>>> for CellGrid {
    type Error = String;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            ));
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self::new(cells, width as u32, height as u32))
    }
}
