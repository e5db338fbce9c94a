//! The assembled puzzle record.

use serde::{Deserialize, Serialize};

use super::cell_grid::CellGrid;
use crate::api::ConvertError;
use crate::color::{NameTable, Rgb};
use crate::difficulty::Difficulty;
use crate::palette::Palette;

/// Identity of a puzzle, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleMeta {
    /// Slug used as the artifact id and file name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: String,
}

impl PuzzleMeta {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// A finished paint-by-number puzzle.
///
/// Field order matches the JSON consumed by the painting app:
/// `id`, `name`, `category`, `difficulty`, `width`, `height`, `colors`,
/// `cells`. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleArtifact {
    id: String,
    name: String,
    category: String,
    difficulty: Difficulty,
    width: u32,
    height: u32,
    colors: Palette,
    cells: CellGrid,
}

impl PuzzleArtifact {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.colors
    }

    pub fn cells(&self) -> &CellGrid {
        &self.cells
    }
}

/// Package a palette and classified cells into a [`PuzzleArtifact`].
///
/// `colors` must be in palette-id order and `cells` must only reference
/// ids `1..=colors.len()`.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyPalette`] if `colors` is empty, which
/// happens only when every sample was transparent.
pub fn assemble(
    meta: PuzzleMeta,
    colors: &[Rgb],
    cells: CellGrid,
    difficulty: Difficulty,
    names: NameTable,
) -> Result<PuzzleArtifact, ConvertError> {
    let palette = Palette::new(colors, names)?;

    debug_assert!(
        cells.max_id() as usize <= palette.len(),
        "cells reference id {} but palette has {} entries",
        cells.max_id(),
        palette.len()
    );

    Ok(PuzzleArtifact {
        id: meta.id,
        name: meta.name,
        category: meta.category,
        difficulty,
        width: cells.width(),
        height: cells.height(),
        colors: palette,
        cells,
    })
}
