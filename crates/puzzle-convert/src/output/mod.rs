//! Pipeline output: classified cells and the assembled puzzle.
//!
//! - [`classify`] maps every sample to a palette id (or `0`)
//! - [`CellGrid`] holds those ids, serialized as rows
//! - [`PuzzleArtifact`] is the immutable record written for consumers

mod artifact;
mod cell_grid;
mod classify;

pub use artifact::{assemble, PuzzleArtifact, PuzzleMeta};
pub use cell_grid::CellGrid;
pub use classify::{classify, prune_unreferenced};
