//! Per-sample palette assignment.

use super::cell_grid::CellGrid;
use crate::color::Rgb;
use crate::palette::nearest_index;
use crate::sample::SampleGrid;

/// Map every sample to a 1-based palette id.
///
/// Samples with alpha below `opacity_threshold` become `0`. Every other
/// sample takes the id of the nearest color in `colors` (ties to the lowest
/// id). Each sample is classified on its own; neighbors have no influence.
pub fn classify(grid: &SampleGrid, colors: &[Rgb], opacity_threshold: u8) -> CellGrid {
    let cells = grid
        .samples()
        .iter()
        .map(|sample| {
            if !sample.is_opaque(opacity_threshold) {
                return 0;
            }
            nearest_index(colors, sample.rgb()).map_or(0, |i| i as u32 + 1)
        })
        .collect();

    CellGrid::new(cells, grid.width(), grid.height())
}

/// Drop palette colors that no cell references and renumber the rest.
///
/// Clustering can leave a centroid that ends up nearest to no sample (an
/// empty cluster that kept its old value, or two centroids that converged
/// onto the same color). Such entries would be unpaintable, so they are
/// removed here; the surviving colors keep their relative order and cells
/// are rewritten to the new contiguous ids.
pub fn prune_unreferenced(cells: &mut CellGrid, colors: Vec<Rgb>) -> Vec<Rgb> {
    let mut used = vec![false; colors.len() + 1];
    for &id in cells.cells() {
        used[id as usize] = true;
    }
    if used[1..].iter().all(|&u| u) {
        return colors;
    }

    let mut remap = vec![0u32; colors.len() + 1];
    let mut kept = Vec::with_capacity(colors.len());
    for (i, color) in colors.into_iter().enumerate() {
        if used[i + 1] {
            kept.push(color);
            remap[i + 1] = kept.len() as u32;
        }
    }

    tracing::debug!(
        pruned = remap.len() - 1 - kept.len(),
        kept = kept.len(),
        "Pruned unreferenced palette colors"
    );

    for cell in cells.cells_mut() {
        *cell = remap[*cell as usize];
    }
    kept
}
