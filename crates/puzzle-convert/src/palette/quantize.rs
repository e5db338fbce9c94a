//! Weighted K-means color quantizer.
//!
//! Reduces a [`Histogram`] to at most `k` representative colors. The
//! method is deliberately plain: centroids start at the `k` most frequent
//! colors, every iteration assigns each distinct color to its nearest
//! centroid and moves each centroid to the count-weighted mean of its
//! members. There is no randomness, so the same histogram always yields
//! the same palette.
//!
//! Iteration stops after [`DEFAULT_MAX_ITERATIONS`] rounds (or the
//! configured budget), or earlier once a round leaves every centroid where
//! it was. Centroids are integer colors and the update is a pure function
//! of the previous centroids, so a round that changes nothing would repeat
//! forever; stopping there returns exactly what the full budget would.

use super::histogram::Histogram;
use super::palette::nearest_index;
use crate::color::Rgb;

/// Iteration budget for clustering.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Heuristic for picking `k` when the caller asks for automatic sizing.
///
/// `k = clamp(round(sqrt(unique_count) * factor), min_colors, max_colors)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteSizePolicy {
    /// Multiplier applied to the square root of the distinct color count.
    pub factor: f64,
    /// Lower bound for `k`.
    pub min_colors: usize,
    /// Upper bound for `k`.
    pub max_colors: usize,
}

impl PaletteSizePolicy {
    /// Choose `k` for a histogram with `unique_count` distinct colors.
    ///
    /// ```
    /// use puzzle_convert::PaletteSizePolicy;
    ///
    /// let policy = PaletteSizePolicy { factor: 1.0, min_colors: 6, max_colors: 20 };
    /// assert_eq!(policy.auto_k(4), 6);
    /// assert_eq!(policy.auto_k(100), 10);
    /// assert_eq!(policy.auto_k(10_000), 20);
    /// ```
    pub fn auto_k(&self, unique_count: usize) -> usize {
        let raw = ((unique_count as f64).sqrt() * self.factor).round();
        (raw as usize).clamp(self.min_colors, self.max_colors)
    }
}

/// Count-weighted mean of one cluster, rounded half up per channel.
#[derive(Debug, Clone, Copy, Default)]
struct ClusterSum {
    r: u64,
    g: u64,
    b: u64,
    weight: u64,
}

impl ClusterSum {
    fn add(&mut self, color: Rgb, count: u32) {
        let w = count as u64;
        self.r += color.r as u64 * w;
        self.g += color.g as u64 * w;
        self.b += color.b as u64 * w;
        self.weight += w;
    }

    fn mean(&self) -> Option<Rgb> {
        if self.weight == 0 {
            return None;
        }
        let round = |sum: u64| ((2 * sum + self.weight) / (2 * self.weight)) as u8;
        Some(Rgb::new(round(self.r), round(self.g), round(self.b)))
    }
}

/// Reduce `histogram` to at most `k` colors.
///
/// When the histogram holds `k` or fewer distinct colors they are returned
/// unchanged, most frequent first (ties by first appearance). Otherwise the
/// result has exactly `k` entries in centroid order. An empty histogram
/// yields an empty vector.
pub fn quantize(histogram: &Histogram, k: usize, max_iterations: usize) -> Vec<Rgb> {
    if histogram.unique_count() <= k {
        tracing::debug!(
            unique = histogram.unique_count(),
            k,
            "Histogram fits the palette, skipping clustering"
        );
        return histogram.by_appearance();
    }

    let ranked = histogram.ranked();

    let mut centroids: Vec<Rgb> = ranked[..k].iter().map(|&(color, _)| color).collect();

    for iteration in 0..max_iterations {
        let mut sums = vec![ClusterSum::default(); k];
        for &(color, count) in &ranked {
            // None only when k == 0
            if let Some(nearest) = nearest_index(&centroids, color) {
                sums[nearest].add(color, count);
            }
        }

        // Empty clusters keep their previous centroid.
        let next: Vec<Rgb> = sums
            .iter()
            .zip(&centroids)
            .map(|(sum, &previous)| sum.mean().unwrap_or(previous))
            .collect();

        if next == centroids {
            tracing::debug!(iterations = iteration + 1, k, "Clustering converged");
            return centroids;
        }
        centroids = next;
    }

    tracing::debug!(iterations = max_iterations, k, "Clustering hit iteration budget");
    centroids
}
