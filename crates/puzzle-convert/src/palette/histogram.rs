//! Occurrence counts of opaque colors.

use std::collections::HashMap;

use crate::color::{Rgb, Rgba};

/// Count of every distinct opaque color among a set of samples.
///
/// Samples with alpha below the opacity threshold are background and are
/// never counted. Built once per conversion and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    bins: HashMap<Rgb, Bin>,
}

#[derive(Debug, Clone, Copy)]
struct Bin {
    count: u32,
    /// Row-major index of the first sample with this color.
    first: usize,
}

impl Histogram {
    /// Count the opaque samples.
    ///
    /// ```
    /// use puzzle_convert::{Histogram, Rgb, Rgba};
    ///
    /// let samples = [
    ///     Rgba::opaque(255, 0, 0),
    ///     Rgba::new(255, 0, 0, 200),
    ///     Rgba::new(0, 0, 255, 0),
    /// ];
    /// let histogram = Histogram::build(&samples, 128);
    /// assert_eq!(histogram.unique_count(), 1);
    /// assert_eq!(histogram.count(Rgb::new(255, 0, 0)), 2);
    /// ```
    pub fn build(samples: &[Rgba], opacity_threshold: u8) -> Self {
        let mut bins: HashMap<Rgb, Bin> = HashMap::new();
        for (i, sample) in samples.iter().enumerate() {
            if !sample.is_opaque(opacity_threshold) {
                continue;
            }
            bins.entry(sample.rgb())
                .or_insert(Bin { count: 0, first: i })
                .count += 1;
        }
        Self { bins }
    }

    /// Number of distinct opaque colors.
    #[inline]
    pub fn unique_count(&self) -> usize {
        self.bins.len()
    }

    /// True when no opaque sample was seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Occurrences of `color` (zero if absent).
    #[inline]
    pub fn count(&self, color: Rgb) -> u32 {
        self.bins.get(&color).map_or(0, |b| b.count)
    }

    /// Total number of opaque samples.
    pub fn total(&self) -> u64 {
        self.bins.values().map(|b| b.count as u64).sum()
    }

    /// Colors with their counts, most frequent first; equal counts are
    /// ordered by ascending RGB so the result never depends on hashing.
    pub fn ranked(&self) -> Vec<(Rgb, u32)> {
        let mut ranked: Vec<(Rgb, u32)> = self.bins.iter().map(|(&c, b)| (c, b.count)).collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// Colors most frequent first; equal counts keep the order in which
    /// the colors first appear in the samples (row-major).
    pub fn by_appearance(&self) -> Vec<Rgb> {
        let mut bins: Vec<(Rgb, Bin)> = self.bins.iter().map(|(&c, &b)| (c, b)).collect();
        bins.sort_unstable_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first.cmp(&b.1.first)));
        bins.into_iter().map(|(c, _)| c).collect()
    }
}
