//! Coarse difficulty label from puzzle size and palette size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty tier shown to players. Ordered `Easy < Medium < Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Upper bounds (inclusive) for the easy and medium tiers.
///
/// A puzzle is easy when both its cell count and palette size fit the easy
/// bounds, medium when both fit the medium bounds, and hard otherwise.
/// Growing either input can only keep or raise the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyThresholds {
    pub easy_max_cells: usize,
    pub easy_max_colors: usize,
    pub medium_max_cells: usize,
    pub medium_max_colors: usize,
}

impl DifficultyThresholds {
    /// Bounds used by the general-purpose converter.
    pub const STANDARD: Self = Self {
        easy_max_cells: 1024,
        easy_max_colors: 8,
        medium_max_cells: 2500,
        medium_max_colors: 15,
    };

    /// Tighter bounds used for small sprite batches.
    pub const COMPACT: Self = Self {
        easy_max_cells: 900,
        easy_max_colors: 8,
        medium_max_cells: 1600,
        medium_max_colors: 12,
    };

    /// Classify a puzzle of `cell_count` cells and `palette_size` colors.
    ///
    /// ```
    /// use puzzle_convert::{Difficulty, DifficultyThresholds};
    ///
    /// let t = DifficultyThresholds::STANDARD;
    /// assert_eq!(t.classify(32 * 32, 8), Difficulty::Easy);
    /// assert_eq!(t.classify(48 * 48, 8), Difficulty::Medium);
    /// assert_eq!(t.classify(48 * 48, 16), Difficulty::Hard);
    /// ```
    pub fn classify(&self, cell_count: usize, palette_size: usize) -> Difficulty {
        if cell_count <= self.easy_max_cells && palette_size <= self.easy_max_colors {
            Difficulty::Easy
        } else if cell_count <= self.medium_max_cells && palette_size <= self.medium_max_colors {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}
