//! Conversion options and the named presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConvertError;
use crate::color::NameTable;
use crate::difficulty::DifficultyThresholds;
use crate::palette::{PaletteSizePolicy, DEFAULT_MAX_ITERATIONS};

/// Samples with alpha below this are transparent.
pub const DEFAULT_OPACITY_THRESHOLD: u8 = 128;

/// Named bundle of defaults.
///
/// - `standard`: 48 cells wide, K = round(sqrt(n)) in 6..=20, basic names
/// - `compact`: 32 cells wide, K = round(1.2 sqrt(n)) in 6..=15, tighter
///   difficulty bounds, extended names. Suited to small sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Standard,
    Compact,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Standard, Preset::Compact];

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Compact => "compact",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Preset::Standard),
            "compact" => Ok(Preset::Compact),
            other => Err(format!(
                "unknown preset '{other}' (expected 'standard' or 'compact')"
            )),
        }
    }
}

/// Every knob of the conversion pipeline in one value.
///
/// Start from [`ConvertOptions::preset`] (or `default()`, which is the
/// standard preset) and override individual fields with the setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Puzzle width in cells. Height follows from the aspect ratio.
    ///
    /// Default: `48`
    pub target_width: u32,

    /// Requested palette size. `0` picks K from [`palette_size`](Self::palette_size).
    ///
    /// Default: `0`
    pub colors: usize,

    /// Automatic K heuristic.
    pub palette_size: PaletteSizePolicy,

    /// Minimum alpha for a sample to count as paint.
    ///
    /// Default: [`DEFAULT_OPACITY_THRESHOLD`]
    pub opacity_threshold: u8,

    /// Clustering iteration budget.
    ///
    /// Default: [`DEFAULT_MAX_ITERATIONS`]
    pub max_iterations: usize,

    /// Difficulty tier bounds.
    pub difficulty: DifficultyThresholds,

    /// Table used to name palette colors.
    pub color_names: NameTable,
}

impl ConvertOptions {
    /// Defaults for a named preset.
    ///
    /// ```
    /// use puzzle_convert::{ConvertOptions, NameTable, Preset};
    ///
    /// let opts = ConvertOptions::preset(Preset::Compact);
    /// assert_eq!(opts.target_width, 32);
    /// assert_eq!(opts.palette_size.max_colors, 15);
    /// assert_eq!(opts.color_names, NameTable::Extended);
    /// ```
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Standard => Self {
                target_width: 48,
                colors: 0,
                palette_size: PaletteSizePolicy {
                    factor: 1.0,
                    min_colors: 6,
                    max_colors: 20,
                },
                opacity_threshold: DEFAULT_OPACITY_THRESHOLD,
                max_iterations: DEFAULT_MAX_ITERATIONS,
                difficulty: DifficultyThresholds::STANDARD,
                color_names: NameTable::Basic,
            },
            Preset::Compact => Self {
                target_width: 32,
                colors: 0,
                palette_size: PaletteSizePolicy {
                    factor: 1.2,
                    min_colors: 6,
                    max_colors: 15,
                },
                opacity_threshold: DEFAULT_OPACITY_THRESHOLD,
                max_iterations: DEFAULT_MAX_ITERATIONS,
                difficulty: DifficultyThresholds::COMPACT,
                color_names: NameTable::Extended,
            },
        }
    }

    #[inline]
    pub fn target_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self
    }

    /// Set the palette size; `0` means automatic.
    #[inline]
    pub fn colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    #[inline]
    pub fn palette_size(mut self, policy: PaletteSizePolicy) -> Self {
        self.palette_size = policy;
        self
    }

    #[inline]
    pub fn opacity_threshold(mut self, threshold: u8) -> Self {
        self.opacity_threshold = threshold;
        self
    }

    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    #[inline]
    pub fn difficulty(mut self, thresholds: DifficultyThresholds) -> Self {
        self.difficulty = thresholds;
        self
    }

    #[inline]
    pub fn color_names(mut self, table: NameTable) -> Self {
        self.color_names = table;
        self
    }

    /// Reject options the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.target_width == 0 {
            return Err(ConvertError::InvalidOptions(
                "target width must be positive".into(),
            ));
        }
        if self.colors == 0 {
            let policy = &self.palette_size;
            if policy.min_colors == 0 || policy.min_colors > policy.max_colors {
                return Err(ConvertError::InvalidOptions(format!(
                    "palette size range {}..={} is empty",
                    policy.min_colors, policy.max_colors
                )));
            }
            if !policy.factor.is_finite() || policy.factor <= 0.0 {
                return Err(ConvertError::InvalidOptions(format!(
                    "palette size factor must be positive, got {}",
                    policy.factor
                )));
            }
        }
        Ok(())
    }

    /// K for a histogram with `unique_count` distinct colors.
    pub fn palette_limit(&self, unique_count: usize) -> usize {
        if self.colors > 0 {
            self.colors
        } else {
            self.palette_size.auto_k(unique_count)
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::preset(Preset::Standard)
    }
}
