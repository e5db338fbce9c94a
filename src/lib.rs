//! pixelpuzzle - paint-by-number puzzles from images
//!
//! Command-line tooling around the `puzzle-convert` pipeline: config
//! loading, file naming, atomic output, batch runs and the catalog
//! manifest. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
