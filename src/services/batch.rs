//! Batch conversion of a directory of images.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use puzzle_convert::{PuzzleConverter, PuzzleMeta};

use super::naming;
use super::writer::write_artifact;
use crate::error::PuzzleError;

/// Extensions picked up by batch runs (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// An image found under the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    /// Folders between the input root and the file, outermost first.
    pub folders: Vec<String>,
}

/// Image files under `root`, sorted by path.
pub fn find_images(root: &Path, recursive: bool) -> Result<Vec<ImageFile>, PuzzleError> {
    let mut found = Vec::new();
    collect_images(root, recursive, &mut Vec::new(), &mut found)?;
    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

fn collect_images(
    dir: &Path,
    recursive: bool,
    folders: &mut Vec<String>,
    found: &mut Vec<ImageFile>,
) -> Result<(), PuzzleError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                folders.push(naming::file_name(&path));
                collect_images(&path, recursive, folders, found)?;
                folders.pop();
            }
        } else if is_image(&path) {
            found.push(ImageFile {
                path,
                folders: folders.clone(),
            });
        }
    }
    Ok(())
}

/// Category of the innermost folder that has an entry in `map`, or
/// `default` when none does.
pub fn category_for(folders: &[String], map: &HashMap<String, String>, default: &str) -> String {
    folders
        .iter()
        .rev()
        .find_map(|folder| map.get(folder))
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Convert one image and write its artifact. Returns the written path.
pub fn convert_file(
    converter: &PuzzleConverter,
    input: &Path,
    meta: PuzzleMeta,
    output_dir: &Path,
) -> Result<PathBuf, PuzzleError> {
    let artifact = converter.convert_path(input, meta)?;
    let path = write_artifact(output_dir, &artifact)?;
    tracing::info!(
        input = %input.display(),
        output = %path.display(),
        difficulty = %artifact.difficulty(),
        colors = artifact.palette().len(),
        "Converted"
    );
    Ok(path)
}

/// Pairs of inputs that map to the same puzzle id, as `(earlier, later)`.
/// The later file overwrites the earlier one's artifact.
pub fn duplicate_ids<'a>(
    planned: &'a [(ImageFile, PuzzleMeta)],
) -> Vec<(&'a str, &'a Path, &'a Path)> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    let mut duplicates = Vec::new();
    for (image, meta) in planned {
        match seen.get(meta.id.as_str()) {
            Some(&first) => duplicates.push((meta.id.as_str(), first, image.path.as_path())),
            None => {
                seen.insert(meta.id.as_str(), image.path.as_path());
            }
        }
    }
    duplicates
}

/// Result for one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<PathBuf, PuzzleError>,
}

/// Outcome of a batch run, in input path order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &PuzzleError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }
}

/// Converts every image in a directory with one shared converter.
pub struct BatchRunner {
    converter: PuzzleConverter,
    output_dir: PathBuf,
    default_category: String,
    categories: HashMap<String, String>,
    strip_prefix: Option<String>,
    recursive: bool,
}

impl BatchRunner {
    pub fn new(converter: PuzzleConverter, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            converter,
            output_dir: output_dir.into(),
            default_category: crate::models::DEFAULT_CATEGORY.to_string(),
            categories: HashMap::new(),
            strip_prefix: None,
            recursive: false,
        }
    }

    pub fn default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Folder name to category map used in recursive runs.
    pub fn categories(mut self, map: HashMap<String, String>) -> Self {
        self.categories = map;
        self
    }

    pub fn strip_prefix(mut self, prefix: Option<String>) -> Self {
        self.strip_prefix = prefix;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn meta_for(&self, image: &ImageFile) -> PuzzleMeta {
        let category = if self.recursive {
            category_for(&image.folders, &self.categories, &self.default_category)
        } else {
            self.default_category.clone()
        };
        naming::derive_meta(&image.path, self.strip_prefix.as_deref(), None, None, &category)
    }

    fn convert_one(&self, image: &ImageFile, meta: PuzzleMeta) -> FileOutcome {
        let result = convert_file(&self.converter, &image.path, meta, &self.output_dir);
        if let Err(e) = &result {
            tracing::warn!(input = %image.path.display(), %e, "Conversion failed");
        }
        FileOutcome {
            input: image.path.clone(),
            result,
        }
    }

    /// Convert every image under `input_dir`. A failing file is recorded in
    /// the report and never stops the batch; only failing to list the
    /// input directory is an error.
    pub fn run(&self, input_dir: &Path) -> Result<BatchReport, PuzzleError> {
        let images = find_images(input_dir, self.recursive)?;
        tracing::info!(
            input = %input_dir.display(),
            images = images.len(),
            recursive = self.recursive,
            "Starting batch"
        );

        let planned: Vec<(ImageFile, PuzzleMeta)> = images
            .into_iter()
            .map(|img| {
                let meta = self.meta_for(&img);
                (img, meta)
            })
            .collect();
        for (id, first, second) in duplicate_ids(&planned) {
            tracing::warn!(
                id,
                first = %first.display(),
                second = %second.display(),
                "Duplicate puzzle id, the later file overwrites the earlier one"
            );
        }

        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::prelude::*;
            planned
                .into_par_iter()
                .map(|(img, meta)| self.convert_one(&img, meta))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes = planned
            .into_iter()
            .map(|(img, meta)| self.convert_one(&img, meta))
            .collect();

        let report = BatchReport { outcomes };
        tracing::info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Batch complete"
        );
        Ok(report)
    }
}
