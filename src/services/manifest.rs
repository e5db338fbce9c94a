//! Catalog manifest regenerated from the artifacts in an output directory.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use puzzle_convert::{Difficulty, PuzzleArtifact};
use serde::Serialize;

use super::writer::write_atomic;
use crate::error::PuzzleError;

/// File name of the JSON manifest.
pub const JSON_MANIFEST: &str = "index.json";

/// File name of the TypeScript manifest.
pub const TS_MANIFEST: &str = "index.ts";

/// Module the TypeScript manifest imports the `Puzzle` type from.
pub const TS_TYPES_IMPORT: &str = "../../types";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ManifestFormat {
    /// `index.json` listing every puzzle
    #[default]
    Json,
    /// `index.ts` importing every puzzle JSON
    Typescript,
    /// Do not write a manifest
    None,
}

/// One catalog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub width: u32,
    pub height: u32,
    pub colors: usize,
    pub file: String,
}

/// Artifacts found in `dir`, sorted by file name. Files that do not parse
/// as puzzles are skipped with a warning.
pub fn scan(dir: &Path) -> Result<Vec<ManifestEntry>, PuzzleError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| p.file_name().is_some_and(|n| n != JSON_MANIFEST))
        .collect();
    files.sort();

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let parsed = std::fs::read_to_string(&path)
            .map_err(PuzzleError::from)
            .and_then(|text| Ok(serde_json::from_str::<PuzzleArtifact>(&text)?));
        match parsed {
            Ok(artifact) => entries.push(ManifestEntry {
                id: artifact.id().to_string(),
                name: artifact.name().to_string(),
                category: artifact.category().to_string(),
                difficulty: artifact.difficulty(),
                width: artifact.width(),
                height: artifact.height(),
                colors: artifact.palette().len(),
                file: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }),
            Err(e) => tracing::warn!(%e, path = %path.display(), "Skipping file in manifest"),
        }
    }
    Ok(entries)
}

/// TypeScript module importing every puzzle and exporting `puzzles`.
pub fn render_typescript(entries: &[ManifestEntry]) -> String {
    let mut out = format!("import type {{ Puzzle }} from '{TS_TYPES_IMPORT}'\n\n");
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "import puzzle{i} from './{}'", entry.file);
    }
    let names: Vec<String> = (0..entries.len()).map(|i| format!("puzzle{i}")).collect();
    let _ = write!(
        out,
        "\nexport const puzzles = [\n  {}\n] as Puzzle[]\n",
        names.join(",\n  ")
    );
    out
}

/// Regenerate the manifest for `dir`. Returns the written path, or `None`
/// for [`ManifestFormat::None`].
pub fn write_manifest(dir: &Path, format: ManifestFormat) -> Result<Option<PathBuf>, PuzzleError> {
    let (file, bytes, count) = match format {
        ManifestFormat::None => return Ok(None),
        ManifestFormat::Json => {
            let entries = scan(dir)?;
            (JSON_MANIFEST, serde_json::to_vec_pretty(&entries)?, entries.len())
        }
        ManifestFormat::Typescript => {
            let entries = scan(dir)?;
            (TS_MANIFEST, render_typescript(&entries).into_bytes(), entries.len())
        }
    };

    let path = dir.join(file);
    write_atomic(&path, &bytes)?;
    tracing::info!(path = %path.display(), puzzles = count, "Generated manifest");
    Ok(Some(path))
}
