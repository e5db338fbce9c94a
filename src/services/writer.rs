//! Atomic artifact writing.
//!
//! Files are written to a temporary sibling in the destination directory
//! and renamed into place, so readers never observe a partial file.

use std::io::Write;
use std::path::{Path, PathBuf};

use puzzle_convert::PuzzleArtifact;
use tempfile::NamedTempFile;

use crate::error::PuzzleError;

/// Write `bytes` to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PuzzleError> {
    let fail = |source: std::io::Error| PuzzleError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(fail)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

/// Path an artifact with this id is written to.
pub fn artifact_path(output_dir: &Path, id: &str) -> PathBuf {
    output_dir.join(format!("{id}.json"))
}

/// Serialize `artifact` as 2-space indented JSON to `<output_dir>/<id>.json`.
pub fn write_artifact(output_dir: &Path, artifact: &PuzzleArtifact) -> Result<PathBuf, PuzzleError> {
    let json = serde_json::to_vec_pretty(artifact)?;
    let path = artifact_path(output_dir, artifact.id());
    write_atomic(&path, &json)?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Wrote artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_convert::{PuzzleConverter, PuzzleMeta, Rgba, SampleGrid};
    use tempfile::TempDir;

    fn artifact(id: &str) -> PuzzleArtifact {
        let grid = SampleGrid::new(
            vec![
                Rgba::opaque(255, 0, 0),
                Rgba::new(0, 0, 0, 0),
                Rgba::opaque(0, 0, 0),
                Rgba::opaque(255, 0, 0),
            ],
            2,
            2,
        )
        .unwrap();
        PuzzleConverter::default()
            .convert_samples(&grid, PuzzleMeta::new(id, "Tiny", "objects"))
            .unwrap()
    }

    #[test]
    fn test_write_artifact_creates_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("puzzles");

        let path = write_artifact(&out, &artifact("tiny")).unwrap();
        assert_eq!(path, out.join("tiny.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"id\": \"tiny\",\n  \"name\": \"Tiny\""));
        let back: PuzzleArtifact = serde_json::from_str(&text).unwrap();
        assert_eq!(back, artifact("tiny"));
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        write_artifact(dir.path(), &artifact("a")).unwrap();
        write_artifact(dir.path(), &artifact("a")).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.json")]);
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        // A regular file where the output directory should be.
        let err = write_artifact(&blocker, &artifact("b")).unwrap_err();
        match err {
            PuzzleError::WriteFailure { path, .. } => assert_eq!(path, blocker.join("b.json")),
            other => panic!("Expected WriteFailure, got {other:?}"),
        }
    }
}
