//! Puzzle ids and display names derived from file names.

use std::path::Path;
use std::sync::OnceLock;

use puzzle_convert::PuzzleMeta;
use regex::Regex;

fn non_slug_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"))
}

fn word_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII word characters and boundaries only: accented letters neither
    // start a word nor get uppercased.
    RE.get_or_init(|| Regex::new(r"(?-u:\b)[a-zA-Z0-9_]").expect("static pattern"))
}

/// Remove `prefix` from the start of `stem` if present.
pub fn strip_prefix<'a>(stem: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix {
        Some(p) if !p.is_empty() => stem.strip_prefix(p).unwrap_or(stem),
        _ => stem,
    }
}

/// Lowercase the stem and collapse every run of characters outside
/// `[a-z0-9]` into a single `-`.
///
/// `"Cute Heart (v2)"` becomes `"cute-heart-v2-"`. Edge dashes are kept so
/// ids stay stable with artifacts generated earlier.
pub fn puzzle_id(stem: &str) -> String {
    non_slug_run()
        .replace_all(&stem.to_lowercase(), "-")
        .into_owned()
}

/// Replace `-` and `_` with spaces and capitalize the first letter of
/// every word.
pub fn display_name(stem: &str) -> String {
    let spaced = stem.replace(['-', '_'], " ");
    word_start()
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Stem of `path` as UTF-8, lossily.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final component of `path` as UTF-8, lossily.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build the metadata for an image file. Explicit `id` and `name` win over
/// derived ones.
pub fn derive_meta(
    path: &Path,
    strip: Option<&str>,
    id: Option<&str>,
    name: Option<&str>,
    category: &str,
) -> PuzzleMeta {
    let stem = file_stem(path);
    let clean = strip_prefix(&stem, strip);
    PuzzleMeta::new(
        id.map_or_else(|| puzzle_id(clean), str::to_string),
        name.map_or_else(|| display_name(clean), str::to_string),
        category,
    )
}
