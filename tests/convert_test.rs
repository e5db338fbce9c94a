//! End-to-end conversion of image files into puzzle JSON.

mod common;

use common::*;
use pixelpuzzle::error::PuzzleError;
use pixelpuzzle::services::{batch, naming};
use pretty_assertions::assert_eq;
use puzzle_convert::{ConvertError, ConvertOptions, Preset, PuzzleConverter};
use tempfile::TempDir;

#[test]
fn test_convert_four_color_scenario() {
    let dir = TempDir::new().unwrap();
    let input = save_png(dir.path(), "tiny-quad.png", &four_color_2x2());
    let out = dir.path().join("out");

    let converter = PuzzleConverter::new(ConvertOptions::default().target_width(2));
    let meta = naming::derive_meta(&input, None, None, None, "objects");
    let path = batch::convert_file(&converter, &input, meta, &out).unwrap();

    assert_eq!(path, out.join("tiny-quad.json"));
    let puzzle = parse_puzzle(&std::fs::read_to_string(&path).unwrap());
    assert_valid_puzzle(&puzzle);

    assert_eq!(
        puzzle,
        serde_json::json!({
            "id": "tiny-quad",
            "name": "Tiny Quad",
            "category": "objects",
            "difficulty": "easy",
            "width": 2,
            "height": 2,
            "colors": [
                { "id": 1, "hex": "#FF0000", "name": "Red" },
                { "id": 2, "hex": "#00FF00", "name": "Green" },
                { "id": 3, "hex": "#0000FF", "name": "Blue" },
                { "id": 4, "hex": "#000000", "name": "Black" }
            ],
            "cells": [[1, 2], [3, 4]]
        })
    );
}

#[test]
fn test_transparent_image_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = save_png(dir.path(), "ghost.png", &transparent(10, 10));
    let out = dir.path().join("out");

    let converter = PuzzleConverter::default();
    let meta = naming::derive_meta(&input, None, None, None, "fantasy");
    let err = batch::convert_file(&converter, &input, meta, &out).unwrap_err();

    assert!(err.is_empty_palette(), "unexpected error: {err}");
    assert!(!out.join("ghost.json").exists());
}

#[test]
fn test_sprite_keeps_background_transparent() {
    let dir = TempDir::new().unwrap();
    let input = save_png(dir.path(), "heart.png", &sprite(64));

    let converter = PuzzleConverter::preset(Preset::Compact);
    let meta = naming::derive_meta(&input, None, None, None, "objects");
    let path = batch::convert_file(&converter, &input, meta, dir.path()).unwrap();

    let puzzle = parse_puzzle(&std::fs::read_to_string(path).unwrap());
    assert_valid_puzzle(&puzzle);
    assert_eq!(puzzle["width"], 32);
    assert_eq!(puzzle["height"], 32);
    assert_eq!(puzzle["colors"].as_array().unwrap().len(), 2);
    // Corners are background.
    assert_eq!(puzzle["cells"][0][0], 0);
    assert_eq!(puzzle["cells"][31][31], 0);
}

#[test]
fn test_gradient_respects_palette_bound() {
    let dir = TempDir::new().unwrap();
    let input = save_png(dir.path(), "sky.png", &gradient(120, 80));

    for colors in [0usize, 4, 12] {
        let converter = PuzzleConverter::default().colors(colors);
        let meta = naming::derive_meta(&input, None, None, None, "nature");
        let path = batch::convert_file(&converter, &input, meta, dir.path()).unwrap();
        let puzzle = parse_puzzle(&std::fs::read_to_string(path).unwrap());

        assert_valid_puzzle(&puzzle);
        assert_eq!(puzzle["width"], 48);
        assert_eq!(puzzle["height"], 32);
        let len = puzzle["colors"].as_array().unwrap().len();
        let bound = if colors == 0 { 20 } else { colors };
        assert!(len <= bound, "{len} colors > {bound}");
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = save_png(dir.path(), "sky.png", &gradient(90, 90));
    let converter = PuzzleConverter::default();

    let run = |out: &str| {
        let meta = naming::derive_meta(&input, None, None, None, "nature");
        let path = batch::convert_file(&converter, &input, meta, &dir.path().join(out)).unwrap();
        std::fs::read(path).unwrap()
    };
    assert_eq!(run("a"), run("b"));
}

#[test]
fn test_undecodable_file_is_invalid_image() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let converter = PuzzleConverter::default();
    let meta = naming::derive_meta(&input, None, None, None, "objects");
    let err = batch::convert_file(&converter, &input, meta, dir.path()).unwrap_err();
    assert!(matches!(err, PuzzleError::Convert(ConvertError::InvalidImage(_))));
}
