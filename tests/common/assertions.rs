//! Assertion helpers for puzzle JSON.

use pretty_assertions::assert_eq;
use serde_json::Value;

/// Keys of a puzzle artifact, in the order consumers expect.
pub const ARTIFACT_KEYS: [&str; 8] = [
    "id",
    "name",
    "category",
    "difficulty",
    "width",
    "height",
    "colors",
    "cells",
];

/// Parse puzzle JSON text, checking the key order on the way.
pub fn parse_puzzle(text: &str) -> Value {
    let mut last = 0;
    for key in ARTIFACT_KEYS {
        let pos = text
            .find(&format!("\"{key}\""))
            .unwrap_or_else(|| panic!("missing key {key}"));
        assert!(pos >= last, "key {key} out of order");
        last = pos;
    }
    serde_json::from_str(text).unwrap()
}

/// Assert the structural invariants of a puzzle: sizes agree, ids are
/// contiguous from 1, hex codes are uppercase, every cell is 0 or a
/// palette id and every palette id is used.
pub fn assert_valid_puzzle(puzzle: &Value) {
    let width = puzzle["width"].as_u64().unwrap() as usize;
    let height = puzzle["height"].as_u64().unwrap() as usize;
    let colors = puzzle["colors"].as_array().unwrap();
    let rows = puzzle["cells"].as_array().unwrap();

    assert!(!colors.is_empty(), "palette is empty");
    assert_eq!(rows.len(), height, "row count");

    for (i, color) in colors.iter().enumerate() {
        assert_eq!(color["id"].as_u64(), Some(i as u64 + 1));
        let hex = color["hex"].as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert_eq!(hex, hex.to_uppercase(), "hex must be uppercase");
        assert!(!color["name"].as_str().unwrap().is_empty());
    }

    let mut used = vec![false; colors.len() + 1];
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), width, "row width");
        for cell in row {
            let id = cell.as_u64().unwrap() as usize;
            assert!(id <= colors.len(), "cell {id} outside palette");
            used[id] = true;
        }
    }
    assert!(used[1..].iter().all(|&u| u), "unused palette entry");

    let difficulty = puzzle["difficulty"].as_str().unwrap();
    assert!(["easy", "medium", "hard"].contains(&difficulty));
}
