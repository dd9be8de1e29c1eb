//! Conformance against the Unicode bidi test suites.
//!
//! `BidiTest.txt` and `BidiCharacterTest.txt` from the Unicode Character
//! Database are picked up from `tests/data/` when present; without them only
//! the embedded cases below run. The embedded cases are written in the same
//! line formats and cover explicit codes, isolates, bracket pairs inside and
//! across isolates, and number handling.

use std::fs;
use std::path::PathBuf;

use bidishape::types::BracketType;
use bidishape::unicode::{bidi_types, bracket_types};
use bidishape::*;

const CLASS_CASES: &str = "\
@Levels: 0 x 1 x 0
@Reorder: 0 2 4
L RLE R PDF L; 3

@Levels: 1 1
@Reorder: 1 0
R R; 7

@Levels: 2 2
@Reorder: 0 1
L EN; 4

@Levels: 1 2
@Reorder: 1 0
R EN; 7

@Levels: x
@Reorder:
LRE; 7

@Levels: 1 1 1
@Reorder: 2 1 0
R WS R; 7

@Levels: 0 0 0
@Reorder: 0 1 2
L WS L; 3
";

const CHARACTER_CASES: &str = "\
05D0 05D1 0028 0061 0062 0029;0;0;1 1 0 0 0 0;1 0 2 3 4 5
0061 0028 0062 0029 05D0;1;1;2 2 2 2 1;4 0 1 2 3
0627 0031 0032;2;1;1 2 2;1 2 0
0061 2067 05D0 2069 0062;0;0;0 0 1 0 0;0 1 2 3 4
05D0 05B0 0061;2;1;1 1 2;2 1 0
2067 0028 2069 2066 05D0 0029 2069;0;0;0 1 0 0 3 2 0;0 1 2 3 4 5 6
0061 2067 0028 0062 0029 2069;0;0;0 0 1 2 1 0;0 1 4 3 2 5
2068 05D0 0061 2069 0062;0;0;0 1 2 0 0;0 2 1 3 4
2067 05D0 2069 0061;2;0;0 1 0 0;0 1 2 3
05D0 0028 0031 0029;0;0;1 1 2 1;3 2 1 0
05D0 0028 0061 005B 0062 005D 0029;1;1;1 1 2 2 2 2 1;6 2 3 4 5 1 0
0031 0025 0020 05D0;2;1;2 2 1 1;3 2 0 1
05D0 0020 2067 0061 2069 0020;0;0;1 0 0 2 0 0;0 1 2 3 4 5
0061 00AD 05D0;0;0;0 x 1;0 2
0627 0661 002C 0662;2;1;1 2 2 2;1 2 3 0
0061 0020 05D0 0020 0031 0032;0;0;0 0 1 1 2 2;0 1 4 5 3 2
";

// ─── Helpers ────────────────────────────────────────────────────

fn data_file(name: &str) -> Option<String> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
        .iter()
        .collect();
    match fs::read_to_string(&path) {
        Ok(contents) => Some(contents),
        Err(_) => {
            eprintln!("skipping {}: not found", path.display());
            None
        }
    }
}

/// Expected level per character, `None` for "x".
fn parse_levels(field: &str) -> Vec<Option<Level>> {
    field
        .split_whitespace()
        .map(|l| if l == "x" { None } else { l.parse().ok() })
        .collect()
}

fn parse_order(field: &str) -> Vec<usize> {
    field
        .split_whitespace()
        .filter_map(|i| i.parse().ok())
        .collect()
}

/// Resolve and reorder a paragraph as a single line, returning the final
/// levels and the visual order with explicit codes and BN left out.
fn run_paragraph(
    types: &[CharType],
    brackets: &[BracketType],
    base_dir: &mut ParType,
) -> (Vec<Level>, Vec<usize>) {
    let (mut levels, _) = resolve_levels(types, brackets, base_dir).unwrap();
    let mut map: Vec<usize> = (0..types.len()).collect();
    reorder_line(
        ShapingOptions::empty(),
        types,
        0..types.len(),
        *base_dir,
        &mut levels,
        None,
        Some(&mut map),
    )
    .unwrap();
    let order = map
        .into_iter()
        .filter(|&i| !types[i].is_explicit_or_bn())
        .collect();
    (levels, order)
}

fn levels_match(expected: &[Option<Level>], actual: &[Level]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(e, a)| e.map_or(true, |e| e == *a))
}

/// Run every case in a BidiTest.txt-formatted document, returning the
/// number of failures.
fn check_class_cases(contents: &str) -> usize {
    let mut expected_levels = Vec::new();
    let mut expected_order = Vec::new();
    let mut failures = 0;

    for line in contents.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("@Levels:") {
            expected_levels = parse_levels(rest);
            continue;
        }
        if let Some(rest) = line.strip_prefix("@Reorder:") {
            expected_order = parse_order(rest);
            continue;
        }
        if line.starts_with('@') {
            continue;
        }

        let (classes, bitset) = line.split_once(';').unwrap();
        let types: Vec<CharType> = classes
            .split_whitespace()
            .map(|c| CharType::from_abbreviation(c).unwrap())
            .collect();
        let bitset: u8 = bitset.trim().parse().unwrap();

        for (bit, dir) in [(1, CharType::ON), (2, CharType::LTR), (4, CharType::RTL)] {
            if bitset & bit == 0 {
                continue;
            }
            let mut base_dir = dir;
            let (levels, order) = run_paragraph(&types, &[], &mut base_dir);
            if !levels_match(&expected_levels, &levels) || order != expected_order {
                failures += 1;
                eprintln!(
                    "FAIL {} (dir {}): levels {:?} order {:?}",
                    classes,
                    dir.abbreviation(),
                    levels,
                    order
                );
            }
        }
    }
    failures
}

/// Run every case in a BidiCharacterTest.txt-formatted document.
fn check_character_cases(contents: &str) -> usize {
    let mut failures = 0;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 5, "malformed line: {}", line);

        let text: Vec<char> = fields[0]
            .split_whitespace()
            .map(|cp| char::from_u32(u32::from_str_radix(cp, 16).unwrap()).unwrap())
            .collect();
        let mut base_dir = match fields[1] {
            "0" => CharType::LTR,
            "1" => CharType::RTL,
            _ => CharType::ON,
        };
        let expected_par_level: Level = fields[2].parse().unwrap();
        let expected_levels = parse_levels(fields[3]);
        let expected_order = parse_order(fields[4]);

        let types = bidi_types(&text);
        let brackets = bracket_types(&text, &types).unwrap();
        let (levels, order) = run_paragraph(&types, &brackets, &mut base_dir);

        let par_level = base_dir.to_level();
        if par_level != expected_par_level
            || !levels_match(&expected_levels, &levels)
            || order != expected_order
        {
            failures += 1;
            eprintln!(
                "FAIL {}: paragraph {} levels {:?} order {:?}",
                fields[0], par_level, levels, order
            );
        }
    }
    failures
}

// ─── Embedded Cases ─────────────────────────────────────────────

#[test]
fn test_embedded_class_cases() {
    assert_eq!(check_class_cases(CLASS_CASES), 0);
}

#[test]
fn test_embedded_character_cases() {
    assert_eq!(check_character_cases(CHARACTER_CASES), 0);
}

// ─── Unicode Test Files ─────────────────────────────────────────

#[test]
fn test_bidi_test_file() {
    if let Some(contents) = data_file("BidiTest.txt") {
        assert_eq!(check_class_cases(&contents), 0);
    }
}

#[test]
fn test_bidi_character_test_file() {
    if let Some(contents) = data_file("BidiCharacterTest.txt") {
        assert_eq!(check_character_cases(&contents), 0);
    }
}
