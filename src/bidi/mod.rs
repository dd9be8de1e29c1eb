//! # Embedding Level Resolver
//!
//! Implements UAX#9 paragraph level resolution over a run list.
//!
//! The pipeline:
//! 1. P2/P3: pick the paragraph direction unless the caller fixed it
//! 2. X1–X8: explicit levels; explicit codes and BN are set aside (X9)
//! 3. W1–W7: weak types
//! 4. BD16 + N0: paired brackets
//! 5. N1/N2: remaining neutrals
//! 6. I1/I2: implicit levels
//! 7. The set-aside codes go back in at the level of their predecessor
//! 8. L1 parts 1–3: separators and the whitespace before them drop to the
//!    paragraph level
//!
//! Reordering a line (L1 part 4, L2, L3) is in [`reorder`]; mark removal
//! for display is in [`marks`].

pub mod brackets;
pub mod explicit;
pub mod marks;
pub mod reorder;
pub mod weak;

use log::{log_enabled, trace};

use crate::error::{ensure_len, BidiError};
use crate::runs::{RunArena, HEAD};
use crate::types::{BracketType, CharType, Level, ParType, SENTINEL_LEVEL};

pub use marks::remove_bidi_marks;
pub use reorder::reorder_line;

fn trace_stage(runs: &RunArena, stage: &str) {
    if log_enabled!(log::Level::Trace) {
        trace!("{}: {}", stage, runs.describe(HEAD));
    }
}

/// Direction of the first strong letter outside isolates (P2/P3), or `ON`
/// when there is none.
pub fn par_direction(bidi_types: &[CharType]) -> ParType {
    let mut valid_isolate_count = 0usize;
    for &ty in bidi_types {
        if ty == CharType::PDI {
            valid_isolate_count = valid_isolate_count.saturating_sub(1);
        } else if ty.is_isolate() {
            valid_isolate_count += 1;
        } else if valid_isolate_count == 0 && ty.is_letter() {
            return if ty.is_rtl() {
                CharType::RTL
            } else {
                CharType::LTR
            };
        }
    }
    CharType::ON
}

/// Resolve the embedding level of every character in a paragraph.
///
/// `bracket_types` may be empty when no bracket information is available;
/// otherwise it must line up with `bidi_types`. `base_dir` is the requested
/// paragraph direction. When it is not strong (`ON`, `WLTR`, `WRTL`) and the
/// text has a strong letter outside isolates, it is updated to that
/// letter's direction.
///
/// Returns the levels and one more than the highest level found. Empty
/// input yields no levels and 1.
pub fn resolve_levels(
    bidi_types: &[CharType],
    bracket_types: &[BracketType],
    base_dir: &mut ParType,
) -> Result<(Vec<Level>, Level), BidiError> {
    if !bracket_types.is_empty() {
        ensure_len("bracket types", bidi_types.len(), bracket_types.len())?;
    }
    if bidi_types.is_empty() {
        return Ok((Vec::new(), 1));
    }

    let mut runs = RunArena::encode(bidi_types, bracket_types);

    let mut base_level = base_dir.to_level();
    if !base_dir.is_strong() {
        let mut valid_isolate_count = 0usize;
        for id in runs.ids(HEAD) {
            let kind = runs[id].kind;
            if kind == CharType::PDI {
                valid_isolate_count = valid_isolate_count.saturating_sub(1);
            } else if kind.is_isolate() {
                valid_isolate_count += 1;
            } else if valid_isolate_count == 0 && kind.is_letter() {
                base_level = kind.to_level();
                *base_dir = CharType::from_level(base_level);
                break;
            }
        }
    }
    let paragraph_dir = CharType::from_level(base_level);
    trace!(
        "resolving {} chars, base level {}",
        bidi_types.len(),
        base_level
    );

    let explicits = explicit::resolve_explicit(&mut runs, base_level);
    explicit::link_isolates(&mut runs);
    runs.compact(HEAD);
    trace_stage(&runs, "explicit");

    let max_iso_level = weak::resolve_weak(&mut runs, paragraph_dir);
    runs.compact_neutrals(HEAD);
    trace_stage(&runs, "weak");

    let pairs = brackets::find_pairs(&runs, max_iso_level);
    brackets::resolve_pairs(&mut runs, &pairs);
    for id in runs.ids(HEAD) {
        runs[id].bracket = BracketType::NONE;
    }
    runs.compact_neutrals(HEAD);
    trace_stage(&runs, "brackets");

    resolve_neutrals(&mut runs);
    runs.compact(HEAD);
    trace_stage(&runs, "neutral");

    let max_level = resolve_implicit(&mut runs, base_level);
    runs.compact(HEAD);
    trace_stage(&runs, "implicit");

    if !runs.is_empty(explicits) {
        runs.shadow(HEAD, explicits, true);
        // Reinserted codes must not change the reordering around them.
        let mut previous = base_level;
        for id in runs.ids(HEAD) {
            if runs[id].level == SENTINEL_LEVEL {
                runs[id].level = previous;
            }
            previous = runs[id].level;
        }
    }

    reset_separators(&mut runs, bidi_types, paragraph_dir, base_level);
    trace_stage(&runs, "final");

    Ok((runs.levels(HEAD, bidi_types.len()), max_level + 1))
}

/// N1/N2. Numbers count as R on both sides.
fn resolve_neutrals(runs: &mut RunArena) {
    for pp in runs.ids(HEAD) {
        let level = runs[pp].level;
        let side = |other: usize| {
            if runs[other].level == level {
                runs[other].kind.numbers_as_rtl()
            } else {
                CharType::from_level(runs[other].level.max(level))
            }
        };
        let prev_type = side(runs.adjacent(pp, false, false));
        let next_type = side(runs.adjacent(pp, true, false));

        if runs[pp].kind.numbers_as_rtl().is_neutral() {
            runs[pp].kind = if prev_type == next_type {
                prev_type
            } else {
                CharType::from_level(level)
            };
        }
    }
}

/// I1/I2. Returns the highest level assigned, never below `base_level`.
fn resolve_implicit(runs: &mut RunArena, base_level: Level) -> Level {
    let mut max_level = base_level;
    for pp in runs.ids(HEAD) {
        let run = &mut runs[pp];
        let level = run.level;
        run.level = if run.kind.is_number() {
            (level + 2) & !1
        } else {
            level + ((level & 1) ^ run.kind.to_level())
        };
        max_level = max_level.max(run.level);
    }
    max_level
}

/// L1 parts 1–3: segment and paragraph separators, and any whitespace,
/// explicit or isolate codes before them or at the paragraph end, go back
/// to the paragraph level.
fn reset_separators(
    runs: &mut RunArena,
    bidi_types: &[CharType],
    paragraph_dir: CharType,
    base_level: Level,
) {
    let list = runs.new_list();
    let mut q = list;
    let mut resetting = true;
    let mut end = bidi_types.len();

    // Walk backwards; the position before the first character closes the
    // last open stretch.
    for j in (0..=bidi_types.len()).rev() {
        let ty = if j > 0 { bidi_types[j - 1] } else { CharType::ON };
        if !resetting && ty.is_separator() {
            resetting = true;
            end = j;
        } else if resetting && !(ty.is_explicit_or_separator_or_bn_or_ws() || ty.is_isolate()) {
            resetting = false;
            if end > j {
                let reset = runs.alloc_run(j, end - j, paragraph_dir, base_level);
                runs.insert_before(q, reset);
                q = reset;
            }
        }
    }

    runs.shadow(HEAD, list, false);
}
