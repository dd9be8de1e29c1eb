//! # Arabic Cursive Joining
//!
//! Resolves rules R1–R7 of the Unicode cursive joining algorithm on top of
//! resolved bidi levels. Each character starts with the joining type from
//! [`crate::unicode::joining_type`]; after [`join_arabic`] its two low bits
//! say which neighbours it actually connects to, and [`shaping`] turns that
//! into presentation forms.
//!
//! Joining is direction aware: on an odd level the preceding character sits
//! to the right, so "joins preceding" is the right-join bit; on an even level
//! it is the left-join bit.

pub mod shaping;

pub use shaping::{shape, shape_arabic, shape_mirroring};

use crate::error::{ensure_len, BidiError};
use crate::types::{CharType, JoiningType, Level, SENTINEL_LEVEL};

/// Run the joining sweep, updating `joining` in place.
///
/// Characters skipped for being transparent or ignored get both join bits
/// of the pair they sit between, so a mark on a joined letter (or on a
/// tatweel) knows it is inside a connection.
pub fn join_arabic(
    bidi_types: &[CharType],
    levels: &[Level],
    joining: &mut [JoiningType],
) -> Result<(), BidiError> {
    ensure_len("levels", joining.len(), levels.len())?;
    ensure_len("bidi types", joining.len(), bidi_types.len())?;

    let mut saved = 0usize;
    let mut saved_level = SENTINEL_LEVEL;
    let mut saved_shapes = false;
    let mut saved_joins_following = JoiningType::empty();
    let mut joins = false;

    for i in 0..joining.len() {
        if joining[i].is_ignored() {
            continue;
        }
        let mut disjoin = false;
        let shapes = joining[i].arab_shapes();
        // Explicit codes and BN have no level of their own and never break a join.
        let level = if bidi_types[i].is_explicit_or_bn() {
            SENTINEL_LEVEL
        } else {
            levels[i]
        };

        let consistent =
            saved_level == level || saved_level == SENTINEL_LEVEL || level == SENTINEL_LEVEL;
        if joins && !consistent {
            disjoin = true;
            joins = false;
        }

        if !joining[i].is_join_skipped() {
            let joins_preceding = JoiningType::joins_preceding(level);
            if !joins {
                if shapes {
                    joining[i].remove(joins_preceding);
                }
            } else if !joining[i].intersects(joins_preceding) {
                disjoin = true;
            } else {
                for skipped in &mut joining[saved + 1..i] {
                    skipped.insert(joins_preceding | saved_joins_following);
                }
            }
        }

        if disjoin && saved_shapes {
            joining[saved].remove(saved_joins_following);
        }

        if !joining[i].is_join_skipped() {
            saved = i;
            saved_level = level;
            saved_shapes = shapes;
            saved_joins_following = JoiningType::joins_following(level);
            joins = joining[i].intersects(saved_joins_following);
        }
    }

    if joins && saved_shapes {
        joining[saved].remove(saved_joins_following);
    }
    Ok(())
}
