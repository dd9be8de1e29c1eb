//! Line reordering: L1 part 4, L3 and L2.
//!
//! Works on a window of a paragraph whose levels are already resolved. The
//! visual string and the index map are paragraph-sized arrays; only the
//! positions inside the line are touched.

use std::ops::Range;

use crate::error::{ensure_len, BidiError};
use crate::options::ShapingOptions;
use crate::types::{level_is_rtl, CharType, Level, ParType};

/// Reorder one line into visual order.
///
/// `levels` is updated with the L1 part 4 reset of trailing whitespace,
/// explicit codes and isolate formatting characters. `visual` and `map`, when
/// given, are permuted in place so that position `i` holds what is displayed
/// at `i`; `map` starts out as the logical index of each position (usually
/// the identity) and ends up as visual to logical.
///
/// With [`ShapingOptions::REORDER_NSM`], non-spacing marks on right-to-left
/// levels are kept after their base character (L3).
///
/// Returns one more than the highest level on the line.
pub fn reorder_line(
    options: ShapingOptions,
    bidi_types: &[CharType],
    line: Range<usize>,
    base_dir: ParType,
    levels: &mut [Level],
    mut visual: Option<&mut [char]>,
    mut map: Option<&mut [usize]>,
) -> Result<Level, BidiError> {
    let len = bidi_types.len();
    ensure_len("levels", len, levels.len())?;
    if let Some(visual) = visual.as_deref() {
        ensure_len("visual string", len, visual.len())?;
    }
    if let Some(map) = map.as_deref() {
        ensure_len("map", len, map.len())?;
    }
    if line.start > line.end || line.end > len {
        return Err(BidiError::InvalidInput(format!(
            "line {}..{} outside paragraph of {} chars",
            line.start, line.end, len
        )));
    }

    let mut reverse = |range: Range<usize>| {
        if let Some(visual) = visual.as_deref_mut() {
            visual[range.clone()].reverse();
        }
        if let Some(map) = map.as_deref_mut() {
            map[range].reverse();
        }
    };

    // L1 part 4
    let base_level = base_dir.to_level();
    for i in line.clone().rev() {
        let ty = bidi_types[i];
        if !(ty.is_explicit_or_bn_or_ws() || ty.is_isolate()) {
            break;
        }
        levels[i] = base_level;
    }

    // L3: pre-reverse each base + marks group so L2 puts it back in order.
    if options.contains(ShapingOptions::REORDER_NSM) {
        let mut i = line.end;
        while i > line.start {
            i -= 1;
            if !(level_is_rtl(levels[i]) && bidi_types[i] == CharType::NSM) {
                continue;
            }
            let seq_end = i;
            let level = levels[i];
            let mut start = i;
            while start > line.start
                && bidi_types[start - 1].is_explicit_or_bn_or_nsm()
                && levels[start - 1] == level
            {
                start -= 1;
            }
            if start > line.start && levels[start - 1] == level {
                // The base character the marks sit on.
                start -= 1;
            }
            reverse(start..seq_end + 1);
            i = start;
        }
    }

    let max_level = levels[line.clone()].iter().copied().max().unwrap_or(0).max(0);

    // L2: from the highest level down, reverse every stretch at or above it.
    for level in (1..=max_level).rev() {
        let mut i = line.end;
        while i > line.start {
            i -= 1;
            if levels[i] < level {
                continue;
            }
            let seq_end = i;
            while i > line.start && levels[i - 1] >= level {
                i -= 1;
            }
            reverse(i..seq_end + 1);
        }
    }

    Ok(max_level + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn reorder(types: &[CharType], levels: &mut [Level], options: ShapingOptions) -> Vec<usize> {
        let mut map = identity(types.len());
        reorder_line(
            options,
            types,
            0..types.len(),
            CharType::LTR,
            levels,
            None,
            Some(&mut map),
        )
        .unwrap();
        map
    }

    #[test]
    fn test_ltr_is_identity() {
        let types = [CharType::LTR; 4];
        let mut levels = [0; 4];
        let mut map = identity(4);
        let max = reorder_line(
            ShapingOptions::DEFAULT,
            &types,
            0..4,
            CharType::LTR,
            &mut levels,
            None,
            Some(&mut map),
        )
        .unwrap();
        assert_eq!(map, identity(4));
        assert_eq!(max, 1);
    }

    #[test]
    fn test_single_rtl_run() {
        let types = [CharType::LTR, CharType::LTR, CharType::RTL, CharType::RTL, CharType::RTL, CharType::LTR];
        let mut levels = [0, 0, 1, 1, 1, 0];
        assert_eq!(reorder(&types, &mut levels, ShapingOptions::empty()), vec![0, 1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_nested_levels() {
        let types = [CharType::LTR; 6];
        let mut levels = [0, 1, 2, 2, 1, 0];
        assert_eq!(reorder(&types, &mut levels, ShapingOptions::empty()), vec![0, 4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_visual_string_follows_map() {
        let types = [CharType::LTR, CharType::RTL, CharType::RTL];
        let mut levels = [0, 1, 1];
        let mut visual = ['a', 'b', 'c'];
        let mut map = identity(3);
        reorder_line(
            ShapingOptions::empty(),
            &types,
            0..3,
            CharType::LTR,
            &mut levels,
            Some(&mut visual),
            Some(&mut map),
        )
        .unwrap();
        assert_eq!(visual, ['a', 'c', 'b']);
        assert_eq!(map, vec![0, 2, 1]);
    }

    #[test]
    fn test_trailing_whitespace_takes_base_level() {
        let types = [CharType::RTL, CharType::WS, CharType::RLI, CharType::WS];
        let mut levels = [1, 1, 1, 1];
        reorder(&types, &mut levels, ShapingOptions::empty());
        assert_eq!(levels, [1, 0, 0, 0]);
    }

    #[test]
    fn test_nsm_stays_after_base() {
        let types = [CharType::RTL, CharType::NSM, CharType::RTL];
        let mut levels = [1, 1, 1];
        assert_eq!(reorder(&types, &mut levels, ShapingOptions::REORDER_NSM), vec![2, 0, 1]);

        let mut levels = [1, 1, 1];
        assert_eq!(reorder(&types, &mut levels, ShapingOptions::empty()), vec![2, 1, 0]);
    }

    #[test]
    fn test_line_window_leaves_rest_alone() {
        let types = [CharType::RTL; 6];
        let mut levels = [1; 6];
        let mut map = identity(6);
        let max = reorder_line(
            ShapingOptions::empty(),
            &types,
            2..5,
            CharType::RTL,
            &mut levels,
            None,
            Some(&mut map),
        )
        .unwrap();
        assert_eq!(map, vec![0, 1, 4, 3, 2, 5]);
        assert_eq!(max, 2);
    }

    #[test]
    fn test_invalid_input() {
        let types = [CharType::LTR; 3];
        let mut levels = [0; 3];
        let result = reorder_line(
            ShapingOptions::empty(),
            &types,
            1..4,
            CharType::LTR,
            &mut levels,
            None,
            None,
        );
        assert!(matches!(result, Err(BidiError::InvalidInput(_))));

        let mut short = [0; 2];
        let result = reorder_line(
            ShapingOptions::empty(),
            &types,
            0..3,
            CharType::LTR,
            &mut short,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_map_is_permutation() {
        // Deterministic pseudo-random levels and types.
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };
        let palette = [CharType::LTR, CharType::RTL, CharType::NSM, CharType::WS, CharType::EN];
        for _ in 0..50 {
            let n = (next() % 40) as usize + 1;
            let types: Vec<CharType> = (0..n).map(|_| palette[(next() % 5) as usize]).collect();
            let mut levels: Vec<Level> = (0..n).map(|_| (next() % 6) as Level).collect();
            let mut map = reorder(&types, &mut levels, ShapingOptions::DEFAULT);
            map.sort_unstable();
            assert_eq!(map, identity(n));
        }
    }
}
