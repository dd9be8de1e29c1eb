//! Dropping bidi formatting characters from display output.

use crate::error::{ensure_len, BidiError};
use crate::types::Level;
use crate::unicode::{bidi_type, LRM, RLM};

fn is_mark(ch: char) -> bool {
    let ty = bidi_type(ch);
    ty.is_explicit_or_bn() || ty.is_isolate() || ch == LRM || ch == RLM
}

/// Remove explicit embedding codes, isolates, BN and LRM/RLM from `text`.
///
/// `visual_to_logical` and `levels`, when given, are compacted in step with
/// `text`. `logical_to_visual` is rebuilt against the compacted positions,
/// with `None` for removed characters; if `visual_to_logical` is absent it
/// is derived from `logical_to_visual` first.
///
/// Returns the new length.
pub fn remove_bidi_marks(
    text: &mut Vec<char>,
    mut visual_to_logical: Option<&mut Vec<usize>>,
    logical_to_visual: Option<&mut Vec<Option<usize>>>,
    mut levels: Option<&mut Vec<Level>>,
) -> Result<usize, BidiError> {
    let len = text.len();
    if let Some(map) = visual_to_logical.as_deref() {
        ensure_len("visual to logical map", len, map.len())?;
    }
    if let Some(map) = logical_to_visual.as_deref() {
        ensure_len("logical to visual map", len, map.len())?;
    }
    if let Some(levels) = levels.as_deref() {
        ensure_len("levels", len, levels.len())?;
    }

    let mut derived = Vec::new();
    if visual_to_logical.is_none() {
        if let Some(map) = logical_to_visual.as_deref() {
            derived = vec![0; len];
            for (logical, visual) in map.iter().enumerate() {
                match visual {
                    Some(v) if *v < len => derived[*v] = logical,
                    _ => {
                        return Err(BidiError::InvalidInput(format!(
                            "logical to visual map has no position for {}",
                            logical
                        )))
                    }
                }
            }
        }
    }

    let mut kept = 0;
    for i in 0..len {
        if is_mark(text[i]) {
            continue;
        }
        text[kept] = text[i];
        if let Some(map) = visual_to_logical.as_deref_mut() {
            map[kept] = map[i];
        }
        if !derived.is_empty() {
            derived[kept] = derived[i];
        }
        if let Some(levels) = levels.as_deref_mut() {
            levels[kept] = levels[i];
        }
        kept += 1;
    }

    text.truncate(kept);
    if let Some(levels) = levels.as_deref_mut() {
        levels.truncate(kept);
    }
    derived.truncate(kept);
    if let Some(map) = visual_to_logical.as_deref_mut() {
        map.truncate(kept);
    }

    if let Some(l2v) = logical_to_visual {
        let v2l: &[usize] = match visual_to_logical.as_deref() {
            Some(map) => map,
            None => &derived,
        };
        l2v.iter_mut().for_each(|slot| *slot = None);
        for (visual, &logical) in v2l.iter().enumerate() {
            if let Some(slot) = l2v.get_mut(logical) {
                *slot = Some(visual);
            }
        }
    }

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_marks_and_compacts_maps() {
        // Visual "a RLE b LRM c" with a shuffled map.
        let mut text = vec!['a', '\u{202B}', 'b', '\u{200E}', 'c'];
        let mut v2l = vec![4, 3, 2, 1, 0];
        let mut l2v = vec![Some(4), Some(3), Some(2), Some(1), Some(0)];
        let mut levels = vec![1, 1, 2, 1, 1];

        let n = remove_bidi_marks(&mut text, Some(&mut v2l), Some(&mut l2v), Some(&mut levels))
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(text, vec!['a', 'b', 'c']);
        assert_eq!(v2l, vec![4, 2, 0]);
        assert_eq!(levels, vec![1, 2, 1]);
        assert_eq!(l2v, vec![Some(2), None, Some(1), None, Some(0)]);
    }

    #[test]
    fn test_isolates_and_rlm_removed() {
        let mut text: Vec<char> = "\u{2067}x\u{200F}\u{2069}".chars().collect();
        let n = remove_bidi_marks(&mut text, None, None, None).unwrap();
        assert_eq!(n, 1);
        assert_eq!(text, vec!['x']);
    }

    #[test]
    fn test_logical_map_alone() {
        let mut text = vec!['\u{202A}', 'a', 'b'];
        let mut l2v = vec![Some(0), Some(1), Some(2)];
        remove_bidi_marks(&mut text, None, Some(&mut l2v), None).unwrap();
        assert_eq!(l2v, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn test_nothing_to_remove() {
        let mut text = vec!['a', ' ', 'b'];
        let mut levels = vec![0, 0, 0];
        let n = remove_bidi_marks(&mut text, None, None, Some(&mut levels)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(levels.len(), 3);
    }

    #[test]
    fn test_length_mismatch() {
        let mut text = vec!['a', 'b'];
        let mut levels = vec![0];
        assert!(remove_bidi_marks(&mut text, None, None, Some(&mut levels)).is_err());
    }
}
