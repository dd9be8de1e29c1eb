//! Level-dependent glyph substitution: Arabic presentation forms, mandatory
//! Lam-Alef ligatures and mirroring (L4).

use crate::error::{ensure_len, BidiError};
use crate::options::ShapingOptions;
use crate::types::{level_is_rtl, JoiningType, Level};
use crate::unicode::{arabic_shape_pres, ligature, mirror_char, FILL_CHAR};

/// Apply Arabic shaping to `text` according to `options`.
///
/// With [`ShapingOptions::SHAPE_ARAB_PRES`] every shapable character is
/// replaced by the presentation form its resolved join shape selects. With
/// [`ShapingOptions::SHAPE_ARAB_LIGA`] adjacent presentation forms on the same
/// odd level that make a mandatory ligature are fused: the first becomes
/// [`FILL_CHAR`] and is flagged [`JoiningType::LIGATURED`], the second
/// becomes the ligature.
pub fn shape_arabic(
    options: ShapingOptions,
    levels: &[Level],
    joining: &mut [JoiningType],
    text: &mut [char],
) -> Result<(), BidiError> {
    ensure_len("levels", text.len(), levels.len())?;
    ensure_len("joining types", text.len(), joining.len())?;

    if options.contains(ShapingOptions::SHAPE_ARAB_PRES) {
        for (ch, join) in text.iter_mut().zip(joining.iter()) {
            if join.arab_shapes() {
                *ch = arabic_shape_pres(*ch, join.join_shape());
            }
        }
    }

    if options.contains(ShapingOptions::SHAPE_ARAB_LIGA) {
        for i in 1..text.len() {
            let first = i - 1;
            if !level_is_rtl(levels[first]) || levels[first] != levels[i] {
                continue;
            }
            if let Some(fused) = ligature(text[first], text[i]) {
                text[first] = FILL_CHAR;
                joining[first].insert(JoiningType::LIGATURED);
                text[i] = fused;
            }
        }
    }

    Ok(())
}

/// L4: replace every character on an odd level with its mirrored glyph.
pub fn shape_mirroring(levels: &[Level], text: &mut [char]) -> Result<(), BidiError> {
    ensure_len("levels", text.len(), levels.len())?;
    for (ch, &level) in text.iter_mut().zip(levels) {
        if level_is_rtl(level) {
            if let Some(mirrored) = mirror_char(*ch) {
                *ch = mirrored;
            }
        }
    }
    Ok(())
}

/// All level-dependent shaping: Arabic shaping when joining types are
/// supplied, then mirroring when [`ShapingOptions::SHAPE_MIRRORING`] is set.
pub fn shape(
    options: ShapingOptions,
    levels: &[Level],
    joining: Option<&mut [JoiningType]>,
    text: &mut [char],
) -> Result<(), BidiError> {
    if let Some(joining) = joining {
        shape_arabic(options, levels, joining, text)?;
    }
    if options.contains(ShapingOptions::SHAPE_MIRRORING) {
        shape_mirroring(levels, text)?;
    }
    Ok(())
}
