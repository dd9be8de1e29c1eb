//! # Character Classifier
//!
//! Read-only Unicode lookups the algorithms consume: bidi class, BD16 bracket
//! pairing, Arabic joining type, mirrored glyph, presentation forms and
//! mandatory ligatures.
//!
//! Bidi classes and bracket pairs come from `unicode-bidi`'s compiled UCD
//! tables and mirrored glyphs from `unicode-bidi-mirroring`. Joining types and
//! presentation forms are generated into [`tables`] by `tools/ucd-gen`.
//! Everything here is immutable and safe to call from any number of threads.

pub(crate) mod tables;

use crate::error::{ensure_len, BidiError};
use crate::types::{BracketType, CharType, JoiningType};
use tables::{ARABIC_SHAPES, JOINING_RANGES};
use unicode_bidi::{BidiClass, BidiDataSource, HardcodedBidiData};

/// Placeholder written where a ligature swallowed a character.
pub const FILL_CHAR: char = '\u{FEFF}';

pub const LRM: char = '\u{200E}';
pub const RLM: char = '\u{200F}';
pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

/// Mandatory Lam-Alef ligatures: `((lam form, alef form), ligature)`,
/// sorted by pair.
static MANDATORY_LIGATURES: [((u32, u32), u32); 8] = [
    ((0xFEDF, 0xFE82), 0xFEF5),
    ((0xFEDF, 0xFE84), 0xFEF7),
    ((0xFEDF, 0xFE88), 0xFEF9),
    ((0xFEDF, 0xFE8E), 0xFEFB),
    ((0xFEE0, 0xFE82), 0xFEF6),
    ((0xFEE0, 0xFE84), 0xFEF8),
    ((0xFEE0, 0xFE88), 0xFEFA),
    ((0xFEE0, 0xFE8E), 0xFEFC),
];

/// Bidi class of a character.
#[allow(unreachable_patterns)]
pub fn bidi_type(ch: char) -> CharType {
    match unicode_bidi::bidi_class(ch) {
        BidiClass::L => CharType::LTR,
        BidiClass::R => CharType::RTL,
        BidiClass::AL => CharType::AL,
        BidiClass::EN => CharType::EN,
        BidiClass::AN => CharType::AN,
        BidiClass::ES => CharType::ES,
        BidiClass::ET => CharType::ET,
        BidiClass::CS => CharType::CS,
        BidiClass::NSM => CharType::NSM,
        BidiClass::BN => CharType::BN,
        BidiClass::B => CharType::BS,
        BidiClass::S => CharType::SS,
        BidiClass::WS => CharType::WS,
        BidiClass::ON => CharType::ON,
        BidiClass::LRE => CharType::LRE,
        BidiClass::RLE => CharType::RLE,
        BidiClass::LRO => CharType::LRO,
        BidiClass::RLO => CharType::RLO,
        BidiClass::PDF => CharType::PDF,
        BidiClass::LRI => CharType::LRI,
        BidiClass::RLI => CharType::RLI,
        BidiClass::FSI => CharType::FSI,
        BidiClass::PDI => CharType::PDI,
        _ => CharType::ON,
    }
}

/// Bidi classes for a whole paragraph.
pub fn bidi_types(text: &[char]) -> Vec<CharType> {
    text.iter().map(|&ch| bidi_type(ch)).collect()
}

/// Bracket descriptor of a character, or [`BracketType::NONE`].
///
/// U+2329/U+232A pair with U+3008/U+3009 through their canonical
/// equivalents, so all four share one id.
pub fn bracket_type(ch: char) -> BracketType {
    match HardcodedBidiData.bidi_matched_opening_bracket(ch) {
        Some(pair) if pair.is_open => BracketType::opening(pair.opening),
        Some(pair) => BracketType::closing(pair.opening),
        None => BracketType::NONE,
    }
}

/// Bracket descriptors for a paragraph. Only ON characters can pair.
pub fn bracket_types(text: &[char], types: &[CharType]) -> Result<Vec<BracketType>, BidiError> {
    ensure_len("bidi types", text.len(), types.len())?;
    Ok(text
        .iter()
        .zip(types)
        .map(|(&ch, &ty)| {
            if ty == CharType::ON {
                bracket_type(ch)
            } else {
                BracketType::NONE
            }
        })
        .collect())
}

/// Arabic joining type of a character.
///
/// Characters listed in ArabicShaping.txt take their listed type; unlisted
/// characters of general category Mn, Me or Cf are transparent (T). Both
/// are baked into the generated table. What remains is ignored (G) when its
/// bidi class is BN, an explicit code or an isolate, and non-joining (U)
/// otherwise.
pub fn joining_type(ch: char, ty: CharType) -> JoiningType {
    let cp = ch as u32;
    let idx = JOINING_RANGES.partition_point(|&(start, _, _)| start <= cp);
    if idx > 0 {
        let (start, end, joining) = JOINING_RANGES[idx - 1];
        if (start..=end).contains(&cp) {
            return joining;
        }
    }
    if ty.is_explicit_or_bn() || ty.is_isolate() {
        JoiningType::G
    } else {
        JoiningType::U
    }
}

/// Joining types for a paragraph.
pub fn joining_types(text: &[char], types: &[CharType]) -> Result<Vec<JoiningType>, BidiError> {
    ensure_len("bidi types", text.len(), types.len())?;
    Ok(text
        .iter()
        .zip(types)
        .map(|(&ch, &ty)| joining_type(ch, ty))
        .collect())
}

/// Bidi_Mirroring_Glyph of a character, if it has one.
pub fn mirror_char(ch: char) -> Option<char> {
    unicode_bidi_mirroring::get_mirrored(ch)
}

/// Presentation form of an Arabic letter for a join shape
/// (0 isolated, 1 final, 2 initial, 3 medial). Characters without that form
/// come back unchanged.
pub fn arabic_shape_pres(ch: char, shape: u8) -> char {
    let cp = ch as u32;
    ARABIC_SHAPES
        .binary_search_by_key(&cp, |&(c, _)| c)
        .ok()
        .map(|idx| ARABIC_SHAPES[idx].1[usize::from(shape & 3)])
        .filter(|&form| form != 0)
        .and_then(char::from_u32)
        .unwrap_or(ch)
}

/// Mandatory ligature formed by two adjacent presentation forms.
pub fn ligature(first: char, second: char) -> Option<char> {
    let key = (first as u32, second as u32);
    let (lowest, highest) = (MANDATORY_LIGATURES[0].0 .0, MANDATORY_LIGATURES[7].0 .0);
    if key.0 < lowest || key.0 > highest {
        return None;
    }
    MANDATORY_LIGATURES
        .binary_search_by_key(&key, |&(pair, _)| pair)
        .ok()
        .and_then(|idx| char::from_u32(MANDATORY_LIGATURES[idx].1))
}
