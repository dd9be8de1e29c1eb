//! # Core Types
//!
//! Bidi classes are bit sets rather than a closed enum: every concrete class
//! (L, R, AL, EN, ...) is a fixed combination of orthogonal property bits, so
//! questions like "is this a number?" or "is this strong and right-to-left?"
//! are single mask tests.

use bitflags::bitflags;

/// Resolved embedding level. Even is left-to-right, odd is right-to-left.
///
/// `-1` ([`SENTINEL_LEVEL`]) marks a level that has not been assigned yet.
pub type Level = i8;

/// Level carried by list sentinels and by characters removed under X9.
pub const SENTINEL_LEVEL: Level = -1;

/// Deepest level an explicit embedding or isolate may reach.
pub const MAX_EXPLICIT_LEVEL: Level = 125;

/// Number of distinct levels the resolver ever produces (0..=126).
pub const MAX_RESOLVED_LEVELS: usize = 127;

/// Nesting bound of the BD16 bracket stack, per isolate level.
pub const MAX_NESTED_BRACKET_PAIRS: usize = 63;

/// True when the level is odd.
#[inline]
pub fn level_is_rtl(level: Level) -> bool {
    level & 1 == 1
}

bitflags! {
    /// Bidi character class.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharType: u32 {
        const RIGHT_TO_LEFT = 0x0000_0001;
        const ARABIC = 0x0000_0002;

        const STRONG = 0x0000_0010;
        const WEAK = 0x0000_0020;
        const NEUTRAL = 0x0000_0040;
        const SENTINEL = 0x0000_0080;

        const LETTER = 0x0000_0100;
        const NUMBER = 0x0000_0200;
        const NUMBER_SEPARATOR_OR_TERMINATOR = 0x0000_0400;
        const SPACE = 0x0000_0800;
        const EXPLICIT = 0x0000_1000;
        const SEPARATOR = 0x0000_2000;
        const OVERRIDE = 0x0000_4000;
        const ISOLATE = 0x0000_8000;

        const ES_BIT = 0x0001_0000;
        const ET_BIT = 0x0002_0000;
        const CS_BIT = 0x0004_0000;
        const NSM_BIT = 0x0008_0000;
        const BN_BIT = 0x0010_0000;
        const BS_BIT = 0x0020_0000;
        const SS_BIT = 0x0040_0000;
        const WS_BIT = 0x0080_0000;

        const PRIVATE = 0x0100_0000;
        const FIRST = 0x0200_0000;
    }
}

const fn bits(parts: &[CharType]) -> CharType {
    let mut acc = 0;
    let mut i = 0;
    while i < parts.len() {
        acc |= parts[i].bits();
        i += 1;
    }
    CharType::from_bits_retain(acc)
}

impl CharType {
    /// Strong left-to-right (L).
    pub const LTR: CharType = bits(&[CharType::STRONG, CharType::LETTER]);
    /// Strong right-to-left (R).
    pub const RTL: CharType = bits(&[CharType::LTR, CharType::RIGHT_TO_LEFT]);
    /// Arabic letter (AL).
    pub const AL: CharType = bits(&[CharType::RTL, CharType::ARABIC]);
    /// European number (EN).
    pub const EN: CharType = bits(&[CharType::WEAK, CharType::NUMBER]);
    /// Arabic number (AN).
    pub const AN: CharType = bits(&[CharType::EN, CharType::ARABIC]);
    /// European number separator (ES).
    pub const ES: CharType = bits(&[
        CharType::WEAK,
        CharType::NUMBER_SEPARATOR_OR_TERMINATOR,
        CharType::ES_BIT,
    ]);
    /// European number terminator (ET).
    pub const ET: CharType = bits(&[
        CharType::WEAK,
        CharType::NUMBER_SEPARATOR_OR_TERMINATOR,
        CharType::ET_BIT,
    ]);
    /// Common number separator (CS).
    pub const CS: CharType = bits(&[
        CharType::WEAK,
        CharType::NUMBER_SEPARATOR_OR_TERMINATOR,
        CharType::CS_BIT,
    ]);
    /// Non-spacing mark (NSM).
    pub const NSM: CharType = bits(&[CharType::WEAK, CharType::NSM_BIT]);
    /// Boundary neutral (BN).
    pub const BN: CharType = bits(&[CharType::WEAK, CharType::SPACE, CharType::BN_BIT]);
    /// Block (paragraph) separator (B).
    pub const BS: CharType = bits(&[
        CharType::NEUTRAL,
        CharType::SPACE,
        CharType::SEPARATOR,
        CharType::BS_BIT,
    ]);
    /// Segment separator (S).
    pub const SS: CharType = bits(&[
        CharType::NEUTRAL,
        CharType::SPACE,
        CharType::SEPARATOR,
        CharType::SS_BIT,
    ]);
    /// Whitespace (WS).
    pub const WS: CharType = bits(&[CharType::NEUTRAL, CharType::SPACE, CharType::WS_BIT]);
    /// Other neutral (ON).
    pub const ON: CharType = CharType::NEUTRAL;

    pub const LRE: CharType = bits(&[CharType::STRONG, CharType::EXPLICIT]);
    pub const RLE: CharType = bits(&[CharType::LRE, CharType::RIGHT_TO_LEFT]);
    pub const LRO: CharType = bits(&[CharType::LRE, CharType::OVERRIDE]);
    pub const RLO: CharType = bits(&[CharType::RLE, CharType::OVERRIDE]);
    pub const PDF: CharType = bits(&[CharType::WEAK, CharType::EXPLICIT]);
    pub const LRI: CharType = bits(&[CharType::NEUTRAL, CharType::ISOLATE]);
    pub const RLI: CharType = bits(&[CharType::LRI, CharType::RIGHT_TO_LEFT]);
    pub const FSI: CharType = bits(&[CharType::LRI, CharType::FIRST]);
    pub const PDI: CharType = bits(&[CharType::NEUTRAL, CharType::WEAK, CharType::ISOLATE]);

    /// Weak left-to-right paragraph direction: LTR unless the text says otherwise.
    pub const WLTR: CharType = CharType::WEAK;
    /// Weak right-to-left paragraph direction.
    pub const WRTL: CharType = bits(&[CharType::WEAK, CharType::RIGHT_TO_LEFT]);

    #[inline]
    pub fn is_strong(self) -> bool {
        self.contains(CharType::STRONG)
    }

    #[inline]
    pub fn is_weak(self) -> bool {
        self.contains(CharType::WEAK)
    }

    #[inline]
    pub fn is_neutral(self) -> bool {
        self.contains(CharType::NEUTRAL)
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        self.contains(CharType::RIGHT_TO_LEFT)
    }

    #[inline]
    pub fn is_arabic(self) -> bool {
        self.contains(CharType::ARABIC)
    }

    #[inline]
    pub fn is_letter(self) -> bool {
        self.contains(CharType::LETTER)
    }

    #[inline]
    pub fn is_number(self) -> bool {
        self.contains(CharType::NUMBER)
    }

    #[inline]
    pub fn is_number_separator_or_terminator(self) -> bool {
        self.contains(CharType::NUMBER_SEPARATOR_OR_TERMINATOR)
    }

    #[inline]
    pub fn is_explicit(self) -> bool {
        self.contains(CharType::EXPLICIT)
    }

    #[inline]
    pub fn is_isolate(self) -> bool {
        self.contains(CharType::ISOLATE)
    }

    #[inline]
    pub fn is_separator(self) -> bool {
        self.contains(CharType::SEPARATOR)
    }

    #[inline]
    pub fn is_override(self) -> bool {
        self.contains(CharType::OVERRIDE)
    }

    #[inline]
    pub fn is_es_or_cs(self) -> bool {
        self.intersects(CharType::ES_BIT | CharType::CS_BIT)
    }

    #[inline]
    pub fn is_explicit_or_bn(self) -> bool {
        self.intersects(CharType::EXPLICIT | CharType::BN_BIT)
    }

    #[inline]
    pub fn is_explicit_or_bn_or_nsm(self) -> bool {
        self.intersects(CharType::EXPLICIT | CharType::BN_BIT | CharType::NSM_BIT)
    }

    #[inline]
    pub fn is_explicit_or_bn_or_ws(self) -> bool {
        self.intersects(CharType::EXPLICIT | CharType::BN_BIT | CharType::WS_BIT)
    }

    #[inline]
    pub fn is_explicit_or_separator_or_bn_or_ws(self) -> bool {
        self.intersects(
            CharType::EXPLICIT | CharType::SEPARATOR | CharType::BN_BIT | CharType::WS_BIT,
        )
    }

    /// `LTR` for even levels, `RTL` for odd ones.
    #[inline]
    pub fn from_level(level: Level) -> CharType {
        if level_is_rtl(level) {
            CharType::RTL
        } else {
            CharType::LTR
        }
    }

    /// 1 for right-to-left types, 0 otherwise.
    #[inline]
    pub fn to_level(self) -> Level {
        Level::from(self.is_rtl())
    }

    /// Directional override carried by LRO/RLO; `ON` for every other type.
    pub fn override_direction(self) -> CharType {
        if self.is_override() {
            CharType::from_level(self.to_level())
        } else {
            CharType::ON
        }
    }

    /// AN and EN count as R for the neutral rules.
    #[inline]
    pub fn numbers_as_rtl(self) -> CharType {
        if self.is_number() {
            CharType::RTL
        } else {
            self
        }
    }

    /// Short Unicode name of the class, used in logs.
    pub fn abbreviation(self) -> &'static str {
        const NAMES: [(CharType, &str); 26] = [
            (CharType::LTR, "L"),
            (CharType::RTL, "R"),
            (CharType::AL, "AL"),
            (CharType::EN, "EN"),
            (CharType::AN, "AN"),
            (CharType::ES, "ES"),
            (CharType::ET, "ET"),
            (CharType::CS, "CS"),
            (CharType::NSM, "NSM"),
            (CharType::BN, "BN"),
            (CharType::BS, "B"),
            (CharType::SS, "S"),
            (CharType::WS, "WS"),
            (CharType::ON, "ON"),
            (CharType::LRE, "LRE"),
            (CharType::RLE, "RLE"),
            (CharType::LRO, "LRO"),
            (CharType::RLO, "RLO"),
            (CharType::PDF, "PDF"),
            (CharType::LRI, "LRI"),
            (CharType::RLI, "RLI"),
            (CharType::FSI, "FSI"),
            (CharType::PDI, "PDI"),
            (CharType::WLTR, "WLTR"),
            (CharType::WRTL, "WRTL"),
            (CharType::SENTINEL, "SENTINEL"),
        ];
        NAMES
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, name)| *name)
            .unwrap_or("?")
    }

    /// Parse a class abbreviation as used in Unicode's test files.
    pub fn from_abbreviation(name: &str) -> Option<CharType> {
        let ty = match name {
            "L" => CharType::LTR,
            "R" => CharType::RTL,
            "AL" => CharType::AL,
            "EN" => CharType::EN,
            "AN" => CharType::AN,
            "ES" => CharType::ES,
            "ET" => CharType::ET,
            "CS" => CharType::CS,
            "NSM" => CharType::NSM,
            "BN" => CharType::BN,
            "B" => CharType::BS,
            "S" => CharType::SS,
            "WS" => CharType::WS,
            "ON" => CharType::ON,
            "LRE" => CharType::LRE,
            "RLE" => CharType::RLE,
            "LRO" => CharType::LRO,
            "RLO" => CharType::RLO,
            "PDF" => CharType::PDF,
            "LRI" => CharType::LRI,
            "RLI" => CharType::RLI,
            "FSI" => CharType::FSI,
            "PDI" => CharType::PDI,
            _ => return None,
        };
        Some(ty)
    }
}

/// Paragraph direction: `LTR`, `RTL`, `ON` (auto), `WLTR` or `WRTL`.
pub type ParType = CharType;

/// BD16 bracket descriptor.
///
/// The top bit flags an opening bracket; the remaining bits hold the
/// canonical opening code point shared by both halves of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BracketType(u32);

impl BracketType {
    pub const NONE: BracketType = BracketType(0);

    const OPEN_MASK: u32 = 1 << 31;
    const ID_MASK: u32 = !Self::OPEN_MASK;

    pub fn opening(id: char) -> Self {
        BracketType(id as u32 | Self::OPEN_MASK)
    }

    pub fn closing(id: char) -> Self {
        BracketType(id as u32)
    }

    #[inline]
    pub fn is_bracket(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self.0 & Self::OPEN_MASK != 0
    }

    /// Pair id, equal for an opening bracket and its closing partner.
    #[inline]
    pub fn id(self) -> u32 {
        self.0 & Self::ID_MASK
    }
}

bitflags! {
    /// Arabic joining type, mutated in place by the joining sweep.
    ///
    /// The two low bits double as the join shape once joining is resolved:
    /// 0 isolated, 1 final, 2 initial, 3 medial.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct JoiningType: u8 {
        const JOINS_RIGHT = 0x01;
        const JOINS_LEFT = 0x02;
        const ARAB_SHAPES = 0x04;
        const TRANSPARENT = 0x08;
        const IGNORED = 0x10;
        const LIGATURED = 0x20;
    }
}

impl JoiningType {
    /// Non-joining.
    pub const U: JoiningType = JoiningType::empty();
    /// Right-joining.
    pub const R: JoiningType = JoiningType::JOINS_RIGHT.union(JoiningType::ARAB_SHAPES);
    /// Dual-joining.
    pub const D: JoiningType = JoiningType::JOINS_RIGHT
        .union(JoiningType::JOINS_LEFT)
        .union(JoiningType::ARAB_SHAPES);
    /// Join-causing.
    pub const C: JoiningType = JoiningType::JOINS_RIGHT.union(JoiningType::JOINS_LEFT);
    /// Left-joining.
    pub const L: JoiningType = JoiningType::JOINS_LEFT.union(JoiningType::ARAB_SHAPES);
    /// Transparent.
    pub const T: JoiningType = JoiningType::TRANSPARENT.union(JoiningType::ARAB_SHAPES);
    /// Ignored (explicit codes, BN).
    pub const G: JoiningType = JoiningType::IGNORED;

    #[inline]
    pub fn is_ignored(self) -> bool {
        self.intersection(JoiningType::TRANSPARENT | JoiningType::IGNORED)
            == JoiningType::IGNORED
    }

    /// Transparent and ignored characters do not break a join.
    #[inline]
    pub fn is_join_skipped(self) -> bool {
        self.intersects(JoiningType::TRANSPARENT | JoiningType::IGNORED)
    }

    #[inline]
    pub fn arab_shapes(self) -> bool {
        self.contains(JoiningType::ARAB_SHAPES)
    }

    /// 0 isolated, 1 final, 2 initial, 3 medial.
    #[inline]
    pub fn join_shape(self) -> u8 {
        self.bits() & (JoiningType::JOINS_RIGHT | JoiningType::JOINS_LEFT).bits()
    }

    /// Join bit toward the preceding character for a given level.
    #[inline]
    pub fn joins_preceding(level: Level) -> JoiningType {
        if level_is_rtl(level) {
            JoiningType::JOINS_RIGHT
        } else {
            JoiningType::JOINS_LEFT
        }
    }

    /// Join bit toward the following character for a given level.
    #[inline]
    pub fn joins_following(level: Level) -> JoiningType {
        if level_is_rtl(level) {
            JoiningType::JOINS_LEFT
        } else {
            JoiningType::JOINS_RIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_predicates() {
        assert!(CharType::AL.is_strong() && CharType::AL.is_rtl() && CharType::AL.is_letter());
        assert!(CharType::AN.is_number() && CharType::AN.is_arabic());
        assert!(!CharType::EN.is_arabic());
        assert!(CharType::PDI.is_neutral() && CharType::PDI.is_weak() && CharType::PDI.is_isolate());
        assert!(CharType::RLO.is_override() && CharType::RLO.is_rtl());
        assert!(CharType::BN.is_explicit_or_bn());
        assert!(!CharType::LRI.is_explicit_or_bn());
        assert!(CharType::SS.is_explicit_or_separator_or_bn_or_ws());
        assert!(CharType::CS.is_es_or_cs() && !CharType::ET.is_es_or_cs());
    }

    #[test]
    fn test_level_direction() {
        assert_eq!(CharType::from_level(0), CharType::LTR);
        assert_eq!(CharType::from_level(3), CharType::RTL);
        assert_eq!(CharType::from_level(SENTINEL_LEVEL), CharType::RTL);
        assert_eq!(CharType::WRTL.to_level(), 1);
        assert_eq!(CharType::ON.to_level(), 0);
    }

    #[test]
    fn test_override_direction() {
        assert_eq!(CharType::LRO.override_direction(), CharType::LTR);
        assert_eq!(CharType::RLO.override_direction(), CharType::RTL);
        assert_eq!(CharType::RLE.override_direction(), CharType::ON);
    }

    #[test]
    fn test_abbreviations() {
        for name in ["L", "R", "AL", "EN", "AN", "NSM", "B", "S", "WS", "FSI", "PDI"] {
            let ty = CharType::from_abbreviation(name).unwrap();
            assert_eq!(ty.abbreviation(), name);
        }
        assert_eq!(CharType::from_abbreviation("XX"), None);
    }

    #[test]
    fn test_bracket_type() {
        let open = BracketType::opening('(');
        let close = BracketType::closing('(');
        assert!(open.is_open() && !close.is_open());
        assert_eq!(open.id(), close.id());
        assert!(!BracketType::NONE.is_bracket());
    }

    #[test]
    fn test_joining_shapes() {
        assert_eq!(JoiningType::U.join_shape(), 0);
        assert_eq!(JoiningType::R.join_shape(), 1);
        assert_eq!(JoiningType::L.join_shape(), 2);
        assert_eq!(JoiningType::D.join_shape(), 3);
        assert!(JoiningType::G.is_ignored());
        assert!(!JoiningType::T.is_ignored());
        assert!(JoiningType::T.is_join_skipped());
    }
}
