//! # bidishape
//!
//! The Unicode Bidirectional Algorithm (UAX#9) with Arabic cursive joining,
//! shaping and mirroring.
//!
//! Text is stored in logical order: the order it is typed and read. Screens
//! need visual order, where right-to-left runs come out reversed, numbers
//! inside them do not, and embedded or isolated spans nest correctly. This
//! crate computes an embedding level for every character, shapes what
//! depends on those levels, and reorders lines for display.
//!
//! ## Architecture
//!
//! ```text
//! Input (chars)
//!       ↓
//!   [unicode]   Bidi class, bracket pairs, joining type per char
//!       ↓
//!   [bidi]      Run lists → explicit, weak, neutral, implicit levels
//!       ↓
//!   [arabic]    Cursive joining, presentation forms, ligatures, mirroring
//!       ↓
//!   [reorder]   Per line: trailing whitespace, marks, reversal
//!       ↓
//!   Visual (string + maps)
//! ```
//!
//! Every entry point is a pure function over caller-owned slices; the only
//! shared state is read-only Unicode data, so independent paragraphs can be
//! processed on as many threads as you like.

pub mod arabic;
pub mod bidi;
pub mod error;
pub mod options;
pub(crate) mod runs;
pub mod types;
pub mod unicode;

use log::debug;
use serde::{Serialize, Serializer};

pub use arabic::{join_arabic, shape, shape_arabic, shape_mirroring};
pub use bidi::{par_direction, remove_bidi_marks, reorder_line, resolve_levels};
pub use error::BidiError;
pub use options::{BidiConfig, Direction, ShapingOptions};
pub use types::{BracketType, CharType, JoiningType, Level, ParType};

/// A paragraph laid out for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    /// Shaped text in visual order.
    #[serde(serialize_with = "serialize_text")]
    pub text: Vec<char>,
    /// Resolved level of each logical character.
    pub levels: Vec<Level>,
    /// Logical index of the character shown at each visual position.
    pub visual_to_logical: Vec<usize>,
    /// Visual position of each logical character, `None` once removed.
    pub logical_to_visual: Vec<Option<usize>>,
    /// Highest level in the paragraph.
    pub max_level: Level,
    /// Paragraph direction after detection.
    #[serde(serialize_with = "serialize_direction")]
    pub base_dir: ParType,
}

fn serialize_text<S: Serializer>(text: &[char], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&text.iter().collect::<String>())
}

fn serialize_direction<S: Serializer>(dir: &ParType, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(dir.abbreviation())
}

impl Visual {
    pub fn as_string(&self) -> String {
        self.text.iter().collect()
    }

    /// Drop bidi formatting characters and LRM/RLM from the visual text.
    ///
    /// Levels stay in logical order and are left as they are; the removed
    /// characters map to `None` in [`logical_to_visual`](Self::logical_to_visual).
    pub fn remove_bidi_marks(&mut self) -> Result<usize, BidiError> {
        remove_bidi_marks(
            &mut self.text,
            Some(&mut self.visual_to_logical),
            Some(&mut self.logical_to_visual),
            None,
        )
    }
}

/// Convert a paragraph from logical to visual order.
///
/// Classifies `text`, resolves levels against `base_dir` (updated in place
/// when it is not strong and the text has a strong letter), joins and shapes
/// Arabic when `options` asks for it, mirrors, and reorders the paragraph as
/// a single line.
pub fn log2vis(
    text: &[char],
    base_dir: &mut ParType,
    options: ShapingOptions,
) -> Result<Visual, BidiError> {
    let types = unicode::bidi_types(text);
    let brackets = unicode::bracket_types(text, &types)?;
    let (mut levels, _) = resolve_levels(&types, &brackets, base_dir)?;

    let mut visual = text.to_vec();
    let mut joining = if options.shapes_arabic() {
        let mut joining = unicode::joining_types(text, &types)?;
        join_arabic(&types, &levels, &mut joining)?;
        Some(joining)
    } else {
        None
    };
    shape(options, &levels, joining.as_deref_mut(), &mut visual)?;

    let mut map: Vec<usize> = (0..text.len()).collect();
    let level_count = reorder_line(
        options,
        &types,
        0..text.len(),
        *base_dir,
        &mut levels,
        Some(&mut visual),
        Some(&mut map),
    )?;

    let mut logical_to_visual = vec![None; text.len()];
    for (visual_pos, &logical) in map.iter().enumerate() {
        logical_to_visual[logical] = Some(visual_pos);
    }

    debug!(
        "log2vis: {} chars, base {}, max level {}",
        text.len(),
        base_dir.abbreviation(),
        level_count - 1
    );

    Ok(Visual {
        text: visual,
        levels,
        visual_to_logical: map,
        logical_to_visual,
        max_level: level_count - 1,
        base_dir: *base_dir,
    })
}

/// [`log2vis`] for a string and a [`Direction`].
pub fn log2vis_str(
    text: &str,
    direction: Direction,
    options: ShapingOptions,
) -> Result<Visual, BidiError> {
    let chars: Vec<char> = text.chars().collect();
    let mut base_dir = direction.par_type();
    log2vis(&chars, &mut base_dir, options)
}
