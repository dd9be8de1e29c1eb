//! Caller-facing configuration: shaping flags, paragraph direction, and the
//! JSON configuration document the CLI loads.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::BidiError;
use crate::types::ParType;

bitflags! {
    /// Which optional transformations shaping and reordering perform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ShapingOptions: u32 {
        /// Replace characters on odd levels with their mirrored glyph (L4).
        const SHAPE_MIRRORING = 0x0000_0001;
        /// Put non-spacing marks back after their base character on RTL runs (L3).
        const REORDER_NSM = 0x0000_0002;
        /// Substitute Arabic presentation forms.
        const SHAPE_ARAB_PRES = 0x0000_0100;
        /// Form mandatory Lam-Alef ligatures.
        const SHAPE_ARAB_LIGA = 0x0000_0200;
    }
}

impl ShapingOptions {
    pub const DEFAULT: ShapingOptions =
        ShapingOptions::SHAPE_MIRRORING.union(ShapingOptions::REORDER_NSM);
    pub const ARABIC: ShapingOptions =
        ShapingOptions::SHAPE_ARAB_PRES.union(ShapingOptions::SHAPE_ARAB_LIGA);

    /// True when either Arabic flag is set.
    pub fn shapes_arabic(self) -> bool {
        self.intersects(ShapingOptions::ARABIC)
    }
}

impl Default for ShapingOptions {
    fn default() -> Self {
        ShapingOptions::DEFAULT | ShapingOptions::ARABIC
    }
}

/// Paragraph direction requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ltr,
    Rtl,
    /// Detect from the first strong character, LTR when there is none.
    #[default]
    Auto,
    /// Detect, falling back to LTR.
    WeakLtr,
    /// Detect, falling back to RTL.
    WeakRtl,
}

impl Direction {
    pub fn par_type(self) -> ParType {
        match self {
            Direction::Ltr => ParType::LTR,
            Direction::Rtl => ParType::RTL,
            Direction::Auto => ParType::ON,
            Direction::WeakLtr => ParType::WLTR,
            Direction::WeakRtl => ParType::WRTL,
        }
    }
}

/// Configuration document for the CLI.
///
/// ```json
/// { "direction": "Rtl", "options": "SHAPE_MIRRORING | REORDER_NSM", "clean": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BidiConfig {
    pub direction: Direction,
    pub options: ShapingOptions,
    /// Drop explicit formatting codes and LRM/RLM from the output.
    pub clean: bool,
}

impl BidiConfig {
    pub fn from_json(json: &str) -> Result<Self, BidiError> {
        Ok(serde_json::from_str(json)?)
    }
}
