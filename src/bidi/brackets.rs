//! Paired brackets: BD16 pair identification and rule N0.
//!
//! Bracket runs are always single characters and never merge, so a pair can
//! be held as two run ids across the whole pass.

use log::trace;

use crate::runs::{RunArena, RunId, HEAD};
use crate::types::{CharType, Level, MAX_NESTED_BRACKET_PAIRS, SENTINEL_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BracketPair {
    pub open: RunId,
    pub close: RunId,
}

/// BD16: match opening and closing brackets within each isolating run
/// sequence. Pairs come back sorted by the position of their opener.
///
/// A sequence ends where the level changes without entering an isolate, and
/// its stack is cleared there. Leaving an isolate clears the stacks of every
/// deeper isolate level, so sibling isolates never share brackets. Only
/// brackets still typed ON take part. When
/// an opener finds the stack of its isolate level full, pairing stops for
/// that level until the stack is next cleared.
pub(crate) fn find_pairs(runs: &RunArena, max_iso_level: Level) -> Vec<BracketPair> {
    let depth = max_iso_level.max(0) as usize + 1;
    let mut stacks: Vec<Vec<RunId>> = vec![Vec::with_capacity(MAX_NESTED_BRACKET_PAIRS); depth];
    let mut overflowed = vec![false; depth];
    let mut pairs = Vec::new();

    let mut last_level = SENTINEL_LEVEL;
    let mut last_iso = 0usize;
    for pp in runs.ids(HEAD) {
        let run = &runs[pp];
        let iso = (run.isolate_level.max(0) as usize).min(depth - 1);

        if run.level != last_level && last_iso == iso {
            stacks[last_iso].clear();
            overflowed[last_iso] = false;
        } else if iso < last_iso {
            for slot in iso + 1..=last_iso {
                stacks[slot].clear();
                overflowed[slot] = false;
            }
        }
        last_level = run.level;
        last_iso = iso;

        if !run.bracket.is_bracket() || run.kind != CharType::ON || overflowed[iso] {
            continue;
        }

        if run.bracket.is_open() {
            if stacks[iso].len() == MAX_NESTED_BRACKET_PAIRS {
                trace!("bracket stack full at {}, pairing suspended", run.pos);
                overflowed[iso] = true;
                continue;
            }
            stacks[iso].push(pp);
        } else {
            let id = run.bracket.id();
            if let Some(slot) = stacks[iso]
                .iter()
                .rposition(|&open| runs[open].bracket.id() == id)
            {
                pairs.push(BracketPair {
                    open: stacks[iso][slot],
                    close: pp,
                });
                stacks[iso].truncate(slot);
            }
        }
    }

    pairs.sort_by_key(|pair| runs[pair.open].pos);
    pairs
}

/// Level the run would get from I1/I2, with numbers counted as R.
fn implicit_level(runs: &RunArena, id: RunId) -> (CharType, Level) {
    let run = &runs[id];
    let kind = run.kind.numbers_as_rtl();
    (kind, run.level + ((run.level & 1) ^ kind.to_level()))
}

/// N0: give each bracket pair a strong direction from its content and
/// context. Pairs are visited in opening order so outer pairs resolved
/// first are seen as strong by the pairs inside them.
pub(crate) fn resolve_pairs(runs: &mut RunArena, pairs: &[BracketPair]) {
    for pair in pairs {
        let embedding_level = runs[pair.open].level;
        let isolate_level = runs[pair.open].isolate_level;

        let mut resolved = None;

        // N0b: a strong type inside matching the embedding direction.
        let mut ppn = pair.open;
        while ppn != pair.close && ppn != HEAD {
            let (kind, level) = implicit_level(runs, ppn);
            if kind.is_strong() && level == embedding_level {
                resolved = Some(CharType::from_level(level));
                break;
            }
            ppn = runs.next(ppn);
        }

        // N0c: only the opposite direction inside; use the context before.
        if resolved.is_none() {
            let mut preceding = embedding_level;
            let mut ppn = runs.prev(pair.open);
            while ppn != HEAD {
                let (kind, level) = implicit_level(runs, ppn);
                if kind.is_strong() && runs[ppn].isolate_level == isolate_level {
                    preceding = level;
                    break;
                }
                ppn = runs.prev(ppn);
            }

            let mut ppn = pair.open;
            while ppn != pair.close && ppn != HEAD {
                let (kind, _) = implicit_level(runs, ppn);
                if kind.is_strong() && runs[ppn].isolate_level == isolate_level {
                    resolved = Some(CharType::from_level(preceding));
                    break;
                }
                ppn = runs.next(ppn);
            }
        }

        // N0d: nothing strong inside, the brackets stay neutral.
        if let Some(kind) = resolved {
            trace!(
                "bracket pair {}..{} resolved to {}",
                runs[pair.open].pos,
                runs[pair.close].pos,
                kind.abbreviation()
            );
            runs[pair.open].kind = kind;
            runs[pair.close].kind = kind;
        }
    }
}
