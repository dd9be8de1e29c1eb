//! Explicit embedding levels and directions (X1–X8), X9 removal, and the
//! isolate chains the later passes walk.

use log::debug;

use crate::runs::{RunArena, RunId, HEAD};
use crate::types::{
    CharType, Level, MAX_EXPLICIT_LEVEL, MAX_RESOLVED_LEVELS, SENTINEL_LEVEL,
};

#[derive(Debug, Clone, Copy)]
struct StatusEntry {
    level: Level,
    override_dir: CharType,
    isolate: bool,
    isolate_level: Level,
}

/// Directional status carried through the explicit pass.
///
/// Embeddings that would exceed [`MAX_EXPLICIT_LEVEL`] are counted in
/// `over_pushed` instead of being pushed. `first_interval` remembers how many
/// rejections were outstanding when the stack first reached the level just
/// below the limit, so a PDF that closes a rejected embedding is absorbed by
/// the counter and never pops a real entry.
#[derive(Debug)]
pub(crate) struct ResolverState {
    pub level: Level,
    pub override_dir: CharType,
    pub isolate_level: Level,
    stack: Vec<StatusEntry>,
    over_pushed: usize,
    first_interval: usize,
    isolate_overflow: usize,
    valid_isolate_count: usize,
}

impl ResolverState {
    pub fn new(base_level: Level) -> Self {
        ResolverState {
            level: base_level,
            override_dir: CharType::ON,
            isolate_level: 0,
            stack: Vec::with_capacity(MAX_RESOLVED_LEVELS),
            over_pushed: 0,
            first_interval: 0,
            isolate_overflow: 0,
            valid_isolate_count: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, isolate: bool, new_level: i32, new_override: CharType) {
        if self.over_pushed == 0
            && self.isolate_overflow == 0
            && new_level <= i32::from(MAX_EXPLICIT_LEVEL)
        {
            if self.level == MAX_EXPLICIT_LEVEL - 1 {
                self.first_interval = self.over_pushed;
            }
            self.stack.push(StatusEntry {
                level: self.level,
                override_dir: self.override_dir,
                isolate,
                isolate_level: self.isolate_level,
            });
            self.level = new_level as Level;
            self.override_dir = new_override;
        } else if self.isolate_overflow == 0 {
            self.over_pushed += 1;
            debug!(
                "embedding to level {} rejected, {} pending",
                new_level, self.over_pushed
            );
        }
    }

    fn pop(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        if self.over_pushed > self.first_interval {
            self.over_pushed -= 1;
            return;
        }
        if self.over_pushed == self.first_interval {
            self.first_interval = 0;
        }
        if let Some(entry) = self.stack.pop() {
            self.level = entry.level;
            self.override_dir = entry.override_dir;
            self.isolate_level = entry.isolate_level;
        }
    }

    fn top_is_isolate(&self) -> bool {
        self.stack.last().is_some_and(|entry| entry.isolate)
    }

    /// Override the run's type when an LRO/RLO is in effect.
    fn apply_override(&self, runs: &mut RunArena, id: RunId) {
        if !self.override_dir.is_neutral() {
            runs[id].kind = self.override_dir;
        }
    }
}

/// Least level above `level` with the parity of `dir`.
fn least_greater_level(level: Level, rtl: bool) -> i32 {
    let level = i32::from(level);
    if rtl {
        (level + 1) | 1
    } else {
        (level + 2) & !1
    }
}

/// Direction an FSI takes: that of the first strong letter before its
/// matching PDI, skipping nested isolates.
fn first_strong_is_rtl(runs: &RunArena, fsi: RunId) -> bool {
    let mut depth = 0i32;
    let mut id = runs.next(fsi);
    while id != HEAD {
        let kind = runs[id].kind;
        if kind == CharType::PDI {
            depth -= 1;
            if depth < 0 {
                break;
            }
        } else if kind.is_isolate() {
            depth += 1;
        } else if depth == 0 && kind.is_letter() {
            return kind.is_rtl();
        }
        id = runs.next(id);
    }
    false
}

/// Assign explicit levels to every run and detach explicit codes and BN
/// into a side list (X9). Returns that list's sentinel.
///
/// Stops at the first paragraph separator.
pub(crate) fn resolve_explicit(runs: &mut RunArena, base_level: Level) -> RunId {
    let explicits = runs.new_list();
    let mut state = ResolverState::new(base_level);

    let mut pp = runs.next(HEAD);
    while pp != HEAD {
        // Detaching `pp` below must not lose our place.
        let next = runs.next(pp);
        let this_type = runs[pp].kind;
        runs[pp].isolate_level = state.isolate_level;

        if this_type.is_explicit_or_bn() {
            if this_type.is_strong() {
                // LRE, RLE, LRO, RLO
                let new_override = this_type.override_direction();
                for _ in 0..runs[pp].len {
                    let new_level = least_greater_level(state.level, this_type.is_rtl());
                    state.push(false, new_level, new_override);
                }
            } else if this_type == CharType::PDF {
                for _ in 0..runs[pp].len {
                    if state.top_is_isolate() {
                        break;
                    }
                    state.pop();
                }
            }
            // X9: removed from resolution, reinserted once levels are known.
            runs[pp].level = SENTINEL_LEVEL;
            runs.move_before(explicits, pp);
        } else if this_type == CharType::PDI {
            if state.isolate_overflow > 0 {
                state.isolate_overflow -= 1;
            } else if state.valid_isolate_count > 0 {
                // Embeddings opened inside the isolate end with it.
                while state.depth() > 0 && !state.top_is_isolate() {
                    state.pop();
                }
                state.over_pushed = 0;
                state.pop();
                if state.isolate_level > 0 {
                    state.isolate_level -= 1;
                }
                state.valid_isolate_count -= 1;
                runs[pp].isolate_level = state.isolate_level;
            } else {
                // Unmatched terminator.
                runs[pp].kind = CharType::ON;
            }
            runs[pp].level = state.level;
            state.apply_override(runs, pp);
        } else if this_type.is_isolate() {
            let rtl = if this_type == CharType::FSI {
                first_strong_is_rtl(runs, pp)
            } else {
                this_type.is_rtl()
            };
            let new_level = least_greater_level(state.level, rtl);

            runs[pp].level = state.level;
            runs[pp].isolate_level = state.isolate_level;
            if state.isolate_level < MAX_EXPLICIT_LEVEL - 1 {
                state.isolate_level += 1;
            }
            state.apply_override(runs, pp);

            // An isolate whose level fits counts as valid even while rejected
            // embeddings are pending in `over_pushed`, where X5a would count
            // an overflow isolate. Its PDI then unwinds the embeddings below.
            if new_level <= i32::from(MAX_EXPLICIT_LEVEL) {
                state.valid_isolate_count += 1;
                state.push(true, new_level, CharType::ON);
                state.level = new_level as Level;
            } else {
                state.isolate_overflow += 1;
                debug!("isolate at {} overflows, level stays {}", runs[pp].pos, state.level);
            }
        } else if this_type == CharType::BS {
            break;
        } else {
            runs[pp].level = state.level;
            state.apply_override(runs, pp);
        }

        pp = next;
    }

    explicits
}

/// Chain runs of equal isolate level through `prev_isolate`/`next_isolate`.
///
/// Leaving an isolate forgets the chains of the deeper levels so the next
/// isolate at that depth starts fresh.
pub(crate) fn link_isolates(runs: &mut RunArena) {
    let mut last_at_level: Vec<Option<RunId>> = vec![None; MAX_RESOLVED_LEVELS];
    let mut prev_level = 0usize;

    for id in runs.ids(HEAD) {
        let level = runs[id].isolate_level.max(0) as usize;
        if level < prev_level {
            for slot in &mut last_at_level[level + 1..=prev_level] {
                *slot = None;
            }
        }
        prev_level = level;

        if let Some(last) = last_at_level[level] {
            runs[last].next_isolate = Some(id);
            runs[id].prev_isolate = Some(last);
        }
        last_at_level[level] = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(types: &[CharType], base_level: Level) -> (RunArena, RunId) {
        let mut runs = RunArena::encode(types, &[]);
        let explicits = resolve_explicit(&mut runs, base_level);
        (runs, explicits)
    }

    fn levels_of(runs: &RunArena) -> Vec<(usize, Level)> {
        runs.ids(HEAD)
            .into_iter()
            .map(|id| (runs[id].pos, runs[id].level))
            .collect()
    }

    #[test]
    fn test_least_greater_level() {
        assert_eq!(least_greater_level(0, true), 1);
        assert_eq!(least_greater_level(0, false), 2);
        assert_eq!(least_greater_level(1, true), 3);
        assert_eq!(least_greater_level(1, false), 2);
        assert_eq!(least_greater_level(125, false), 126);
    }

    #[test]
    fn test_embedding_detached_and_levels_assigned() {
        let types = [CharType::LTR, CharType::RLE, CharType::RTL, CharType::PDF, CharType::LTR];
        let (runs, explicits) = resolve(&types, 0);
        assert_eq!(levels_of(&runs), vec![(0, 0), (2, 1), (4, 0)]);
        let detached: Vec<usize> = runs.ids(explicits).iter().map(|&id| runs[id].pos).collect();
        assert_eq!(detached, vec![1, 3]);
    }

    #[test]
    fn test_override_changes_types() {
        let types = [CharType::RLO, CharType::LTR, CharType::EN, CharType::PDF, CharType::LTR];
        let (runs, _) = resolve(&types, 0);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[0]].kind, CharType::RTL);
        assert_eq!(runs[ids[1]].kind, CharType::RTL);
        assert_eq!(runs[ids[0]].level, 1);
        assert_eq!(runs[ids[2]].kind, CharType::LTR);
        assert_eq!(runs[ids[2]].level, 0);
    }

    #[test]
    fn test_isolate_levels() {
        let types = [CharType::LTR, CharType::RLI, CharType::RTL, CharType::PDI, CharType::LTR];
        let (runs, explicits) = resolve(&types, 0);
        assert!(runs.is_empty(explicits));
        let ids = runs.ids(HEAD);
        let got: Vec<(Level, Level)> = ids
            .iter()
            .map(|&id| (runs[id].level, runs[id].isolate_level))
            .collect();
        assert_eq!(got, vec![(0, 0), (0, 0), (1, 1), (0, 0), (0, 0)]);
    }

    #[test]
    fn test_fsi_takes_first_strong_direction() {
        let types = [CharType::FSI, CharType::ON, CharType::RTL, CharType::PDI];
        let (runs, _) = resolve(&types, 0);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[2]].level, 1);

        // Strong letters after the matching PDI do not count.
        let types = [CharType::FSI, CharType::ON, CharType::PDI, CharType::RTL];
        let (runs, _) = resolve(&types, 0);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[1]].level, 2);
    }

    #[test]
    fn test_unmatched_pdi_becomes_neutral() {
        let types = [CharType::LTR, CharType::PDI, CharType::LTR];
        let (runs, _) = resolve(&types, 0);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[1]].kind, CharType::ON);
        assert_eq!(runs[ids[1]].level, 0);
    }

    #[test]
    fn test_pdi_closes_open_embeddings() {
        let types = [
            CharType::RLI,
            CharType::LRE,
            CharType::LTR,
            CharType::PDI,
            CharType::LTR,
        ];
        let (runs, _) = resolve(&types, 0);
        let levels: Vec<Level> = runs.ids(HEAD).iter().map(|&id| runs[id].level).collect();
        assert_eq!(levels, vec![0, 2, 0, 0]);
    }

    #[test]
    fn test_overflow_is_absorbed() {
        // 130 RLE/LRE alternations push past the limit; as many PDFs unwind.
        let mut types = Vec::new();
        for i in 0..130 {
            types.push(if i % 2 == 0 { CharType::RLE } else { CharType::LRE });
            types.push(CharType::LTR);
        }
        for _ in 0..130 {
            types.push(CharType::PDF);
        }
        types.push(CharType::RTL);
        let (runs, _) = resolve(&types, 0);
        let levels: Vec<Level> = runs.ids(HEAD).iter().map(|&id| runs[id].level).collect();
        assert_eq!(levels.iter().copied().max(), Some(MAX_EXPLICIT_LEVEL));
        assert_eq!(levels.last(), Some(&0));
    }

    #[test]
    fn test_isolate_after_rejected_embedding_is_valid() {
        // 62 LREs reach level 124; the 63rd is rejected. The RLI still opens
        // its content at 125 and its PDI unwinds every embedding down to the
        // paragraph level.
        let mut types = vec![CharType::LRE; 63];
        types.extend([CharType::RLI, CharType::RTL, CharType::PDI, CharType::LTR]);
        let (runs, _) = resolve(&types, 0);
        let levels: Vec<Level> = runs.ids(HEAD).iter().map(|&id| runs[id].level).collect();
        assert_eq!(levels, vec![124, 125, 0, 0]);
    }

    #[test]
    fn test_paragraph_separator_stops_pass() {
        let types = [CharType::RLE, CharType::LTR, CharType::BS, CharType::LTR];
        let (runs, _) = resolve(&types, 0);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[0]].level, 1);
        assert_eq!(runs[ids[1]].level, 0);
    }

    #[test]
    fn test_link_isolates_resets_deeper_levels() {
        let types = [
            CharType::LRI,
            CharType::RTL,
            CharType::PDI,
            CharType::LRI,
            CharType::RTL,
            CharType::PDI,
        ];
        let (mut runs, _) = resolve(&types, 0);
        link_isolates(&mut runs);
        let ids = runs.ids(HEAD);
        assert_eq!(runs[ids[1]].next_isolate, None);
        assert_eq!(runs[ids[4]].prev_isolate, None);
        assert_eq!(runs[ids[0]].next_isolate, Some(ids[2]));
        assert_eq!(runs[ids[2]].next_isolate, Some(ids[3]));
    }
}
