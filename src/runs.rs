//! # Run Lists
//!
//! The resolver works on runs, maximal spans of characters sharing a type
//! and a level, rather than on characters. Runs live in an arena and are
//! threaded into circular doubly linked lists, each headed by its own
//! sentinel node. Index [`HEAD`] is the sentinel of the paragraph list;
//! side lists (detached explicit codes, L1 resets) get sentinels of their
//! own from [`RunArena::new_list`].
//!
//! A second pair of links, `prev_isolate`/`next_isolate`, chains runs of the
//! same isolate level so neighbour searches can step over nested isolates
//! without visiting their contents.
//!
//! Positions and lengths are in characters. Runs unlinked from every list
//! stay in the arena until it is dropped at the end of the call.

use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

use crate::types::{BracketType, CharType, Level, SENTINEL_LEVEL};

pub(crate) type RunId = usize;

/// Sentinel of the paragraph run list.
pub(crate) const HEAD: RunId = 0;

#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub pos: usize,
    pub len: usize,
    pub kind: CharType,
    pub level: Level,
    pub isolate_level: Level,
    pub bracket: BracketType,
    prev: RunId,
    next: RunId,
    pub prev_isolate: Option<RunId>,
    pub next_isolate: Option<RunId>,
}

impl Run {
    fn new(pos: usize, len: usize, kind: CharType) -> Self {
        Run {
            pos,
            len,
            kind,
            level: 0,
            isolate_level: 0,
            bracket: BracketType::NONE,
            prev: HEAD,
            next: HEAD,
            prev_isolate: None,
            next_isolate: None,
        }
    }

    fn end(&self) -> usize {
        self.pos + self.len
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RunArena {
    runs: Vec<Run>,
}

impl Index<RunId> for RunArena {
    type Output = Run;

    fn index(&self, id: RunId) -> &Run {
        &self.runs[id]
    }
}

impl IndexMut<RunId> for RunArena {
    fn index_mut(&mut self, id: RunId) -> &mut Run {
        &mut self.runs[id]
    }
}

impl RunArena {
    /// Run-length encode a paragraph.
    ///
    /// A new run starts wherever the class changes, at every bracket and on
    /// both sides of it, and at every isolate initiator or terminator.
    /// `brackets` may be empty.
    pub fn encode(types: &[CharType], brackets: &[BracketType]) -> Self {
        let mut arena = RunArena {
            runs: Vec::with_capacity(types.len() / 2 + 2),
        };
        let head = arena.new_list();
        debug_assert_eq!(head, HEAD);

        let mut last = HEAD;
        for (i, &kind) in types.iter().enumerate() {
            let bracket = brackets.get(i).copied().unwrap_or(BracketType::NONE);
            let previous = &arena.runs[last];
            if kind != previous.kind
                || bracket.is_bracket()
                || previous.bracket.is_bracket()
                || kind.is_isolate()
            {
                if last != HEAD {
                    arena.runs[last].len = i - arena.runs[last].pos;
                }
                let mut run = Run::new(i, 0, kind);
                run.bracket = bracket;
                let id = arena.alloc(run);
                arena.insert_before(HEAD, id);
                last = id;
            }
        }
        if last != HEAD {
            arena.runs[last].len = types.len() - arena.runs[last].pos;
        }
        arena
    }

    /// Allocate the sentinel of a fresh, empty list.
    pub fn new_list(&mut self) -> RunId {
        let mut sentinel = Run::new(0, 0, CharType::SENTINEL);
        sentinel.level = SENTINEL_LEVEL;
        sentinel.isolate_level = SENTINEL_LEVEL;
        let id = self.runs.len();
        sentinel.prev = id;
        sentinel.next = id;
        self.runs.push(sentinel);
        id
    }

    /// Allocate an unlinked run.
    pub fn alloc_run(&mut self, pos: usize, len: usize, kind: CharType, level: Level) -> RunId {
        let mut run = Run::new(pos, len, kind);
        run.level = level;
        self.alloc(run)
    }

    fn alloc(&mut self, run: Run) -> RunId {
        self.runs.push(run);
        self.runs.len() - 1
    }

    #[inline]
    pub fn next(&self, id: RunId) -> RunId {
        self.runs[id].next
    }

    #[inline]
    pub fn prev(&self, id: RunId) -> RunId {
        self.runs[id].prev
    }

    #[cfg(test)]
    pub fn is_sentinel(&self, id: RunId) -> bool {
        self.runs[id].kind == CharType::SENTINEL
    }

    pub fn is_empty(&self, list: RunId) -> bool {
        self.runs[list].next == list
    }

    /// Snapshot of the runs in a list, in order.
    pub fn ids(&self, list: RunId) -> Vec<RunId> {
        let mut out = Vec::new();
        let mut id = self.next(list);
        while id != list {
            out.push(id);
            id = self.next(id);
        }
        out
    }

    /// Link an unlinked run just before `anchor`.
    pub fn insert_before(&mut self, anchor: RunId, id: RunId) {
        let prev = self.runs[anchor].prev;
        self.runs[id].prev = prev;
        self.runs[id].next = anchor;
        self.runs[prev].next = id;
        self.runs[anchor].prev = id;
    }

    fn unlink(&mut self, id: RunId) {
        let (prev, next) = (self.runs[id].prev, self.runs[id].next);
        self.runs[prev].next = next;
        self.runs[next].prev = prev;
    }

    /// Move a run out of whatever list holds it and link it before `anchor`.
    pub fn move_before(&mut self, anchor: RunId, id: RunId) {
        self.unlink(id);
        self.insert_before(anchor, id);
    }

    /// Fold `second` into its predecessor and return the predecessor.
    ///
    /// The merged run keeps the predecessor's type, level and bracket; the
    /// isolate chain is patched around `second`.
    pub fn merge_with_prev(&mut self, second: RunId) -> RunId {
        let first = self.runs[second].prev;
        let next = self.runs[second].next;
        self.runs[first].next = next;
        self.runs[next].prev = first;
        self.runs[first].len += self.runs[second].len;

        let prev_isolate = self.runs[second].prev_isolate;
        let next_isolate = self.runs[second].next_isolate;
        if let Some(after) = next_isolate {
            self.runs[after].prev_isolate = prev_isolate;
        } else if self.runs[next].prev_isolate == Some(second) {
            // The run after may still point back at the one being folded.
            self.runs[next].prev_isolate = prev_isolate;
        }
        if let Some(before) = prev_isolate {
            self.runs[before].next_isolate = next_isolate;
        }
        self.runs[first].next_isolate = next_isolate;
        first
    }

    /// Merge neighbours with identical type and level. Bracket runs never merge.
    pub fn compact(&mut self, list: RunId) {
        self.compact_by(list, |a, b| a == b);
    }

    /// Like [`compact`](Self::compact), but any two neutrals also merge.
    pub fn compact_neutrals(&mut self, list: RunId) {
        self.compact_by(list, |a, b| a == b || (a.is_neutral() && b.is_neutral()));
    }

    fn compact_by(&mut self, list: RunId, same: impl Fn(CharType, CharType) -> bool) {
        let mut pp = self.next(list);
        while pp != list {
            let prev = self.prev(pp);
            let (a, b) = (&self.runs[prev], &self.runs[pp]);
            if prev != list
                && a.level == b.level
                && same(a.kind, b.kind)
                && !a.bracket.is_bracket()
                && !b.bracket.is_bracket()
            {
                pp = self.merge_with_prev(pp);
            }
            pp = self.next(pp);
        }
    }

    /// Splice every run of the `over` list into `base` at its recorded
    /// position, cutting or dropping the base runs it covers. The `over`
    /// list is left empty.
    ///
    /// With `preserve_length` the base lengths are first stretched by the
    /// inserted length. This is how runs detached before resolution go back
    /// in: merges that happened while they were gone compressed the base
    /// positions, and stretching restores them.
    pub fn shadow(&mut self, base: RunId, over: RunId, preserve_length: bool) {
        let mut p = base;
        let mut pos = 0;
        for q in self.ids(over) {
            let q_len = self.runs[q].len;
            if q_len == 0 || self.runs[q].pos < pos {
                continue;
            }
            pos = self.runs[q].pos;
            while self.next(p) != base && self.runs[self.next(p)].pos <= pos {
                p = self.next(p);
            }
            let pos2 = pos + q_len;
            let mut r = p;
            while self.next(r) != base && self.runs[self.next(r)].pos < pos2 {
                r = self.next(r);
            }
            if preserve_length && r != base {
                self.runs[r].len += q_len;
            }

            if p == r {
                if p != base && self.runs[p].end() > pos2 {
                    // `q` lands inside `p`: the tail becomes a new run.
                    let tail_len = self.runs[p].end() - pos2;
                    let mut tail = self.runs[p].clone();
                    tail.pos = pos2;
                    tail.len = tail_len;
                    tail.bracket = BracketType::NONE;
                    tail.prev_isolate = None;
                    tail.next_isolate = None;
                    let tail = self.alloc(tail);
                    let after = self.next(p);
                    self.runs[tail].next = after;
                    self.runs[after].prev = tail;
                    r = tail;
                } else {
                    r = self.next(r);
                }
                if p != base && self.runs[p].end() >= pos {
                    if self.runs[p].pos < pos {
                        self.runs[p].len = pos - self.runs[p].pos;
                    } else {
                        p = self.prev(p);
                    }
                }
            } else {
                if p != base && self.runs[p].end() >= pos {
                    if self.runs[p].pos < pos {
                        self.runs[p].len = pos - self.runs[p].pos;
                    } else {
                        p = self.prev(p);
                    }
                }
                if self.runs[r].end() > pos2 {
                    let end = self.runs[r].end();
                    self.runs[r].pos = pos2;
                    self.runs[r].len = end - pos2;
                } else {
                    r = self.next(r);
                }
            }

            // Whatever sat between `p` and `r` is covered by `q` and drops out.
            self.unlink(q);
            self.runs[p].next = q;
            self.runs[q].prev = p;
            self.runs[q].next = r;
            self.runs[r].prev = q;
        }
    }

    /// Nearest run before or after `id` on the same isolate level.
    ///
    /// Walks the isolate chain, so nested isolates are stepped over. Going
    /// forward a PDI is skipped too, exposing what follows the isolate.
    /// With `skip_neutral` only strong runs qualify. Returns [`HEAD`] when
    /// nothing qualifies.
    pub fn adjacent(&self, id: RunId, forward: bool, skip_neutral: bool) -> RunId {
        let step = |run: &Run| {
            if forward {
                run.next_isolate
            } else {
                run.prev_isolate
            }
        };
        let isolate_level = self.runs[id].isolate_level;
        let mut cursor = step(&self.runs[id]);
        while let Some(candidate) = cursor {
            let run = &self.runs[candidate];
            if run.kind == CharType::SENTINEL {
                break;
            }
            let skip = run.isolate_level > isolate_level
                || (forward && run.kind == CharType::PDI)
                || (skip_neutral && !run.kind.is_strong());
            if !skip {
                return candidate;
            }
            cursor = step(run);
        }
        HEAD
    }

    /// Expand a list into one level per character.
    pub fn levels(&self, list: RunId, len: usize) -> Vec<Level> {
        let mut levels = vec![0; len];
        for id in self.ids(list) {
            let run = &self.runs[id];
            let end = run.end().min(len);
            if run.pos < end {
                levels[run.pos..end].fill(run.level);
            }
        }
        levels
    }

    /// One line per run, for trace logging.
    pub fn describe(&self, list: RunId) -> String {
        let mut out = String::new();
        for id in self.ids(list) {
            let run = &self.runs[id];
            let _ = write!(
                out,
                "[{}+{} {} lvl={} iso={}{}] ",
                run.pos,
                run.len,
                run.kind.abbreviation(),
                run.level,
                run.isolate_level,
                if run.bracket.is_bracket() { " br" } else { "" }
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(arena: &RunArena, list: RunId) -> Vec<(usize, usize, &'static str)> {
        arena
            .ids(list)
            .into_iter()
            .map(|id| (arena[id].pos, arena[id].len, arena[id].kind.abbreviation()))
            .collect()
    }

    #[test]
    fn test_encode_empty() {
        let arena = RunArena::encode(&[], &[]);
        assert!(arena.is_empty(HEAD));
        assert!(arena.is_sentinel(HEAD));
    }

    #[test]
    fn test_encode_groups_same_type() {
        let types = [CharType::LTR, CharType::LTR, CharType::RTL, CharType::WS, CharType::WS];
        let arena = RunArena::encode(&types, &[]);
        assert_eq!(spans(&arena, HEAD), vec![(0, 2, "L"), (2, 1, "R"), (3, 2, "WS")]);
    }

    #[test]
    fn test_encode_brackets_and_isolates_stand_alone() {
        let types = [CharType::ON, CharType::ON, CharType::ON, CharType::LRI, CharType::LRI];
        let brackets = [
            BracketType::opening('('),
            BracketType::NONE,
            BracketType::NONE,
            BracketType::NONE,
            BracketType::NONE,
        ];
        let arena = RunArena::encode(&types, &brackets);
        assert_eq!(
            spans(&arena, HEAD),
            vec![(0, 1, "ON"), (1, 2, "ON"), (3, 1, "LRI"), (4, 1, "LRI")]
        );
    }

    #[test]
    fn test_lengths_cover_input() {
        let types = [CharType::EN, CharType::CS, CharType::EN, CharType::EN, CharType::AL];
        let arena = RunArena::encode(&types, &[]);
        let total: usize = arena.ids(HEAD).iter().map(|&id| arena[id].len).sum();
        assert_eq!(total, types.len());
    }

    #[test]
    fn test_compact_is_idempotent() {
        let types = [CharType::LTR, CharType::WS, CharType::ON, CharType::LTR];
        let mut arena = RunArena::encode(&types, &[]);
        for id in arena.ids(HEAD) {
            arena[id].kind = CharType::LTR;
        }
        arena.compact(HEAD);
        let once = spans(&arena, HEAD);
        arena.compact(HEAD);
        assert_eq!(spans(&arena, HEAD), once);
        assert_eq!(once, vec![(0, 4, "L")]);
    }

    #[test]
    fn test_compact_neutrals_merges_mixed_neutrals() {
        let types = [CharType::LTR, CharType::WS, CharType::ON, CharType::SS, CharType::LTR];
        let mut arena = RunArena::encode(&types, &[]);
        arena.compact_neutrals(HEAD);
        let once = spans(&arena, HEAD);
        assert_eq!(once, vec![(0, 1, "L"), (1, 3, "WS"), (4, 1, "L")]);
        arena.compact_neutrals(HEAD);
        assert_eq!(spans(&arena, HEAD), once);
    }

    #[test]
    fn test_compact_respects_levels_and_brackets() {
        let types = [CharType::ON, CharType::ON, CharType::ON];
        let brackets = [BracketType::NONE, BracketType::closing('('), BracketType::NONE];
        let mut arena = RunArena::encode(&types, &brackets);
        arena.compact_neutrals(HEAD);
        assert_eq!(arena.ids(HEAD).len(), 3);

        let mut arena = RunArena::encode(&[CharType::LTR, CharType::RTL], &[]);
        let ids = arena.ids(HEAD);
        arena[ids[0]].kind = CharType::RTL;
        arena[ids[1]].level = 1;
        arena.compact(HEAD);
        assert_eq!(arena.ids(HEAD).len(), 2);
    }

    #[test]
    fn test_shadow_reinserts_detached_runs() {
        // a RLE b PDF c, with both explicit codes detached and the letters
        // merged into one run of compressed length 3.
        let types = [CharType::LTR, CharType::RLE, CharType::LTR, CharType::PDF, CharType::LTR];
        let mut arena = RunArena::encode(&types, &[]);
        let side = arena.new_list();
        for id in arena.ids(HEAD) {
            if arena[id].kind.is_explicit() {
                arena[id].level = SENTINEL_LEVEL;
                arena.move_before(side, id);
            }
        }
        arena.compact(HEAD);
        assert_eq!(spans(&arena, HEAD), vec![(0, 3, "L")]);

        arena.shadow(HEAD, side, true);
        assert!(arena.is_empty(side));
        assert_eq!(
            spans(&arena, HEAD),
            vec![(0, 1, "L"), (1, 1, "RLE"), (2, 1, "L"), (3, 1, "PDF"), (4, 1, "L")]
        );
    }

    #[test]
    fn test_shadow_at_paragraph_start() {
        let types = [CharType::RLE, CharType::LTR, CharType::LTR];
        let mut arena = RunArena::encode(&types, &[]);
        let side = arena.new_list();
        let first = arena.next(HEAD);
        arena.move_before(side, first);
        arena.shadow(HEAD, side, true);
        assert_eq!(spans(&arena, HEAD), vec![(0, 1, "RLE"), (1, 2, "L")]);
    }

    #[test]
    fn test_shadow_overwrites_without_preserving() {
        let mut arena = RunArena::encode(&[CharType::RTL; 4], &[]);
        let only = arena.next(HEAD);
        arena[only].level = 1;
        let side = arena.new_list();
        let reset = arena.alloc_run(1, 2, CharType::LTR, 0);
        arena.insert_before(side, reset);
        arena.shadow(HEAD, side, false);
        assert_eq!(
            spans(&arena, HEAD),
            vec![(0, 1, "R"), (1, 2, "L"), (3, 1, "R")]
        );
        assert_eq!(arena.levels(HEAD, 4), vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_shadow_replaces_whole_runs() {
        let types = [CharType::LTR, CharType::WS, CharType::RTL, CharType::LTR];
        let mut arena = RunArena::encode(&types, &[]);
        let side = arena.new_list();
        let reset = arena.alloc_run(1, 2, CharType::ON, 0);
        arena.insert_before(side, reset);
        arena.shadow(HEAD, side, false);
        assert_eq!(spans(&arena, HEAD), vec![(0, 1, "L"), (1, 2, "ON"), (3, 1, "L")]);
    }

    fn link_isolates(arena: &mut RunArena) {
        let mut last: Vec<Option<RunId>> = vec![None; 8];
        for id in arena.ids(HEAD) {
            let level = arena[id].isolate_level as usize;
            for slot in last.iter_mut().skip(level + 1) {
                *slot = None;
            }
            if let Some(prev) = last[level] {
                arena[prev].next_isolate = Some(id);
                arena[id].prev_isolate = Some(prev);
            }
            last[level] = Some(id);
        }
    }

    #[test]
    fn test_adjacent_skips_isolates() {
        // a LRI b PDI c
        let types = [CharType::LTR, CharType::LRI, CharType::RTL, CharType::PDI, CharType::EN];
        let mut arena = RunArena::encode(&types, &[]);
        let ids = arena.ids(HEAD);
        arena[ids[2]].isolate_level = 1;
        link_isolates(&mut arena);

        assert_eq!(arena.adjacent(ids[1], true, false), ids[4]);
        assert_eq!(arena.adjacent(ids[3], false, false), ids[1]);
        assert_eq!(arena.adjacent(ids[4], false, true), ids[0]);
        assert_eq!(arena.adjacent(ids[2], true, false), HEAD);
        assert_eq!(arena.adjacent(ids[0], false, false), HEAD);
    }

    #[test]
    fn test_merge_patches_isolate_chain() {
        let types = [CharType::LTR, CharType::ON, CharType::WS, CharType::RTL];
        let mut arena = RunArena::encode(&types, &[]);
        link_isolates(&mut arena);
        let ids = arena.ids(HEAD);
        let merged = arena.merge_with_prev(ids[2]);
        assert_eq!(merged, ids[1]);
        assert_eq!(arena[ids[1]].len, 2);
        assert_eq!(arena[ids[1]].next_isolate, Some(ids[3]));
        assert_eq!(arena[ids[3]].prev_isolate, Some(ids[1]));
        assert_eq!(arena.adjacent(ids[3], false, false), ids[1]);
    }
}
