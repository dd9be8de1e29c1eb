//! Weak type resolution (W1–W7).
//!
//! Two sweeps over the paragraph list. The first resolves non-spacing marks
//! and Arabic-context numbers, merging runs as it goes so every later rule
//! sees a sequence of equal types as a single run. The second handles
//! separators, terminators and the final EN to L change.
//!
//! "Previous" and "next" always mean the neighbouring run on the same
//! isolate level. At a level boundary the neighbour is replaced by the
//! direction of the higher of the two levels (sor/eor).

use crate::runs::{RunArena, RunId, HEAD};
use crate::types::{CharType, Level, MAX_RESOLVED_LEVELS};

/// Types of the runs either side of `pp`, with sor/eor at level changes.
fn neighbour_types(runs: &RunArena, pp: RunId, prev: RunId, next: RunId) -> (CharType, CharType) {
    let level = runs[pp].level;
    let side = |other: RunId| {
        if runs[other].level == level {
            runs[other].kind
        } else {
            CharType::from_level(runs[other].level.max(level))
        }
    };
    (side(prev), side(next))
}

/// Type of the run before `id`, or sor when `id` starts a level run.
fn prev_type_or_sor(runs: &RunArena, id: RunId) -> CharType {
    let prev = runs.prev(id);
    if runs[prev].level == runs[id].level {
        runs[prev].kind
    } else {
        CharType::from_level(runs[prev].level.max(runs[id].level))
    }
}

fn iso_slot(level: Level) -> usize {
    (level.max(0) as usize).min(MAX_RESOLVED_LEVELS - 1)
}

/// Apply W1–W7 to the paragraph list. Returns the deepest isolate level seen.
pub(crate) fn resolve_weak(runs: &mut RunArena, base_dir: CharType) -> Level {
    let mut last_strong = [CharType::ON; MAX_RESOLVED_LEVELS];
    last_strong[0] = base_dir;
    let mut max_iso_level: Level = 0;

    let mut pp = runs.next(HEAD);
    while pp != HEAD {
        let prev_run = runs.adjacent(pp, false, false);
        let next_run = runs.adjacent(pp, true, false);
        let this_type = runs[pp].kind;
        let iso = iso_slot(runs[pp].isolate_level);
        max_iso_level = max_iso_level.max(runs[pp].isolate_level);

        let (prev_type, next_type) = neighbour_types(runs, pp, prev_run, next_run);
        if prev_type.is_strong() {
            last_strong[iso] = prev_type;
        }

        // W1: a mark takes the type of what it sits on, or sor.
        if this_type == CharType::NSM {
            if runs[runs.prev(pp)].kind.is_isolate() {
                runs[pp].kind = CharType::ON;
            }

            if runs[prev_run].level == runs[pp].level {
                if prev_run == runs.prev(pp) {
                    pp = runs.merge_with_prev(pp);
                }
            } else {
                runs[pp].kind = prev_type;
            }

            let following = runs.next(pp);
            if prev_type == next_type
                && runs[pp].level == runs[following].level
                && next_run == following
            {
                pp = runs.merge_with_prev(following);
            }
            pp = runs.next(pp);
            continue;
        }

        // W2: European digits after Arabic letters are Arabic numbers.
        if this_type == CharType::EN && last_strong[iso] == CharType::AL {
            runs[pp].kind = CharType::AN;
            // A mark right after inherits the change before W1 reaches it.
            if next_type == CharType::NSM {
                runs[next_run].kind = CharType::AN;
            }
        }

        pp = runs.next(pp);
    }

    last_strong[0] = base_dir;
    // W5 turning terminators into EN must keep W4 off the following run.
    let mut w4 = true;
    // Type before the current run as it was before W7 rewrote it.
    let mut prev_type_orig = CharType::ON;

    let mut pp = runs.next(HEAD);
    while pp != HEAD {
        let mut this_type = runs[pp].kind;
        let iso = iso_slot(runs[pp].isolate_level);
        let prev_run = runs.adjacent(pp, false, false);
        let next_run = runs.adjacent(pp, true, false);
        let (prev_type, next_type) = neighbour_types(runs, pp, prev_run, next_run);

        if prev_type.is_strong() {
            last_strong[iso] = prev_type;
        }

        // W3
        if this_type == CharType::AL {
            runs[pp].kind = CharType::RTL;
            w4 = true;
            prev_type_orig = CharType::ON;
            pp = runs.next(pp);
            continue;
        }

        // W4: a lone separator between two numbers of the same kind.
        if w4
            && runs[pp].len == 1
            && this_type.is_es_or_cs()
            && prev_type_orig.is_number()
            && prev_type_orig == next_type
            && (prev_type_orig == CharType::EN || this_type == CharType::CS)
        {
            runs[pp].kind = prev_type;
            this_type = prev_type;
        }
        w4 = true;

        // W5
        if this_type == CharType::ET
            && (prev_type_orig == CharType::EN || next_type == CharType::EN)
        {
            runs[pp].kind = CharType::EN;
            this_type = CharType::EN;
            w4 = false;
        }

        // W6
        if this_type.is_number_separator_or_terminator() {
            runs[pp].kind = CharType::ON;
        }

        // W7
        let following = runs.next(pp);
        if this_type == CharType::EN && last_strong[iso] == CharType::LTR {
            runs[pp].kind = CharType::LTR;
            prev_type_orig = if runs[pp].level == runs[following].level {
                CharType::EN
            } else {
                CharType::ON
            };
        } else {
            prev_type_orig = prev_type_or_sor(runs, following);
        }

        pp = following;
    }

    max_iso_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::explicit::{link_isolates, resolve_explicit};

    fn weak(types: &[CharType], base_dir: CharType) -> Vec<(usize, &'static str)> {
        let mut runs = RunArena::encode(types, &[]);
        resolve_explicit(&mut runs, base_dir.to_level());
        link_isolates(&mut runs);
        runs.compact(HEAD);
        resolve_weak(&mut runs, base_dir);
        runs.compact(HEAD);
        runs.ids(HEAD)
            .into_iter()
            .map(|id| (runs[id].pos, runs[id].kind.abbreviation()))
            .collect()
    }

    #[test]
    fn test_nsm_takes_previous_type() {
        let types = [CharType::RTL, CharType::NSM, CharType::LTR];
        assert_eq!(weak(&types, CharType::LTR), vec![(0, "R"), (2, "L")]);
    }

    #[test]
    fn test_nsm_at_start_takes_sor() {
        let types = [CharType::NSM, CharType::LTR];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "R"), (1, "L")]);
    }

    #[test]
    fn test_nsm_after_isolate_is_neutral() {
        let types = [CharType::LRI, CharType::LTR, CharType::PDI, CharType::NSM];
        let got = weak(&types, CharType::LTR);
        // The mark folds into the PDI run and is resolved as a neutral with it.
        assert_eq!(got.last(), Some(&(2, "PDI")));
    }

    #[test]
    fn test_en_after_al_becomes_an() {
        let types = [CharType::AL, CharType::EN];
        assert_eq!(weak(&types, CharType::LTR), vec![(0, "R"), (1, "AN")]);
    }

    #[test]
    fn test_single_separator_between_numbers() {
        let types = [CharType::EN, CharType::ES, CharType::EN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "EN")]);

        let types = [CharType::AN, CharType::CS, CharType::AN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "AN")]);

        // ES only joins European numbers.
        let types = [CharType::AN, CharType::ES, CharType::AN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "AN"), (1, "ON"), (2, "AN")]);
    }

    #[test]
    fn test_double_separator_is_neutral() {
        let types = [CharType::EN, CharType::CS, CharType::CS, CharType::EN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "EN"), (1, "ON"), (3, "EN")]);
    }

    #[test]
    fn test_terminators_join_numbers() {
        let types = [CharType::ET, CharType::ET, CharType::EN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "EN")]);

        let types = [CharType::EN, CharType::ET];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "EN")]);

        let types = [CharType::ET, CharType::RTL];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "ON"), (1, "R")]);
    }

    #[test]
    fn test_en_after_l_becomes_l() {
        let types = [CharType::LTR, CharType::WS, CharType::EN];
        assert_eq!(weak(&types, CharType::RTL), vec![(0, "L"), (1, "WS"), (2, "L")]);

        // sor counts as the last strong type.
        let types = [CharType::EN];
        assert_eq!(weak(&types, CharType::LTR), vec![(0, "L")]);
    }

    #[test]
    fn test_max_isolate_level() {
        let types = [CharType::LRI, CharType::RLI, CharType::RTL, CharType::PDI, CharType::PDI];
        let mut runs = RunArena::encode(&types, &[]);
        resolve_explicit(&mut runs, 0);
        link_isolates(&mut runs);
        runs.compact(HEAD);
        assert_eq!(resolve_weak(&mut runs, CharType::LTR), 2);
    }
}
