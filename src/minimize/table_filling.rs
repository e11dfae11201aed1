//! Minimization by filling the table of distinguishable state pairs.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet as HashSet;

use crate::automaton::{Automaton, StateSet, Transitions};
use crate::Result;

type Pair<'a> = (&'a str, &'a str);

fn ordered<'a>(x: &'a str, y: &'a str) -> Pair<'a> {
    if x < y {
        (x, y)
    } else {
        (y, x)
    }
}

// every (p, q) with p < q, in lexicographic order
fn ordered_pairs(states: &StateSet) -> Vec<Pair<'_>> {
    states
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            states
                .iter()
                .skip(i + 1)
                .map(move |q| (p.as_str(), q.as_str()))
        })
        .collect()
}

impl Automaton {
    /// Merge indistinguishable reachable states. Each class is named after its
    /// lexicographically smallest member.
    pub fn minimize_table_filling(&self) -> Result<Automaton> {
        self.expect_dfa()?;

        let reachable = self.reachable_states();
        let representatives = self.equivalence_representatives(&reachable);
        let representative = |state: &str| -> String {
            representatives
                .get(state)
                .copied()
                .unwrap_or(state)
                .to_string()
        };

        let mut states = StateSet::new();
        let mut final_states = StateSet::new();
        let mut transitions = Transitions::new();
        for state in &reachable {
            let new_state = representative(state);
            if self.is_final_state(state) {
                final_states.insert(new_state.clone());
            }
            for (symbol, destinations) in self.outgoing(state) {
                let destinations = destinations.iter().map(|d| representative(d)).collect();
                transitions.insert((new_state.clone(), symbol.to_string()), destinations);
            }
            states.insert(new_state);
        }

        Ok(Automaton::from_parts(
            states,
            self.alphabet().clone(),
            transitions,
            representative(self.start_state()),
            final_states,
        ))
    }

    /// Unordered pairs of `reachable` states told apart by some word.
    ///
    /// A missing transition counts as a move to a trash state: it is
    /// distinguishable from any real move, and two missing moves agree.
    fn distinguishable_pairs<'a>(&'a self, reachable: &'a StateSet) -> HashSet<Pair<'a>> {
        let pairs = ordered_pairs(reachable);
        let mut marked: HashSet<Pair<'a>> = pairs
            .iter()
            .copied()
            .filter(|(p, q)| self.is_final_state(p) != self.is_final_state(q))
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for &pair in &pairs {
                if marked.contains(&pair) {
                    continue;
                }
                let (p, q) = pair;
                let split = self.alphabet().iter().any(|symbol| {
                    match (self.successor(p, symbol), self.successor(q, symbol)) {
                        (None, None) => false,
                        (Some(_), None) | (None, Some(_)) => true,
                        (Some(x), Some(y)) => x != y && marked.contains(&ordered(x, y)),
                    }
                });
                if split {
                    marked.insert(pair);
                    changed = true;
                }
            }
        }

        marked
    }

    /// Map each reachable state to the representative of its equivalence class.
    ///
    /// Every indistinguishable pair, in lexicographic order, adopts the smaller
    /// of its two current representatives. This is not a full union-find; it
    /// relies on indistinguishability being transitive once marking is done.
    pub(crate) fn equivalence_representatives<'a>(
        &'a self,
        reachable: &'a StateSet,
    ) -> BTreeMap<&'a str, &'a str> {
        let marked = self.distinguishable_pairs(reachable);
        let mut representatives: BTreeMap<&str, &str> = reachable
            .iter()
            .map(|state| (state.as_str(), state.as_str()))
            .collect();

        for (p, q) in ordered_pairs(reachable) {
            if marked.contains(&(p, q)) {
                continue;
            }
            let minor = match (representatives.get(p), representatives.get(q)) {
                (Some(&rp), Some(&rq)) => rp.min(rq),
                _ => continue,
            };
            representatives.insert(p, minor);
            representatives.insert(q, minor);
        }

        representatives
    }
}
