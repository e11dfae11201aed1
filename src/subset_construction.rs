//! Subset construction algorithm for converting an NFA to a DFA.

use std::collections::VecDeque;

use rustc_hash::FxHashMap as HashMap;

use crate::automaton::{Automaton, State, StateSet, Transitions};
use crate::classify::AutomatonKind;
use crate::Result;

/// Canonical name of a set of states: the sorted members, with `\` and `,`
/// escaped, joined by `,` inside braces. Distinct sets never share a name.
pub fn subset_name(states: &StateSet) -> State {
    let members: Vec<String> = states
        .iter()
        .map(|state| state.replace('\\', "\\\\").replace(',', "\\,"))
        .collect();
    format!("{{{}}}", members.join(","))
}

impl Automaton {
    /// Convert an automaton without epsilon transitions into an equivalent,
    /// possibly partial, DFA. Every state of the result is named after the set
    /// of original states it stands for (see [`subset_name`]).
    pub fn determinize(&self) -> Result<Automaton> {
        self.expect_kind("determinize", |kind| kind != AutomatonKind::EpsilonNfa)?;

        let mut names: HashMap<StateSet, State> = HashMap::default();
        let mut states = StateSet::new();
        let mut final_states = StateSet::new();
        let mut transitions = Transitions::new();
        let mut worklist: VecDeque<StateSet> = VecDeque::new();

        let initial_set = StateSet::from([self.start_state().to_string()]);
        let start_state = subset_name(&initial_set);
        self.register_subset(&initial_set, &start_state, &mut states, &mut final_states);
        names.insert(initial_set.clone(), start_state.clone());
        worklist.push_back(initial_set);

        while let Some(current_set) = worklist.pop_front() {
            let current_name = match names.get(&current_set) {
                Some(name) => name.clone(),
                None => subset_name(&current_set),
            };

            for symbol in self.alphabet() {
                let next_set = self.move_on_symbol(&current_set, symbol);
                if next_set.is_empty() {
                    // partial DFA: no trap state is synthesized
                    continue;
                }

                let next_name = match names.get(&next_set) {
                    Some(existing) => existing.clone(),
                    None => {
                        let name = subset_name(&next_set);
                        self.register_subset(&next_set, &name, &mut states, &mut final_states);
                        names.insert(next_set.clone(), name.clone());
                        worklist.push_back(next_set);
                        name
                    }
                };

                transitions.insert(
                    (current_name.clone(), symbol.clone()),
                    StateSet::from([next_name]),
                );
            }
        }

        Ok(Automaton::from_parts(
            states,
            self.alphabet().clone(),
            transitions,
            start_state,
            final_states,
        ))
    }

    fn register_subset(
        &self,
        subset: &StateSet,
        name: &str,
        states: &mut StateSet,
        final_states: &mut StateSet,
    ) {
        states.insert(name.to_string());
        if subset.iter().any(|state| self.is_final_state(state)) {
            final_states.insert(name.to_string());
        }
    }
}
