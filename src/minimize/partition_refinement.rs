//! Minimization by Moore-style partition refinement.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap as HashMap;

use crate::automaton::{Automaton, State, StateSet, Transitions};
use crate::Result;

type Partition = BTreeSet<StateSet>;

// each state maps to the smallest member of its block
fn block_representatives(partition: &Partition) -> HashMap<&str, &str> {
    let mut representatives = HashMap::default();
    for block in partition {
        if let Some(representative) = block.first() {
            for state in block {
                representatives.insert(state.as_str(), representative.as_str());
            }
        }
    }
    representatives
}

impl Automaton {
    /// Split reachable states until every block agrees, symbol by symbol, on
    /// the block its members move to. Blocks become states `qMin0`, `qMin1`, ...
    pub fn minimize_partition_refinement(&self) -> Result<Automaton> {
        self.expect_dfa()?;

        let reachable = self.reachable_states();
        let (accepting, rejecting): (StateSet, StateSet) = reachable
            .iter()
            .cloned()
            .partition(|state| self.is_final_state(state));
        let mut partition: Partition = [accepting, rejecting]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect();

        loop {
            let refined = self.refine(&partition);
            // blocks only ever split, so equal sizes mean a fixed point
            if refined.len() == partition.len() {
                break;
            }
            partition = refined;
        }

        Ok(self.build_minimized(&partition))
    }

    /// Split every block by the signature of its members: for each symbol in
    /// alphabet order, the representative of the block the move lands in.
    fn refine(&self, partition: &Partition) -> Partition {
        let representatives = block_representatives(partition);
        let mut refined = Partition::new();

        for block in partition {
            // `None` marks the trash destination: no move, or a move out of the reachable set
            let mut splits: BTreeMap<Vec<Option<&str>>, StateSet> = BTreeMap::new();
            for state in block {
                let signature = self
                    .alphabet()
                    .iter()
                    .map(|symbol| {
                        self.successor(state, symbol)
                            .and_then(|destination| representatives.get(destination).copied())
                    })
                    .collect();
                splits.entry(signature).or_default().insert(state.clone());
            }
            refined.extend(splits.into_values());
        }

        refined
    }

    fn build_minimized(&self, partition: &Partition) -> Automaton {
        let mut block_names: HashMap<&str, State> = HashMap::default();
        let mut states = StateSet::new();
        let mut final_states = StateSet::new();
        let mut start_state = State::new();

        for (block_idx, block) in partition.iter().enumerate() {
            let name = format!("qMin{}", block_idx);
            for state in block {
                block_names.insert(state.as_str(), name.clone());
            }
            if block.contains(self.start_state()) {
                start_state = name.clone();
            }
            if block.first().is_some_and(|rep| self.is_final_state(rep)) {
                final_states.insert(name.clone());
            }
            states.insert(name);
        }

        let mut transitions = Transitions::new();
        for block in partition {
            let Some(representative) = block.first() else {
                continue;
            };
            let Some(name) = block_names.get(representative.as_str()) else {
                continue;
            };
            for symbol in self.alphabet() {
                let destination = self
                    .successor(representative, symbol)
                    .and_then(|destination| block_names.get(destination));
                if let Some(destination) = destination {
                    transitions.insert(
                        (name.clone(), symbol.clone()),
                        StateSet::from([destination.clone()]),
                    );
                }
            }
        }

        Automaton::from_parts(
            states,
            self.alphabet().clone(),
            transitions,
            start_state,
            final_states,
        )
    }
}
