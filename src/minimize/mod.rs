//! DFA minimization, by equivalence-table filling or by partition refinement.
//!
//! Both algorithms drop states unreachable from the start state and treat a
//! missing transition as leading to an implicit trash state, so they accept
//! partial DFAs and agree on the number of states they produce.

mod partition_refinement;
mod table_filling;

use crate::automaton::Automaton;
use crate::classify::AutomatonKind;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Myhill–Nerode equivalence marking; states keep their original names.
    #[default]
    TableFilling,
    /// Moore-style refinement; states are renamed `qMin0`, `qMin1`, ...
    PartitionRefinement,
}

impl Automaton {
    pub fn minimize(&self, algorithm: Algorithm) -> Result<Automaton> {
        match algorithm {
            Algorithm::TableFilling => self.minimize_table_filling(),
            Algorithm::PartitionRefinement => self.minimize_partition_refinement(),
        }
    }

    /// Eliminate epsilon transitions and determinize as needed, then minimize.
    pub fn to_minimal_dfa(&self, algorithm: Algorithm) -> Result<Automaton> {
        match self.classify() {
            AutomatonKind::EpsilonNfa => self
                .eliminate_epsilon()?
                .determinize()?
                .minimize(algorithm),
            AutomatonKind::Nfa => self.determinize()?.minimize(algorithm),
            AutomatonKind::Dfa => self.minimize(algorithm),
        }
    }

    pub(crate) fn expect_dfa(&self) -> Result<()> {
        self.expect_kind("minimize", |kind| kind == AutomatonKind::Dfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::EPSILON;

    // binary strings with an even number of 0s and an even number of 1s
    pub(crate) fn even_zeros_even_ones() -> Automaton {
        let mut dfa = Automaton::default();
        for state in ["q0", "q1", "q5", "q6", "q2", "q3"] {
            dfa.add_state(state).unwrap();
        }
        dfa.add_alphabet_symbol("0").unwrap();
        dfa.add_alphabet_symbol("1").unwrap();
        dfa.set_start_state("q0").unwrap();
        dfa.add_final_state("q0").unwrap();
        dfa.add_transition("q0", "0", ["q1"]).unwrap();
        dfa.add_transition("q0", "1", ["q2"]).unwrap();
        dfa.add_transition("q1", "0", ["q0"]).unwrap();
        dfa.add_transition("q1", "1", ["q3"]).unwrap();
        dfa.add_transition("q2", "0", ["q3"]).unwrap();
        dfa.add_transition("q2", "1", ["q0"]).unwrap();
        dfa.add_transition("q3", "0", ["q2"]).unwrap();
        dfa.add_transition("q3", "1", ["q1"]).unwrap();
        dfa
    }

    fn expected(word: &str) -> bool {
        let zeros = word.chars().filter(|c| *c == '0').count();
        let ones = word.len() - zeros;
        zeros % 2 == 0 && ones % 2 == 0
    }

    fn all_words(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut words = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            frontier = frontier
                .iter()
                .flat_map(|w| alphabet.iter().map(move |c| format!("{}{}", w, c)))
                .collect();
            words.extend(frontier.iter().cloned());
        }
        words
    }

    #[test]
    fn both_algorithms_agree_on_parity_dfa() {
        let dfa = even_zeros_even_ones();
        let by_table = dfa.minimize(Algorithm::TableFilling).unwrap();
        let by_blocks = dfa.minimize(Algorithm::PartitionRefinement).unwrap();
        println!("{}\n{}", by_table, by_blocks);

        // q5 and q6 are unreachable; the four reachable states are distinguishable
        assert_eq!(by_table.num_states(), 4);
        assert_eq!(by_blocks.num_states(), 4);
        for word in all_words(&['0', '1'], 6) {
            assert_eq!(dfa.accepts(&word), expected(&word), "word {:?}", word);
            assert_eq!(by_table.accepts(&word), expected(&word), "word {:?}", word);
            assert_eq!(by_blocks.accepts(&word), expected(&word), "word {:?}", word);
        }
        assert!(by_table.accepts(""));
        assert!(by_blocks.accepts(""));
    }

    #[test]
    fn rejects_nondeterministic_input() {
        let mut nfa = Automaton::new(["0", "1"], ["a"], "0", ["1"]).unwrap();
        nfa.add_transition("0", "a", ["0", "1"]).unwrap();
        for algorithm in [Algorithm::TableFilling, Algorithm::PartitionRefinement] {
            let err = nfa.minimize(algorithm).unwrap_err();
            assert!(err.is_invalid_automaton_type());
        }
        nfa.add_transition("1", EPSILON, ["0"]).unwrap();
        assert!(nfa.minimize_table_filling().is_err());
    }

    #[test]
    fn test_to_minimal_dfa() {
        // (a|b)*ab with an epsilon detour: 0 -ε-> 1, 1 -a,b-> 1, 1 -a-> 2 -b-> 3
        let mut enfa = Automaton::new(["0", "1", "2", "3"], ["a", "b"], "0", ["3"]).unwrap();
        enfa.add_transition("0", EPSILON, ["1"]).unwrap();
        enfa.add_transition("1", "a", ["1", "2"]).unwrap();
        enfa.add_transition("1", "b", ["1"]).unwrap();
        enfa.add_transition("2", "b", ["3"]).unwrap();

        for algorithm in [Algorithm::TableFilling, Algorithm::PartitionRefinement] {
            let dfa = enfa.to_minimal_dfa(algorithm).unwrap();
            assert!(dfa.is_dfa());
            assert_eq!(dfa.num_states(), 3);
            for word in all_words(&['a', 'b'], 5) {
                assert_eq!(dfa.accepts(&word), enfa.accepts(&word), "word {:?}", word);
            }
        }
    }

    #[test]
    fn default_algorithm_is_table_filling() {
        assert_eq!(Algorithm::default(), Algorithm::TableFilling);
    }
}
