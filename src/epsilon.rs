//! Epsilon elimination: rewrite an epsilon-NFA into an equivalent NFA over the same states.

use crate::automaton::{Automaton, StateSet, Transitions};
use crate::classify::AutomatonKind;
use crate::Result;

impl Automaton {
    /// Remove every epsilon transition, keeping states, alphabet and start state.
    ///
    /// The move of `s` on `a` becomes the epsilon-closure of the `a`-moves of
    /// `s`'s epsilon-closure, and `s` becomes final when its epsilon-closure
    /// holds a final state.
    pub fn eliminate_epsilon(&self) -> Result<Automaton> {
        self.expect_kind("eliminate epsilon transitions from", |kind| {
            kind == AutomatonKind::EpsilonNfa
        })?;

        let mut transitions = Transitions::new();
        let mut final_states = StateSet::new();

        for state in self.states() {
            let closure = self.epsilon_closure(&StateSet::from([state.clone()]));
            if closure.iter().any(|s| self.is_final_state(s)) {
                final_states.insert(state.clone());
            }
            for symbol in self.alphabet() {
                let reached = self.move_on_symbol(&closure, symbol);
                if reached.is_empty() {
                    continue;
                }
                transitions.insert(
                    (state.clone(), symbol.clone()),
                    self.epsilon_closure(&reached),
                );
            }
        }

        Ok(Automaton::from_parts(
            self.states().clone(),
            self.alphabet().clone(),
            transitions,
            self.start_state().to_string(),
            final_states,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::EPSILON;
    use crate::Error;

    // 0 -ε-> 1 -a-> 2 -ε-> 3(final), 1 -b-> 1
    fn epsilon_nfa() -> Automaton {
        let mut automaton = Automaton::new(["0", "1", "2", "3"], ["a", "b"], "0", ["3"]).unwrap();
        automaton.add_transition("0", EPSILON, ["1"]).unwrap();
        automaton.add_transition("1", "a", ["2"]).unwrap();
        automaton.add_transition("2", EPSILON, ["3"]).unwrap();
        automaton.add_transition("1", "b", ["1"]).unwrap();
        automaton
    }

    #[test]
    fn removes_epsilon_and_preserves_language() {
        let original = epsilon_nfa();
        let nfa = original.eliminate_epsilon().unwrap();
        println!("{}", nfa);

        assert_ne!(nfa.classify(), AutomatonKind::EpsilonNfa);
        assert_eq!(nfa.states(), original.states());
        assert_eq!(nfa.alphabet(), original.alphabet());
        assert_eq!(nfa.start_state(), original.start_state());
        for word in ["", "a", "b", "ba", "bba", "ab", "aa", "bab"] {
            assert_eq!(nfa.accepts(word), original.accepts(word), "word {:?}", word);
        }
    }

    #[test]
    fn finals_and_moves_follow_closures() {
        let nfa = epsilon_nfa().eliminate_epsilon().unwrap();
        // 2 reaches 3 silently
        assert!(nfa.is_final_state("2"));
        assert!(nfa.is_final_state("3"));
        assert!(!nfa.is_final_state("0"));
        assert_eq!(
            nfa.next_states("0", "a"),
            Some(&StateSet::from(["2".to_string(), "3".to_string()]))
        );
        // no empty destination entries
        assert!(nfa.next_states("3", "a").is_none());
        assert!(nfa.transitions().values().all(|d| !d.is_empty()));
    }

    #[test]
    fn requires_epsilon_nfa() {
        let automaton = Automaton::new(["q0"], ["a"], "q0", ["q0"]).unwrap();
        let err = automaton.eliminate_epsilon().unwrap_err();
        assert!(err.is_invalid_automaton_type());
        assert_eq!(
            err,
            Error::InvalidAutomatonType {
                operation: "eliminate epsilon transitions from",
                found: AutomatonKind::Dfa,
            }
        );
    }

    #[test]
    fn result_is_independent_of_input() {
        let mut original = epsilon_nfa();
        let nfa = original.eliminate_epsilon().unwrap();
        original.add_transition("3", "a", ["0"]).unwrap();
        assert!(nfa.next_states("3", "a").is_none());
    }
}
