//! Closure engine: forward reachability over the transition relation.

use crate::automaton::{is_epsilon, Automaton, StateSet};

impl Automaton {
    /// Least superset of `states` closed under every transition, epsilon included.
    pub fn closure(&self, states: &StateSet) -> StateSet {
        self.saturate(states, |_| true)
    }

    /// Least superset of `states` closed under epsilon transitions only.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        self.saturate(states, is_epsilon)
    }

    /// States reachable from the start state via zero or more transitions.
    pub fn reachable_states(&self) -> StateSet {
        self.closure(&StateSet::from([self.start_state().to_string()]))
    }

    /// Union of the direct destinations of `states` on `symbol`, without any closure.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: &str) -> StateSet {
        let mut reached = StateSet::new();
        for state in states {
            if let Some(destinations) = self.next_states(state, symbol) {
                reached.extend(destinations.iter().cloned());
            }
        }
        reached
    }

    // depth-first worklist over the entries whose symbol passes `follow`
    fn saturate(&self, states: &StateSet, follow: impl Fn(&str) -> bool) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<&str> = states.iter().map(String::as_str).collect();

        while let Some(state) = stack.pop() {
            for (symbol, destinations) in self.outgoing(state) {
                if !follow(symbol) {
                    continue;
                }
                for destination in destinations {
                    if closure.insert(destination.clone()) {
                        stack.push(destination);
                    }
                }
            }
        }

        closure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::EPSILON;

    fn set(states: &[&str]) -> StateSet {
        states.iter().map(|s| s.to_string()).collect()
    }

    // 0 -ε-> 1 -ε-> 2 -a-> 3, 4 unreachable
    fn chain() -> Automaton {
        let mut automaton =
            Automaton::new(["0", "1", "2", "3", "4"], ["a"], "0", ["3"]).unwrap();
        automaton.add_transition("0", EPSILON, ["1"]).unwrap();
        automaton.add_transition("1", EPSILON, ["2"]).unwrap();
        automaton.add_transition("2", "a", ["3"]).unwrap();
        automaton.add_transition("4", "a", ["0"]).unwrap();
        automaton
    }

    #[test]
    fn test_epsilon_closure() {
        let automaton = chain();
        assert_eq!(automaton.epsilon_closure(&set(&["0"])), set(&["0", "1", "2"]));
        assert_eq!(automaton.epsilon_closure(&set(&["2"])), set(&["2"]));
        assert_eq!(automaton.epsilon_closure(&StateSet::new()), StateSet::new());
    }

    #[test]
    fn closure_follows_every_symbol() {
        let automaton = chain();
        assert_eq!(automaton.closure(&set(&["0"])), set(&["0", "1", "2", "3"]));
        assert_eq!(automaton.reachable_states(), set(&["0", "1", "2", "3"]));
        assert_eq!(automaton.closure(&set(&["4"])), set(&["0", "1", "2", "3", "4"]));
    }

    #[test]
    fn closures_are_idempotent() {
        let automaton = chain();
        let once = automaton.epsilon_closure(&set(&["0"]));
        assert_eq!(automaton.epsilon_closure(&once), once);
        let once = automaton.closure(&set(&["1"]));
        assert_eq!(automaton.closure(&once), once);
    }

    #[test]
    fn closure_terminates_on_cycles() {
        let mut automaton = Automaton::new(["p", "q"], ["a"], "p", ["q"]).unwrap();
        automaton.add_transition("p", EPSILON, ["q"]).unwrap();
        automaton.add_transition("q", EPSILON, ["p"]).unwrap();
        assert_eq!(automaton.epsilon_closure(&set(&["p"])), set(&["p", "q"]));
    }

    #[test]
    fn test_move_on_symbol() {
        let mut automaton = chain();
        automaton.add_transition("1", "a", ["4"]).unwrap();
        assert_eq!(
            automaton.move_on_symbol(&set(&["0", "1", "2"]), "a"),
            set(&["3", "4"])
        );
        assert!(automaton.move_on_symbol(&set(&["3"]), "a").is_empty());
    }
}
