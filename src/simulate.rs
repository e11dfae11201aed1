//! Word simulation over epsilon-closures; works uniformly for epsilon-NFAs, NFAs and DFAs.

use crate::automaton::{Automaton, StateSet};

impl Automaton {
    /// Run `word` treating every `char` as one symbol.
    pub fn accepts(&self, word: &str) -> bool {
        self.accepts_symbols(word.chars().map(String::from))
    }

    /// Run a word made of arbitrary (possibly multi-character) symbols.
    pub fn accepts_symbols<I>(&self, symbols: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.run(symbols, |_| ())
            .is_some_and(|current| current.iter().any(|state| self.is_final_state(state)))
    }

    /// The live state sets visited while reading `word`, starting with the
    /// epsilon-closure of the start state. `None` if the run gets stuck or
    /// reads a symbol outside the alphabet.
    pub fn state_sequence(&self, word: &str) -> Option<Vec<StateSet>> {
        let mut seq = vec![];
        self.run(word.chars().map(String::from), |current| {
            seq.push(current.clone())
        })?;
        Some(seq)
    }

    fn run<I>(&self, symbols: I, mut visit: impl FnMut(&StateSet)) -> Option<StateSet>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current =
            self.epsilon_closure(&StateSet::from([self.start_state().to_string()]));
        visit(&current);
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if !self.alphabet().contains(symbol) {
                return None;
            }
            current = self.epsilon_closure(&self.move_on_symbol(&current, symbol));
            if current.is_empty() {
                return None;
            }
            visit(&current);
        }
        Some(current)
    }
}
