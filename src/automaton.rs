//! The automaton data model: states, alphabet, transition relation, start and final states.

use std::collections::{BTreeMap, BTreeSet};

use crate::{Error, Result};

// define type alias for states, symbols and the transition relation
pub type State = String;
pub type Symbol = String;
pub type StateSet = BTreeSet<State>;
pub type Alphabet = BTreeSet<Symbol>;
pub type Transitions = BTreeMap<(State, Symbol), StateSet>;

/// Symbol marking an epsilon (silent) transition. It can never be part of an alphabet.
pub const EPSILON: &str = "";

/// Check if a symbol is the epsilon marker.
#[inline]
pub fn is_epsilon(symbol: &str) -> bool {
    symbol == EPSILON
}

/// A finite-state automaton over string symbols.
///
/// Nondeterminism and epsilon transitions are plain data: a `(state, symbol)` entry
/// with several destinations, or an entry keyed by [`EPSILON`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    alphabet: Alphabet,
    states: StateSet,
    transitions: Transitions,
    final_states: StateSet,
    start_state: State,
}

fn collect_set<I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl Automaton {
    /// Build an automaton without transitions, failing if any invariant is violated.
    pub fn new<Q, S, F>(
        states: Q,
        alphabet: S,
        start_state: impl Into<State>,
        final_states: F,
    ) -> Result<Self>
    where
        Q: IntoIterator,
        Q::Item: Into<State>,
        S: IntoIterator,
        S::Item: Into<Symbol>,
        F: IntoIterator,
        F::Item: Into<State>,
    {
        let automaton = Self {
            alphabet: collect_set(alphabet),
            states: collect_set(states),
            transitions: Transitions::new(),
            final_states: collect_set(final_states),
            start_state: start_state.into(),
        };
        automaton.validate()?;
        Ok(automaton)
    }

    /// Build an automaton together with its transition relation. Entries sharing a
    /// `(state, symbol)` key are merged.
    pub fn with_transitions<Q, S, T, F>(
        states: Q,
        alphabet: S,
        transitions: T,
        start_state: impl Into<State>,
        final_states: F,
    ) -> Result<Self>
    where
        Q: IntoIterator,
        Q::Item: Into<State>,
        S: IntoIterator,
        S::Item: Into<Symbol>,
        T: IntoIterator<Item = ((State, Symbol), StateSet)>,
        F: IntoIterator,
        F::Item: Into<State>,
    {
        let mut automaton = Self::new(states, alphabet, start_state, final_states)?;
        for ((origin, symbol), destinations) in transitions {
            automaton.add_transition(origin, symbol, destinations)?;
        }
        Ok(automaton)
    }

    /// Assemble an automaton from parts a transformer already knows to be consistent.
    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: Alphabet,
        transitions: Transitions,
        start_state: State,
        final_states: StateSet,
    ) -> Self {
        let automaton = Self {
            alphabet,
            states,
            transitions,
            final_states,
            start_state,
        };
        debug_assert_eq!(automaton.validate(), Ok(()));
        automaton
    }

    /// Check every invariant of the data model.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if self.states.is_empty() {
            return Err(Error::EmptyStateSet);
        }
        if self.states.iter().any(|state| state.is_empty()) {
            return Err(Error::UnnamedState);
        }
        if self.alphabet.iter().any(|symbol| is_epsilon(symbol)) {
            return Err(Error::EmptySymbol);
        }
        if !self.states.contains(&self.start_state) {
            return Err(Error::UnknownStartState(self.start_state.clone()));
        }
        if let Some(state) = self.final_states.difference(&self.states).next() {
            return Err(Error::UnknownState(state.clone()));
        }
        for ((origin, symbol), destinations) in &self.transitions {
            self.check_transition(origin, symbol, destinations)?;
        }
        Ok(())
    }

    fn check_transition(&self, origin: &str, symbol: &str, destinations: &StateSet) -> Result<()> {
        if !self.states.contains(origin) {
            return Err(Error::UnknownOriginState(origin.to_string()));
        }
        if !is_epsilon(symbol) && !self.alphabet.contains(symbol) {
            return Err(Error::UnknownSymbol(symbol.to_string()));
        }
        if let Some(state) = destinations.difference(&self.states).next() {
            return Err(Error::UnknownDestinationState(state.clone()));
        }
        Ok(())
    }

    pub fn add_state(&mut self, state: impl Into<State>) -> Result<()> {
        let state = state.into();
        if state.is_empty() {
            return Err(Error::UnnamedState);
        }
        self.states.insert(state);
        Ok(())
    }

    pub fn add_alphabet_symbol(&mut self, symbol: impl Into<Symbol>) -> Result<()> {
        let symbol = symbol.into();
        if is_epsilon(&symbol) {
            return Err(Error::EmptySymbol);
        }
        self.alphabet.insert(symbol);
        Ok(())
    }

    /// Add destinations to the `(origin, symbol)` entry; existing destinations are kept.
    /// Use [`EPSILON`] as the symbol for an epsilon transition.
    pub fn add_transition<D>(
        &mut self,
        origin: impl Into<State>,
        symbol: impl Into<Symbol>,
        destinations: D,
    ) -> Result<()>
    where
        D: IntoIterator,
        D::Item: Into<State>,
    {
        let origin = origin.into();
        let symbol = symbol.into();
        let destinations: StateSet = collect_set(destinations);
        self.check_transition(&origin, &symbol, &destinations)?;
        if destinations.is_empty() {
            return Ok(());
        }
        self.transitions
            .entry((origin, symbol))
            .or_default()
            .extend(destinations);
        Ok(())
    }

    pub fn add_final_state(&mut self, state: impl Into<State>) -> Result<()> {
        let state = state.into();
        if state.is_empty() {
            return Err(Error::UnnamedState);
        }
        if !self.states.contains(&state) {
            return Err(Error::UnknownState(state));
        }
        self.final_states.insert(state);
        Ok(())
    }

    pub fn set_start_state(&mut self, state: impl Into<State>) -> Result<()> {
        let state = state.into();
        if !self.states.contains(&state) {
            return Err(Error::UnknownState(state));
        }
        self.start_state = state;
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    pub fn is_start_state(&self, state: &str) -> bool {
        self.start_state == state
    }

    pub fn is_final_state(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    /// Destinations of `state` on `symbol`, if any.
    pub fn next_states(&self, state: &str, symbol: &str) -> Option<&StateSet> {
        self.transitions
            .get(&(state.to_string(), symbol.to_string()))
    }

    /// The single destination of `state` on `symbol` in a deterministic automaton.
    pub(crate) fn successor(&self, state: &str, symbol: &str) -> Option<&str> {
        self.next_states(state, symbol)
            .and_then(|destinations| destinations.first())
            .map(String::as_str)
    }

    /// All entries leaving `state`, epsilon first.
    pub(crate) fn outgoing<'a>(
        &'a self,
        state: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a StateSet)> + 'a {
        self.transitions
            .range((state.to_string(), Symbol::new())..)
            .take_while(move |((origin, _), _)| origin == state)
            .map(|((_, symbol), destinations)| (symbol.as_str(), destinations))
    }
}

impl Default for Automaton {
    /// A single state `q0`, which is also the start state. The alphabet must be
    /// populated before the automaton is used.
    fn default() -> Self {
        let start_state: State = "q0".to_string();
        Self {
            alphabet: Alphabet::new(),
            states: StateSet::from([start_state.clone()]),
            transitions: Transitions::new(),
            final_states: StateSet::new(),
            start_state,
        }
    }
}

fn format_set(set: &StateSet) -> String {
    format!(
        "{{{}}}",
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    )
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Automaton starting at {} with final states {} and transitions:",
            self.start_state,
            format_set(&self.final_states)
        )?;
        for ((origin, symbol), destinations) in self.transitions.iter() {
            let symbol = if is_epsilon(symbol) { "ε" } else { symbol.as_str() };
            writeln!(f, "({}, {}) -> {}", origin, symbol, format_set(destinations))?;
        }
        Ok(())
    }
}
