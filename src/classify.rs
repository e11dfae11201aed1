//! Classification of an automaton by the shape of its transition relation.

use crate::automaton::{is_epsilon, Automaton};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomatonKind {
    EpsilonNfa,
    Nfa,
    Dfa,
}

impl std::fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::EpsilonNfa => "epsilon-NFA",
            Self::Nfa => "NFA",
            Self::Dfa => "DFA",
        };
        f.write_str(name)
    }
}

impl Automaton {
    /// Any epsilon entry makes an epsilon-NFA, even when entries also branch.
    /// Otherwise any entry with several destinations makes an NFA.
    pub fn classify(&self) -> AutomatonKind {
        let mut branching = false;
        for ((_, symbol), destinations) in self.transitions() {
            if is_epsilon(symbol) {
                return AutomatonKind::EpsilonNfa;
            }
            branching |= destinations.len() > 1;
        }
        if branching {
            AutomatonKind::Nfa
        } else {
            AutomatonKind::Dfa
        }
    }

    pub fn is_dfa(&self) -> bool {
        self.classify() == AutomatonKind::Dfa
    }

    /// Fail with [`Error::InvalidAutomatonType`] unless `accepted` admits the current kind.
    pub(crate) fn expect_kind(
        &self,
        operation: &'static str,
        accepted: impl Fn(AutomatonKind) -> bool,
    ) -> Result<()> {
        let found = self.classify();
        if accepted(found) {
            Ok(())
        } else {
            Err(Error::InvalidAutomatonType { operation, found })
        }
    }
}
