//! The Errors that may occur within the crate.

use thiserror::Error;

use crate::classify::AutomatonKind;

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Construction Errors
    #[error("The alphabet can't be empty")]
    EmptyAlphabet,
    #[error("The state set can't be empty")]
    EmptyStateSet,
    #[error("States can't be unnamed")]
    UnnamedState,
    #[error("The empty symbol is reserved for epsilon transitions")]
    EmptySymbol,
    #[error("The start state '{0}' isn't in the state set")]
    UnknownStartState(String),
    // Transition Errors
    #[error("The origin state '{0}' isn't in the state set")]
    UnknownOriginState(String),
    #[error("The symbol '{0}' isn't in the alphabet")]
    UnknownSymbol(String),
    #[error("The destination state '{0}' isn't in the state set")]
    UnknownDestinationState(String),
    #[error("The state '{0}' isn't in the state set")]
    UnknownState(String),
    // Transformer Errors
    #[error("Can't {operation} an automaton of type {found}")]
    InvalidAutomatonType {
        operation: &'static str,
        found: AutomatonKind,
    },
}

impl Error {
    pub fn is_invalid_automaton_type(&self) -> bool {
        matches!(self, Self::InvalidAutomatonType { .. })
    }
}

#[cfg(feature = "python-bindings")]
impl From<Error> for pyo3::PyErr {
    fn from(e: Error) -> Self {
        use pyo3::exceptions::PyValueError;
        use pyo3::PyErr;
        PyErr::new::<PyValueError, _>(e.to_string())
    }
}
