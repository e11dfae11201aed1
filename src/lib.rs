//! # Finite_Automata
//!
//! `finite_automata` crate models finite-state automata over string symbols:
//! construction, word acceptance, epsilon elimination, subset construction
//! and DFA minimization (table filling and partition refinement).

pub mod automaton;
pub mod classify;
mod closure;
mod epsilon;
pub mod error;
pub mod minimize;
mod simulate;
pub mod subset_construction;

pub use automaton::{is_epsilon, Alphabet, Automaton, State, StateSet, Symbol, Transitions, EPSILON};
pub use classify::AutomatonKind;
pub use error::{Error, Result};
pub use minimize::Algorithm;
pub use subset_construction::subset_name;

#[cfg(feature = "python-bindings")]
mod python_bindings;
