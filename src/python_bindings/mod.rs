//! Provides tools and interfaces to integrate the crate's functionality with Python.

use std::sync::{Arc, PoisonError, RwLock};

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::automaton::{Alphabet, Automaton, State, StateSet, Transitions};
use crate::minimize::Algorithm;

#[pyclass(name = "Automaton", module = "finite_automata.finite_automata_rs")]
#[derive(Clone, Debug)]
pub struct PyAutomaton(Arc<RwLock<Automaton>>);

type ConstructorArgs = (StateSet, Alphabet, State, StateSet, Option<Transitions>);

fn map_poison_error_to_pyerr<G>(_: PoisonError<G>) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>("RwLock poisoned")
}

fn parse_algorithm(name: &str) -> PyResult<Algorithm> {
    match name {
        "table_filling" => Ok(Algorithm::TableFilling),
        "partition_refinement" => Ok(Algorithm::PartitionRefinement),
        _ => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown minimization algorithm: {}",
            name
        ))),
    }
}

impl PyAutomaton {
    fn wrap(automaton: Automaton) -> Self {
        PyAutomaton(Arc::new(RwLock::new(automaton)))
    }

    // run a transformer on a snapshot without holding the GIL
    fn derive(
        &self,
        py: Python<'_>,
        transform: impl FnOnce(&Automaton) -> crate::Result<Automaton> + Send,
    ) -> PyResult<Self> {
        let snapshot = self.0.read().map_err(map_poison_error_to_pyerr)?.clone();
        py.allow_threads(|| transform(&snapshot))
            .map(Self::wrap)
            .map_err(Into::into)
    }
}

#[pymethods]
impl PyAutomaton {
    #[new]
    #[pyo3(signature = (states, alphabet, start_state, final_states, transitions=None))]
    fn __new__(
        states: StateSet,
        alphabet: Alphabet,
        start_state: State,
        final_states: StateSet,
        transitions: Option<Transitions>,
    ) -> PyResult<Self> {
        Automaton::with_transitions(
            states,
            alphabet,
            transitions.unwrap_or_default(),
            start_state,
            final_states,
        )
        .map(Self::wrap)
        .map_err(Into::into)
    }

    #[staticmethod]
    fn empty() -> Self {
        Self::wrap(Automaton::default())
    }

    fn add_state(&self, state: State) -> PyResult<()> {
        let mut guard = self.0.write().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.add_state(state)?)
    }

    fn add_alphabet_symbol(&self, symbol: String) -> PyResult<()> {
        let mut guard = self.0.write().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.add_alphabet_symbol(symbol)?)
    }

    fn add_transition(&self, origin: State, symbol: String, destinations: StateSet) -> PyResult<()> {
        let mut guard = self.0.write().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.add_transition(origin, symbol, destinations)?)
    }

    fn add_final_state(&self, state: State) -> PyResult<()> {
        let mut guard = self.0.write().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.add_final_state(state)?)
    }

    fn set_start_state(&self, state: State) -> PyResult<()> {
        let mut guard = self.0.write().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.set_start_state(state)?)
    }

    fn get_states(&self) -> PyResult<StateSet> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.states().clone())
    }

    fn get_alphabet(&self) -> PyResult<Alphabet> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.alphabet().clone())
    }

    fn get_transitions(&self) -> PyResult<Transitions> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.transitions().clone())
    }

    fn get_final_states(&self) -> PyResult<StateSet> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.final_states().clone())
    }

    fn get_start_state(&self) -> PyResult<State> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.start_state().to_string())
    }

    fn closure(&self, states: StateSet) -> PyResult<StateSet> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.closure(&states))
    }

    fn epsilon_closure(&self, states: StateSet) -> PyResult<StateSet> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.epsilon_closure(&states))
    }

    fn accepts(&self, word: &str) -> PyResult<bool> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.accepts(word))
    }

    fn accepts_symbols(&self, symbols: Vec<String>) -> PyResult<bool> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.accepts_symbols(symbols))
    }

    fn state_sequence(&self, word: &str) -> PyResult<Option<Vec<StateSet>>> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.state_sequence(word))
    }

    fn classify(&self) -> PyResult<String> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(guard.classify().to_string())
    }

    fn eliminate_epsilon(&self, py: Python<'_>) -> PyResult<Self> {
        self.derive(py, Automaton::eliminate_epsilon)
    }

    fn determinize(&self, py: Python<'_>) -> PyResult<Self> {
        self.derive(py, Automaton::determinize)
    }

    fn minimize_table_filling(&self, py: Python<'_>) -> PyResult<Self> {
        self.derive(py, Automaton::minimize_table_filling)
    }

    fn minimize_partition_refinement(&self, py: Python<'_>) -> PyResult<Self> {
        self.derive(py, Automaton::minimize_partition_refinement)
    }

    #[pyo3(signature = (algorithm="table_filling"))]
    fn to_minimal_dfa(&self, py: Python<'_>, algorithm: &str) -> PyResult<Self> {
        let algorithm = parse_algorithm(algorithm)?;
        self.derive(py, move |automaton| automaton.to_minimal_dfa(algorithm))
    }

    fn __repr__(&self) -> PyResult<String> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(format!("{:#?}", *guard))
    }

    fn __str__(&self) -> PyResult<String> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(format!("{}", *guard))
    }

    fn __eq__(&self, other: &PyAutomaton) -> PyResult<bool> {
        if Arc::ptr_eq(&self.0, &other.0) {
            return Ok(true);
        }
        let self_guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        let other_guard = other.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(*self_guard == *other_guard)
    }

    fn __deepcopy__(&self, _py: Python<'_>, _memo: Py<PyDict>) -> PyResult<Self> {
        let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
        Ok(Self::wrap(guard.clone()))
    }

    fn __reduce__(&self) -> PyResult<(PyObject, ConstructorArgs)> {
        Python::with_gil(|py| {
            let cls = PyModule::import(py, "finite_automata.finite_automata_rs")?
                .getattr("Automaton")?;
            let guard = self.0.read().map_err(map_poison_error_to_pyerr)?;
            let args = (
                guard.states().clone(),
                guard.alphabet().clone(),
                guard.start_state().to_string(),
                guard.final_states().clone(),
                Some(guard.transitions().clone()),
            );
            Ok((cls.unbind(), args))
        })
    }
}

#[pymodule]
fn finite_automata_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAutomaton>()?;

    Ok(())
}
