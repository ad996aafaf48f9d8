//! Build errors for automaton builders.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("{} conflicting transition registration(s)", .0.len())]
    DuplicateTransitions(Vec<DuplicateTransition>),
}

/// One `(from, input)` pair registered with two different destinations.
///
/// States and symbols are rendered with their `Debug` output so the error
/// stays independent of the automaton's type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transition ({from}, {input}) registered to both {first} and {second}")]
pub struct DuplicateTransition {
    pub from: String,
    pub input: String,
    pub first: String,
    pub second: String,
}
