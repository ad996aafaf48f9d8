//! Transition errors.

use crate::core::{State, Symbol};
use thiserror::Error;

/// Errors that can occur while following a transition.
///
/// An unmatched transition is an ordinary outcome when matching input: it
/// means the input is not in the machine's language from the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State, I: Symbol> {
    #[error("No transition from state {state:?} with input {symbol:?}")]
    UnmatchedTransition { symbol: I, state: S },
}

impl<S: State, I: Symbol> TransitionError<S, I> {
    /// The symbol that could not be followed.
    pub fn symbol(&self) -> &I {
        match self {
            Self::UnmatchedTransition { symbol, .. } => symbol,
        }
    }

    /// The state the machine was in when the lookup failed.
    pub fn state(&self) -> &S {
        match self {
            Self::UnmatchedTransition { state, .. } => state,
        }
    }
}
