//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder with a configurable duplicate
//! policy, and a macro for declaring state enums.

pub mod error;
pub mod machine;
pub mod macros;
pub mod policy;

pub use error::{BuildError, DuplicateTransition};
pub use machine::AutomatonBuilder;
pub use policy::DuplicatePolicy;

use crate::automaton::Automaton;
use crate::core::{State, Symbol};

/// Create an automaton that rejects conflicting duplicate registrations.
///
/// # Example
///
/// ```
/// use tablefsm::builder::{strict, BuildError};
///
/// let result = strict(
///     "start",
///     [(("start", 'a'), "a"), (("start", 'a'), "b")],
///     ["a"],
/// );
///
/// assert!(matches!(result, Err(BuildError::DuplicateTransitions(_))));
/// ```
pub fn strict<S, I, T, A>(
    initial: S,
    transitions: T,
    accept_states: A,
) -> Result<Automaton<S, I>, BuildError>
where
    S: State,
    I: Symbol,
    T: IntoIterator<Item = ((S, I), S)>,
    A: IntoIterator<Item = S>,
{
    AutomatonBuilder::new()
        .initial(initial)
        .transitions(transitions)
        .accepting(accept_states)
        .on_duplicate(DuplicatePolicy::Reject)
        .build()
}
