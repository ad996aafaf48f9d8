//! Tablefsm: a deterministic finite-state machine engine
//!
//! An automaton is declared as a table of transitions, each mapping a
//! `(state, symbol)` pair to a destination state. The engine tracks a
//! current state, follows one symbol at a time, and reports whether the
//! current state is accepting.
//!
//! # Core Concepts
//!
//! - **State / Symbol**: Any hashable, comparable value; never inspected
//! - **Transition table**: Immutable, deterministic, shareable via `Arc`
//! - **Automaton**: A table plus initial state, accept set and cursor
//! - **Builder**: Fluent construction with a configurable duplicate policy
//!
//! # Example
//!
//! ```rust
//! use tablefsm::{Automaton, TransitionError};
//!
//! // Matches one or more 'a'
//! let mut machine = Automaton::new(
//!     "start",
//!     [(("start", 'a'), "a"), (("a", 'a'), "a")],
//!     ["a"],
//! );
//!
//! assert!(machine.matches("aaa".chars()));
//!
//! machine.reset();
//! assert_eq!(
//!     machine.step('b'),
//!     Err(TransitionError::UnmatchedTransition { symbol: 'b', state: "start" })
//! );
//! ```

pub mod automaton;
pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod patterns;

// Re-export commonly used types
pub use crate::automaton::{Automaton, TransitionError};
pub use crate::builder::{AutomatonBuilder, BuildError, DuplicatePolicy};
pub use crate::core::{State, Symbol, TransitionKey, TransitionTable};
