//! The automaton engine.
//!
//! An [`Automaton`] owns a shared [`TransitionTable`](crate::core::TransitionTable),
//! a fixed initial state and accept set, and one mutable current state.
//!
//! # Key Operations
//!
//! - **Step**: follow one symbol from the current state, or fail with
//!   [`TransitionError::UnmatchedTransition`] and stay put
//! - **Accepted**: test the current state against the accept set
//! - **Reset**: return to the initial state
//! - **Get transition**: probe a `(state, symbol)` pair without moving

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::Automaton;
