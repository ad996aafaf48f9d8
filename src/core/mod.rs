//! Core automaton types.
//!
//! This module contains the pure building blocks of the engine:
//! - State and symbol traits
//! - Composite transition keys
//! - Immutable transition tables with their derived state sets
//!
//! Nothing in this module mutates after construction.

mod key;
mod state;
mod table;

pub use key::TransitionKey;
pub use state::{State, Symbol};
pub use table::TransitionTable;
