//! State and symbol traits for automaton values.
//!
//! The engine never inspects states or symbols beyond equality and hashing,
//! so both traits are blanket-implemented for every value type that is
//! comparable, hashable, debuggable and thread-safe.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// States are opaque identifiers. Two states are the same state exactly
/// when they compare equal.
///
/// # Required Traits
///
/// - `Clone`: States are copied into keys, errors and checkpoints
/// - `Eq` + `Hash`: States key the transition table and the state set
/// - `Debug`: States are debuggable for diagnostics
/// - `Send` + `Sync`: Tables may be shared across threads
///
/// # Example
///
/// ```rust
/// use tablefsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Switch {
///     Off,
///     On,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&Switch::Off);
/// assert_state(&"off");
/// assert_state(&String::from("off"));
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// Trait for input symbols.
///
/// Symbols are atomic tokens consumed one at a time; the engine never
/// decomposes them.
pub trait Symbol: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug + Send + Sync {}
