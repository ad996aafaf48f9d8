//! Composite transition keys.

use super::state::{State, Symbol};
use std::fmt;

/// The `(source state, input symbol)` pair that identifies one transition.
///
/// Keys compare and hash by value, so a table holds at most one destination
/// per key.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::TransitionKey;
///
/// let a = TransitionKey::new("off", "flip");
/// let b = TransitionKey::new("off", "flip");
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionKey<S: State, I: Symbol> {
    /// The state the transition leaves
    pub from: S,
    /// The symbol that triggers it
    pub input: I,
}

impl<S: State, I: Symbol> TransitionKey<S, I> {
    pub fn new(from: S, input: I) -> Self {
        Self { from, input }
    }
}

impl<S: State, I: Symbol> From<(S, I)> for TransitionKey<S, I> {
    fn from((from, input): (S, I)) -> Self {
        Self { from, input }
    }
}

impl<S: State, I: Symbol> fmt::Display for TransitionKey<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.from, self.input)
    }
}
