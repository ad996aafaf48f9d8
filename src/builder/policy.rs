//! Duplicate registration policy.

/// How a builder treats a `(from, input)` pair registered more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the last destination registered (matches [`Automaton::new`](crate::Automaton::new))
    #[default]
    Overwrite,

    /// Fail the build, reporting every conflicting registration
    Reject,
}
