//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::{BuildError, DuplicateTransition};
use crate::builder::policy::DuplicatePolicy;
use crate::core::{State, Symbol, TransitionKey, TransitionTable};
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing automata with a fluent API.
pub struct AutomatonBuilder<S: State, I: Symbol> {
    initial: Option<S>,
    transitions: Vec<((S, I), S)>,
    accept: Vec<S>,
    on_duplicate: DuplicatePolicy,
}

impl<S: State, I: Symbol> AutomatonBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            accept: Vec::new(),
            on_duplicate: DuplicatePolicy::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register one transition.
    pub fn transition(mut self, from: S, input: I, to: S) -> Self {
        self.transitions.push(((from, input), to));
        self
    }

    /// Register several `((from, input), to)` transitions at once.
    pub fn transitions<T>(mut self, transitions: T) -> Self
    where
        T: IntoIterator<Item = ((S, I), S)>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accept.push(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accepting<A>(mut self, states: A) -> Self
    where
        A: IntoIterator<Item = S>,
    {
        self.accept.extend(states);
        self
    }

    /// Choose how duplicate `(from, input)` registrations are handled.
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing, or if duplicates
    /// conflict under [`DuplicatePolicy::Reject`].
    pub fn build(self) -> Result<Automaton<S, I>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.on_duplicate == DuplicatePolicy::Reject {
            if let Validation::Failure(conflicts) = find_conflicts(&self.transitions) {
                return Err(BuildError::DuplicateTransitions(
                    conflicts.iter().cloned().collect(),
                ));
            }
        }

        let table = TransitionTable::from_transitions(self.transitions);
        Ok(Automaton::with_table(Arc::new(table), initial, self.accept))
    }
}

impl<S: State, I: Symbol> Default for AutomatonBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every registration against the one before it for the same key,
/// accumulating ALL conflicts.
/// Re-registering an identical destination is not a conflict.
fn find_conflicts<S: State, I: Symbol>(
    transitions: &[((S, I), S)],
) -> Validation<(), NonEmptyVec<DuplicateTransition>> {
    let mut seen: HashMap<TransitionKey<S, I>, &S> = HashMap::new();
    let mut checks: Vec<Validation<(), NonEmptyVec<DuplicateTransition>>> = Vec::new();

    for ((from, input), to) in transitions {
        let key = TransitionKey::new(from.clone(), input.clone());
        let check = match seen.insert(key, to) {
            Some(first) if first != to => Validation::fail(DuplicateTransition {
                from: format!("{from:?}"),
                input: format!("{input:?}"),
                first: format!("{first:?}"),
                second: format!("{to:?}"),
            }),
            _ => Validation::success(()),
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
