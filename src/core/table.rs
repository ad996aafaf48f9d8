//! Immutable transition tables.
//!
//! A table maps each [`TransitionKey`] to exactly one destination state and
//! carries the set of every state it mentions. Both are computed once when
//! the table is built and never change afterwards.

use super::key::TransitionKey;
use super::state::{State, Symbol};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Deterministic transition table.
///
/// Registering the same `(from, input)` pair more than once keeps only the
/// last destination.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::TransitionTable;
///
/// let table = TransitionTable::from_transitions([
///     (("off", "flip"), "on"),
///     (("on", "flip"), "off"),
/// ]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.destination(&"off", &"flip"), Some(&"on"));
/// assert!(table.states().contains(&"on"));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, I: Symbol> {
    transitions: HashMap<TransitionKey<S, I>, S>,
    states: HashSet<S>,
}

impl<S: State, I: Symbol> TransitionTable<S, I> {
    /// Build a table from `((from, input), to)` entries.
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn from_transitions<T>(transitions: T) -> Self
    where
        T: IntoIterator<Item = ((S, I), S)>,
    {
        let mut map = HashMap::new();
        for ((from, input), to) in transitions {
            let key = TransitionKey::new(from, input);
            if let Some(previous) = map.get(&key) {
                debug!(
                    key = %key,
                    previous = ?previous,
                    replacement = ?to,
                    "overwriting duplicate transition"
                );
            }
            map.insert(key, to);
        }

        let states = derive_states(&map);
        debug!(
            transitions = map.len(),
            states = states.len(),
            "built transition table"
        );

        Self {
            transitions: map,
            states,
        }
    }

    /// Look up the destination registered for `(from, input)` (pure).
    pub fn destination(&self, from: &S, input: &I) -> Option<&S> {
        self.transitions
            .get(&TransitionKey::new(from.clone(), input.clone()))
    }

    /// Look up the stored key and destination for `(from, input)` (pure).
    pub fn entry(&self, from: &S, input: &I) -> Option<(&TransitionKey<S, I>, &S)> {
        self.transitions
            .get_key_value(&TransitionKey::new(from.clone(), input.clone()))
    }

    /// Every state appearing as a source or destination.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// Iterate over all `(key, destination)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey<S, I>, &S)> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State, I: Symbol> FromIterator<((S, I), S)> for TransitionTable<S, I> {
    fn from_iter<T: IntoIterator<Item = ((S, I), S)>>(iter: T) -> Self {
        Self::from_transitions(iter)
    }
}

/// Collect every source and destination state of a transition map.
fn derive_states<S: State, I: Symbol>(transitions: &HashMap<TransitionKey<S, I>, S>) -> HashSet<S> {
    transitions
        .iter()
        .flat_map(|(key, to)| [key.from.clone(), to.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
        Unused,
    }

    fn light_switch() -> TransitionTable<&'static str, &'static str> {
        TransitionTable::from_transitions([(("off", "flip"), "on"), (("on", "flip"), "off")])
    }

    #[test]
    fn destination_finds_registered_transition() {
        let table = light_switch();

        assert_eq!(table.destination(&"off", &"flip"), Some(&"on"));
        assert_eq!(table.destination(&"on", &"flip"), Some(&"off"));
        assert_eq!(table.destination(&"on", &"push"), None);
    }

    #[test]
    fn duplicate_registration_keeps_last_destination() {
        let table = TransitionTable::from_transitions([
            ((TestState::Start, 'a'), TestState::Middle),
            ((TestState::Start, 'a'), TestState::End),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.destination(&TestState::Start, &'a'), Some(&TestState::End));
    }

    #[test]
    fn state_set_collects_sources_and_destinations() {
        let table = TransitionTable::from_transitions([
            ((TestState::Start, 'a'), TestState::Middle),
            ((TestState::Middle, 'b'), TestState::End),
        ]);

        let expected: HashSet<_> = [TestState::Start, TestState::Middle, TestState::End]
            .into_iter()
            .collect();
        assert_eq!(table.states(), &expected);
        assert!(!table.states().contains(&TestState::Unused));
    }

    #[test]
    fn overwritten_destination_is_not_a_state() {
        let table = TransitionTable::from_transitions([
            ((TestState::Start, 'a'), TestState::Unused),
            ((TestState::Start, 'a'), TestState::End),
        ]);

        assert!(!table.states().contains(&TestState::Unused));
        assert_eq!(table.states().len(), 2);
    }

    #[test]
    fn self_loops_count_once() {
        let table: TransitionTable<_, _> =
            [(("a", 'a'), "a"), (("start", 'a'), "a")].into_iter().collect();

        assert_eq!(table.states().len(), 2);
    }

    #[test]
    fn empty_table_has_no_states() {
        let table = TransitionTable::<TestState, char>::from_transitions([]);

        assert!(table.is_empty());
        assert!(table.states().is_empty());
    }

    #[test]
    fn entry_returns_stored_key() {
        let table = light_switch();
        let (key, to) = table.entry(&"off", &"flip").unwrap();

        assert_eq!(key, &TransitionKey::new("off", "flip"));
        assert_eq!(to, &"on");
        assert!(table.entry(&"off", &"push").is_none());
    }
}
