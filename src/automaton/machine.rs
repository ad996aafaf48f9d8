//! Deterministic automaton driven by a shared transition table.

use crate::automaton::error::TransitionError;
use crate::core::{State, Symbol, TransitionKey, TransitionTable};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Deterministic finite automaton.
///
/// The transition table, initial state and accept set are fixed at
/// construction. The current state is the only field that changes, and only
/// through [`Automaton::step`], [`Automaton::reset`] or a checkpoint restore.
///
/// Cloning an automaton shares its table and copies its current state, so
/// each clone can be driven independently.
///
/// # Example
///
/// ```rust
/// use tablefsm::Automaton;
///
/// let mut switch = Automaton::new(
///     "off",
///     [(("off", "flip"), "on"), (("on", "flip"), "off")],
///     ["on"],
/// );
///
/// switch.step("flip").unwrap();
/// assert_eq!(switch.current_state(), &"on");
/// assert!(switch.accepted());
///
/// assert!(switch.step("push").is_err());
/// assert_eq!(switch.current_state(), &"on");
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State, I: Symbol> {
    table: Arc<TransitionTable<S, I>>,
    initial: S,
    accept: Arc<HashSet<S>>,
    current: S,
}

impl<S: State, I: Symbol> Automaton<S, I> {
    /// Create an automaton in its initial state.
    ///
    /// Duplicate `(from, input)` entries keep the last destination. Neither
    /// `initial` nor the accept states need to appear in any transition.
    pub fn new<T, A>(initial: S, transitions: T, accept_states: A) -> Self
    where
        T: IntoIterator<Item = ((S, I), S)>,
        A: IntoIterator<Item = S>,
    {
        Self::with_table(
            Arc::new(TransitionTable::from_transitions(transitions)),
            initial,
            accept_states,
        )
    }

    /// Create an automaton over an existing, possibly shared, table.
    pub fn with_table<A>(table: Arc<TransitionTable<S, I>>, initial: S, accept_states: A) -> Self
    where
        A: IntoIterator<Item = S>,
    {
        Self {
            table,
            current: initial.clone(),
            initial,
            accept: Arc::new(accept_states.into_iter().collect()),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state recorded at construction (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Every state mentioned by the transition table (pure)
    pub fn states(&self) -> &HashSet<S> {
        self.table.states()
    }

    pub fn accept_states(&self) -> &HashSet<S> {
        &self.accept
    }

    pub fn table(&self) -> &Arc<TransitionTable<S, I>> {
        &self.table
    }

    /// Check whether the current state is an accept state (pure).
    pub fn accepted(&self) -> bool {
        self.accept.contains(&self.current)
    }

    /// Find the transition for `(state, symbol)` without moving (pure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablefsm::{Automaton, TransitionError};
    ///
    /// let machine = Automaton::new("start", [(("start", 'a'), "a_end")], ["a_end"]);
    ///
    /// let key = machine.get_transition(&"start", &'a').unwrap();
    /// assert_eq!(key.from, "start");
    ///
    /// assert_eq!(
    ///     machine.get_transition(&"a_end", &'a'),
    ///     Err(TransitionError::UnmatchedTransition { symbol: 'a', state: "a_end" })
    /// );
    /// ```
    pub fn get_transition(
        &self,
        state: &S,
        symbol: &I,
    ) -> Result<TransitionKey<S, I>, TransitionError<S, I>> {
        self.table
            .entry(state, symbol)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| TransitionError::UnmatchedTransition {
                symbol: symbol.clone(),
                state: state.clone(),
            })
    }

    /// Check whether `symbol` can be followed from the current state (pure).
    pub fn can_step(&self, symbol: &I) -> bool {
        self.table.destination(&self.current, symbol).is_some()
    }

    /// Follow the transition for `symbol` from the current state.
    ///
    /// On failure the current state is left untouched, so the caller may
    /// inspect it or try a different symbol.
    pub fn step(&mut self, symbol: I) -> Result<(), TransitionError<S, I>> {
        let Some(next) = self.table.destination(&self.current, &symbol).cloned() else {
            debug!(state = ?self.current, symbol = ?symbol, "unmatched transition");
            return Err(TransitionError::UnmatchedTransition {
                symbol,
                state: self.current.clone(),
            });
        };

        debug!(from = ?self.current, symbol = ?symbol, to = ?next, "transition");
        self.current = next;
        Ok(())
    }

    /// Return to the initial state. Idempotent.
    pub fn reset(&mut self) {
        trace!(from = ?self.current, to = ?self.initial, "reset");
        self.current = self.initial.clone();
    }

    /// Step through `inputs` in order, stopping at the first unmatched symbol.
    ///
    /// Does not reset first: input is consumed from the current state.
    pub fn feed<T>(&mut self, inputs: T) -> Result<(), TransitionError<S, I>>
    where
        T: IntoIterator<Item = I>,
    {
        for symbol in inputs {
            self.step(symbol)?;
        }
        Ok(())
    }

    /// Feed `inputs` and report whether the machine ends in an accept state.
    ///
    /// An unmatched symbol counts as no match.
    pub fn matches<T>(&mut self, inputs: T) -> bool
    where
        T: IntoIterator<Item = I>,
    {
        self.feed(inputs).is_ok() && self.accepted()
    }

    pub(crate) fn move_to(&mut self, state: S) {
        self.current = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum WorkflowState {
        Initial,
        Processing,
        Complete,
        Orphan,
    }

    fn workflow() -> Automaton<WorkflowState, &'static str> {
        Automaton::new(
            WorkflowState::Initial,
            [
                ((WorkflowState::Initial, "start"), WorkflowState::Processing),
                ((WorkflowState::Processing, "finish"), WorkflowState::Complete),
                ((WorkflowState::Processing, "retry"), WorkflowState::Processing),
            ],
            [WorkflowState::Complete],
        )
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = workflow();

        assert_eq!(machine.current_state(), &WorkflowState::Initial);
        assert_eq!(machine.initial_state(), &WorkflowState::Initial);
        assert!(!machine.accepted());
    }

    #[test]
    fn simple_transition_succeeds() {
        let mut machine = workflow();

        machine.step("start").unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn unmatched_transition_leaves_state_unchanged() {
        let mut machine = workflow();

        let result = machine.step("finish");

        assert_eq!(
            result,
            Err(TransitionError::UnmatchedTransition {
                symbol: "finish",
                state: WorkflowState::Initial,
            })
        );
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn machine_can_resume_after_failed_step() {
        let mut machine = workflow();

        assert!(machine.step("bogus").is_err());
        machine.step("start").unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn accept_state_is_not_terminal() {
        let mut machine = Automaton::new(
            "start",
            [(("start", 'a'), "a"), (("a", 'a'), "a")],
            ["a"],
        );

        machine.step('a').unwrap();
        assert!(machine.accepted());
        machine.step('a').unwrap();
        assert!(machine.accepted());
    }

    #[test]
    fn accepted_is_pure() {
        let mut machine = workflow();
        machine.feed(["start", "finish"]).unwrap();

        assert!(machine.accepted());
        assert!(machine.accepted());
        assert_eq!(machine.current_state(), &WorkflowState::Complete);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut machine = workflow();
        machine.feed(["start", "retry", "finish"]).unwrap();

        machine.reset();
        assert_eq!(machine.current_state(), &WorkflowState::Initial);

        machine.reset();
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn get_transition_does_not_move() {
        let machine = workflow();

        let key = machine
            .get_transition(&WorkflowState::Processing, &"finish")
            .unwrap();

        assert_eq!(key, TransitionKey::new(WorkflowState::Processing, "finish"));
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn get_transition_reports_unmatched_pair() {
        let machine = workflow();

        let error = machine
            .get_transition(&WorkflowState::Complete, &"start")
            .unwrap_err();

        assert_eq!(error.state(), &WorkflowState::Complete);
        assert_eq!(error.symbol(), &"start");
    }

    #[test]
    fn can_step_probes_current_state() {
        let machine = workflow();

        assert!(machine.can_step(&"start"));
        assert!(!machine.can_step(&"finish"));
    }

    #[test]
    fn initial_state_outside_table_is_allowed() {
        let mut machine = Automaton::new(
            WorkflowState::Orphan,
            [((WorkflowState::Initial, "start"), WorkflowState::Processing)],
            [WorkflowState::Orphan],
        );

        assert!(!machine.states().contains(&WorkflowState::Orphan));
        assert!(machine.accepted());
        assert!(machine.step("start").is_err());
    }

    #[test]
    fn empty_accept_set_never_accepts() {
        let mut machine = Automaton::new(
            "off",
            [(("off", "flip"), "on"), (("on", "flip"), "off")],
            [],
        );

        assert!(!machine.accepted());
        machine.step("flip").unwrap();
        assert!(!machine.accepted());
    }

    #[test]
    fn feed_stops_at_first_failure() {
        let mut machine = workflow();

        let error = machine.feed(["start", "start", "finish"]).unwrap_err();

        assert_eq!(error.state(), &WorkflowState::Processing);
        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn matches_combines_feed_and_accepted() {
        let mut machine = workflow();
        assert!(machine.matches(["start", "finish"]));

        machine.reset();
        assert!(!machine.matches(["start"]));

        machine.reset();
        assert!(!machine.matches(["finish"]));
    }

    #[test]
    fn clones_share_table_but_not_cursor() {
        let mut first = workflow();
        let second = first.clone();

        first.step("start").unwrap();

        assert!(Arc::ptr_eq(first.table(), second.table()));
        assert_eq!(second.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn with_table_shares_one_table() {
        let table = Arc::new(TransitionTable::from_transitions([(
            ("off", "flip"),
            "on",
        )]));

        let mut a = Automaton::with_table(Arc::clone(&table), "off", ["on"]);
        let b = Automaton::with_table(Arc::clone(&table), "off", ["off"]);

        a.step("flip").unwrap();

        assert!(a.accepted());
        assert!(b.accepted());
        assert_eq!(Arc::strong_count(&table), 3);
    }
}
