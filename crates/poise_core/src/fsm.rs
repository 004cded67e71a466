//! Flat state machines for widget interaction states
//!
//! A machine is a table of `(from, event) -> to` transitions. Events with no
//! matching row leave the machine where it is.

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
}

impl Transition {
    pub const fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self { from, event, to }
    }
}

/// Builder for creating state machines
#[derive(Debug)]
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn new(initial: StateId) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
#[derive(Debug)]
pub struct StateMachine {
    current: StateId,
    transitions: Vec<Transition>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current == state
    }

    /// Send an event, returning the resulting state
    pub fn send(&mut self, event: EventId) -> StateId {
        let from = self.current;
        let Some(to) = self
            .transitions
            .iter()
            .find(|t| t.from == from && t.event == event)
            .map(|t| t.to)
        else {
            return from;
        };

        self.current = to;
        tracing::trace!(from, event, to, "fsm transition");
        to
    }
}
