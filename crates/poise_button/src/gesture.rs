//! Press recognition on top of raw pointer events
//!
//! A two-state machine: a press begins with a pointer down inside the surface
//! and ends with the pointer going up, leaving, moving outside or being
//! cancelled. Only a release inside the surface counts as a tap.

use poise_core::events::{event_types, Event};
use poise_core::fsm::{EventId, StateMachine};
use poise_core::Rect;
use smallvec::SmallVec;

/// Press states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const PRESSED: u32 = 1;
}

/// Recogniser inputs, derived from pointer events and hit testing
mod inputs {
    pub const DOWN_INSIDE: u32 = 1;
    pub const UP_INSIDE: u32 = 2;
    pub const ABORT: u32 = 3;
}

/// High-level gesture outputs, in emission order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// A press began
    TouchDown,
    /// A press ended, tapped or not
    TouchUp,
    /// A press ended with a release over the surface
    Pressed,
}

/// Gestures emitted by a single pointer event
pub type Gestures = SmallVec<[Gesture; 3]>;

/// Turns pointer events into touch-down / touch-up / pressed
pub struct TouchRecognizer {
    fsm: StateMachine,
}

impl TouchRecognizer {
    pub fn new() -> Self {
        use inputs::*;
        use states::*;

        let fsm = StateMachine::builder(IDLE)
            .on(IDLE, DOWN_INSIDE, PRESSED)
            .on(PRESSED, UP_INSIDE, IDLE)
            .on(PRESSED, ABORT, IDLE)
            .build();
        Self { fsm }
    }

    pub fn is_pressed(&self) -> bool {
        self.fsm.is_in(states::PRESSED)
    }

    /// Feed one pointer event. `bounds` is the surface, in the same space as
    /// the event position.
    pub fn handle(&mut self, event: &Event, bounds: Rect) -> Gestures {
        match Self::classify(event, bounds) {
            Some(input) => self.apply(input),
            None => Gestures::new(),
        }
    }

    /// End any press in flight without a tap, as when the surface disappears
    pub fn cancel(&mut self) -> Gestures {
        self.apply(inputs::ABORT)
    }

    fn apply(&mut self, input: EventId) -> Gestures {
        let mut gestures = Gestures::new();
        let before = self.fsm.current_state();
        let after = self.fsm.send(input);

        match (before, after, input) {
            (states::IDLE, states::PRESSED, _) => gestures.push(Gesture::TouchDown),
            (states::PRESSED, states::IDLE, inputs::UP_INSIDE) => {
                gestures.push(Gesture::TouchUp);
                gestures.push(Gesture::Pressed);
            }
            (states::PRESSED, states::IDLE, _) => gestures.push(Gesture::TouchUp),
            _ => {}
        }

        if !gestures.is_empty() {
            tracing::trace!(input, ?gestures, "touch gesture");
        }
        gestures
    }

    fn classify(event: &Event, bounds: Rect) -> Option<EventId> {
        let inside = event.position().map(|p| bounds.contains(p));
        match (event.event_type, inside) {
            (event_types::POINTER_DOWN, Some(true)) => Some(inputs::DOWN_INSIDE),
            (event_types::POINTER_UP, Some(true)) => Some(inputs::UP_INSIDE),
            (event_types::POINTER_UP, _) => Some(inputs::ABORT),
            (event_types::POINTER_MOVE, Some(false)) => Some(inputs::ABORT),
            (event_types::POINTER_LEAVE | event_types::POINTER_CANCEL, _) => Some(inputs::ABORT),
            _ => None,
        }
    }
}

impl Default for TouchRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 48.0, 48.0);

    fn pointer(event_type: u32, x: f32) -> Event {
        Event::pointer(event_type, x, 24.0)
    }

    #[test]
    fn test_tap_emits_down_up_pressed() {
        let mut touch = TouchRecognizer::new();

        let down = touch.handle(&pointer(event_types::POINTER_DOWN, 10.0), BOUNDS);
        assert_eq!(down.as_slice(), &[Gesture::TouchDown]);
        assert!(touch.is_pressed());

        let up = touch.handle(&pointer(event_types::POINTER_UP, 12.0), BOUNDS);
        assert_eq!(up.as_slice(), &[Gesture::TouchUp, Gesture::Pressed]);
        assert!(!touch.is_pressed());
    }

    #[test]
    fn test_release_outside_is_not_a_tap() {
        let mut touch = TouchRecognizer::new();
        touch.handle(&pointer(event_types::POINTER_DOWN, 10.0), BOUNDS);

        let up = touch.handle(&pointer(event_types::POINTER_UP, 100.0), BOUNDS);
        assert_eq!(up.as_slice(), &[Gesture::TouchUp]);
    }

    #[test]
    fn test_cancel_and_drag_out_end_the_press() {
        let mut touch = TouchRecognizer::new();
        touch.handle(&pointer(event_types::POINTER_DOWN, 10.0), BOUNDS);
        let cancel = touch.handle(&Event::bare(event_types::POINTER_CANCEL), BOUNDS);
        assert_eq!(cancel.as_slice(), &[Gesture::TouchUp]);

        touch.handle(&pointer(event_types::POINTER_DOWN, 10.0), BOUNDS);
        let moved = touch.handle(&pointer(event_types::POINTER_MOVE, 80.0), BOUNDS);
        assert_eq!(moved.as_slice(), &[Gesture::TouchUp]);
    }

    #[test]
    fn test_cancel_ends_press_once() {
        let mut touch = TouchRecognizer::new();
        assert!(touch.cancel().is_empty());

        touch.handle(&pointer(event_types::POINTER_DOWN, 10.0), BOUNDS);
        assert_eq!(touch.cancel().as_slice(), &[Gesture::TouchUp]);
        assert!(!touch.is_pressed());
        assert!(touch.cancel().is_empty());
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut touch = TouchRecognizer::new();
        assert!(touch
            .handle(&pointer(event_types::POINTER_DOWN, 90.0), BOUNDS)
            .is_empty());
        assert!(touch
            .handle(&pointer(event_types::POINTER_UP, 10.0), BOUNDS)
            .is_empty());
        assert!(touch
            .handle(&pointer(event_types::POINTER_MOVE, 10.0), BOUNDS)
            .is_empty());
    }
}
