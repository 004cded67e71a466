//! Integration tests for FSM-driven animations
//!
//! A state machine decides *when* something animates, the animation crate
//! decides *how far along* it is. These tests wire the two together the way a
//! widget does: a state change restarts the controller.

use poise_animation::{AnimationController, AnimationScheduler, AnimationStatus, Easing};
use poise_core::fsm::StateMachine;
use std::time::Duration;

const COLLAPSED: u32 = 0;
const EXPANDED: u32 = 1;

const TOGGLE: u32 = 1;
const NOOP: u32 = 2;

const FRAME: Duration = Duration::from_millis(16);

fn toggle_machine() -> StateMachine {
    StateMachine::builder(COLLAPSED)
        .on(COLLAPSED, TOGGLE, EXPANDED)
        .on(EXPANDED, TOGGLE, COLLAPSED)
        .build()
}

/// Send `event` and restart `anim` when the state actually changed
fn drive(fsm: &mut StateMachine, anim: &mut AnimationController, event: u32) -> bool {
    let before = fsm.current_state();
    let changed = fsm.send(event) != before;
    if changed {
        anim.forward_from_start();
    }
    changed
}

#[test]
fn test_transition_restarts_animation() {
    let scheduler = AnimationScheduler::new();
    let mut anim = AnimationController::new(&scheduler, Duration::from_millis(96), Easing::Linear);
    let mut fsm = toggle_machine();

    assert!(drive(&mut fsm, &mut anim, TOGGLE));
    assert!(fsm.is_in(EXPANDED));

    let mut frames = 0;
    while scheduler.has_active_tickers() {
        scheduler.tick(FRAME);
        anim.poll();
        frames += 1;
    }
    assert_eq!(frames, 6);
    assert_eq!(anim.status(), AnimationStatus::Completed);

    // Toggling back mid-flight restarts from zero
    drive(&mut fsm, &mut anim, TOGGLE);
    scheduler.tick(FRAME);
    anim.poll();
    assert!(drive(&mut fsm, &mut anim, TOGGLE));
    assert_eq!(anim.value(), 0.0);
    assert!(anim.is_animating());
}

#[test]
fn test_ignored_event_leaves_animation_idle() {
    let scheduler = AnimationScheduler::new();
    let mut anim = AnimationController::new(&scheduler, Duration::from_millis(96), Easing::Linear);
    let mut fsm = toggle_machine();

    assert!(!drive(&mut fsm, &mut anim, NOOP));
    assert!(fsm.is_in(COLLAPSED));
    assert_eq!(anim.status(), AnimationStatus::Dismissed);
    assert_eq!(scheduler.tick(FRAME), 0);
}
