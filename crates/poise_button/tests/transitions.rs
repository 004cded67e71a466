//! End-to-end behaviour of a mounted fancy button
//!
//! Time is driven explicitly through the scheduler, one 16ms frame at a time.

use poise_animation::AnimationScheduler;
use poise_button::prelude::*;
use poise_button::ButtonError;
use poise_core::events::event_types;
use poise_core::{Event, Size};
use poise_theme::Theme;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn icon() -> Visual {
    Visual::icon("send", Size::new(24.0, 24.0))
}

fn label() -> Visual {
    Visual::text("Send", Size::new(40.0, 20.0))
}

fn settle(scheduler: &AnimationScheduler, state: &mut FancyButtonState) -> usize {
    let mut frames = 0;
    while scheduler.has_active_tickers() {
        scheduler.tick(FRAME);
        state.update();
        frames += 1;
    }
    frames
}

#[test]
fn label_only_button_enters_from_hidden() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button()
        .label(label())
        .initial_pose(Pose::Label)
        .build()
        .unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());

    let entrance = state.state();
    assert_eq!(entrance.previous, Some(Pose::Hidden));
    assert_eq!(entrance.current, Pose::Label);
    assert_eq!(entrance.progress, 0.0);

    let first = state.layout();
    assert_eq!(first.label.width_factor, 0.0);
    assert_eq!(first.surface_scale, 0.0);

    assert!(settle(&scheduler, &mut state) > 1);

    let done = state.layout();
    assert_eq!((done.icon.width_factor, done.icon.opacity), (0.0, 0.0));
    assert_eq!((done.label.width_factor, done.label.opacity), (1.0, 1.0));
    assert_eq!(done.surface_scale, 1.0);
}

#[test]
fn expanding_from_icon_to_icon_and_label() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button().icon(icon()).label(label()).build().unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    settle(&scheduler, &mut state);
    assert_eq!(state.pose(), Pose::Icon);

    assert!(state.set_pose(Pose::IconAndLabel));
    let started = state.state();
    assert_eq!(started.previous, Some(Pose::Icon));
    assert_eq!(started.progress, 0.0);

    let mut widths = Vec::new();
    while scheduler.has_active_tickers() {
        scheduler.tick(FRAME);
        if state.update() {
            widths.push(state.layout().label.width_factor);
        }
    }
    assert!(widths.windows(2).all(|w| w[0] <= w[1]));

    let done = state.layout();
    assert_eq!((done.icon.width_factor, done.icon.opacity), (1.0, 1.0));
    assert_eq!((done.label.width_factor, done.label.opacity), (1.0, 1.0));
}

#[test]
fn rapid_pose_changes_lag_from_the_latest_pose() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button().icon(icon()).label(label()).build().unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    settle(&scheduler, &mut state);

    state.set_pose(Pose::Label);
    for _ in 0..3 {
        scheduler.tick(FRAME);
        state.update();
    }
    assert!(state.is_animating());
    state.set_pose(Pose::IconAndLabel);

    let snapshot = state.state();
    assert_eq!(snapshot.previous, Some(Pose::Label));
    assert_eq!(snapshot.progress, 0.0);

    // The new run starts from the Label steady state, not from mid-flight
    let layout = state.layout();
    assert_eq!(layout.icon.width_factor, 0.0);
    assert_eq!(layout.label.width_factor, 1.0);
}

#[test]
fn setting_the_current_pose_changes_nothing() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button().icon(icon()).build().unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    scheduler.tick(FRAME);
    state.update();

    let before = state.state();
    assert!(!state.set_pose(Pose::Icon));
    assert_eq!(state.state(), before);
    assert!(!state.update());
}

#[test]
fn tap_fires_down_up_pressed_in_order() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let (down, up, pressed) = (log.clone(), log.clone(), log.clone());

    let fab = fancy_button()
        .icon(icon())
        .on_touch_down(move || down.lock().unwrap().push("touch-down"))
        .on_touch_up(move || up.lock().unwrap().push("touch-up"))
        .on_pressed(move || pressed.lock().unwrap().push("pressed"))
        .build()
        .unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    settle(&scheduler, &mut state);

    state.handle_event(&Event::pointer(event_types::POINTER_DOWN, 20.0, 20.0));
    state.handle_event(&Event::pointer(event_types::POINTER_UP, 22.0, 21.0));

    assert_eq!(*log.lock().unwrap(), vec!["touch-down", "touch-up", "pressed"]);
}

#[test]
fn cancelled_press_skips_pressed() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let (up, pressed) = (log.clone(), log.clone());

    let fab = fancy_button()
        .label(label())
        .initial_pose(Pose::Label)
        .on_touch_up(move || up.lock().unwrap().push("touch-up"))
        .on_pressed(move || pressed.lock().unwrap().push("pressed"))
        .build()
        .unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    settle(&scheduler, &mut state);

    state.handle_event(&Event::pointer(event_types::POINTER_DOWN, 20.0, 20.0));
    state.handle_event(&Event::bare(event_types::POINTER_CANCEL));

    assert_eq!(*log.lock().unwrap(), vec!["touch-up"]);
}

#[test]
fn hidden_button_does_not_fire_callbacks() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let (down, up, pressed) = (log.clone(), log.clone(), log.clone());

    let fab = fancy_button()
        .icon(icon())
        .on_touch_down(move || down.lock().unwrap().push("touch-down"))
        .on_touch_up(move || up.lock().unwrap().push("touch-up"))
        .on_pressed(move || pressed.lock().unwrap().push("pressed"))
        .build()
        .unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());
    settle(&scheduler, &mut state);
    state.set_pose(Pose::Hidden);
    settle(&scheduler, &mut state);

    let surface = state.render(&Theme::light());
    assert_eq!(surface.scale, 0.0);
    assert_eq!(surface.size, Size::new(48.0, 48.0));

    state.handle_event(&Event::pointer(event_types::POINTER_DOWN, 20.0, 20.0));
    state.handle_event(&Event::pointer(event_types::POINTER_UP, 20.0, 20.0));
    assert!(log.lock().unwrap().is_empty());

    // Tappable again once it comes back
    state.set_pose(Pose::Icon);
    settle(&scheduler, &mut state);
    state.handle_event(&Event::pointer(event_types::POINTER_DOWN, 20.0, 20.0));
    state.handle_event(&Event::pointer(event_types::POINTER_UP, 20.0, 20.0));
    assert_eq!(*log.lock().unwrap(), vec!["touch-down", "touch-up", "pressed"]);
}

#[test]
fn construction_requires_icon_or_label() {
    assert_eq!(
        fancy_button().initial_pose(Pose::Label).build().unwrap_err(),
        ButtonError::MissingContent
    );
}

#[test]
fn teardown_mid_transition_releases_the_ticker() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button().icon(icon()).label(label()).build().unwrap();

    let mut first = fab.mount_with_theme(&scheduler, &Theme::light());
    let second = fab.mount_with_theme(&scheduler, &Theme::light());
    assert_eq!(scheduler.ticker_count(), 2);

    scheduler.tick(FRAME);
    first.update();
    drop(first);
    assert_eq!(scheduler.ticker_count(), 1);

    second.unmount();
    assert_eq!(scheduler.ticker_count(), 0);
    assert!(!scheduler.has_active_tickers());
}

#[test]
fn builder_transition_overrides_theme_motion() {
    let scheduler = AnimationScheduler::new();
    let fab = fancy_button()
        .icon(icon())
        .transition(Duration::from_millis(32))
        .build()
        .unwrap();
    let mut state = fab.mount_with_theme(&scheduler, &Theme::light());

    assert_eq!(settle(&scheduler, &mut state), 2);
}
