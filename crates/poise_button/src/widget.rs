//! Widget roles
//!
//! A widget is split into an immutable configuration value and the live
//! state mounted from it. The host keeps the state across frames and drops it
//! on unmount.

use poise_animation::AnimationScheduler;
use poise_core::Event;
use poise_theme::Theme;

/// Immutable configuration that can be mounted into live state
pub trait StatefulWidget {
    type State: Widget;

    /// Create the live state, allocating any tickers from `scheduler`
    fn mount(&self, scheduler: &AnimationScheduler) -> Self::State;
}

/// Live widget state
pub trait Widget {
    /// What `render` produces for the host to draw
    type Output;

    /// Handle an input event. Returns true when the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Pick up animation progress after a scheduler tick.
    /// Returns true when the widget needs to be rendered again.
    fn update(&mut self) -> bool;

    /// Render against the given theme
    fn render(&self, theme: &Theme) -> Self::Output;
}
