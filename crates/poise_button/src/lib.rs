//! Poise Fancy Button
//!
//! An elevated, stadium-shaped button that animates between four poses:
//! hidden, icon only, label only, and icon with label.
//!
//! The row inside the button is split into two groups (icon with its
//! padding, label with its padding) which collapse and fade independently
//! while a [`PoseController`] runs the transition.
//!
//! - [`layout`]: pure pose interpolation and row arrangement
//! - [`controller`]: current/lagging pose and the transition timer
//! - [`gesture`]: touch-down / touch-up / pressed recognition
//! - [`button`]: the widget tying them together

pub mod button;
pub mod content;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod metrics;
pub mod pose;
pub mod widget;

pub use button::{fancy_button, ButtonSurface, FancyButton, FancyButtonBuilder, FancyButtonState};
pub use content::{Content, Visual, VisualKind};
pub use controller::{ButtonState, PoseController};
pub use error::ButtonError;
pub use gesture::{Gesture, TouchRecognizer};
pub use layout::{Group, GroupLayout, PaddingRegion, PoseInterpolator, PoseLayout, RowLayout};
pub use metrics::ButtonMetrics;
pub use pose::Pose;
pub use widget::{StatefulWidget, Widget};

/// Everything needed to build and drive a fancy button
pub mod prelude {
    pub use crate::button::{fancy_button, ButtonSurface, FancyButton, FancyButtonState};
    pub use crate::content::Visual;
    pub use crate::pose::Pose;
    pub use crate::widget::{StatefulWidget, Widget};
}
