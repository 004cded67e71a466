//! Fancy button widget
//!
//! A stadium-shaped, elevated button that morphs between four poses:
//! hidden, icon only, label only, and icon with label.
//!
//! - The configuration ([`FancyButton`]) is an immutable, cloneable value
//! - Mounting it produces [`FancyButtonState`], which owns the pose
//!   controller and the touch recogniser
//! - Unset colors come from the ambient theme at render time
//!
//! # Example
//!
//! ```rust
//! use poise_animation::AnimationScheduler;
//! use poise_button::prelude::*;
//! use poise_core::Size;
//! use std::time::Duration;
//!
//! let scheduler = AnimationScheduler::new();
//! let fab = fancy_button()
//!     .icon(Visual::icon("edit", Size::new(24.0, 24.0)))
//!     .label(Visual::text("Compose", Size::new(72.0, 20.0)))
//!     .on_pressed(|| println!("compose"))
//!     .build()
//!     .unwrap();
//!
//! let mut state = fab.mount(&scheduler);
//! state.set_pose(Pose::IconAndLabel);
//!
//! while scheduler.has_active_tickers() {
//!     scheduler.tick(Duration::from_millis(16));
//!     state.update();
//! }
//! assert_eq!(state.layout().label.opacity, 1.0);
//! ```

use crate::content::{Content, Visual};
use crate::controller::{ButtonState, PoseController};
use crate::error::ButtonError;
use crate::gesture::{Gesture, TouchRecognizer};
use crate::layout::{PoseInterpolator, PoseLayout, RowLayout};
use crate::metrics::ButtonMetrics;
use crate::pose::Pose;
use crate::widget::{StatefulWidget, Widget};
use poise_animation::{AnimationScheduler, Easing};
use poise_core::{Color, Event, Point, Rect, Size};
use poise_theme::{ColorToken, Shadow, Theme, ThemeState};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Interaction callback
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Fancy button configuration
#[derive(Clone)]
pub struct FancyButton {
    background: Option<Color>,
    foreground: Option<Color>,
    content: Content,
    initial_pose: Pose,
    transition: Option<Duration>,
    easing: Option<Easing>,
    metrics: ButtonMetrics,
    on_pressed: Option<Callback>,
    on_touch_down: Option<Callback>,
    on_touch_up: Option<Callback>,
}

impl FancyButton {
    pub fn builder() -> FancyButtonBuilder {
        FancyButtonBuilder::default()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn initial_pose(&self) -> Pose {
        self.initial_pose
    }

    pub fn metrics(&self) -> &ButtonMetrics {
        &self.metrics
    }

    /// Mount with an explicit theme supplying the default motion
    pub fn mount_with_theme(
        &self,
        scheduler: &AnimationScheduler,
        theme: &Theme,
    ) -> FancyButtonState {
        let motion = theme.motion();
        let duration = self.transition.unwrap_or_else(|| motion.pose_transition());
        let easing = self.easing.unwrap_or(motion.easing);

        let mut controller = PoseController::new(scheduler, duration);
        // Entrance: every button mounts hidden and animates into its first pose
        controller.set_pose(self.initial_pose);
        tracing::debug!(pose = ?self.initial_pose, ?duration, "fancy button mounted");

        FancyButtonState {
            interpolator: PoseInterpolator::new(self.metrics.clone(), easing),
            config: self.clone(),
            controller,
            touch: TouchRecognizer::new(),
            needs_render: true,
        }
    }
}

impl StatefulWidget for FancyButton {
    type State = FancyButtonState;

    /// Mount against the ambient theme
    fn mount(&self, scheduler: &AnimationScheduler) -> FancyButtonState {
        self.mount_with_theme(scheduler, &ThemeState::get().theme())
    }
}

impl fmt::Debug for FancyButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FancyButton")
            .field("content", &self.content)
            .field("initial_pose", &self.initial_pose)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("on_pressed", &self.on_pressed.is_some())
            .finish_non_exhaustive()
    }
}

/// Create a fancy button builder
pub fn fancy_button() -> FancyButtonBuilder {
    FancyButton::builder()
}

/// Builder for [`FancyButton`]
#[derive(Default)]
pub struct FancyButtonBuilder {
    background: Option<Color>,
    foreground: Option<Color>,
    icon: Option<Visual>,
    label: Option<Visual>,
    initial_pose: Pose,
    transition: Option<Duration>,
    easing: Option<Easing>,
    metrics: ButtonMetrics,
    on_pressed: Option<Callback>,
    on_touch_down: Option<Callback>,
    on_touch_up: Option<Callback>,
}

impl FancyButtonBuilder {
    /// Set the background color (theme secondary when unset)
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set the icon/label color (theme on-secondary when unset)
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn icon(mut self, icon: Visual) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn label(mut self, label: Visual) -> Self {
        self.label = Some(label);
        self
    }

    /// Pose the entrance animation ends in
    pub fn initial_pose(mut self, pose: Pose) -> Self {
        self.initial_pose = pose;
        self
    }

    /// Override the theme's pose transition duration
    pub fn transition(mut self, duration: Duration) -> Self {
        self.transition = Some(duration);
        self
    }

    /// Override the theme's pose transition curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn metrics(mut self, metrics: ButtonMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Called when a press completes over the button
    pub fn on_pressed<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_pressed = Some(Arc::new(callback));
        self
    }

    /// Called when a press begins
    pub fn on_touch_down<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_touch_down = Some(Arc::new(callback));
        self
    }

    /// Called when a press ends, whether or not it was a tap
    pub fn on_touch_up<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_touch_up = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> Result<FancyButton, ButtonError> {
        Ok(FancyButton {
            background: self.background,
            foreground: self.foreground,
            content: Content::new(self.icon, self.label)?,
            initial_pose: self.initial_pose,
            transition: self.transition,
            easing: self.easing,
            metrics: self.metrics,
            on_pressed: self.on_pressed,
            on_touch_down: self.on_touch_down,
            on_touch_up: self.on_touch_up,
        })
    }
}

/// What the button draws for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSurface {
    /// Surface size before `scale`, never below the minimum size
    pub size: Size,
    /// Half the height: a stadium
    pub corner_radius: f32,
    pub elevation: f32,
    pub shadow: Shadow,
    pub background: Color,
    pub foreground: Color,
    /// Entrance/exit scale around the surface center
    pub scale: f32,
    /// Offset of the row inside the surface (centered)
    pub content_origin: Point,
    pub row: RowLayout,
    pub layout: PoseLayout,
    /// Touch handling is always on, even without `on_pressed`
    pub interactive: bool,
}

impl ButtonSurface {
    /// Icon tint with the icon group's opacity applied
    pub fn icon_color(&self) -> Color {
        self.foreground.fade(self.layout.icon.opacity)
    }

    /// Label color with the label group's opacity applied
    pub fn label_color(&self) -> Color {
        self.foreground.fade(self.layout.label.opacity)
    }
}

/// Live state of a mounted fancy button
pub struct FancyButtonState {
    config: FancyButton,
    controller: PoseController,
    touch: TouchRecognizer,
    interpolator: PoseInterpolator,
    needs_render: bool,
}

impl FancyButtonState {
    pub fn config(&self) -> &FancyButton {
        &self.config
    }

    pub fn pose(&self) -> Pose {
        self.controller.pose()
    }

    /// Change pose; a no-op when `pose` is already current
    pub fn set_pose(&mut self, pose: Pose) -> bool {
        let changed = self.controller.set_pose(pose);
        self.needs_render |= changed;
        changed
    }

    pub fn state(&self) -> ButtonState {
        self.controller.state()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn is_pressed(&self) -> bool {
        self.touch.is_pressed()
    }

    pub fn is_interactive(&self) -> bool {
        true
    }

    /// Group geometry for the current instant
    pub fn layout(&self) -> PoseLayout {
        let state = self.controller.state();
        self.interpolator.interpolate(
            &self.config.content,
            state.current,
            state.previous,
            state.progress,
        )
    }

    /// Unscaled surface size
    pub fn surface_size(&self) -> Size {
        self.layout()
            .arrange(&self.config.content)
            .size
            .max(self.config.metrics.min_size)
    }

    /// Pressable area: the surface at its current scale, centered.
    /// `None` while the surface is scaled down to nothing.
    pub fn hit_bounds(&self) -> Option<Rect> {
        let scale = self.layout().surface_scale;
        if scale <= 0.0 {
            return None;
        }
        let size = self.surface_size();
        let (width, height) = (size.width * scale, size.height * scale);
        Some(Rect::new(
            (size.width - width) / 2.0,
            (size.height - height) / 2.0,
            width,
            height,
        ))
    }

    /// Render against the ambient theme
    pub fn render_ambient(&self) -> ButtonSurface {
        self.render(&ThemeState::get().theme())
    }

    /// Tear down, releasing the transition ticker
    pub fn unmount(self) {
        tracing::debug!(pose = ?self.pose(), animating = self.is_animating(), "fancy button unmounted");
    }

    fn emit(&self, gesture: Gesture) {
        let callback = match gesture {
            Gesture::TouchDown => &self.config.on_touch_down,
            Gesture::TouchUp => &self.config.on_touch_up,
            Gesture::Pressed => &self.config.on_pressed,
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl Widget for FancyButtonState {
    type Output = ButtonSurface;

    fn handle_event(&mut self, event: &Event) -> bool {
        let gestures = match self.hit_bounds() {
            Some(bounds) => self.touch.handle(event, bounds),
            None => self.touch.cancel(),
        };
        for gesture in &gestures {
            self.emit(*gesture);
        }
        !gestures.is_empty()
    }

    fn update(&mut self) -> bool {
        let moved = self.controller.poll().is_some();
        std::mem::take(&mut self.needs_render) || moved
    }

    fn render(&self, theme: &Theme) -> ButtonSurface {
        let layout = self.layout();
        let row = layout.arrange(&self.config.content);
        let metrics = &self.config.metrics;
        let size = row.size.max(metrics.min_size);

        ButtonSurface {
            size,
            corner_radius: size.height / 2.0,
            elevation: metrics.elevation,
            shadow: theme
                .elevation()
                .shadow(metrics.elevation, theme.color(ColorToken::Shadow)),
            background: self
                .config
                .background
                .unwrap_or_else(|| theme.color(ColorToken::Secondary)),
            foreground: self
                .config
                .foreground
                .unwrap_or_else(|| theme.color(ColorToken::OnSecondary)),
            scale: layout.surface_scale,
            content_origin: Point::new(
                (size.width - row.size.width) / 2.0,
                (size.height - row.size.height) / 2.0,
            ),
            row,
            layout,
            interactive: self.is_interactive(),
        }
    }
}

impl fmt::Debug for FancyButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FancyButtonState")
            .field("state", &self.state())
            .field("pressed", &self.is_pressed())
            .finish_non_exhaustive()
    }
}
