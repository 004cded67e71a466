//! Pose interpolation and row layout
//!
//! The button row is five regions wide:
//!
//! ```text
//! | A | icon | B | C | label | D |
//! \_____________/ \_____________/
//!    icon group     label group
//! ```
//!
//! Each group collapses and fades on its own. For a transition from a
//! lagging pose to a leading pose at progress `t`, a group's width factor and
//! opacity move from their steady value in the lagging pose (at `t = 0`) to
//! their steady value in the leading pose (at `t = 1`). Steady values are 1
//! when the pose shows the group's element and 0 otherwise.
//!
//! Everything in this module is pure: the same inputs always produce the same
//! layout.

use crate::content::{Content, Visual};
use crate::error::ButtonError;
use crate::metrics::ButtonMetrics;
use crate::pose::Pose;
use poise_animation::{Easing, Interval};
use poise_core::{Rect, Size};

/// Share of the transition an appearing group waits before fading in, and a
/// disappearing group takes to fade out.
const FADE_OVERLAP: f32 = 1.0 / 3.0;

/// One of the two independently animated halves of the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Icon,
    Label,
}

impl Group {
    pub fn visible_in(self, pose: Pose) -> bool {
        match self {
            Group::Icon => pose.shows_icon(),
            Group::Label => pose.shows_label(),
        }
    }

    fn steady(self, pose: Pose) -> f32 {
        if self.visible_in(pose) {
            1.0
        } else {
            0.0
        }
    }
}

/// The four padding regions of the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingRegion {
    BeforeIcon,
    AfterIcon,
    BeforeLabel,
    AfterLabel,
}

/// Instantaneous geometry of one group
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupLayout {
    pub width_factor: f32,
    pub opacity: f32,
    pub leading_padding: f32,
    pub trailing_padding: f32,
}

impl GroupLayout {
    /// Width the group occupies for a child of `child_width`
    pub fn width(&self, child_width: f32) -> f32 {
        self.width_factor * (self.leading_padding + child_width + self.trailing_padding)
    }
}

/// Both groups plus the surface scale at one instant of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseLayout {
    pub to: Pose,
    pub from: Option<Pose>,
    pub progress: f32,
    pub icon: GroupLayout,
    pub label: GroupLayout,
    pub surface_scale: f32,
}

impl PoseLayout {
    /// Layout with the default metrics and curve
    pub fn compute(
        content: &Content,
        to: Pose,
        from: Option<Pose>,
        progress: f32,
    ) -> Result<Self, ButtonError> {
        PoseInterpolator::default().layout(content, to, from, progress)
    }

    pub fn group(&self, group: Group) -> &GroupLayout {
        match group {
            Group::Icon => &self.icon,
            Group::Label => &self.label,
        }
    }

    /// Place both groups in a single row of minimum extent.
    ///
    /// The icon group hugs the leading edge and the label group hugs the
    /// trailing edge. Children keep their natural size and are clipped to
    /// their group while it is collapsing.
    pub fn arrange(&self, content: &Content) -> RowLayout {
        let height = [content.icon(), content.label()]
            .into_iter()
            .flatten()
            .map(|visual| visual.size().height)
            .fold(0.0_f32, f32::max);

        let icon = content.icon().map(|visual| {
            let width = self.icon.width(visual.size().width);
            let bounds = Rect::new(0.0, 0.0, width, height);
            GroupFrame::place(bounds, visual, self.icon.leading_padding, height, self.icon.opacity)
        });

        let label_x = icon.as_ref().map_or(0.0, |frame| frame.bounds.width());
        let label = content.label().map(|visual| {
            let width = self.label.width(visual.size().width);
            let bounds = Rect::new(label_x, 0.0, width, height);
            let content_x = width - self.label.trailing_padding - visual.size().width;
            GroupFrame::place(bounds, visual, content_x, height, self.label.opacity)
        });

        let width = label_x + label.as_ref().map_or(0.0, |frame| frame.bounds.width());
        RowLayout {
            size: Size::new(width, height),
            icon,
            label,
        }
    }
}

/// Where a group and its child end up in the row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupFrame {
    /// Space the group occupies
    pub bounds: Rect,
    /// Child at its natural size
    pub content: Rect,
    /// Visible part of the child
    pub clip: Rect,
    pub opacity: f32,
}

impl GroupFrame {
    /// `offset_x` is the child's x relative to the group's leading edge
    fn place(bounds: Rect, visual: &Visual, offset_x: f32, row_height: f32, opacity: f32) -> Self {
        let size = visual.size();
        let content = Rect::new(
            bounds.x() + offset_x,
            (row_height - size.height) / 2.0,
            size.width,
            size.height,
        );
        Self {
            bounds,
            content,
            clip: bounds.intersect(&content),
            opacity,
        }
    }
}

/// The arranged two-group row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    pub size: Size,
    pub icon: Option<GroupFrame>,
    pub label: Option<GroupFrame>,
}

/// Computes per-frame group geometry from poses and progress
#[derive(Clone, Debug, PartialEq)]
pub struct PoseInterpolator {
    metrics: ButtonMetrics,
    easing: Easing,
}

impl PoseInterpolator {
    pub fn new(metrics: ButtonMetrics, easing: Easing) -> Self {
        Self { metrics, easing }
    }

    pub fn metrics(&self) -> &ButtonMetrics {
        &self.metrics
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Full layout for a transition, validating the lagging pose
    pub fn layout(
        &self,
        content: &Content,
        to: Pose,
        from: Option<Pose>,
        progress: f32,
    ) -> Result<PoseLayout, ButtonError> {
        if progress.is_nan() {
            return Err(ButtonError::InvalidProgress { progress });
        }
        if progress > 0.0 && from.is_none() {
            return Err(ButtonError::MissingLaggingPose { progress });
        }
        Ok(self.interpolate(content, to, from, progress))
    }

    /// Layout without validation; a missing lagging pose means "at rest".
    pub(crate) fn interpolate(
        &self,
        content: &Content,
        to: Pose,
        from: Option<Pose>,
        progress: f32,
    ) -> PoseLayout {
        let t = progress.clamp(0.0, 1.0);
        let group = |group: Group, present: bool, leading, trailing| {
            if !present {
                return GroupLayout {
                    leading_padding: self.padding(leading),
                    trailing_padding: self.padding(trailing),
                    ..GroupLayout::default()
                };
            }
            GroupLayout {
                width_factor: self.width_factor(group, to, from, t),
                opacity: self.opacity(group, to, from, t),
                leading_padding: self.padding(leading),
                trailing_padding: self.padding(trailing),
            }
        };

        PoseLayout {
            to,
            from,
            progress: t,
            icon: group(
                Group::Icon,
                content.icon().is_some(),
                PaddingRegion::BeforeIcon,
                PaddingRegion::AfterIcon,
            ),
            label: group(
                Group::Label,
                content.label().is_some(),
                PaddingRegion::BeforeLabel,
                PaddingRegion::AfterLabel,
            ),
            surface_scale: self.surface_scale(to, from, t),
        }
    }

    /// Fraction of its natural width a group occupies
    pub fn width_factor(&self, group: Group, to: Pose, from: Option<Pose>, t: f32) -> f32 {
        let from = from.unwrap_or(to);
        lerp(group.steady(from), group.steady(to), self.easing.apply(t))
    }

    /// Group opacity; appearing groups fade in late, disappearing ones early
    pub fn opacity(&self, group: Group, to: Pose, from: Option<Pose>, t: f32) -> f32 {
        let (start, end) = (group.steady(from.unwrap_or(to)), group.steady(to));
        let curve = if end > start {
            Interval::new(FADE_OVERLAP, 1.0, self.easing)
        } else {
            Interval::new(0.0, 1.0 - FADE_OVERLAP, self.easing)
        };
        lerp(start, end, curve.apply(t.clamp(0.0, 1.0)))
    }

    /// Padding for a region, never negative
    pub fn padding(&self, region: PaddingRegion) -> f32 {
        let value = match region {
            PaddingRegion::BeforeIcon => self.metrics.before_icon,
            PaddingRegion::AfterIcon => self.metrics.after_icon,
            PaddingRegion::BeforeLabel => self.metrics.before_label,
            PaddingRegion::AfterLabel => self.metrics.after_label,
        };
        value.max(0.0)
    }

    /// Scale of the whole surface: 0 while hidden, 1 in any visible pose
    pub fn surface_scale(&self, to: Pose, from: Option<Pose>, t: f32) -> f32 {
        let steady = |pose: Pose| if pose.is_hidden() { 0.0 } else { 1.0 };
        lerp(steady(from.unwrap_or(to)), steady(to), self.easing.apply(t))
    }
}

impl Default for PoseInterpolator {
    fn default() -> Self {
        Self::new(ButtonMetrics::default(), Easing::STANDARD)
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
