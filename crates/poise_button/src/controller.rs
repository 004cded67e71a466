//! Pose state and its transition animation

use crate::pose::Pose;
use poise_animation::{AnimationController, AnimationScheduler, Easing};
use std::time::Duration;

/// Snapshot of the pose state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonState {
    pub current: Pose,
    /// Always `Some` once a transition has started
    pub previous: Option<Pose>,
    /// Linear transition progress in `[0, 1]`
    pub progress: f32,
}

/// Owns the current and lagging poses and the transition timer
///
/// Starts out [`Pose::Hidden`]. The transition animation runs linearly; the
/// layout applies the visual curve on top.
#[derive(Debug)]
pub struct PoseController {
    current: Pose,
    previous: Option<Pose>,
    animation: AnimationController,
}

impl PoseController {
    pub fn new(scheduler: &AnimationScheduler, duration: Duration) -> Self {
        Self {
            current: Pose::Hidden,
            previous: None,
            animation: AnimationController::new(scheduler, duration, Easing::Linear),
        }
    }

    pub fn pose(&self) -> Pose {
        self.current
    }

    pub fn previous_pose(&self) -> Option<Pose> {
        self.previous
    }

    pub fn progress(&self) -> f32 {
        self.animation.raw_progress()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn duration(&self) -> Duration {
        self.animation.duration()
    }

    pub fn state(&self) -> ButtonState {
        ButtonState {
            current: self.current,
            previous: self.previous,
            progress: self.progress(),
        }
    }

    /// Move to `pose`, restarting the transition from 0.
    ///
    /// Returns false (and changes nothing) when `pose` is already current.
    /// A call during a running transition lags from the pose that was current
    /// at the time of the call, not from wherever the animation had got to.
    pub fn set_pose(&mut self, pose: Pose) -> bool {
        if pose == self.current {
            return false;
        }

        tracing::debug!(
            from = ?self.current,
            to = ?pose,
            interrupted = self.animation.is_animating(),
            "pose transition"
        );
        self.previous = Some(self.current);
        self.current = pose;
        self.animation.forward_from_start();
        true
    }

    /// Pick up frame time delivered by the scheduler.
    ///
    /// Returns the new progress when it moved since the last poll.
    pub fn poll(&mut self) -> Option<f32> {
        let progress = self.animation.poll()?;
        tracing::trace!(pose = ?self.current, progress, "pose progress");
        Some(progress)
    }
}

impl Drop for PoseController {
    fn drop(&mut self) {
        if self.animation.is_animating() {
            tracing::debug!(pose = ?self.current, "pose controller dropped mid-transition");
        }
    }
}
