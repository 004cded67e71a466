//! Fixed-duration forward animations
//!
//! An [`AnimationController`] runs a value from 0 to 1 over a fixed duration,
//! driven by its own [`Ticker`]. Owners call [`AnimationController::poll`]
//! after each scheduler tick to learn whether the value moved.

use crate::easing::Easing;
use crate::scheduler::{AnimationScheduler, Ticker};
use std::time::Duration;

/// Lifecycle of a controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Never started, value is 0
    #[default]
    Dismissed,
    /// Running toward 1
    Forward,
    /// Reached 1, ticker stopped
    Completed,
}

/// A 0 → 1 animation over a fixed duration
#[derive(Debug)]
pub struct AnimationController {
    ticker: Ticker,
    duration: Duration,
    easing: Easing,
    status: AnimationStatus,
    last_value: f32,
}

impl AnimationController {
    pub fn new(scheduler: &AnimationScheduler, duration: Duration, easing: Easing) -> Self {
        Self {
            ticker: scheduler.create_ticker("animation-controller"),
            duration,
            easing,
            status: AnimationStatus::Dismissed,
            last_value: 0.0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Whether the controller is consuming frames
    pub fn is_animating(&self) -> bool {
        self.status == AnimationStatus::Forward
    }

    /// Restart from 0, discarding any in-flight run
    pub fn forward_from_start(&mut self) {
        self.ticker.start();
        self.status = AnimationStatus::Forward;
        self.last_value = 0.0;
    }

    /// Linear progress in `[0, 1]`
    pub fn raw_progress(&self) -> f32 {
        match self.status {
            AnimationStatus::Dismissed => 0.0,
            AnimationStatus::Completed => 1.0,
            AnimationStatus::Forward => {
                if self.duration.is_zero() {
                    return 1.0;
                }
                let elapsed = self.ticker.elapsed().as_secs_f64();
                (elapsed / self.duration.as_secs_f64()).min(1.0) as f32
            }
        }
    }

    /// Eased progress in `[0, 1]`
    pub fn value(&self) -> f32 {
        self.easing.apply(self.raw_progress())
    }

    /// Fold in frame time delivered since the last poll.
    ///
    /// Returns the new value when it changed. Reaching 1 completes the run and
    /// stops the ticker, so the scheduler stops asking for frames.
    pub fn poll(&mut self) -> Option<f32> {
        if self.status != AnimationStatus::Forward {
            return None;
        }

        if self.raw_progress() >= 1.0 {
            self.ticker.stop();
            self.status = AnimationStatus::Completed;
            tracing::trace!(duration = ?self.duration, "animation completed");
        }

        let value = self.value();
        if value == self.last_value {
            return None;
        }
        self.last_value = value;
        Some(value)
    }
}
