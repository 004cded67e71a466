//! Motion tokens: durations and easing for widget transitions

use poise_animation::Easing;
use serde::Deserialize;
use std::time::Duration;

/// Transition timing shared by animated widgets
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionTokens {
    /// Duration of a pose change, in milliseconds
    pub pose_transition_ms: u32,
    /// Curve applied to pose transitions
    pub easing: Easing,
}

impl MotionTokens {
    pub fn pose_transition(&self) -> Duration {
        Duration::from_millis(u64::from(self.pose_transition_ms))
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            pose_transition_ms: 233,
            easing: Easing::STANDARD,
        }
    }
}
