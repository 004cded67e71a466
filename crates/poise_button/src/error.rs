use thiserror::Error;

/// Construction errors for the fancy button and its layout
///
/// All are caller mistakes rather than runtime conditions; nothing in the
/// widget retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ButtonError {
    #[error("a fancy button needs an icon, a label, or both")]
    MissingContent,

    #[error("transition progress {progress} needs a pose to transition from")]
    MissingLaggingPose { progress: f32 },

    #[error("transition progress must be a number, got {progress}")]
    InvalidProgress { progress: f32 },
}
