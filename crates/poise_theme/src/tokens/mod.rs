//! Design tokens for theming
//!
//! - Colors
//! - Elevation shadows
//! - Motion durations and easings

mod color;
mod elevation;
mod motion;

pub use color::*;
pub use elevation::*;
pub use motion::*;
