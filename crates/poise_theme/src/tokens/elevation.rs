//! Elevation tokens
//!
//! Elevation is expressed in layout units and turned into a drop shadow at
//! render time.

use poise_core::Color;
use serde::Deserialize;

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

/// How an elevation maps to a shadow
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElevationTokens {
    /// Vertical offset per unit of elevation
    pub offset_ratio: f32,
    /// Blur radius per unit of elevation
    pub blur_ratio: f32,
    /// Alpha applied to the theme shadow color
    pub opacity: f32,
}

impl ElevationTokens {
    /// Shadow cast by a surface raised to `elevation`
    pub fn shadow(&self, elevation: f32, color: Color) -> Shadow {
        if elevation <= 0.0 {
            return Shadow::none();
        }
        Shadow {
            offset_x: 0.0,
            offset_y: elevation * self.offset_ratio,
            blur: elevation * self.blur_ratio,
            spread: 0.0,
            color: color.with_alpha(self.opacity),
        }
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self {
            offset_ratio: 0.5,
            blur_ratio: 1.5,
            opacity: 0.24,
        }
    }
}
