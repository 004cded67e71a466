//! Color tokens for theming

use poise_core::Color;
use serde::Deserialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    Surface,
    OnSurface,
    Shadow,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub shadow: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::OnPrimary => self.on_primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::OnSecondary => self.on_secondary,
            ColorToken::Surface => self.surface,
            ColorToken::OnSurface => self.on_surface,
            ColorToken::Shadow => self.shadow,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::OnSecondary => &mut self.on_secondary,
            ColorToken::Surface => &mut self.surface,
            ColorToken::OnSurface => &mut self.on_surface,
            ColorToken::Shadow => &mut self.shadow,
        }
    }

    /// Replace a single token
    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    /// Baseline light palette
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x6200EE),
            on_primary: Color::WHITE,
            secondary: Color::from_hex(0x03DAC6),
            on_secondary: Color::BLACK,
            surface: Color::WHITE,
            on_surface: Color::BLACK,
            shadow: Color::BLACK,
        }
    }

    /// Baseline dark palette
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0xBB86FC),
            on_primary: Color::BLACK,
            secondary: Color::from_hex(0x03DAC6),
            on_secondary: Color::BLACK,
            surface: Color::from_hex(0x121212),
            on_surface: Color::WHITE,
            shadow: Color::BLACK,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// Partial color table as written in a theme file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOverrides {
    pub primary: Option<Color>,
    pub on_primary: Option<Color>,
    pub secondary: Option<Color>,
    pub on_secondary: Option<Color>,
    pub surface: Option<Color>,
    pub on_surface: Option<Color>,
    pub shadow: Option<Color>,
}

impl ColorOverrides {
    /// Write every present entry into `tokens`
    pub fn apply(&self, tokens: &mut ColorTokens) {
        let entries = [
            (ColorToken::Primary, self.primary),
            (ColorToken::OnPrimary, self.on_primary),
            (ColorToken::Secondary, self.secondary),
            (ColorToken::OnSecondary, self.on_secondary),
            (ColorToken::Surface, self.surface),
            (ColorToken::OnSurface, self.on_surface),
            (ColorToken::Shadow, self.shadow),
        ];
        for (token, color) in entries {
            if let Some(color) = color {
                tokens.set(token, color);
            }
        }
    }
}
