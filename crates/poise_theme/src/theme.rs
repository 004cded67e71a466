//! Themes, color schemes and theme files

use crate::tokens::*;
use serde::Deserialize;
use thiserror::Error;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Errors raised while loading a theme file
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("pose transition must last at least 1ms")]
    ZeroDuration,
}

/// A resolved set of tokens for one color scheme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    scheme: ColorScheme,
    colors: ColorTokens,
    elevation: ElevationTokens,
    motion: MotionTokens,
}

impl Theme {
    pub fn light() -> Self {
        Self::new(ColorScheme::Light, ColorTokens::light())
    }

    pub fn dark() -> Self {
        Self::new(ColorScheme::Dark, ColorTokens::dark())
    }

    pub fn new(scheme: ColorScheme, colors: ColorTokens) -> Self {
        Self {
            scheme,
            colors,
            elevation: ElevationTokens::default(),
            motion: MotionTokens::default(),
        }
    }

    /// Default theme for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// Parse a theme file, filling anything it leaves out from the defaults
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(source)?;
        let mut theme = Self::for_scheme(file.scheme.unwrap_or_default());
        file.colors.apply(&mut theme.colors);
        if let Some(elevation) = file.elevation {
            theme.elevation = elevation;
        }
        if let Some(motion) = file.motion {
            if motion.pose_transition_ms == 0 {
                return Err(ThemeError::ZeroDuration);
            }
            theme.motion = motion;
        }

        tracing::debug!(scheme = ?theme.scheme, "theme loaded from toml");
        Ok(theme)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorTokens {
        &mut self.colors
    }

    pub fn color(&self, token: ColorToken) -> poise_core::Color {
        self.colors.get(token)
    }

    pub fn elevation(&self) -> &ElevationTokens {
        &self.elevation
    }

    pub fn motion(&self) -> &MotionTokens {
        &self.motion
    }

    pub fn with_motion(mut self, motion: MotionTokens) -> Self {
        self.motion = motion;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// A light/dark pair of themes
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeBundle {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }
}

/// On-disk theme layout
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    scheme: Option<ColorScheme>,
    #[serde(default)]
    colors: ColorOverrides,
    elevation: Option<ElevationTokens>,
    motion: Option<MotionTokens>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use poise_animation::Easing;
    use poise_core::Color;

    #[test]
    fn test_empty_file_is_default_light() {
        let theme = Theme::from_toml("").unwrap();
        assert_eq!(theme, Theme::light());
    }

    #[test]
    fn test_partial_overrides() {
        let theme = Theme::from_toml(
            r##"
            scheme = "dark"
            [colors]
            secondary = "#FF0000"
            [motion]
            pose_transition_ms = 150
            easing = "linear"
            "##,
        )
        .unwrap();

        assert_eq!(theme.scheme(), ColorScheme::Dark);
        assert_eq!(theme.color(ColorToken::Secondary), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(theme.color(ColorToken::Surface), ColorTokens::dark().surface);
        assert_eq!(theme.motion().pose_transition_ms, 150);
        assert_eq!(theme.motion().easing, Easing::Linear);
    }

    #[test]
    fn test_motion_table_defaults_missing_keys() {
        let theme = Theme::from_toml("[motion]\neasing = \"ease-out-cubic\"").unwrap();
        assert_eq!(theme.motion().pose_transition_ms, 233);
        assert_eq!(theme.motion().easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = Theme::from_toml("[colors]\nprimary = \"blue\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Theme::from_toml("[colors]\ntertiary = \"#000000\"").is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Theme::from_toml("[motion]\npose_transition_ms = 0").unwrap_err();
        assert!(matches!(err, ThemeError::ZeroDuration));
    }

    #[test]
    fn test_bundle_picks_scheme() {
        let bundle = ThemeBundle::default();
        assert_eq!(bundle.for_scheme(ColorScheme::Dark).scheme(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
    }
}
