//! Fixed measurements of the fancy button

use poise_core::Size;
use serde::Deserialize;

/// Paddings and surface measurements, in layout units
///
/// The row reads: `before_icon | icon | after_icon | before_label | label | after_label`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonMetrics {
    pub before_icon: f32,
    pub after_icon: f32,
    pub before_label: f32,
    pub after_label: f32,
    /// Smallest surface the button ever renders
    pub min_size: Size,
    pub elevation: f32,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self {
            before_icon: 12.0,
            after_icon: 6.0,
            before_label: 6.0,
            after_label: 20.0,
            min_size: Size::new(48.0, 48.0),
            elevation: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let metrics: ButtonMetrics = toml::from_str("after_label = 16.0").unwrap();
        assert_eq!(metrics.after_label, 16.0);
        assert_eq!(metrics.before_icon, 12.0);
        assert_eq!(metrics.min_size, Size::new(48.0, 48.0));
    }

    #[test]
    fn test_min_size_table() {
        let metrics: ButtonMetrics =
            toml::from_str("[min_size]\nwidth = 56.0\nheight = 40.0").unwrap();
        assert_eq!(metrics.min_size, Size::new(56.0, 40.0));
    }
}
