//! Icon style parameters.
//!
//! A style controls coloring and framing without affecting which shapes are
//! picked: the same hash renders the same geometry under every style. Styles
//! serialize to camelCase JSON so they can be stored or exchanged between
//! processes.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Visual parameters for generated icons.
///
/// The defaults match the reference visual-identity scheme; icons generated
/// with a default style are compatible with other implementations of it.
///
/// # Example
///
/// ```
/// use hashicon::{Color, IdenticonStyle};
///
/// let style = IdenticonStyle::default()
///     .with_background_color(Color::TRANSPARENT)
///     .with_padding(0.1);
/// assert_eq!(style.color_saturation, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdenticonStyle {
    /// Fill behind the icon. Defaults to opaque white.
    pub background_color: Color,

    /// Fraction of the icon size left empty around the grid, in `[0, 0.4]`.
    pub padding: f64,

    /// Saturation of the colored theme entries, in `[0, 1]`.
    pub color_saturation: f64,

    /// Saturation of the gray theme entries, in `[0, 1]`.
    pub grayscale_saturation: f64,

    /// Lightness range `(dark, light)` of the colored theme entries.
    pub color_lightness: (f64, f64),

    /// Lightness range `(dark, light)` of the gray theme entries.
    pub grayscale_lightness: (f64, f64),
}

impl Default for IdenticonStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            padding: 0.08,
            color_saturation: 0.5,
            grayscale_saturation: 0.0,
            color_lightness: (0.4, 0.8),
            grayscale_lightness: (0.3, 0.9),
        }
    }
}

impl IdenticonStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the padding fraction, clamped to `[0, 0.4]`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.clamp(0.0, 0.4);
        self
    }

    /// Sets the saturation of the colored theme entries, clamped to `[0, 1]`.
    pub fn with_color_saturation(mut self, saturation: f64) -> Self {
        self.color_saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Sets the saturation of the gray theme entries, clamped to `[0, 1]`.
    pub fn with_grayscale_saturation(mut self, saturation: f64) -> Self {
        self.grayscale_saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Sets the lightness range of the colored theme entries.
    pub fn with_color_lightness(mut self, dark: f64, light: f64) -> Self {
        self.color_lightness = (dark.clamp(0.0, 1.0), light.clamp(0.0, 1.0));
        self
    }

    /// Sets the lightness range of the gray theme entries.
    pub fn with_grayscale_lightness(mut self, dark: f64, light: f64) -> Self {
        self.grayscale_lightness = (dark.clamp(0.0, 1.0), light.clamp(0.0, 1.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scheme() {
        let style = IdenticonStyle::default();
        assert_eq!(style.background_color, Color::WHITE);
        assert_eq!(style.padding, 0.08);
        assert_eq!(style.color_saturation, 0.5);
        assert_eq!(style.grayscale_saturation, 0.0);
        assert_eq!(style.color_lightness, (0.4, 0.8));
        assert_eq!(style.grayscale_lightness, (0.3, 0.9));
    }

    #[test]
    fn builders_clamp_ranges() {
        let style = IdenticonStyle::new()
            .with_padding(0.9)
            .with_color_saturation(1.5)
            .with_grayscale_lightness(-0.2, 2.0);
        assert_eq!(style.padding, 0.4);
        assert_eq!(style.color_saturation, 1.0);
        assert_eq!(style.grayscale_lightness, (0.0, 1.0));
    }

    #[test]
    fn json_roundtrip_uses_camel_case() {
        let style = IdenticonStyle::default().with_padding(0.1);
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"backgroundColor\":\"#ffffff\""));
        assert!(json.contains("\"colorLightness\":[0.4,0.8]"));

        let back: IdenticonStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let style: IdenticonStyle =
            serde_json::from_str(r##"{"backgroundColor":"#00000000"}"##).unwrap();
        assert_eq!(style.background_color, Color::TRANSPARENT);
        assert_eq!(style.padding, 0.08);
    }
}
