//! Per-icon color theme.

use crate::color::Color;
use crate::style::IdenticonStyle;

/// Number of colors in a theme.
pub const THEME_COLOR_COUNT: usize = 5;

/// The palette used for one generated icon.
///
/// A theme is derived once per generation from the hash's hue and the
/// style's saturation/lightness parameters. The index order is load-bearing:
/// the generator's color collision rules refer to these positions.
///
/// | Index | Color |
/// |-------|-------------|
/// | 0 | dark gray |
/// | 1 | mid color (collision fallback) |
/// | 2 | light gray |
/// | 3 | light color |
/// | 4 | dark color |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    colors: [Color; THEME_COLOR_COUNT],
}

impl ColorTheme {
    /// Builds the theme for a hue in `[0, 1]` under the given style.
    pub fn new(hue: f64, style: &IdenticonStyle) -> Self {
        let (dark_gray, light_gray) = style.grayscale_lightness;
        let (dark, light) = style.color_lightness;

        Self {
            colors: [
                Color::from_hsl(hue, style.grayscale_saturation, dark_gray),
                Color::from_hsl_compensated(hue, style.color_saturation, (dark + light) / 2.0),
                Color::from_hsl(hue, style.grayscale_saturation, light_gray),
                Color::from_hsl_compensated(hue, style.color_saturation, light),
                Color::from_hsl_compensated(hue, style.color_saturation, dark),
            ],
        }
    }

    /// Returns the number of colors in the theme.
    pub fn count(&self) -> usize {
        THEME_COLOR_COUNT
    }

    /// Returns the color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_gray_entries() {
        // Grayscale saturation defaults to 0, so the grays are hue-invariant.
        let theme = ColorTheme::new(0.37, &IdenticonStyle::default());
        assert_eq!(theme.color(0), Color::from_rgb(76, 76, 76));
        assert_eq!(theme.color(2), Color::from_rgb(229, 229, 229));
    }

    #[test]
    fn theme_has_five_colors() {
        let theme = ColorTheme::new(0.0, &IdenticonStyle::default());
        assert_eq!(theme.count(), 5);
    }

    #[test]
    fn same_hue_same_theme() {
        let style = IdenticonStyle::default();
        assert_eq!(ColorTheme::new(0.42, &style), ColorTheme::new(0.42, &style));
    }

    #[test]
    fn light_and_dark_spin_colors_differ() {
        let theme = ColorTheme::new(0.6, &IdenticonStyle::default());
        assert_ne!(theme.color(3), theme.color(4));
    }
}
