//! RGBA colors and the HSL conversion used by icon themes.
//!
//! The HSL conversion intentionally reproduces the reference scheme's
//! arithmetic, including integer truncation of channel values and the
//! per-hue lightness compensation table. Changing either would change
//! every generated icon.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IconError;

/// Lightness compensators per hue sixth.
///
/// Some hues (yellow, cyan) read much lighter than others at the same HSL
/// lightness; this table bends the lightness curve per hue so that all theme
/// colors carry comparable visual weight.
const LIGHTNESS_COMPENSATORS: [f64; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    /// Opaque white.
    pub const WHITE: Color = Color {
        red: 255,
        green: 255,
        blue: 255,
        alpha: 255,
    };

    /// Creates an opaque color from RGB components.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Creates a color from RGBA components.
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from HSL components, each in `[0, 1]`.
    ///
    /// Inputs outside the range are clamped. Channel values are truncated,
    /// not rounded, matching the reference conversion.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.clamp(0.0, 1.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        if saturation == 0.0 {
            let value = (lightness * 255.0) as u8;
            return Self::from_rgb(value, value, value);
        }

        let m2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = lightness * 2.0 - m2;

        Self::from_rgb(
            hue_to_channel(m1, m2, hue * 6.0 + 2.0),
            hue_to_channel(m1, m2, hue * 6.0),
            hue_to_channel(m1, m2, hue * 6.0 - 2.0),
        )
    }

    /// Creates an opaque color from HSL components with per-hue lightness
    /// compensation.
    ///
    /// Used for the colored (non-gray) theme entries so that perceived
    /// lightness stays consistent across hues.
    pub fn from_hsl_compensated(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.clamp(0.0, 1.0);
        let compensator = LIGHTNESS_COMPENSATORS[(hue * 6.0 + 0.5) as usize];

        let lightness = lightness.clamp(0.0, 1.0);
        let lightness = if lightness < 0.5 {
            lightness * compensator * 2.0
        } else {
            compensator + (lightness - 0.5) * (1.0 - compensator) * 2.0
        };

        Self::from_hsl(hue, saturation, lightness)
    }

    /// Parses a color from `#rgb`, `#rrggbb` or `#rrggbbaa` notation.
    ///
    /// The leading `#` is optional.
    pub fn parse(s: &str) -> Result<Self, IconError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || IconError::invalid_color(s);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::from_rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Formats the RGB part as `#rrggbb`, ignoring alpha.
    ///
    /// Renderers that express opacity separately (SVG `fill-opacity`) use
    /// this form.
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Converts one hue segment to a channel value, truncating like the
/// reference conversion.
fn hue_to_channel(m1: f64, m2: f64, mut h: f64) -> u8 {
    if h < 0.0 {
        h += 6.0;
    }
    if h > 6.0 {
        h -= 6.0;
    }

    let value = if h < 1.0 {
        m1 + (m2 - m1) * h
    } else if h < 3.0 {
        m2
    } else if h < 4.0 {
        m1 + (m2 - m1) * (4.0 - h)
    } else {
        m1
    };

    (255.0 * value) as u8
}
