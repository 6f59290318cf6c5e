//! Error types for identicon generation.

use thiserror::Error;

/// Errors that can occur while constructing or exporting an identicon.
///
/// Icon generation itself is infallible once a valid [`HexHash`](crate::HexHash)
/// exists; errors only arise at the input boundary (parsing a hash string)
/// and at the output boundary (rasterizing and encoding images).
#[derive(Debug, Error)]
pub enum IconError {
    /// The supplied hash string is not usable as an icon source.
    #[error("invalid hash: {reason}")]
    InvalidHash {
        /// Why the hash was rejected.
        reason: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {value:?}")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// The requested raster size cannot produce an image.
    #[error("icon size must be at least 1 pixel")]
    InvalidSize,

    /// The generated SVG could not be parsed for rasterization.
    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// The rasterized image could not be encoded.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl IconError {
    pub(crate) fn invalid_hash(reason: impl Into<String>) -> Self {
        Self::InvalidHash {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}
