//! High-level identicon facade.

use crate::error::IconError;
use crate::generator::IconGenerator;
use crate::geometry::Rectangle;
use crate::hash::HexHash;
use crate::renderer::png::rasterize_svg;
use crate::renderer::{Renderer, SvgRenderer};
use crate::style::IdenticonStyle;

/// An identicon for one hash at one size.
///
/// This is the convenience entry point: it owns the hash, the output size
/// and the style, and exposes SVG and PNG export. For custom backends, use
/// [`IconGenerator`] with your own [`Renderer`] directly.
///
/// # Example
///
/// ```
/// use hashicon::Identicon;
///
/// let icon = Identicon::from_value("jdoe@example.com", 100);
/// let svg = icon.to_svg();
/// assert!(svg.starts_with("<svg"));
///
/// let png = icon.to_png().unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
#[derive(Debug, Clone)]
pub struct Identicon {
    hash: HexHash,
    size: u32,
    style: IdenticonStyle,
}

impl Identicon {
    /// Creates an identicon for an already-computed hash.
    pub fn new(hash: HexHash, size: u32) -> Self {
        Self {
            hash,
            size,
            style: IdenticonStyle::default(),
        }
    }

    /// Creates an identicon by hashing an arbitrary value with SHA-256.
    pub fn from_value(value: impl AsRef<[u8]>, size: u32) -> Self {
        Self::new(HexHash::digest(value), size)
    }

    /// Creates an identicon from a hex hash string.
    pub fn from_hash(hash: &str, size: u32) -> Result<Self, IconError> {
        Ok(Self::new(HexHash::new(hash)?, size))
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: IdenticonStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the hash this icon is derived from.
    pub fn hash(&self) -> &HexHash {
        &self.hash
    }

    /// Returns the output size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the style.
    pub fn style(&self) -> &IdenticonStyle {
        &self.style
    }

    /// Returns a mutable reference to the style.
    pub fn style_mut(&mut self) -> &mut IdenticonStyle {
        &mut self.style
    }

    /// Returns the rectangle the icon grid is fitted to, with the style's
    /// padding applied on all sides.
    pub fn icon_bounds(&self) -> Rectangle {
        let size = f64::from(self.size);
        let padding = (self.style.padding * size).floor();
        Rectangle::new(padding, padding, size - padding * 2.0, size - padding * 2.0)
    }

    /// Draws the icon into an arbitrary renderer.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        IconGenerator::new().generate(renderer, self.icon_bounds(), &self.style, &self.hash);
    }

    /// Renders the icon as an SVG document.
    pub fn to_svg(&self) -> String {
        let size = f64::from(self.size);
        let mut renderer = SvgRenderer::new(size, size);
        self.draw(&mut renderer);
        renderer.to_svg()
    }

    /// Renders the icon as PNG bytes.
    ///
    /// Fails for a zero-pixel size or if the rasterization pipeline rejects
    /// the generated SVG.
    pub fn to_png(&self) -> Result<Vec<u8>, IconError> {
        rasterize_svg(&self.to_svg(), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn bounds_apply_padding() {
        let icon = Identicon::from_value("x", 100);
        // Default padding 0.08 of 100px is 8px per side.
        assert_eq!(icon.icon_bounds(), Rectangle::new(8.0, 8.0, 84.0, 84.0));
    }

    #[test]
    fn zero_padding_uses_full_surface() {
        let icon = Identicon::from_value("x", 100)
            .with_style(IdenticonStyle::default().with_padding(0.0));
        assert_eq!(icon.icon_bounds(), Rectangle::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn svg_output_is_deterministic() {
        let a = Identicon::from_value("determinism", 64).to_svg();
        let b = Identicon::from_value("determinism", 64).to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn different_values_give_different_icons() {
        let a = Identicon::from_value("alice", 64).to_svg();
        let b = Identicon::from_value("bob", 64).to_svg();
        assert_ne!(a, b);
    }

    #[test]
    fn svg_contains_document_and_paths() {
        let svg = Identicon::from_value("svg-test", 64).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<path"));
        assert!(svg.contains("viewBox=\"0 0 64 64\""));
    }

    #[test]
    fn transparent_background_omits_rect() {
        let icon = Identicon::from_value("bg", 64)
            .with_style(IdenticonStyle::default().with_background_color(Color::TRANSPARENT));
        assert!(!icon.to_svg().contains("<rect"));
    }

    #[test]
    fn png_roundtrip_decodes_at_size() {
        let png = Identicon::from_value("png-test", 48).to_png().unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 48);
        assert_eq!(img.height(), 48);
    }

    #[test]
    fn png_corner_is_background_color() {
        // Padding keeps the corners clear of shapes; default background is
        // white.
        let png = Identicon::from_value("corner", 48).to_png().unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn zero_size_png_fails() {
        assert!(Identicon::from_value("x", 0).to_png().is_err());
    }

    #[test]
    fn from_hash_rejects_invalid_input() {
        assert!(Identicon::from_hash("zzzz", 64).is_err());
        assert!(Identicon::from_hash("5d41402abc4b2a76b9719d911017c592", 64).is_ok());
    }
}
