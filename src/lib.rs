//! hashicon: deterministic identicon generation.
//!
//! This crate derives a unique, visually distinct icon from a hash value.
//! The same hash and style always produce byte-identical output, and the
//! shape, color and rotation selection rules are bit-for-bit compatible
//! with other implementations of the same visual-identity scheme.
//!
//! Icons are built on a 4x4 cell grid split into three regions (sides,
//! corners, center). Hash digits select each region's silhouette, fill
//! color and starting rotation; two collision rules keep the regions from
//! picking indistinguishable colors.
//!
//! # Example
//!
//! ```
//! use hashicon::Identicon;
//!
//! let icon = Identicon::from_value("jdoe@example.com", 100);
//!
//! let svg = icon.to_svg();
//! assert!(svg.starts_with("<svg"));
//!
//! let png = icon.to_png().unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```
//!
//! # Custom styles
//!
//! ```
//! use hashicon::{Color, Identicon, IdenticonStyle};
//!
//! let style = IdenticonStyle::default()
//!     .with_background_color(Color::TRANSPARENT)
//!     .with_padding(0.1);
//!
//! let svg = Identicon::from_value("styled", 64).with_style(style).to_svg();
//! ```
//!
//! # Custom backends
//!
//! The generation core draws through the [`Renderer`] trait; implement it
//! to target another surface and drive it with [`IconGenerator`]:
//!
//! ```
//! use hashicon::{HexHash, IconGenerator, IdenticonStyle, Rectangle, SvgRenderer};
//!
//! let mut renderer = SvgRenderer::new(100.0, 100.0);
//! IconGenerator::new().generate(
//!     &mut renderer,
//!     Rectangle::from_size(100.0),
//!     &IdenticonStyle::default(),
//!     &HexHash::digest("custom backend"),
//! );
//! ```

mod color;
mod error;
mod generator;
mod geometry;
mod hash;
mod icon;
mod renderer;
mod shapes;
mod style;
mod theme;

pub use color::Color;
pub use error::IconError;
pub use generator::IconGenerator;
pub use geometry::{Point, Rectangle, Transform};
pub use hash::{HexHash, MIN_HASH_LENGTH};
pub use icon::Identicon;
pub use renderer::{Renderer, SvgRenderer};
pub use shapes::{
    CATEGORIES, CELL_COUNT, CENTER_SHAPES, OUTER_SHAPES, Shape, ShapeCategory, ShapeDefinition,
};
pub use style::IdenticonStyle;
pub use theme::{ColorTheme, THEME_COLOR_COUNT};
