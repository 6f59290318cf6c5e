//! The icon generator.
//!
//! [`IconGenerator`] ties everything together: it derives the hue, builds
//! the color theme, resolves one shape per category and renders the result
//! through a [`Renderer`]. Generation is pure given (hash, style, rect) —
//! repeated calls produce an identical renderer call sequence, which is the
//! central compatibility guarantee of the whole crate.

use crate::geometry::{Rectangle, Transform};
use crate::hash::HexHash;
use crate::renderer::Renderer;
use crate::shapes::{CATEGORIES, CELL_COUNT, Shape};
use crate::style::IdenticonStyle;
use crate::theme::ColorTheme;

/// Theme index substituted when a candidate color collides.
const FALLBACK_COLOR_INDEX: usize = 1;

/// Theme indexes that must not both appear: dark gray and dark color.
const DARK_PAIR: [usize; 2] = [0, 4];

/// Theme indexes that must not both appear: light gray and light color.
const LIGHT_PAIR: [usize; 2] = [2, 3];

/// Generates identicons onto a renderer.
///
/// The generator itself is stateless; the shape category table it reads is
/// fixed, process-wide configuration. One instance can be shared freely,
/// including across threads, as long as each generation uses its own
/// renderer.
///
/// # Example
///
/// ```
/// use hashicon::{HexHash, IconGenerator, IdenticonStyle, Rectangle, SvgRenderer};
///
/// let generator = IconGenerator::new();
/// let mut renderer = SvgRenderer::new(100.0, 100.0);
/// generator.generate(
///     &mut renderer,
///     Rectangle::from_size(100.0),
///     &IdenticonStyle::default(),
///     &HexHash::digest("jdoe@example.com"),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IconGenerator {
    _private: (),
}

impl IconGenerator {
    /// Creates a generator using the built-in shape categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells in each direction of generated icons.
    pub fn cell_count(&self) -> u32 {
        CELL_COUNT
    }

    /// Generates an icon for `hash` into `renderer`, fitted to `rect`.
    ///
    /// The background is always set; the foreground grid is the largest
    /// centered square inside `rect` with a side that is a multiple of the
    /// cell count. Rectangles too small for a single cell produce a
    /// background-only icon.
    pub fn generate(
        &self,
        renderer: &mut dyn Renderer,
        rect: Rectangle,
        style: &IdenticonStyle,
        hash: &HexHash,
    ) {
        let theme = ColorTheme::new(hash.hue(), style);

        self.render_background(renderer, style);
        self.render_foreground(renderer, rect, &theme, hash);
    }

    fn render_background(&self, renderer: &mut dyn Renderer, style: &IdenticonStyle) {
        renderer.set_background_color(style.background_color);
    }

    fn render_foreground(
        &self,
        renderer: &mut dyn Renderer,
        rect: Rectangle,
        theme: &ColorTheme,
        hash: &HexHash,
    ) {
        let normalized = rect.normalized_to_grid(CELL_COUNT);
        if normalized.width <= 0.0 {
            return;
        }
        let cell_size = normalized.width / f64::from(CELL_COUNT);

        for shape in self.shapes(theme, hash) {
            // The accumulator intentionally grows without bound and is
            // reduced modulo 4 only when each transform is built; starting
            // octets above 3 shift the whole sequence.
            let mut rotation = u32::from(shape.start_rotation_index);

            renderer.begin_shape(shape.color);
            for (index, &(x, y)) in shape.positions.iter().enumerate() {
                renderer.set_transform(Transform::new(
                    normalized.x + f64::from(x) * cell_size,
                    normalized.y + f64::from(y) * cell_size,
                    cell_size,
                    (rotation % 4) as u8,
                ));
                rotation += 1;

                shape.definition.draw(renderer, cell_size, index);
            }
            renderer.end_shape();
        }
    }

    /// Resolves the shape instances for `hash`, one per category, in
    /// category order.
    fn shapes(&self, theme: &ColorTheme, hash: &HexHash) -> Vec<Shape> {
        let mut used_color_indexes = Vec::with_capacity(CATEGORIES.len());
        let mut shapes = Vec::with_capacity(CATEGORIES.len());

        for category in &CATEGORIES {
            let shapes_len = category.shapes.len();
            let mut color_index = hash.octet(category.color_octet) as usize % theme.count();

            if is_duplicate(&used_color_indexes, color_index, DARK_PAIR)
                || is_duplicate(&used_color_indexes, color_index, LIGHT_PAIR)
            {
                color_index = FALLBACK_COLOR_INDEX;
            }
            used_color_indexes.push(color_index);

            let shape_index = hash.octet(category.shape_octet) as usize % shapes_len;

            shapes.push(Shape {
                definition: category.shapes[shape_index],
                color: theme.color(color_index),
                positions: category.positions,
                start_rotation_index: category
                    .rotation_octet
                    .map_or(0, |octet| hash.octet(octet)),
            });
        }

        shapes
    }
}

/// Returns true if `candidate` belongs to `pair` and any member of `pair`
/// has already been assigned.
///
/// Checking both members (not just the candidate's partner) means a
/// repeated pair color is also forced to the fallback, keeping the two
/// regions distinguishable.
fn is_duplicate(used: &[usize], candidate: usize, pair: [usize; 2]) -> bool {
    pair.contains(&candidate) && pair.iter().any(|member| used.contains(member))
}
