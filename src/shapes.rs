//! Shape categories, silhouette tables and per-generation shape instances.
//!
//! The icon grid is split into three logical regions, each described by a
//! [`ShapeCategory`]: which hash octets pick its color, silhouette and
//! starting rotation, and which grid cells it occupies. The category table
//! is fixed configuration, identical for every icon; everything
//! hash-specific lives in the ephemeral [`Shape`] instances built per
//! generation.

use crate::color::Color;
use crate::renderer::Renderer;

/// Number of cells along each side of the icon grid.
pub const CELL_COUNT: u32 = 4;

// ============================================================================
// Categories
// ============================================================================

/// Static configuration for one logical region of the grid.
#[derive(Debug, Clone, Copy)]
pub struct ShapeCategory {
    /// Index of the hash octet selecting this category's color.
    pub color_octet: usize,
    /// Silhouette table this category draws from.
    pub shapes: &'static [ShapeDefinition],
    /// Index of the hash octet selecting the silhouette.
    pub shape_octet: usize,
    /// Index of the hash octet selecting the starting rotation, or `None`
    /// for a fixed rotation of 0.
    pub rotation_octet: Option<usize>,
    /// Grid cells this category occupies, drawn in order. Coordinates are
    /// in `0..CELL_COUNT`.
    pub positions: &'static [(u8, u8)],
}

const SIDES_POSITIONS: &[(u8, u8)] = &[
    (1, 0),
    (2, 0),
    (2, 3),
    (1, 3),
    (0, 1),
    (3, 1),
    (3, 2),
    (0, 2),
];

const CORNERS_POSITIONS: &[(u8, u8)] = &[(0, 0), (3, 0), (3, 3), (0, 3)];

const CENTER_POSITIONS: &[(u8, u8)] = &[(1, 1), (2, 1), (2, 2), (1, 2)];

/// The fixed category table: Sides, then Corners, then Center.
///
/// The order is part of the visual-identity scheme; categories are always
/// resolved and rendered in this order. The table is immutable and shared
/// by all generations.
pub static CATEGORIES: [ShapeCategory; 3] = [
    // Sides: the eight edge cells
    ShapeCategory {
        color_octet: 8,
        shapes: OUTER_SHAPES,
        shape_octet: 2,
        rotation_octet: Some(3),
        positions: SIDES_POSITIONS,
    },
    // Corners: the four corner cells
    ShapeCategory {
        color_octet: 9,
        shapes: OUTER_SHAPES,
        shape_octet: 4,
        rotation_octet: Some(5),
        positions: CORNERS_POSITIONS,
    },
    // Center: the four inner cells
    ShapeCategory {
        color_octet: 10,
        shapes: CENTER_SHAPES,
        shape_octet: 1,
        rotation_octet: None,
        positions: CENTER_POSITIONS,
    },
];

// ============================================================================
// Shape instances
// ============================================================================

/// A resolved shape for one category in one generation.
///
/// Owned by the render pass that built it and discarded afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// The silhouette to draw in each cell.
    pub definition: ShapeDefinition,
    /// The resolved fill color.
    pub color: Color,
    /// The category's cell positions (shared, not copied).
    pub positions: &'static [(u8, u8)],
    /// Rotation of the first cell, as the raw hash octet.
    ///
    /// Deliberately not reduced modulo 4 here: the render loop accumulates
    /// from this value across cells and reduces only when building each
    /// transform.
    pub start_rotation_index: u8,
}

// ============================================================================
// Silhouettes
// ============================================================================

/// One entry of a silhouette table.
///
/// Each variant knows how to draw itself into a cell through a renderer.
/// Selection is by table index; the variants carry no data, so dispatch is
/// a plain match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeDefinition {
    // Outer table (sides and corners)
    LargeTriangle,
    BottomHalfTriangle,
    Rhombus,
    Circle,

    // Center table
    CutCorner,
    SideTriangle,
    MiddleSquare,
    InsetSquare,
    OffsetCircle,
    NegativeTriangle,
    CutSquare,
    CornerTriangle,
    TilesAndTriangle,
    NegativeSquare,
    NegativeCircle,
    HalfTriangle,
    NegativeRhombus,
    ConditionalCircle,
}

/// Silhouettes used by the Sides and Corners categories.
pub const OUTER_SHAPES: &[ShapeDefinition] = &[
    ShapeDefinition::LargeTriangle,
    ShapeDefinition::BottomHalfTriangle,
    ShapeDefinition::Rhombus,
    ShapeDefinition::Circle,
];

/// Silhouettes used by the Center category.
///
/// `CornerTriangle` and `HalfTriangle` draw the same figure; the table
/// intentionally contains it twice, which weights its selection odds.
pub const CENTER_SHAPES: &[ShapeDefinition] = &[
    ShapeDefinition::CutCorner,
    ShapeDefinition::SideTriangle,
    ShapeDefinition::MiddleSquare,
    ShapeDefinition::InsetSquare,
    ShapeDefinition::OffsetCircle,
    ShapeDefinition::NegativeTriangle,
    ShapeDefinition::CutSquare,
    ShapeDefinition::CornerTriangle,
    ShapeDefinition::TilesAndTriangle,
    ShapeDefinition::NegativeSquare,
    ShapeDefinition::NegativeCircle,
    ShapeDefinition::HalfTriangle,
    ShapeDefinition::NegativeRhombus,
    ShapeDefinition::ConditionalCircle,
];

impl ShapeDefinition {
    /// Draws this silhouette into the renderer's current cell.
    ///
    /// `cell` is the cell side length in surface units; `index` is the
    /// zero-based position of this cell within the shape's position list
    /// (a few silhouettes vary by cell).
    pub fn draw(self, renderer: &mut dyn Renderer, cell: f64, index: usize) {
        use crate::geometry::Point;

        match self {
            Self::LargeTriangle => {
                renderer.add_triangle(0.0, 0.0, cell, cell, 0, false);
            }
            Self::BottomHalfTriangle => {
                renderer.add_triangle(0.0, cell / 2.0, cell, cell / 2.0, 0, false);
            }
            Self::Rhombus => {
                renderer.add_rhombus(0.0, 0.0, cell, cell, false);
            }
            Self::Circle => {
                let m = cell / 6.0;
                renderer.add_circle(m, m, cell - 2.0 * m, false);
            }
            Self::CutCorner => {
                let k = cell * 0.42;
                renderer.add_polygon(
                    &[
                        Point::new(0.0, 0.0),
                        Point::new(cell, 0.0),
                        Point::new(cell, cell - k * 2.0),
                        Point::new(cell - k, cell),
                        Point::new(0.0, cell),
                    ],
                    false,
                );
            }
            Self::SideTriangle => {
                let w = (cell * 0.5).floor();
                let h = (cell * 0.8).floor();
                renderer.add_triangle(cell - w, 0.0, w, h, 2, false);
            }
            Self::MiddleSquare => {
                let s = (cell / 3.0).floor();
                renderer.add_rectangle(s, s, cell - s, cell - s, false);
            }
            Self::InsetSquare => {
                let inner = cell * 0.1;
                // Fixed border widths in small icons so the border stays visible
                let outer = if cell < 6.0 {
                    1.0
                } else if cell < 8.0 {
                    2.0
                } else {
                    (cell * 0.25).floor()
                };
                let inner = if inner > 1.0 {
                    inner.floor()
                } else if inner > 0.5 {
                    1.0
                } else {
                    inner
                };
                renderer.add_rectangle(outer, outer, cell - inner - outer, cell - inner - outer, false);
            }
            Self::OffsetCircle => {
                let m = (cell * 0.15).floor();
                let s = (cell * 0.5).floor();
                renderer.add_circle(cell - s - m, cell - s - m, s, false);
            }
            Self::NegativeTriangle => {
                let inner = cell * 0.1;
                let mut outer = inner * 4.0;
                // Align the edge to whole pixels in large icons
                if outer > 3.0 {
                    outer = outer.floor();
                }
                renderer.add_rectangle(0.0, 0.0, cell, cell, false);
                renderer.add_polygon(
                    &[
                        Point::new(outer, outer),
                        Point::new(cell - inner, outer),
                        Point::new(outer + (cell - outer - inner) / 2.0, cell - inner),
                    ],
                    true,
                );
            }
            Self::CutSquare => {
                renderer.add_polygon(
                    &[
                        Point::new(0.0, 0.0),
                        Point::new(cell, 0.0),
                        Point::new(cell, cell * 0.7),
                        Point::new(cell * 0.4, cell * 0.4),
                        Point::new(cell * 0.7, cell),
                        Point::new(0.0, cell),
                    ],
                    false,
                );
            }
            Self::CornerTriangle | Self::HalfTriangle => {
                renderer.add_triangle(cell / 2.0, cell / 2.0, cell / 2.0, cell / 2.0, 3, false);
            }
            Self::TilesAndTriangle => {
                renderer.add_rectangle(0.0, 0.0, cell, cell / 2.0, false);
                renderer.add_rectangle(0.0, cell / 2.0, cell / 2.0, cell / 2.0, false);
                renderer.add_triangle(cell / 2.0, cell / 2.0, cell / 2.0, cell / 2.0, 1, false);
            }
            Self::NegativeSquare => {
                let inner = cell * 0.14;
                // Fixed border widths in small icons so the border stays visible
                let outer = if cell < 4.0 {
                    1.0
                } else if cell < 6.0 {
                    2.0
                } else {
                    (cell * 0.35).floor()
                };
                let inner = if cell < 8.0 { inner } else { inner.floor() };
                renderer.add_rectangle(0.0, 0.0, cell, cell, false);
                renderer.add_rectangle(outer, outer, cell - outer - inner, cell - outer - inner, true);
            }
            Self::NegativeCircle => {
                let inner = cell * 0.12;
                let outer = inner * 3.0;
                renderer.add_rectangle(0.0, 0.0, cell, cell, false);
                renderer.add_circle(outer, outer, cell - inner - outer, true);
            }
            Self::NegativeRhombus => {
                let m = cell * 0.25;
                renderer.add_rectangle(0.0, 0.0, cell, cell, false);
                renderer.add_rhombus(m, m, cell - m, cell - m, true);
            }
            Self::ConditionalCircle => {
                // Oversized circle anchored in the first cell only; it
                // spills into the neighboring center cells.
                if index == 0 {
                    let m = cell * 0.4;
                    let s = cell * 1.2;
                    renderer.add_circle(m, m, s, false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Transform;
    use crate::renderer::test_support::{Event, RecordingRenderer};

    #[test]
    fn category_table_matches_scheme() {
        assert_eq!(CATEGORIES.len(), 3);

        let sides = &CATEGORIES[0];
        assert_eq!(sides.color_octet, 8);
        assert_eq!(sides.shape_octet, 2);
        assert_eq!(sides.rotation_octet, Some(3));
        assert_eq!(sides.positions.len(), 8);

        let corners = &CATEGORIES[1];
        assert_eq!(corners.color_octet, 9);
        assert_eq!(corners.shape_octet, 4);
        assert_eq!(corners.rotation_octet, Some(5));
        assert_eq!(corners.positions.len(), 4);

        let center = &CATEGORIES[2];
        assert_eq!(center.color_octet, 10);
        assert_eq!(center.shape_octet, 1);
        assert_eq!(center.rotation_octet, None);
        assert_eq!(center.positions.len(), 4);
    }

    #[test]
    fn positions_stay_inside_the_grid() {
        for category in &CATEGORIES {
            for &(x, y) in category.positions {
                assert!(u32::from(x) < CELL_COUNT);
                assert!(u32::from(y) < CELL_COUNT);
            }
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(OUTER_SHAPES.len(), 4);
        assert_eq!(CENTER_SHAPES.len(), 14);
    }

    #[test]
    fn every_silhouette_draws_something() {
        for table in [OUTER_SHAPES, CENTER_SHAPES] {
            for &definition in table {
                let mut renderer = RecordingRenderer::new();
                renderer.set_transform(Transform::new(0.0, 0.0, 16.0, 0));
                renderer.begin_shape(crate::Color::from_rgb(0, 0, 0));
                definition.draw(&mut renderer, 16.0, 0);
                renderer.end_shape();

                let draws = renderer
                    .events
                    .iter()
                    .filter(|e| matches!(e, Event::Polygon(_) | Event::Circle(..)))
                    .count();
                assert!(draws > 0, "{definition:?} drew nothing at index 0");
            }
        }
    }

    #[test]
    fn conditional_circle_draws_only_in_first_cell() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 16.0, 0));
        renderer.begin_shape(crate::Color::from_rgb(0, 0, 0));
        ShapeDefinition::ConditionalCircle.draw(&mut renderer, 16.0, 1);
        renderer.end_shape();

        assert!(
            !renderer
                .events
                .iter()
                .any(|e| matches!(e, Event::Circle(..)))
        );
    }

    #[test]
    fn negative_shapes_emit_inverted_figures() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 16.0, 0));
        renderer.begin_shape(crate::Color::from_rgb(0, 0, 0));
        ShapeDefinition::NegativeCircle.draw(&mut renderer, 16.0, 0);
        renderer.end_shape();

        // A full-cell rectangle plus a counter-clockwise hole.
        assert!(renderer
            .events
            .iter()
            .any(|e| matches!(e, Event::Circle(_, _, true))));
    }
}
