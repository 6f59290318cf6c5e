//! Geometric primitives used by the generator and renderers.
//!
//! Coordinates are in abstract surface units (typically pixels). Icons are
//! laid out on a fixed 4x4 cell grid inside a normalized square; cells are
//! addressed by grid coordinates and drawn through a [`Transform`] that
//! places, scales and quadrant-rotates cell-local geometry.

/// A 2D coordinate in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X offset of the left edge.
    pub x: f64,
    /// Y offset of the top edge.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rectangle {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a square rectangle at the origin.
    pub fn from_size(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }

    /// Returns the largest centered square fitting inside this rectangle
    /// whose side is a multiple of `cell_count`.
    ///
    /// The side length is `floor(min(width, height))` rounded down to the
    /// nearest multiple of `cell_count`, and the square is centered with
    /// floored offsets. A rectangle smaller than `cell_count` in either
    /// dimension normalizes to a zero-size square rather than failing.
    pub fn normalized_to_grid(&self, cell_count: u32) -> Rectangle {
        let mut size = self.width.min(self.height).floor();
        size -= size % f64::from(cell_count);
        if size < 0.0 {
            size = 0.0;
        }

        Rectangle {
            x: self.x + ((self.width - size) / 2.0).floor(),
            y: self.y + ((self.height - size) / 2.0).floor(),
            width: size,
            height: size,
        }
    }
}

/// Placement of one grid cell on the drawing surface.
///
/// A transform translates cell-local coordinates to the cell's position,
/// scales them by the cell size, and rotates them by a quadrant
/// (`rotation` quarter turns clockwise around the cell center).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// X coordinate of the cell's top-left corner.
    pub x: f64,
    /// Y coordinate of the cell's top-left corner.
    pub y: f64,
    /// Side length of the cell.
    pub size: f64,
    /// Rotation quadrant in `0..=3`.
    pub rotation: u8,
}

impl Transform {
    /// Creates a new transform.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `rotation` is a quadrant in `0..=3`.
    pub fn new(x: f64, y: f64, size: f64, rotation: u8) -> Self {
        debug_assert!(rotation < 4, "rotation must be a quadrant in 0..=3");
        Self {
            x,
            y,
            size,
            rotation,
        }
    }

    /// Maps a cell-local point onto the surface.
    ///
    /// `width` and `height` give the extent of the figure the point belongs
    /// to; they are needed so that rotation keeps the figure inside the
    /// cell (a rotated figure is anchored by its far edge, not its origin).
    pub fn transform_point(&self, x: f64, y: f64, width: f64, height: f64) -> Point {
        let right = self.x + self.size;
        let bottom = self.y + self.size;

        match self.rotation {
            1 => Point::new(right - y - height, self.y + x),
            2 => Point::new(right - x - width, bottom - y - height),
            3 => Point::new(self.x + y, bottom - x - width),
            _ => Point::new(self.x + x, self.y + y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_reduces_to_cell_multiple_and_centers() {
        let rect = Rectangle::new(0.0, 0.0, 100.0, 50.0);
        let normalized = rect.normalized_to_grid(4);
        assert_eq!(normalized, Rectangle::new(26.0, 0.0, 48.0, 48.0));
    }

    #[test]
    fn normalize_keeps_exact_multiples() {
        let rect = Rectangle::new(10.0, 20.0, 100.0, 100.0);
        let normalized = rect.normalized_to_grid(4);
        assert_eq!(normalized, Rectangle::new(10.0, 20.0, 100.0, 100.0));
    }

    #[test]
    fn normalize_degenerate_rect_is_zero_square() {
        let rect = Rectangle::new(0.0, 0.0, 3.0, 3.0);
        let normalized = rect.normalized_to_grid(4);
        assert_eq!(normalized.width, 0.0);
        assert_eq!(normalized.height, 0.0);
    }

    #[test]
    fn normalize_floors_fractional_input() {
        let rect = Rectangle::new(0.0, 0.0, 49.9, 49.9);
        let normalized = rect.normalized_to_grid(4);
        assert_eq!(normalized.width, 48.0);
    }

    #[test]
    fn transform_point_identity() {
        let t = Transform::new(10.0, 10.0, 4.0, 0);
        assert_eq!(t.transform_point(1.0, 2.0, 0.0, 0.0), Point::new(11.0, 12.0));
    }

    #[test]
    fn transform_point_quadrants() {
        let t1 = Transform::new(10.0, 10.0, 4.0, 1);
        assert_eq!(
            t1.transform_point(1.0, 2.0, 0.0, 0.0),
            Point::new(12.0, 11.0)
        );

        let t2 = Transform::new(10.0, 10.0, 4.0, 2);
        assert_eq!(
            t2.transform_point(1.0, 2.0, 0.0, 0.0),
            Point::new(13.0, 12.0)
        );

        let t3 = Transform::new(10.0, 10.0, 4.0, 3);
        assert_eq!(
            t3.transform_point(1.0, 2.0, 0.0, 0.0),
            Point::new(12.0, 13.0)
        );
    }

    #[test]
    fn transform_point_accounts_for_figure_extent() {
        // A full-cell figure rotated a quarter turn stays inside the cell.
        let t = Transform::new(0.0, 0.0, 4.0, 1);
        assert_eq!(t.transform_point(0.0, 0.0, 4.0, 4.0), Point::new(0.0, 0.0));
    }
}
