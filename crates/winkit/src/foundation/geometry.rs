//! Screen geometry
//!
//! All coordinates are signed so that requests may lie partly (or wholly)
//! off-screen; normalization is the job of the placement policy, not of
//! these types.

use serde::{Deserialize, Serialize};

/// A screen coordinate or extent in pixels
pub type Coord = i32;

/// A point in screen or window-relative space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: Coord,
    /// Vertical position
    pub y: Coord,
}

impl Point {
    /// Create a new point
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Offset this point by another, saturating at the coordinate range
    #[must_use]
    pub const fn offset(self, by: Self) -> Self {
        Self::new(self.x.saturating_add(by.x), self.y.saturating_add(by.y))
    }
}

/// An axis-aligned rectangle: origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: Coord,
    /// Top edge
    pub y: Coord,
    /// Width in pixels
    pub width: Coord,
    /// Height in pixels
    pub height: Coord,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// One past the right-most column
    pub const fn right(&self) -> Coord {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom-most row
    pub const fn bottom(&self) -> Coord {
        self.y.saturating_add(self.height)
    }

    /// True when the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Same size, new origin
    #[must_use]
    pub const fn with_origin(self, x: Coord, y: Coord) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Same origin, new size
    #[must_use]
    pub const fn with_size(self, width: Coord, height: Coord) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// Whether two rectangles share at least one pixel
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The shared area of two rectangles, if any
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let overlap = Self::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y));
        (!overlap.is_empty()).then_some(overlap)
    }

    /// Whether a point lies inside the rectangle
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
    }

    #[test]
    fn test_arithmetic_saturates_at_coordinate_range() {
        let far = Point::new(Coord::MAX, Coord::MIN).offset(Point::new(10, -10));
        assert_eq!(far, Point::new(Coord::MAX, Coord::MIN));

        let huge = Rect::new(10, 10, Coord::MAX, Coord::MAX);
        assert_eq!(huge.right(), Coord::MAX);
        assert_eq!(huge.bottom(), Coord::MAX);

        let wide = Rect::new(Coord::MIN, 0, Coord::MAX, 10);
        assert_eq!(wide.intersection(&huge), None);
        assert_eq!(
            Rect::new(Coord::MIN, 0, Coord::MAX, 20).intersection(&Rect::new(-10, 0, Coord::MAX, 10)),
            Some(Rect::new(-10, 0, 9, 10))
        );
    }
}
