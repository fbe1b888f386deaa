//! Geometry primitives for event dispatch.
//!
//! Coordinates follow the window convention used throughout the toolkit:
//! origin at the top-left, y increasing downward, units in pixels. A
//! [`Receiver`](crate::Receiver) carries its bounds as an [`Area`] in window
//! space; a [`Region`] restriction is expressed in the receiver's *local*
//! space (origin at the receiver's top-left corner).
//!
//! Containment is half-open on both axes: a point on the left or top edge is
//! inside, a point on the right or bottom edge is not. This keeps adjacent
//! rectangles non-overlapping, the same convention the layout code uses for
//! pixel rects.

/// A point in pixels.
///
/// Whether the point is in window space or receiver-local space depends on
/// context; conversion between the two is a plain origin subtraction.
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

    /// Re-expresses this point relative to the given origin.
    ///
    /// Used to convert a window-space position into a receiver's local space
    /// by subtracting the receiver's window-space origin.
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Area {
    /// Creates a new area. Negative dimensions are clamped to zero.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns true if this area covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Returns true if the point lies inside this area.
    ///
    /// Half-open on both axes: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Returns the overlap of two areas, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Area) -> Option<Area> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.w).min(other.x + other.w);
        let bottom = (self.y + self.h).min(other.y + other.h);

        if left < right && top < bottom {
            Some(Area::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Returns this area re-based at the origin: `(0, 0, w, h)`.
    ///
    /// This is the receiver's own bounds as seen from its local coordinate
    /// space, which is what region tests clip against.
    pub fn local(&self) -> Area {
        Area::new(0.0, 0.0, self.w, self.h)
    }
}

/// A geometric restriction local to a receiver's coordinate space.
///
/// A handler carrying a region only matches events whose position falls
/// inside the intersection of the region and the receiver's own bounds.
/// Containment semantics live behind the dispatch crate's `RegionTest`
/// capability, so toolkit-specific shapes can be added without touching
/// this data type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// A rectangle in receiver-local coordinates.
    Rect(Area),
}

impl Region {
    /// Convenience constructor for a rectangular region.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Region::Rect(Area::new(x, y, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let area = Area::new(10.0, 10.0, 20.0, 20.0);

        assert!(area.contains(Point::new(10.0, 10.0)));
        assert!(area.contains(Point::new(29.9, 29.9)));
        assert!(!area.contains(Point::new(30.0, 15.0)));
        assert!(!area.contains(Point::new(15.0, 30.0)));
        assert!(!area.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn intersect_overlapping() {
        let a = Area::new(0.0, 0.0, 10.0, 10.0);
        let b = Area::new(5.0, 5.0, 10.0, 10.0);

        let overlap = a.intersect(&b).unwrap();
        assert_eq!(overlap, Area::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let a = Area::new(0.0, 0.0, 10.0, 10.0);
        let b = Area::new(20.0, 20.0, 10.0, 10.0);

        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn intersect_touching_edges_is_none() {
        // Areas sharing only an edge have no interior overlap.
        let a = Area::new(0.0, 0.0, 10.0, 10.0);
        let b = Area::new(10.0, 0.0, 10.0, 10.0);

        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn local_rebases_at_origin() {
        let area = Area::new(40.0, 25.0, 100.0, 50.0);
        assert_eq!(area.local(), Area::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let area = Area::new(0.0, 0.0, -5.0, -5.0);
        assert!(area.is_empty());
        assert!(!area.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn relative_to_subtracts_origin() {
        let p = Point::new(60.0, 35.0);
        let local = p.relative_to(Point::new(40.0, 25.0));
        assert_eq!(local, Point::new(20.0, 10.0));
    }
}
