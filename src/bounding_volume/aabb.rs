//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box.
///
/// The invariant `mins[i] <= maxs[i]` must hold on every axis for the box to
/// describe a non-empty volume. [`Aabb::from_points`] applied to an empty
/// iterator yields an inverted (empty) box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point<Real>,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// Computes the AABB of a set of points.
    pub fn from_points<'a, I>(pts: I) -> Aabb
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut mins = Point::from(Vector::repeat(Real::MAX));
        let mut maxs = Point::from(Vector::repeat(-Real::MAX));

        for pt in pts {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        Aabb { mins, maxs }
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The half-extents of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::math::Point;
    use approx::assert_relative_eq;

    #[test]
    fn aabb_from_points() {
        let pts = [
            Point::new(1.0, 2.0, 3.0),
            Point::new(-1.0, 4.0, 2.0),
            Point::new(0.0, 0.0, 5.0),
        ];
        let aabb = Aabb::from_points(&pts);

        assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
        assert_relative_eq!(aabb.center(), Point::new(0.0, 2.0, 3.5));
        assert_relative_eq!(aabb.half_extents().x, 1.0);
    }

    #[test]
    fn aabb_from_no_points_is_empty() {
        let aabb = Aabb::from_points([]);
        assert!(aabb.extents().max() < 0.0);
    }
}
