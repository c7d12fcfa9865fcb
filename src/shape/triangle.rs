//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    /// The triangle's first point.
    pub a: Point<Real>,
    /// The triangle's second point.
    pub b: Point<Real>,
    /// The triangle's third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The non-normalized counterclockwise normal of this triangle.
    ///
    /// Its orientation depends on the winding of the triangle: a mesh with
    /// outward-oriented triangles yields outward scaled normals.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The axis-aligned bounding box of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points([&self.a, &self.b, &self.c])
    }
}
