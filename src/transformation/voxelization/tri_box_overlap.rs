use crate::bounding_volume::Aabb;
use crate::math::{Vector, DIM};
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB, using the separating-axis theorem.
///
/// The 13 candidate axes are the three box axes, the triangle's normal, and
/// the nine cross-products between the box axes and the triangle's edges.
/// Touching contacts count as intersections.
pub(crate) fn aabb_intersects_triangle(aabb: &Aabb, triangle: &Triangle) -> bool {
    let center = aabb.center();
    let half = aabb.half_extents();

    // Work in the box's local frame.
    let v0 = triangle.a - center;
    let v1 = triangle.b - center;
    let v2 = triangle.c - center;

    // The box axes.
    for dim in 0..DIM {
        let min = v0[dim].min(v1[dim]).min(v2[dim]);
        let max = v0[dim].max(v1[dim]).max(v2[dim]);

        if min > half[dim] || max < -half[dim] {
            return false;
        }
    }

    let edges = [v1 - v0, v2 - v1, v0 - v2];

    // The triangle's normal.
    let normal = edges[0].cross(&edges[1]);
    let dist = normal.dot(&v0);
    let radius = half.dot(&normal.abs());

    if dist > radius || dist < -radius {
        return false;
    }

    // The edge cross-product axes.
    for edge in &edges {
        for dim in 0..DIM {
            let axis = Vector::ith(dim, 1.0).cross(edge);
            let radius = half.dot(&axis.abs());

            let p0 = axis.dot(&v0);
            let p1 = axis.dot(&v1);
            let p2 = axis.dot(&v2);
            let min = p0.min(p1).min(p2);
            let max = p0.max(p1).max(p2);

            if min > radius || max < -radius {
                return false;
            }
        }
    }

    true
}
