use na::Vector4;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::transformation::utils;
use crate::transformation::voxelization::VoxelGrid;

/// Number of vertices per row (and per column) of a voxel face patch.
const FACE_SEGMENTS: u32 = 2;

/// A quad-faced mesh reconstructed from the solid voxels of a [`VoxelGrid`].
///
/// All the buffers are flat and share the same vertex indexing; every
/// triangle references vertices emitted for one face of one voxel, so no
/// vertex is shared across faces or voxels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    /// The vertex buffer of this mesh.
    pub vertices: Vec<Point<Real>>,
    /// The per-vertex outward normals, uniform across each face.
    pub normals: Vec<Vector<Real>>,
    /// The center of the voxel each vertex was emitted for, stored in a
    /// 4-component slot for voxel-aware shading downstream.
    pub centers: Vec<Vector4<Real>>,
    /// The 32-bit triangle index buffer of this mesh.
    pub indices: Vec<[u32; DIM]>,
}

impl SurfaceMesh {
    /// Does this mesh contain no geometry at all?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Recomputes the bounds of this mesh from its vertex buffer.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }
}

impl VoxelGrid {
    /// Computes an unoptimized quad-faced mesh representation of this grid.
    ///
    /// Every solid voxel contributes its six cube faces, one quad (two
    /// triangles) each. No effort is made to cull faces occluded by an
    /// adjacent solid voxel: the result always closes every voxel, at the
    /// cost of interior-facing geometry between neighbors.
    pub fn to_quad_surface(&self) -> SurfaceMesh {
        let mut mesh = SurfaceMesh::default();
        let unit = self.unit_length();

        let right = Vector::x() * unit;
        let up = Vector::y() * unit;
        let forward = Vector::z() * unit;
        let (left, down, back) = (-right, -up, -forward);

        for voxel in self.voxels() {
            if voxel.is_empty() {
                continue;
            }

            let center = voxel.position;

            // One planar patch per cube face. Each `(right, up)` pair is
            // chosen so that `up × right` matches the outward normal, which
            // `push_face` relies on for its winding.
            push_face(&mut mesh, center, back / 2.0, right, up, -Vector::z());
            push_face(&mut mesh, center, right / 2.0, forward, up, Vector::x());
            push_face(&mut mesh, center, forward / 2.0, left, up, Vector::z());
            push_face(&mut mesh, center, left / 2.0, back, up, -Vector::x());
            push_face(&mut mesh, center, up / 2.0, right, forward, Vector::y());
            push_face(&mut mesh, center, down / 2.0, right, back, -Vector::y());
        }

        mesh
    }
}

/// Emits one planar face of a voxel cube as a `FACE_SEGMENTS²`-vertex patch.
///
/// Vertices are laid on the plane `center + offset`, spanning half of
/// `right` and `up` on each side; all of them share the face's outward
/// `normal` and the emitting voxel's center attribute. The triangles
/// emitted by [`utils::push_quad_indices`] wind so that their geometric
/// normal is `up × right`, which must match `normal`.
fn push_face(
    mesh: &mut SurfaceMesh,
    center: Point<Real>,
    offset: Vector<Real>,
    right: Vector<Real>,
    up: Vector<Real>,
    normal: Vector<Real>,
) {
    let base = mesh.vertices.len() as u32;
    let face_center = center + offset;
    let inv = 1.0 / (FACE_SEGMENTS - 1) as Real;

    for u in 0..FACE_SEGMENTS {
        let uu = u as Real * inv;

        for r in 0..FACE_SEGMENTS {
            let rr = r as Real * inv;
            mesh.vertices
                .push(face_center + right * (rr - 0.5) + up * (uu - 0.5));
            mesh.normals.push(normal);
            mesh.centers
                .push(Vector4::new(center.x, center.y, center.z, 0.0));
        }
    }

    utils::push_quad_indices(base, FACE_SEGMENTS, &mut mesh.indices);
}
