use std::sync::OnceLock;

use crate::math::{Point, Real, Vector};

bitflags::bitflags! {
    /// Per-voxel state bits written by the rasterization and fill passes.
    ///
    /// Passes only ever *set* bits, never clear them, so concurrent writes
    /// commute and a single `fetch_or` per mark is race-safe.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct VoxelFlags: u32 {
        /// The voxel belongs to the solid volume (surface or interior).
        const FILL = 1;
        /// The voxel was marked during the front-facing rasterization pass.
        const FRONT = 1 << 1;
    }
}

impl VoxelFlags {
    /// A solid voxel first reached by a front-facing triangle.
    pub(crate) fn is_front_face(self) -> bool {
        self.contains(VoxelFlags::FILL) && self.contains(VoxelFlags::FRONT)
    }

    /// A solid voxel never reached by a front-facing triangle.
    pub(crate) fn is_back_face(self) -> bool {
        self.contains(VoxelFlags::FILL) && !self.contains(VoxelFlags::FRONT)
    }
}

/// A single voxel record of a [`VoxelGrid`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelData {
    /// The voxel's center, in the same space as the voxelized mesh.
    pub position: Point<Real>,
    /// Nonzero if this voxel is part of the solid volume.
    pub fill: u32,
    /// Nonzero if this voxel was marked by the front-facing rasterization pass.
    pub front: u32,
}

impl VoxelData {
    /// Is this a solid voxel reached by at least one front-facing triangle?
    #[inline]
    pub fn is_front_face(&self) -> bool {
        self.fill > 0 && self.front > 0
    }

    /// Is this a solid voxel reached only by back-facing triangles or the
    /// interior fill?
    #[inline]
    pub fn is_back_face(&self) -> bool {
        self.fill > 0 && self.front == 0
    }

    /// Is this voxel outside of the voxelized volume?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }
}

/// A dense, uniform voxelization of a triangle mesh.
///
/// Created by [`VoxelGrid::voxelize`]. The grid is immutable once built: its
/// dimensions and unit length are fixed at construction, and the voxel states
/// are only written by the voxelization passes.
pub struct VoxelGrid {
    width: u32,
    height: u32,
    depth: u32,
    unit: Real,
    origin: Point<Real>,
    data: Vec<VoxelFlags>,
    // Lazily materialized, immutable copy of the per-voxel records.
    records: OnceLock<Vec<VoxelData>>,
}

impl VoxelGrid {
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        depth: u32,
        unit: Real,
        origin: Point<Real>,
        data: Vec<VoxelFlags>,
    ) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * depth as usize
        );

        Self {
            width,
            height,
            depth,
            unit,
            origin,
            data,
            records: OnceLock::new(),
        }
    }

    /// The number of voxels along the `x` axis.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of voxels along the `y` axis.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of voxels along the `z` axis.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The world-space edge length of one voxel.
    #[inline]
    pub fn unit_length(&self) -> Real {
        self.unit
    }

    /// The corner of the grid with the smallest coordinates.
    ///
    /// This is the mesh bounding-box minimum shifted outwards by half a unit
    /// on every axis.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The total number of voxels of this grid, empty voxels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Is this grid void of any voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of voxels classified as solid.
    pub fn num_solid_voxels(&self) -> usize {
        self.data
            .iter()
            .filter(|flags| flags.contains(VoxelFlags::FILL))
            .count()
    }

    /// The linearized index of the voxel `(i, j, k)`: `x` varies fastest,
    /// then `y`, then `z`.
    #[inline]
    fn voxel_index(&self, i: u32, j: u32, k: u32) -> usize {
        debug_assert!(i < self.width && j < self.height && k < self.depth);
        (i + j * self.width + k * self.width * self.height) as usize
    }

    /// The world-space center of the voxel `(i, j, k)`.
    #[inline]
    pub fn voxel_center(&self, i: u32, j: u32, k: u32) -> Point<Real> {
        let ijk = Vector::new(i as Real, j as Real, k as Real);
        self.origin + (ijk + Vector::repeat(0.5)) * self.unit
    }

    /// The record of the voxel `(i, j, k)`.
    pub fn voxel(&self, i: u32, j: u32, k: u32) -> VoxelData {
        let flags = self.data[self.voxel_index(i, j, k)];
        VoxelData {
            position: self.voxel_center(i, j, k),
            fill: flags.contains(VoxelFlags::FILL) as u32,
            front: flags.contains(VoxelFlags::FRONT) as u32,
        }
    }

    /// All the voxel records of this grid, in linearized index order.
    ///
    /// The records are materialized on the first call and cached for the
    /// lifetime of the grid; subsequent calls return the cached slice.
    pub fn voxels(&self) -> &[VoxelData] {
        self.records.get_or_init(|| {
            let mut records = Vec::with_capacity(self.data.len());

            for k in 0..self.depth {
                for j in 0..self.height {
                    for i in 0..self.width {
                        records.push(self.voxel(i, j, k));
                    }
                }
            }

            records
        })
    }
}
