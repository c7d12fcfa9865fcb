use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Triangle;
use crate::transformation::voxelization::tri_box_overlap::aabb_intersects_triangle;
use crate::transformation::voxelization::{VoxelFlags, VoxelGrid, VoxelizationError};

/// Which triangle orientation a surface-rasterization pass processes.
///
/// A triangle is front-facing if its scaled normal points towards the
/// negative half of the `z` axis (the axis the solidification pass scans
/// along). Triangles exactly parallel to the scan axis are handled by the
/// front pass so that every triangle is rasterized by exactly one pass.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Facing {
    Front,
    Back,
}

/// Shared state of the three voxelization passes.
///
/// The flag buffer is written with commutative `fetch_or` operations only,
/// so rasterizing several triangles (or several columns) concurrently is
/// race-safe without any ordering constraint between them.
struct RasterGrid<'a> {
    flags: &'a [AtomicU32],
    start: Point<Real>,
    unit: Real,
    dims: [u32; DIM],
}

impl RasterGrid<'_> {
    #[inline]
    fn voxel_index(&self, i: u32, j: u32, k: u32) -> usize {
        (i + j * self.dims[0] + k * self.dims[0] * self.dims[1]) as usize
    }

    #[inline]
    fn mark(&self, i: u32, j: u32, k: u32, flags: VoxelFlags) {
        let _ = self.flags[self.voxel_index(i, j, k)].fetch_or(flags.bits(), Ordering::Relaxed);
    }

    #[inline]
    fn load(&self, i: u32, j: u32, k: u32) -> VoxelFlags {
        let bits = self.flags[self.voxel_index(i, j, k)].load(Ordering::Relaxed);
        VoxelFlags::from_bits_truncate(bits)
    }

    /// The cube covered by the voxel `(i, j, k)`.
    fn voxel_aabb(&self, i: u32, j: u32, k: u32) -> Aabb {
        let ijk = Vector::new(i as Real, j as Real, k as Real);
        let center = self.start + (ijk + Vector::repeat(0.5)) * self.unit;
        Aabb::from_half_extents(center, Vector::repeat(self.unit / 2.0))
    }

    /// The per-axis half-open range of voxels potentially intersecting `aabb`,
    /// padded by one voxel on each side and clamped to the grid.
    fn cells_intersecting(&self, aabb: &Aabb) -> [(u32, u32); DIM] {
        let lo = (aabb.mins - self.start) / self.unit;
        let hi = (aabb.maxs - self.start) / self.unit;
        let mut ranges = [(0, 0); DIM];

        for dim in 0..DIM {
            let first = (lo[dim].floor().max(0.0) as u32).saturating_sub(1);
            let last = (hi[dim].floor().max(0.0) as u32)
                .saturating_add(2)
                .min(self.dims[dim]);
            ranges[dim] = (first.min(self.dims[dim]), last);
        }

        ranges
    }

    /// Marks `flags` on every voxel whose cube intersects the triangle.
    fn rasterize_triangle(&self, triangle: &Triangle, flags: VoxelFlags) {
        let [is, js, ks] = self.cells_intersecting(&triangle.local_aabb());

        for i in is.0..is.1 {
            for j in js.0..js.1 {
                for k in ks.0..ks.1 {
                    if aabb_intersects_triangle(&self.voxel_aabb(i, j, k), triangle) {
                        self.mark(i, j, k, flags);
                    }
                }
            }
        }
    }
}

impl VoxelGrid {
    /// Voxelizes a triangle mesh into a dense grid of solid voxels.
    ///
    /// The mesh surface is rasterized in two passes (front-facing triangles,
    /// then back-facing ones), then the volume enclosed between front and
    /// back surfaces is solidified by a scanline pass along the `z` axis.
    ///
    /// # Parameters
    /// * `points` - The vertex buffer of the mesh to voxelize.
    /// * `indices` - The triangle index buffer of the mesh to voxelize. An
    ///   empty buffer yields a grid with every voxel empty.
    /// * `resolution` - The number of voxels along the longest axis of the
    ///   mesh bounding-box. Must be at least 1.
    ///
    /// Non-manifold or self-intersecting meshes are accepted but the
    /// solidification pass may locally misclassify their interior; no
    /// detection of such inputs is attempted.
    pub fn voxelize(
        points: &[Point<Real>],
        indices: &[[u32; DIM]],
        resolution: u32,
    ) -> Result<VoxelGrid, VoxelizationError> {
        if resolution == 0 {
            return Err(VoxelizationError::InvalidResolution);
        }

        let aabb = Aabb::from_points(points);
        let max_extent = aabb.extents().max();

        // NaN coordinates don't propagate through the inf/sup bound folds,
        // so they are screened explicitly.
        let all_finite = points
            .iter()
            .all(|pt| pt.coords.iter().all(|x| x.is_finite()));

        if !all_finite || !max_extent.is_finite() || max_extent <= 0.0 {
            return Err(VoxelizationError::DegenerateBounds);
        }

        let unit = max_extent / resolution as Real;
        let half_unit = unit / 2.0;

        // Expand the bounds by half a unit so boundary surface voxels are
        // fully captured by the grid.
        let start = aabb.mins - Vector::repeat(half_unit);
        let end = aabb.maxs + Vector::repeat(half_unit);
        let size = end - start;

        let width = (size.x / unit).ceil() as u32;
        let height = (size.y / unit).ceil() as u32;
        let depth = (size.z / unit).ceil() as u32;

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|len| len.checked_mul(depth as usize))
            .ok_or(VoxelizationError::GridTooLarge)?;

        let mut flags: Vec<AtomicU32> = Vec::new();
        flags
            .try_reserve_exact(len)
            .map_err(|_| VoxelizationError::GridTooLarge)?;
        flags.resize_with(len, AtomicU32::default);

        log::debug!(
            "voxelizing {} triangles into a {}x{}x{} grid (unit length: {})",
            indices.len(),
            width,
            height,
            depth,
            unit
        );

        let grid = RasterGrid {
            flags: &flags,
            start,
            unit,
            dims: [width, height, depth],
        };

        // The two surface passes are independent of each other; the
        // solidification pass needs both completed.
        rasterize_surface(&grid, points, indices, Facing::Front);
        rasterize_surface(&grid, points, indices, Facing::Back);
        solidify(&grid);

        let data = flags
            .into_iter()
            .map(|bits| VoxelFlags::from_bits_truncate(bits.into_inner()))
            .collect();

        Ok(VoxelGrid::from_parts(
            width, height, depth, unit, start, data,
        ))
    }
}

/// Rasterizes every triangle matching `facing` into the grid.
///
/// Front-facing triangles mark `FILL | FRONT`; back-facing ones mark `FILL`
/// only. A voxel crossed by both orientations keeps its `FRONT` bit.
fn rasterize_surface(
    grid: &RasterGrid,
    points: &[Point<Real>],
    indices: &[[u32; DIM]],
    facing: Facing,
) {
    let marks = match facing {
        Facing::Front => VoxelFlags::FILL | VoxelFlags::FRONT,
        Facing::Back => VoxelFlags::FILL,
    };

    let rasterize_one = |idx: &[u32; DIM]| {
        let triangle = Triangle::new(
            points[idx[0] as usize],
            points[idx[1] as usize],
            points[idx[2] as usize],
        );

        let matches_facing = match facing {
            Facing::Front => triangle.scaled_normal().z <= 0.0,
            Facing::Back => triangle.scaled_normal().z > 0.0,
        };

        if matches_facing {
            grid.rasterize_triangle(&triangle, marks);
        }
    };

    #[cfg(feature = "parallel")]
    indices.par_iter().for_each(rasterize_one);
    #[cfg(not(feature = "parallel"))]
    indices.iter().for_each(rasterize_one);
}

/// Solidification pass: fills the voxels enclosed between the front and back
/// surfaces, one `(x, y)` column at a time.
fn solidify(grid: &RasterGrid) {
    let num_columns = grid.dims[0] as usize * grid.dims[1] as usize;

    let scan = |column: usize| {
        let i = (column % grid.dims[0] as usize) as u32;
        let j = (column / grid.dims[0] as usize) as u32;
        solidify_column(grid, i, j);
    };

    #[cfg(feature = "parallel")]
    (0..num_columns).into_par_iter().for_each(scan);
    #[cfg(not(feature = "parallel"))]
    (0..num_columns).for_each(scan);
}

/// Scanline fill of a single column, in strictly increasing `z` order.
///
/// Each span starts at a front-face voxel and ends at the next back-face
/// voxel; every voxel in between becomes solid. A front face with no closing
/// back face (an open surface, or a wall parallel to the scan axis) fills
/// nothing, so fill never leaks to the grid boundary.
fn solidify_column(grid: &RasterGrid, i: u32, j: u32) {
    let depth = grid.dims[2];
    let mut k = 0;

    while k < depth {
        if !grid.load(i, j, k).is_front_face() {
            k += 1;
            continue;
        }

        // Seek the back face closing this span.
        let mut back = k + 1;
        while back < depth && !grid.load(i, j, back).is_back_face() {
            back += 1;
        }

        if back < depth {
            for kk in (k + 1)..back {
                grid.mark(i, j, kk, VoxelFlags::FILL);
            }
            k = back + 1;
        } else {
            k += 1;
        }
    }
}
