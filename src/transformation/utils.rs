//! Utilities useful for various mesh generation tasks.

use crate::math::DIM;

/// Pushes the index buffer of a quad patch with `cols` vertices per row.
///
/// For a patch whose rows are laid along its `up` axis and whose columns are
/// laid along its `right` axis, the two triangles `(i, i + cols, i + 1)` and
/// `(i + 1, i + cols, i + 1 + cols)` wind counterclockwise when seen from the
/// side the patch's `up × right` vector points towards.
pub fn push_quad_indices(base: u32, cols: u32, out: &mut Vec<[u32; DIM]>) {
    out.push([base, base + cols, base + 1]);
    out.push([base + 1, base + cols, base + 1 + cols]);
}
