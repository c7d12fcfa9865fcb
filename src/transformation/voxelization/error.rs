/// Errors that can occur when voxelizing a triangle mesh.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum VoxelizationError {
    /// The requested resolution was zero.
    ///
    /// The resolution is the number of voxels along the longest axis of the
    /// mesh bounding-box, so it must be at least 1.
    #[error("the voxelization resolution must be at least 1")]
    InvalidResolution,
    /// The mesh bounding-box is empty or degenerate.
    ///
    /// This happens if the vertex buffer is empty, contains non-finite
    /// coordinates, or if every vertex is the same point. A mesh that is flat
    /// along one or two axes is accepted as long as its longest axis has a
    /// positive extent.
    #[error("the mesh bounding-box is empty or degenerate")]
    DegenerateBounds,
    /// The voxel grid implied by the resolution is too large to allocate.
    #[error("the voxel grid implied by this resolution is too large to allocate")]
    GridTooLarge,
}
