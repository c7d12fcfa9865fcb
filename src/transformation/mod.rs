//! Voxelization of triangle meshes, and reconstruction of a mesh from the voxels.

pub use self::quad_surface::SurfaceMesh;
pub use self::voxelization::{VoxelData, VoxelGrid, VoxelizationError};

mod quad_surface;
pub mod utils;
/// Solid voxelization of a 3D triangle mesh.
pub mod voxelization;
