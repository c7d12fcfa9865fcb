pub use self::error::VoxelizationError;
pub use self::voxel_grid::{VoxelData, VoxelGrid};

pub(crate) use self::voxel_grid::VoxelFlags;

mod error;
mod tri_box_overlap;
mod voxel_grid;
mod voxelizer;
