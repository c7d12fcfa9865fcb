/*!
voxelize3d
==========

**voxelize3d** converts a 3D triangle mesh into a dense grid of solid
voxels, then rebuilds a renderable quad-faced mesh from that grid.

The pipeline has exactly two stages:
1. [`transformation::voxelization::VoxelGrid::voxelize`] rasterizes the mesh
   surface into a uniform voxel grid and solidifies its interior.
2. [`transformation::voxelization::VoxelGrid::to_quad_surface`] emits six
   independent quads for every solid voxel of the grid.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod shape;
pub mod transformation;
