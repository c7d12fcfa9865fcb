//! Shapes supported by the voxelizer.

pub use self::triangle::Triangle;

mod triangle;
