//! Aliases for the mathematical types used throughout this crate.

/// The point type.
pub use na::Point3 as Point;

/// The vector type.
pub use na::Vector3 as Vector;

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The dimension of the space.
pub const DIM: usize = 3;
