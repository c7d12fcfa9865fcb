extern crate nalgebra as na;

use approx::assert_relative_eq;
use na::Point3;
use voxelize3d::transformation::voxelization::VoxelGrid;
use voxelize3d::transformation::SurfaceMesh;

fn unit_cube() -> (Vec<Point3<f32>>, Vec<[u32; 3]>) {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ];
    let indices = vec![
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];
    (points, indices)
}

/// Signed volume of a triangle soup, by summing the signed volumes of the
/// tetrahedra formed by each triangle and the origin. Positive for outward
/// (counterclockwise) windings.
fn signed_volume(mesh: &SurfaceMesh) -> f32 {
    mesh.indices
        .iter()
        .map(|idx| {
            let a = mesh.vertices[idx[0] as usize].coords;
            let b = mesh.vertices[idx[1] as usize].coords;
            let c = mesh.vertices[idx[2] as usize].coords;
            a.dot(&b.cross(&c)) / 6.0
        })
        .sum()
}

#[test]
fn every_solid_voxel_emits_six_independent_faces() {
    let (points, indices) = unit_cube();
    let grid = VoxelGrid::voxelize(&points, &indices, 4).unwrap();
    let mesh = grid.to_quad_surface();

    let solids = grid.num_solid_voxels();
    assert_eq!(solids, 125);

    // 6 faces per voxel, 4 vertices and 2 triangles per face.
    assert_eq!(mesh.vertices.len(), solids * 24);
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    assert_eq!(mesh.centers.len(), mesh.vertices.len());
    assert_eq!(mesh.indices.len(), solids * 12);

    // No vertex sharing: each triangle only references the 4-vertex block
    // of the face it belongs to.
    for (tri, idx) in mesh.indices.iter().enumerate() {
        let face = (tri / 2) as u32;
        for &vid in idx {
            assert!(vid / 4 == face, "triangle {tri} escapes its face block");
        }
    }
}

#[test]
fn faces_are_offset_along_their_normal() {
    let (points, indices) = unit_cube();
    let grid = VoxelGrid::voxelize(&points, &indices, 4).unwrap();
    let mesh = grid.to_quad_surface();
    let half_unit = grid.unit_length() / 2.0;

    for (vid, vertex) in mesh.vertices.iter().enumerate() {
        let normal = mesh.normals[vid];
        let center = mesh.centers[vid];
        let to_vertex = vertex - Point3::new(center.x, center.y, center.z);

        // Axis-aligned unit normal.
        assert_relative_eq!(normal.norm(), 1.0);
        // Each vertex sits on a corner of its voxel's cube, half a unit
        // along the face normal.
        assert_relative_eq!(normal.dot(&to_vertex), half_unit, epsilon = 1.0e-6);
        assert_relative_eq!(to_vertex.amax(), half_unit, epsilon = 1.0e-6);
    }
}

#[test]
fn surface_mesh_bounds_match_the_grid() {
    let (points, indices) = unit_cube();
    let grid = VoxelGrid::voxelize(&points, &indices, 4).unwrap();
    let mesh = grid.to_quad_surface();
    let aabb = mesh.aabb();

    // All 125 voxels of the 5x5x5 grid are solid, so the mesh spans the
    // whole grid: the cube bounds expanded by half a unit on every side.
    assert_relative_eq!(aabb.mins, Point3::new(-0.125, -0.125, -0.125));
    assert_relative_eq!(aabb.maxs, Point3::new(1.125, 1.125, 1.125));
}

#[test]
fn face_windings_enclose_a_positive_volume() {
    let (points, indices) = unit_cube();
    let grid = VoxelGrid::voxelize(&points, &indices, 4).unwrap();
    let mesh = grid.to_quad_surface();

    // Each voxel contributes a closed, outward-oriented cube, so the signed
    // volume of the soup is the number of solid voxels times the voxel
    // volume. A flipped winding anywhere would break this exactness.
    let unit = grid.unit_length();
    let expected = grid.num_solid_voxels() as f32 * unit * unit * unit;
    assert_relative_eq!(signed_volume(&mesh), expected, epsilon = 1.0e-3);
}

#[test]
fn empty_grid_yields_an_empty_mesh() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
    ];
    let grid = VoxelGrid::voxelize(&points, &[], 4).unwrap();
    let mesh = grid.to_quad_surface();

    assert!(mesh.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn surface_reconstruction_is_deterministic() {
    let (points, indices) = unit_cube();
    let first = VoxelGrid::voxelize(&points, &indices, 8)
        .unwrap()
        .to_quad_surface();
    let second = VoxelGrid::voxelize(&points, &indices, 8)
        .unwrap()
        .to_quad_surface();

    assert_eq!(first, second);
}
