//! Closed-form primitive meshes, placed the way the viewer shows them (Z up).

use glam::{DVec3, Vec3};
use shared::ShapeKind;

use crate::geometry::convex_hull;
use crate::viewport::mesh::{self, MeshData};

pub const DEFAULT_SEGMENTS: u32 = 32;

pub const SPHERE_RADIUS: f32 = 1.0;
pub const CUBE_SIDE: f32 = 2.0;
pub const ROUND_RADIUS: f32 = 1.0;
pub const ROUND_HEIGHT: f32 = 2.0;
pub const TETRAHEDRON_SIDE: f64 = 3.0;

/// Corners of the regular tetrahedron: base triangle on `z = 0`, apex above its centroid.
pub fn tetrahedron_points(side: f64) -> [DVec3; 4] {
    let h = side * 3.0_f64.sqrt() / 2.0;
    [
        DVec3::ZERO,
        DVec3::new(side, 0.0, 0.0),
        DVec3::new(side / 2.0, h, 0.0),
        DVec3::new(side / 2.0, h / 3.0, (2.0_f64 / 3.0).sqrt() * side),
    ]
}

/// Create the mesh of a primitive in `color`.
pub fn create_primitive(kind: ShapeKind, color: [f32; 3]) -> MeshData {
    match kind {
        ShapeKind::Sphere => mesh::sphere(SPHERE_RADIUS, DEFAULT_SEGMENTS, DEFAULT_SEGMENTS, color),
        // Corner at the origin, occupying [0, side]^3
        ShapeKind::Cube => mesh::box_mesh(Vec3::ZERO, Vec3::splat(CUBE_SIDE), color),
        ShapeKind::Cone => mesh::cone(ROUND_RADIUS, ROUND_HEIGHT, DEFAULT_SEGMENTS, color),
        ShapeKind::Cylinder => mesh::cylinder(ROUND_RADIUS, ROUND_HEIGHT, DEFAULT_SEGMENTS, color),
        ShapeKind::Tetrahedron => tetrahedron(color),
        ShapeKind::Circle => mesh::disc(ROUND_RADIUS, DEFAULT_SEGMENTS, color),
    }
}

fn tetrahedron(color: [f32; 3]) -> MeshData {
    let points = tetrahedron_points(TETRAHEDRON_SIDE);
    let faces = match convex_hull(&points) {
        Ok(hull) => hull.triangles,
        // Four fixed non-coplanar points always form a hull
        Err(_) => vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
    };
    let points: Vec<Vec3> = points.iter().map(|p| p.as_vec3()).collect();
    mesh::flat_triangles(&points, &faces, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MeshValidator;

    #[test]
    fn test_tetrahedron_is_regular() {
        let p = tetrahedron_points(3.0);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert!(((p[i] - p[j]).length() - 3.0).abs() < 1e-9, "edge {i}-{j}");
            }
        }
    }

    #[test]
    fn test_tetrahedron_mesh_closed() {
        let mesh = create_primitive(ShapeKind::Tetrahedron, [1.0; 3]);
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.triangle_count(), 4);
        assert!(v.is_closed());
        assert!(v.faces_point_away_from(v.centroid()));
    }

    #[test]
    fn test_primitive_bounds() {
        let cases = [
            (ShapeKind::Sphere, [-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]),
            (ShapeKind::Cube, [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            (ShapeKind::Cone, [-1.0, -1.0, 0.0], [1.0, 1.0, 2.0]),
            (ShapeKind::Cylinder, [-1.0, -1.0, 0.0], [1.0, 1.0, 2.0]),
            (ShapeKind::Circle, [-1.0, -1.0, 0.0], [1.0, 1.0, 0.0]),
        ];
        for (kind, min, max) in cases {
            let mesh = create_primitive(kind, [1.0; 3]);
            let v = MeshValidator::new(&mesh);
            assert!(v.validate_all().is_empty(), "{kind:?}: {:?}", v.validate_all());
            let aabb = v.aabb();
            assert!((aabb.min - Vec3::from_array(min)).length() < 1e-3, "{kind:?} min {:?}", aabb.min);
            assert!((aabb.max - Vec3::from_array(max)).length() < 1e-3, "{kind:?} max {:?}", aabb.max);
        }
    }
}
