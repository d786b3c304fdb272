//! User-defined polyhedra from a point list.

use glam::{DVec3, Vec3};

use crate::error::InputError;
use crate::geometry::convex_hull;
use crate::viewport::mesh::{self, MeshData};

/// Convex hull of `points` as a flat-shaded mesh.
///
/// Coplanar input yields a double-sided polygon.
pub fn create_custom(points: &[[f64; 3]], color: [f32; 3]) -> Result<MeshData, InputError> {
    let points: Vec<DVec3> = points.iter().map(|p| DVec3::from_array(*p)).collect();
    let hull = convex_hull(&points)?;
    tracing::debug!(
        points = points.len(),
        triangles = hull.triangles.len(),
        flat = hull.is_flat,
        "Built convex hull"
    );

    let vertices: Vec<Vec3> = hull.points.iter().map(|p| p.as_vec3()).collect();
    Ok(mesh::flat_triangles(&vertices, &hull.triangles, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MeshValidator;

    #[test]
    fn test_cube_corners_closed_outward() {
        let mut points = Vec::new();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    points.push([x, y, z]);
                }
            }
        }
        points.push([0.0, 0.0, 0.0]);
        let mesh = create_custom(&points, [1.0; 3]).unwrap();
        let v = MeshValidator::new(&mesh);
        assert!(v.validate_all().is_empty());
        assert!(v.is_closed());
        assert!(v.faces_point_away_from(Vec3::ZERO));
        assert!(v.assert_dimensions_approx([2.0, 2.0, 2.0], 1e-6));
    }

    #[test]
    fn test_flat_input_is_double_sided() {
        let mesh = create_custom(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]], [1.0; 3]).unwrap();
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.triangle_count(), 2);
        assert_eq!(v.dimensions()[2], 0.0);
    }

    #[test]
    fn test_collinear_rejected() {
        let err = create_custom(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]], [1.0; 3]).unwrap_err();
        assert_eq!(err, InputError::DegeneratePoints);
    }
}
