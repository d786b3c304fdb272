use glam::{Mat4, Vec3};

use super::mesh::MeshData;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Inverted box that any point expands.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand(p);
        }
        aabb
    }

    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        Self::from_points(data.positions())
    }

    /// World-space box of a mesh placed by `model`.
    ///
    /// Every vertex is transformed, so rotated shapes get a tight box.
    pub fn from_mesh_transformed(data: &MeshData, model: &Mat4) -> Self {
        Self::from_points(data.positions().map(|p| model.transform_point3(p)))
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Ray-plane intersection; `None` when parallel or behind the origin.
pub fn ray_plane(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(point - ray.origin) / denom;
    (t >= 0.0).then_some(t)
}

/// Result of picking a triangle in a mesh
#[derive(Clone, Debug)]
pub struct TriangleHit {
    /// Index of the triangle (into mesh.indices / 3)
    pub triangle_index: usize,
    /// Distance from ray origin to hit point
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

/// Find the nearest triangle of a mesh placed by `model` that the ray hits.
pub fn pick_triangle(ray: &Ray, mesh: &MeshData, model: &Mat4) -> Option<TriangleHit> {
    let world: Vec<Vec3> = mesh
        .positions()
        .map(|p| model.transform_point3(p))
        .collect();

    // Cheap reject
    let bounds = Aabb::from_points(world.iter().copied());
    if bounds.is_empty() || ray_aabb(ray, &bounds).is_none() {
        return None;
    }

    let mut best: Option<TriangleHit> = None;
    for (tri_idx, tri) in mesh.indices.chunks_exact(3).enumerate() {
        let (v0, v1, v2) = (
            world[tri[0] as usize],
            world[tri[1] as usize],
            world[tri[2] as usize],
        );
        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.as_ref().is_none_or(|b| dist < b.distance) {
                best = Some(TriangleHit {
                    triangle_index: tri_idx,
                    distance: dist,
                    point: ray.at(dist),
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    #[test]
    fn test_empty_aabb() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert_eq!(aabb.size(), Vec3::ZERO);
        assert!(!Aabb::from_points([Vec3::ONE]).is_empty());
    }

    #[test]
    fn test_corners_cover_box() {
        let aabb = Aabb {
            min: Vec3::new(-1.0, 0.0, 2.0),
            max: Vec3::new(1.0, 3.0, 4.0),
        };
        let corners = aabb.corners();
        assert_eq!(Aabb::from_points(corners), aabb);
        assert_eq!(aabb.center(), Vec3::new(0.0, 1.5, 3.0));
    }

    #[test]
    fn test_transformed_box_uses_every_vertex() {
        let cube = mesh::box_mesh(Vec3::ZERO, Vec3::splat(2.0), [1.0; 3]);
        let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0))
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4);
        let aabb = Aabb::from_mesh_transformed(&cube, &model);
        // Rotating a 2x2 square by 45° widens it to 2*sqrt(2)
        let size = aabb.size();
        assert!((size.x - 2.0 * 2.0_f32.sqrt()).abs() < 1e-4);
        assert!((size.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let hit = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        assert!((ray_aabb(&hit, &aabb).unwrap() - 4.0).abs() < 1e-6);
        let miss = Ray {
            origin: Vec3::new(3.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        assert!(ray_aabb(&miss, &aabb).is_none());
    }

    #[test]
    fn test_ray_plane() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        assert!((ray_plane(&ray, Vec3::new(0.0, 0.0, 1.0), Vec3::Z).unwrap() - 4.0).abs() < 1e-6);
        assert!(ray_plane(&ray, Vec3::ZERO, Vec3::X).is_none());
        // Plane behind the ray
        assert!(ray_plane(&ray, Vec3::new(0.0, 0.0, 9.0), Vec3::Z).is_none());
    }

    #[test]
    fn test_pick_translated_mesh() {
        let cube = mesh::box_mesh(Vec3::ZERO, Vec3::splat(2.0), [1.0; 3]);
        let model = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let ray = Ray {
            origin: Vec3::new(11.0, 1.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        let hit = pick_triangle(&ray, &cube, &model).unwrap();
        assert!((hit.point.z - 2.0).abs() < 1e-5);
        assert!(pick_triangle(&ray, &cube, &Mat4::IDENTITY).is_none());
    }
}
