//! Secondary orthographic view that looks along the plane normal.

use glam::{Mat4, Vec3};

use crate::viewport::picking::Aabb;

/// Distance of the projection camera from what it looks at.
pub const CAMERA_DISTANCE: f32 = 10.0;
/// Extra room around the projected shape.
pub const EXTENT_MARGIN: f32 = 1.1;
/// Square view extent used before any shape has been framed.
pub const DEFAULT_EXTENT: f32 = 5.0;
/// Where both cameras start, relative to the origin.
pub const DEFAULT_EYE: Vec3 = Vec3::new(5.0, 2.0, 3.0);

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Two orthonormal axes spanning the plane perpendicular to `normal`.
///
/// Starts from +X (or +Y when the normal is close to X) and orthogonalizes it
/// against the normal; the second axis is `normal × first`.
pub fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    let mut reference = Vec3::X;
    if normal.dot(reference).abs() > 0.9 {
        reference = Vec3::Y;
    }
    let axis1 = (reference - normal * normal.dot(reference)).normalize();
    let axis2 = normal.cross(axis1).normalize();
    (axis1, axis2)
}

/// Ranges of the box corners projected onto two axes, relative to the box center.
pub fn projected_ranges(aabb: &Aabb, axis1: Vec3, axis2: Vec3) -> (f32, f32) {
    let center = aabb.center();
    let mut min1 = f32::INFINITY;
    let mut max1 = f32::NEG_INFINITY;
    let mut min2 = f32::INFINITY;
    let mut max2 = f32::NEG_INFINITY;

    for corner in aabb.corners() {
        let rel = corner - center;
        let p1 = rel.dot(axis1);
        let p2 = rel.dot(axis2);
        min1 = min1.min(p1);
        max1 = max1.max(p1);
        min2 = min2.min(p2);
        max2 = max2.max(p2);
    }

    (max1 - min1, max2 - min2)
}

/// Result of framing a bounding box along a view direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    pub center: Vec3,
    /// Square view size (width == height)
    pub extent: f32,
}

/// Frame `aabb` as seen along `normal`. Returns `None` for an empty box or a
/// degenerate normal/extent.
pub fn frame_bounds(aabb: &Aabb, normal: Vec3) -> Option<ProjectionFrame> {
    if aabb.is_empty() {
        return None;
    }
    let normal = normal.try_normalize()?;
    let (axis1, axis2) = plane_basis(normal);
    let (range1, range2) = projected_ranges(aabb, axis1, axis2);
    let extent = range1.max(range2) * EXTENT_MARGIN;
    if !extent.is_finite() || extent <= 0.0 {
        return None;
    }
    Some(ProjectionFrame {
        center: aabb.center(),
        extent,
    })
}

/// The secondary orthographic camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Square view size
    pub extent: f32,
}

impl Default for ProjectionCamera {
    fn default() -> Self {
        Self {
            position: DEFAULT_EYE,
            target: Vec3::ZERO,
            extent: DEFAULT_EXTENT,
        }
    }
}

impl ProjectionCamera {
    /// Unit vector from the target towards the camera
    pub fn direction(&self) -> Vec3 {
        (self.position - self.target)
            .try_normalize()
            .unwrap_or_else(|| DEFAULT_EYE.normalize())
    }

    /// Look at `target` from `CAMERA_DISTANCE` along `normal`, keeping the extent.
    pub fn look_along(&mut self, target: Vec3, normal: Vec3) {
        let normal = normal.try_normalize().unwrap_or(Vec3::Z);
        self.target = target;
        self.position = target + normal * CAMERA_DISTANCE;
    }

    /// Apply a computed frame: center on the box and resize the view.
    pub fn apply_frame(&mut self, frame: ProjectionFrame, normal: Vec3) {
        self.look_along(frame.center, normal);
        self.extent = frame.extent;
    }

    /// Up vector: +Z unless the view direction is (nearly) vertical.
    pub fn up(&self) -> Vec3 {
        if self.direction().dot(Vec3::Z).abs() > 0.999 {
            Vec3::Y
        } else {
            Vec3::Z
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half = self.extent * 0.5;
        Mat4::orthographic_rh_gl(-half, half, -half, half, NEAR, FAR)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn cube_aabb() -> Aabb {
        Aabb {
            min: Vec3::ZERO,
            max: Vec3::splat(2.0),
        }
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let normals = [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(0.95, 0.1, -0.2).normalize(),
            Vec3::new(-0.3, 0.2, 0.9).normalize(),
        ];
        for n in normals {
            let (a, b) = plane_basis(n);
            assert!(approx(a.length(), 1.0));
            assert!(approx(b.length(), 1.0));
            assert!(approx(a.dot(n), 0.0));
            assert!(approx(b.dot(n), 0.0));
            assert!(approx(a.dot(b), 0.0));
        }
    }

    #[test]
    fn test_cube_along_z() {
        let frame = frame_bounds(&cube_aabb(), Vec3::Z).unwrap();
        assert!(approx(frame.extent, 2.2));
        assert_eq!(frame.center, Vec3::splat(1.0));
    }

    #[test]
    fn test_cube_extent_independent_of_basis_rotation() {
        // Rotating the in-plane basis of a symmetric box keeps the larger range
        let aabb = cube_aabb();
        let (a, b) = plane_basis(Vec3::Z);
        let (r1, r2) = projected_ranges(&aabb, a, b);
        let (s1, s2) = projected_ranges(&aabb, b, -a);
        assert!(approx(r1.max(r2), s1.max(s2)));
        assert!(approx(r1, 2.0));
        assert!(approx(r2, 2.0));
    }

    #[test]
    fn test_cube_along_diagonal() {
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let frame = frame_bounds(&cube_aabb(), n).unwrap();
        // Perpendicular to (1,1,0) the box spans 2*sqrt(2) horizontally and 2 vertically
        assert!(approx(frame.extent, 2.0 * 2.0_f32.sqrt() * 1.1));
    }

    #[test]
    fn test_empty_box_skipped() {
        assert!(frame_bounds(&Aabb::empty(), Vec3::Z).is_none());
    }

    #[test]
    fn test_point_box_skipped() {
        let aabb = Aabb {
            min: Vec3::ONE,
            max: Vec3::ONE,
        };
        assert!(frame_bounds(&aabb, Vec3::Z).is_none());
    }

    #[test]
    fn test_camera_placement() {
        let mut camera = ProjectionCamera::default();
        let frame = frame_bounds(&cube_aabb(), Vec3::Z).unwrap();
        camera.apply_frame(frame, Vec3::Z);
        assert_eq!(camera.target, Vec3::splat(1.0));
        assert!((camera.position - Vec3::new(1.0, 1.0, 11.0)).length() < 1e-5);
        assert!(approx(camera.extent, 2.2));
        // Looking straight down +Z needs a different up vector
        assert_eq!(camera.up(), Vec3::Y);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_default_camera() {
        let camera = ProjectionCamera::default();
        assert_eq!(camera.extent, DEFAULT_EXTENT);
        assert_eq!(camera.up(), Vec3::Z);
        assert!((camera.direction() - DEFAULT_EYE.normalize()).length() < 1e-6);
    }
}
