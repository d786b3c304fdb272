//! Plane operations

use shared::Axis;

use super::{CameraRequest, SceneState};
use crate::error::InputError;
use crate::geometry::{parse_plane_input, Plane};

impl SceneState {
    /// Set the plane `Ax + By + Cz + D = 0`.
    ///
    /// The orbit camera is asked to focus the plane position and the
    /// projection camera is pointed along the new normal.
    pub fn set_plane(&mut self, coefficients: [f64; 4]) -> Result<(), InputError> {
        let plane = Plane::from_coefficients(coefficients)?;
        tracing::info!(equation = %plane.format_coefficients(), "Plane set");
        self.plane = Some(plane);
        self.after_plane_change();
        Ok(())
    }

    /// Parse `A, B, C, D` and set the plane.
    pub fn set_plane_text(&mut self, text: &str) -> Result<(), InputError> {
        self.set_plane(parse_plane_input(text)?)
    }

    /// Rotate the plane normal about a world axis. Returns the normalized
    /// equation for the plane input field.
    pub fn rotate_plane(&mut self, axis: Axis, degrees: f64) -> Result<String, InputError> {
        let plane = self.plane.as_mut().ok_or(InputError::NoPlane)?;
        plane.rotate(axis, degrees);
        let text = plane.format_coefficients();
        tracing::debug!(axis = axis.label(), degrees, equation = %text, "Rotated plane");
        self.after_plane_change();
        Ok(text)
    }

    fn after_plane_change(&mut self) {
        let Some(plane) = self.plane else {
            return;
        };
        let position = plane.position().as_vec3();
        self.projection.look_along(position, plane.normal().as_vec3());
        self.camera_request = Some(CameraRequest::Focus(position));
        self.version += 1;
        self.sync_projection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::projection::CAMERA_DISTANCE;
    use glam::Vec3;

    #[test]
    fn test_set_plane_without_shape_points_camera() {
        let mut scene = SceneState::default();
        scene.set_plane([0.0, 2.0, 0.0, -4.0]).unwrap();
        // 2y - 4 = 0 is y = 2
        let expected = Vec3::new(0.0, 2.0, 0.0);
        assert_eq!(scene.take_camera_request(), Some(CameraRequest::Focus(expected)));
        assert!((scene.projection.target - expected).length() < 1e-6);
        assert!((scene.projection.position - (expected + Vec3::Y * CAMERA_DISTANCE)).length() < 1e-5);
    }

    #[test]
    fn test_zero_normal_keeps_previous_plane() {
        let mut scene = SceneState::default();
        scene.set_plane([1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(scene.set_plane([0.0, 0.0, 0.0, 1.0]), Err(InputError::ZeroNormal));
        assert_eq!(scene.plane().unwrap().coefficients(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_plane_text() {
        let mut scene = SceneState::default();
        assert_eq!(scene.set_plane_text("1, 2, 3"), Err(InputError::InvalidPlane));
        scene.set_plane_text("0, 1, 0, 0").unwrap();
        assert_eq!(scene.plane().unwrap().normal(), glam::DVec3::Y);
    }

    #[test]
    fn test_rotate_plane_returns_equation() {
        let mut scene = SceneState::default();
        scene.set_plane([0.0, 0.0, 1.0, -2.0]).unwrap();
        let text = scene.rotate_plane(Axis::Y, 90.0).unwrap();
        // Z rotated +90 about Y points to +X; offset is unchanged
        assert!(text.starts_with("1.0000, 0.0000, "), "{text}");
        assert!(text.ends_with(", -2.0000"), "{text}");
        let normal = scene.plane().unwrap().normal();
        assert!((normal - glam::DVec3::X).length() < 1e-9);
        match scene.take_camera_request() {
            Some(CameraRequest::Focus(p)) => assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5),
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_rotate_without_plane() {
        let mut scene = SceneState::default();
        assert_eq!(scene.rotate_plane(Axis::X, 30.0), Err(InputError::NoPlane));
    }

    #[test]
    fn test_plane_change_reframes_shape() {
        let mut scene = SceneState::default();
        scene.create_primitive(shared::ShapeKind::Cube);
        scene.set_plane([1.0, 0.0, 0.0, 5.0]).unwrap();
        // Framed on the cube center, looking along +X
        assert_eq!(scene.projection.target, Vec3::splat(1.0));
        assert!((scene.projection.direction() - Vec3::X).length() < 1e-6);
        assert!((scene.projection.extent - 2.2).abs() < 1e-4);
    }
}
