//! Plane model in Hesse normal form.

use glam::{DQuat, DVec3};
use shared::Axis;

use crate::error::InputError;

/// Plane `normal · P + offset = 0` with a unit normal.
///
/// The offset is kept normalized (`D / |(A, B, C)|`), so the closest point to
/// the origin is always `-offset * normal` regardless of the input scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    offset: f64,
}

impl Plane {
    /// Build from `[A, B, C, D]` of `Ax + By + Cz + D = 0`.
    pub fn from_coefficients(coefficients: [f64; 4]) -> Result<Self, InputError> {
        let [a, b, c, d] = coefficients;
        if !coefficients.iter().all(|v| v.is_finite()) {
            return Err(InputError::InvalidPlane);
        }
        let raw = DVec3::new(a, b, c);
        let length = raw.length();
        if length == 0.0 || !length.is_finite() {
            return Err(InputError::ZeroNormal);
        }
        Ok(Self {
            normal: raw / length,
            offset: d / length,
        })
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Point on the plane closest to the origin.
    pub fn position(&self) -> DVec3 {
        self.normal * -self.offset
    }

    /// Rotate the normal about a world axis through the origin.
    ///
    /// The offset is unchanged, so the plane keeps its distance to the origin.
    pub fn rotate(&mut self, axis: Axis, degrees: f64) {
        let q = DQuat::from_axis_angle(DVec3::from_array(axis.unit()), degrees.to_radians());
        self.rotate_by(q);
    }

    pub fn rotate_by(&mut self, rotation: DQuat) {
        let rotated = rotation * self.normal;
        // Keep the previous normal if the rotation produced garbage
        if let Some(n) = rotated.try_normalize() {
            self.normal = n;
        }
    }

    /// Normalized `[A, B, C, D]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.offset]
    }

    /// Signed distance of `point` from the plane (positive on the normal side).
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Rotation carrying +Z onto the normal, used to orient the plane helper.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_rotation_arc(DVec3::Z, self.normal)
    }

    /// Text for the plane input field, four decimals like `0.0000, 0.0000, 1.0000, 0.0000`.
    pub fn format_coefficients(&self) -> String {
        let [a, b, c, d] = self.coefficients();
        format!("{a:.4}, {b:.4}, {c:.4}, {d:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_xy_plane() {
        let plane = Plane::from_coefficients([0.0, 0.0, 1.0, 0.0]).unwrap();
        assert!((plane.normal() - DVec3::Z).length() < EPS);
        assert!(plane.position().length() < EPS);
    }

    #[test]
    fn test_zero_normal_rejected() {
        let err = Plane::from_coefficients([0.0, 0.0, 0.0, 5.0]).unwrap_err();
        assert_eq!(err, InputError::ZeroNormal);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Plane::from_coefficients([f64::NAN, 0.0, 1.0, 0.0]).is_err());
        assert!(Plane::from_coefficients([0.0, f64::INFINITY, 1.0, 0.0]).is_err());
    }

    #[test]
    fn test_normal_is_unit_for_many_inputs() {
        let inputs = [
            [1.0, 2.0, 3.0, 4.0],
            [-7.5, 0.0, 0.25, -1.0],
            [1e-6, 1e-6, 0.0, 0.0],
            [1000.0, -2000.0, 3000.0, 10.0],
            [0.0, -3.0, 0.0, 9.0],
        ];
        for c in inputs {
            let plane = Plane::from_coefficients(c).unwrap();
            assert!((plane.normal().length() - 1.0).abs() < EPS, "input {c:?}");
        }
    }

    #[test]
    fn test_position_uses_scaled_offset() {
        // 2z + 4 = 0 is the plane z = -2
        let plane = Plane::from_coefficients([0.0, 0.0, 2.0, 4.0]).unwrap();
        assert!((plane.position() - DVec3::new(0.0, 0.0, -2.0)).length() < EPS);
        assert!(plane.signed_distance(plane.position()).abs() < EPS);
    }

    #[test]
    fn test_position_stays_on_plane_after_rotations() {
        let mut plane = Plane::from_coefficients([1.0, -2.0, 0.5, 3.0]).unwrap();
        let steps = [
            (Axis::X, 30.0),
            (Axis::Y, -75.0),
            (Axis::Z, 190.0),
            (Axis::X, 0.1),
            (Axis::Y, 360.0),
            (Axis::Z, -45.0),
        ];
        for (axis, deg) in steps.iter().cycle().take(60) {
            plane.rotate(*axis, *deg);
            assert!((plane.normal().length() - 1.0).abs() < 1e-12);
            let residual = plane.normal().dot(plane.position()) + plane.offset();
            assert!(residual.abs() < 1e-9, "residual {residual}");
        }
    }

    #[test]
    fn test_rotation_preserves_offset() {
        let mut plane = Plane::from_coefficients([0.0, 0.0, 1.0, -3.0]).unwrap();
        plane.rotate(Axis::X, 90.0);
        assert!((plane.offset() + 3.0).abs() < EPS);
        // z-normal rotated +90 about X points to -Y
        assert!((plane.normal() - DVec3::NEG_Y).length() < 1e-9);
        assert!((plane.position() - DVec3::new(0.0, -3.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_orientation_maps_z_to_normal() {
        let plane = Plane::from_coefficients([1.0, 1.0, 0.0, 0.0]).unwrap();
        let mapped = plane.orientation() * DVec3::Z;
        assert!((mapped - plane.normal()).length() < 1e-9);
    }

    #[test]
    fn test_format_coefficients() {
        let plane = Plane::from_coefficients([0.0, 0.0, 2.0, 1.0]).unwrap();
        assert_eq!(plane.format_coefficients(), "0.0000, 0.0000, 1.0000, 0.5000");
    }
}
