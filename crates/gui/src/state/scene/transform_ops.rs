//! Shape rotation and drag operations

use glam::Vec3;
use shared::Axis;

use super::SceneState;
use crate::error::InputError;

impl SceneState {
    /// Add `degrees` to the shape's Euler angle about `axis`.
    pub fn rotate_shape(&mut self, axis: Axis, degrees: f64) -> Result<(), InputError> {
        let shape = self.shape.as_mut().ok_or(InputError::NoShape)?;
        shape.transform.rotation[axis.index()] += degrees.to_radians();
        tracing::debug!(axis = axis.label(), degrees, "Rotated shape");
        self.version += 1;
        self.sync_projection();
        Ok(())
    }

    /// Apply a translation delta to the shape's position
    pub fn translate_shape(&mut self, delta: Vec3) -> Result<(), InputError> {
        let shape = self.shape.as_mut().ok_or(InputError::NoShape)?;
        for (p, d) in shape.transform.position.iter_mut().zip(delta.to_array()) {
            *p += f64::from(d);
        }
        self.version += 1;
        self.sync_projection();
        Ok(())
    }

    /// Move the shape so its origin sits at `position`.
    pub fn set_shape_position(&mut self, position: Vec3) -> Result<(), InputError> {
        let shape = self.shape.as_mut().ok_or(InputError::NoShape)?;
        shape.transform.position = position.to_array().map(f64::from);
        self.version += 1;
        self.sync_projection();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ShapeKind;

    #[test]
    fn test_rotation_accumulates_radians() {
        let mut scene = SceneState::default();
        scene.create_primitive(ShapeKind::Cube);
        scene.rotate_shape(Axis::Y, 90.0).unwrap();
        scene.rotate_shape(Axis::Y, 90.0).unwrap();
        let rotation = scene.shape().unwrap().transform.rotation;
        assert!((rotation[1] - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(rotation[0], 0.0);
    }

    #[test]
    fn test_rotate_without_shape() {
        let mut scene = SceneState::default();
        assert_eq!(scene.rotate_shape(Axis::X, 10.0), Err(InputError::NoShape));
        assert_eq!(scene.translate_shape(Vec3::X), Err(InputError::NoShape));
    }

    #[test]
    fn test_set_position() {
        let mut scene = SceneState::default();
        scene.create_primitive(ShapeKind::Cube);
        scene.set_shape_position(Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(scene.shape().unwrap().transform.position, [1.0, 2.0, 3.0]);
        // Cube occupies [0,2]^3 in model space
        assert_eq!(scene.projection.target, Vec3::new(2.0, 3.0, 4.0));
    }
}
