//! Shape creation

use shared::{ShapeKind, ShapeSpec, Transform};

use super::{SceneState, Shape};
use crate::build::build_shape_mesh;
use crate::error::InputError;
use crate::geometry::parse_vertex_list;

impl SceneState {
    /// Replace the current shape with a freshly built one at the origin.
    pub fn create_shape(&mut self, spec: ShapeSpec) -> Result<(), InputError> {
        let mesh = build_shape_mesh(&spec)?;
        tracing::info!(
            shape = %spec_label(&spec),
            triangles = mesh.triangle_count(),
            "Created shape"
        );
        self.shape = Some(Shape {
            spec,
            transform: Transform::new(),
            mesh,
        });
        self.version += 1;
        self.geometry_version += 1;
        self.sync_projection();
        Ok(())
    }

    pub fn create_primitive(&mut self, kind: ShapeKind) {
        // Primitive meshes cannot fail to build
        if let Err(e) = self.create_shape(ShapeSpec::Primitive { kind }) {
            tracing::error!("Failed to build {}: {e}", kind.as_str());
        }
    }

    /// Parse `[x,y,z], ...` and build its convex hull. The current shape is
    /// kept when the text is rejected.
    pub fn create_custom(&mut self, vertex_text: &str) -> Result<(), InputError> {
        let points = parse_vertex_list(vertex_text)?;
        self.create_shape(ShapeSpec::Custom {
            points: points.iter().map(|p| p.to_array()).collect(),
        })
    }
}

fn spec_label(spec: &ShapeSpec) -> String {
    match spec {
        ShapeSpec::Primitive { kind } => kind.as_str().to_string(),
        ShapeSpec::Custom { points } => format!("custom({} points)", points.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shape_replaces_old() {
        let mut scene = SceneState::default();
        scene.create_primitive(ShapeKind::Cube);
        scene.translate_shape(glam::Vec3::ONE).unwrap();
        scene.create_primitive(ShapeKind::Cone);
        let shape = scene.shape().unwrap();
        assert_eq!(shape.spec, ShapeSpec::Primitive { kind: ShapeKind::Cone });
        assert_eq!(shape.transform, Transform::new());
    }

    #[test]
    fn test_custom_tetrahedron() {
        let mut scene = SceneState::default();
        scene.create_custom("[1,0,0], [0,1,0], [0,0,1], [0,0,0]").unwrap();
        let shape = scene.shape().unwrap();
        assert_eq!(shape.mesh.triangle_count(), 4);
        match &shape.spec {
            ShapeSpec::Custom { points } => assert_eq!(points.len(), 4),
            other => panic!("unexpected spec {other:?}"),
        }
    }

    #[test]
    fn test_rejected_input_keeps_shape() {
        let mut scene = SceneState::default();
        scene.create_primitive(ShapeKind::Sphere);
        let version = scene.version();
        let err = scene.create_custom("[0,0,0], [1,1,1]").unwrap_err();
        assert_eq!(err, InputError::TooFewPoints(2));
        assert_eq!(scene.version(), version);
        assert_eq!(
            scene.shape().unwrap().spec,
            ShapeSpec::Primitive { kind: ShapeKind::Sphere }
        );
    }
}
