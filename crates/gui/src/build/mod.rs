//! Shape factory: turns a `ShapeSpec` into a renderable mesh.
//!
//! Primitives are closed-form meshes; custom shapes are the convex hull of
//! the user's points, flat shaded.

mod custom;
mod primitives;

pub use custom::create_custom;
pub use primitives::{create_primitive, tetrahedron_points, DEFAULT_SEGMENTS};

use shared::{ShapeKind, ShapeSpec};

use crate::error::InputError;
use crate::viewport::mesh::{rgb, MeshData};

/// Shaded color of round shapes
pub const CURVED_COLOR: [f32; 3] = rgb(0xcc44aa);
/// Shaded color of faceted shapes
pub const FACETED_COLOR: [f32; 3] = rgb(0x0077ff);
/// Unlit color of the shape in the projection view
pub const PROJECTION_COLOR: [f32; 3] = rgb(0x555555);

/// Material color for a shape.
pub fn shape_color(spec: &ShapeSpec) -> [f32; 3] {
    match spec {
        ShapeSpec::Primitive { kind } if kind.is_curved() => CURVED_COLOR,
        _ => FACETED_COLOR,
    }
}

/// Build the model-space mesh of `spec`.
pub fn build_shape_mesh(spec: &ShapeSpec) -> Result<MeshData, InputError> {
    let color = shape_color(spec);
    match spec {
        ShapeSpec::Primitive { kind } => Ok(create_primitive(*kind, color)),
        ShapeSpec::Custom { points } => create_custom(points, color),
    }
}

/// Whether the shape's mesh has open/back faces that must be drawn without culling.
pub fn is_double_sided(spec: &ShapeSpec) -> bool {
    match spec {
        ShapeSpec::Primitive { kind } => *kind == ShapeKind::Circle,
        ShapeSpec::Custom { .. } => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MeshValidator;

    #[test]
    fn test_colors_by_kind() {
        for kind in ShapeKind::all() {
            let spec = ShapeSpec::Primitive { kind: *kind };
            let mesh = build_shape_mesh(&spec).unwrap();
            let expected = if kind.is_curved() { CURVED_COLOR } else { FACETED_COLOR };
            assert!(MeshValidator::new(&mesh).has_color(expected), "{kind:?}");
        }
    }

    #[test]
    fn test_custom_spec() {
        let spec = ShapeSpec::Custom {
            points: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
        };
        let mesh = build_shape_mesh(&spec).unwrap();
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.triangle_count(), 4);
        assert!(v.has_color(FACETED_COLOR));
    }

    #[test]
    fn test_custom_spec_errors_propagate() {
        let spec = ShapeSpec::Custom {
            points: vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
        };
        assert_eq!(build_shape_mesh(&spec).unwrap_err(), InputError::TooFewPoints(2));
    }
}
