use serde::{Deserialize, Serialize};

/// Closed-form primitive the shape factory knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    Cube,
    Cone,
    Cylinder,
    Tetrahedron,
    Circle,
}

impl ShapeKind {
    /// Wire name, also used in chat prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cone => "cone",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Sphere,
            ShapeKind::Cube,
            ShapeKind::Cone,
            ShapeKind::Cylinder,
            ShapeKind::Tetrahedron,
            ShapeKind::Circle,
        ]
    }

    /// Solids of revolution and flat discs get the glossy material
    pub fn is_curved(&self) -> bool {
        matches!(
            self,
            ShapeKind::Sphere | ShapeKind::Cone | ShapeKind::Cylinder | ShapeKind::Circle
        )
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shape kind: {s}"))
    }
}

/// What a shape was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    Primitive { kind: ShapeKind },
    /// Convex hull of user-supplied points
    Custom { points: Vec<[f64; 3]> },
}

/// World axis used by the rotation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(&self) -> [f64; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }
}

/// Shape placement: translation plus XYZ Euler angles in radians
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Serialized viewer scene: at most one shape and one plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeSpec>,
    #[serde(default)]
    pub transform: Transform,
    /// Plane coefficients `[A, B, C, D]` of `Ax + By + Cz + D = 0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<[f64; 4]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_from_str() {
        assert_eq!("cube".parse::<ShapeKind>().unwrap(), ShapeKind::Cube);
        assert_eq!(" Sphere ".parse::<ShapeKind>().unwrap(), ShapeKind::Sphere);
        assert!("dodecahedron".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_shape_spec_tagged_json() {
        let json = r#"{"type": "primitive", "kind": "tetrahedron"}"#;
        let spec: ShapeSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, ShapeSpec::Primitive { kind: ShapeKind::Tetrahedron });

        let json = r#"{"type": "custom", "points": [[0,0,0],[1,0,0],[0,1,0]]}"#;
        let spec: ShapeSpec = serde_json::from_str(json).unwrap();
        match spec {
            ShapeSpec::Custom { points } => assert_eq!(points.len(), 3),
            other => panic!("unexpected spec: {other:?}"),
        }
    }

    #[test]
    fn test_scene_description_defaults() {
        let scene: SceneDescription = serde_json::from_str("{}").unwrap();
        assert!(scene.shape.is_none());
        assert!(scene.plane.is_none());
        assert_eq!(scene.transform, Transform::new());
    }

    #[test]
    fn test_scene_description_skips_empty_fields() {
        let json = serde_json::to_string(&SceneDescription::default()).unwrap();
        assert!(!json.contains("shape"));
        assert!(!json.contains("plane"));
    }

    #[test]
    fn test_axis_lowercase() {
        let axis: Axis = serde_json::from_str(r#""y""#).unwrap();
        assert_eq!(axis, Axis::Y);
        assert_eq!(axis.unit(), [0.0, 1.0, 0.0]);
    }
}
