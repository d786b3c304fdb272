//! Headless test harness for programmatic scene manipulation.
//!
//! Drives the same scene operations the control panel and chat use, without a
//! window or GL context.

use glam::Vec3;
use shared::{Axis, SceneDescription, ShapeKind};

use crate::error::InputError;
use crate::geometry::ProjectionCamera;
use crate::state::scene::{CameraRequest, SceneState};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;

/// Headless test harness around a scene
pub struct TestHarness {
    pub scene: SceneState,
}

impl TestHarness {
    /// Create a harness with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: SceneState::default(),
        }
    }

    /// Create a harness with the startup scene (sphere over the XY plane).
    pub fn startup() -> Self {
        Self {
            scene: SceneState::startup(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    pub fn create_primitive(&mut self, kind: ShapeKind) {
        self.scene.create_primitive(kind);
    }

    pub fn create_cube(&mut self) {
        self.create_primitive(ShapeKind::Cube);
    }

    pub fn create_sphere(&mut self) {
        self.create_primitive(ShapeKind::Sphere);
    }

    /// Convex hull of a `[x,y,z], ...` vertex list
    pub fn create_custom(&mut self, vertices: &str) -> Result<(), InputError> {
        self.scene.create_custom(vertices)
    }

    pub fn set_plane(&mut self, coefficients: [f64; 4]) -> Result<(), InputError> {
        self.scene.set_plane(coefficients)
    }

    pub fn rotate_shape(&mut self, axis: Axis, degrees: f64) -> Result<(), InputError> {
        self.scene.rotate_shape(axis, degrees)
    }

    /// Returns the new plane equation text.
    pub fn rotate_plane(&mut self, axis: Axis, degrees: f64) -> Result<String, InputError> {
        self.scene.rotate_plane(axis, degrees)
    }

    pub fn translate_shape(&mut self, delta: [f32; 3]) -> Result<(), InputError> {
        self.scene.translate_shape(Vec3::from_array(delta))
    }

    pub fn clear(&mut self) {
        self.scene.clear();
    }

    // ── Scene I/O ─────────────────────────────────────────────

    /// Load a scene description from JSON, replacing the scene.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let desc: SceneDescription =
            serde_json::from_str(json).map_err(|e| format!("Invalid scene JSON: {e}"))?;
        self.scene.load_description(&desc).map_err(|e| e.to_string())
    }

    /// Export the scene description as pretty JSON.
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(&self.scene.description()).unwrap_or_default()
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn has_shape(&self) -> bool {
        self.scene.shape().is_some()
    }

    pub fn shape_mesh(&self) -> Option<&MeshData> {
        self.scene.shape().map(|s| &s.mesh)
    }

    /// Validator over the current shape's model-space mesh
    pub fn validate_shape_mesh(&self) -> Option<MeshValidator<'_>> {
        self.shape_mesh().map(MeshValidator::new)
    }

    pub fn plane_coefficients(&self) -> Option<[f64; 4]> {
        self.scene.plane().map(|p| p.coefficients())
    }

    pub fn projection(&self) -> &ProjectionCamera {
        &self.scene.projection
    }

    /// Pending primary-camera request, cleared on read
    pub fn take_camera_request(&mut self) -> Option<CameraRequest> {
        self.scene.take_camera_request()
    }

    pub fn version(&self) -> u64 {
        self.scene.version()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
