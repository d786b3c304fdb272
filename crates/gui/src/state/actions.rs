//! Control-panel actions: read the text fields, call into the scene, and
//! surface rejections as a notice.

use shared::{Axis, ShapeKind};

use super::{AppState, ControlMode};
use crate::error::InputError;
use crate::geometry::parse_angle;

impl AppState {
    /// Show the error of a failed action in the notice.
    pub fn report(&mut self, result: Result<(), InputError>) {
        if let Err(e) = result {
            tracing::info!("Rejected input: {e}");
            self.notice = Some(e.to_string());
        }
    }

    /// New shapes always start in orbit mode.
    pub fn create_primitive(&mut self, kind: ShapeKind) {
        self.scene.create_primitive(kind);
        self.set_mode(ControlMode::Orbit);
    }

    /// Build the convex hull of the vertex field.
    pub fn create_custom_from_input(&mut self) -> Result<(), InputError> {
        let text = self.inputs.vertices.clone();
        self.scene.create_custom(&text)?;
        self.set_mode(ControlMode::Orbit);
        Ok(())
    }

    pub fn set_plane_from_input(&mut self) -> Result<(), InputError> {
        let text = self.inputs.plane.clone();
        self.scene.set_plane_text(&text)
    }

    /// Put a preset equation into the plane field and apply it.
    pub fn apply_plane_preset(&mut self, equation: &str) -> Result<(), InputError> {
        self.inputs.plane = equation.to_string();
        self.set_plane_from_input()
    }

    pub fn rotate_shape_from_input(&mut self, axis: Axis) -> Result<(), InputError> {
        let degrees = parse_angle(&self.inputs.shape_angle)?;
        self.scene.rotate_shape(axis, degrees)
    }

    /// Rotate the plane and write the new equation back into the plane field.
    pub fn rotate_plane_from_input(&mut self, axis: Axis) -> Result<(), InputError> {
        let degrees = parse_angle(&self.inputs.plane_angle)?;
        self.inputs.plane = self.scene.rotate_plane(axis, degrees)?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "Control mode changed");
        }
        self.mode = mode;
    }

    /// Empty the scene, reset the fields and go back to orbit mode.
    pub fn clear_scene(&mut self) {
        self.scene.clear();
        self.inputs.reset_scene_fields();
        self.mode = ControlMode::Orbit;
    }

    pub fn send_chat(&mut self) {
        let config = self.settings.chat.gemini_config();
        self.chat.send_message(config);
    }

    pub fn retry_chat(&mut self) {
        let config = self.settings.chat.gemini_config();
        self.chat.retry(config);
    }

    /// Apply chat replies that arrived since the last frame.
    pub fn poll_chat(&mut self) {
        for kind in self.chat.poll_responses(&mut self.scene) {
            tracing::info!("Chat created a {}", kind.as_str());
            self.set_mode(ControlMode::Orbit);
        }
    }
}
