//! Text fields and mode toggle of the control panel

/// Plane field text at startup and after "clear"
pub const DEFAULT_PLANE_TEXT: &str = "0, 0, 1, 0";
pub const DEFAULT_ANGLE_TEXT: &str = "90";

/// Preset planes: label key and equation text
pub const PLANE_PRESETS: [(&str, &str); 3] = [
    ("plane.xy", "0, 0, 1, 0"),
    ("plane.xz", "0, 1, 0, 0"),
    ("plane.yz", "1, 0, 0, 0"),
];

/// What a primary-button drag in the viewport does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// Orbit the camera
    #[default]
    Orbit,
    /// Move the shape
    Drag,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Orbit => ControlMode::Drag,
            ControlMode::Drag => ControlMode::Orbit,
        }
    }
}

/// Contents of the editable fields
#[derive(Debug, Clone, PartialEq)]
pub struct InputFields {
    pub vertices: String,
    pub plane: String,
    pub shape_angle: String,
    pub plane_angle: String,
}

impl Default for InputFields {
    fn default() -> Self {
        Self {
            vertices: String::new(),
            plane: DEFAULT_PLANE_TEXT.to_string(),
            shape_angle: DEFAULT_ANGLE_TEXT.to_string(),
            plane_angle: DEFAULT_ANGLE_TEXT.to_string(),
        }
    }
}

impl InputFields {
    /// Reset the shape and plane fields; angles are kept.
    pub fn reset_scene_fields(&mut self) {
        self.vertices.clear();
        self.plane = DEFAULT_PLANE_TEXT.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_angles() {
        let mut fields = InputFields {
            vertices: "[1,2,3]".into(),
            plane: "1, 1, 1, 1".into(),
            shape_angle: "15".into(),
            plane_angle: "30".into(),
        };
        fields.reset_scene_fields();
        assert!(fields.vertices.is_empty());
        assert_eq!(fields.plane, DEFAULT_PLANE_TEXT);
        assert_eq!(fields.shape_angle, "15");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ControlMode::default(), ControlMode::Orbit);
        assert_eq!(ControlMode::Orbit.toggled(), ControlMode::Drag);
        assert_eq!(ControlMode::Drag.toggled(), ControlMode::Orbit);
    }
}
