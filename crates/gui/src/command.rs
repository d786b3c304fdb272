//! JSON command protocol for scripted control of the scene.
//!
//! Each command maps onto one scene operation; input errors come back as a
//! failed [`CommandResponse`] rather than a parse error.

use serde::{Deserialize, Serialize};
use shared::{Axis, ShapeKind};

use crate::harness::TestHarness;

/// A command that can be executed against the scene.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Replace the shape with a built-in primitive
    CreateShape { kind: ShapeKind },
    /// Replace the shape with the convex hull of a `[x,y,z], ...` list
    CreateCustom { vertices: String },
    /// Set the plane `Ax + By + Cz + D = 0`
    SetPlane { coefficients: [f64; 4] },
    /// Rotate the shape about a world axis.
    RotateShape { axis: Axis, degrees: f64 },
    /// Rotate the plane normal about a world axis.
    RotatePlane { axis: Axis, degrees: f64 },
    /// Move the shape by a world-space offset.
    TranslateShape { delta: [f32; 3] },
    /// Clear the entire scene.
    Clear,
    /// Inspect shape, plane and projection camera.
    Inspect,
    /// Export the scene as JSON.
    ExportScene,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }

    fn from_result<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    tracing::debug!(?cmd, "Executing command");
    match cmd {
        AgentCommand::CreateShape { kind } => {
            harness.create_primitive(kind);
            CommandResponse::ok()
        }
        AgentCommand::CreateCustom { vertices } => {
            CommandResponse::from_result(harness.create_custom(&vertices))
        }
        AgentCommand::SetPlane { coefficients } => {
            CommandResponse::from_result(harness.set_plane(coefficients))
        }
        AgentCommand::RotateShape { axis, degrees } => {
            CommandResponse::from_result(harness.rotate_shape(axis, degrees))
        }
        AgentCommand::RotatePlane { axis, degrees } => match harness.rotate_plane(axis, degrees) {
            Ok(equation) => CommandResponse::ok_with_data(serde_json::json!({
                "equation": equation,
            })),
            Err(e) => CommandResponse::err(e.to_string()),
        },
        AgentCommand::TranslateShape { delta } => {
            CommandResponse::from_result(harness.translate_shape(delta))
        }
        AgentCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }
        AgentCommand::Inspect => CommandResponse::ok_with_data(inspect(harness)),
        AgentCommand::ExportScene => {
            match serde_json::to_value(harness.scene.description()) {
                Ok(v) => CommandResponse::ok_with_data(v),
                Err(e) => CommandResponse::err(format!("Failed to serialize scene: {e}")),
            }
        }
    }
}

fn inspect(harness: &TestHarness) -> serde_json::Value {
    let scene = &harness.scene;
    let shape = scene.shape().map(|shape| {
        serde_json::json!({
            "spec": shape.spec,
            "transform": shape.transform,
            "triangle_count": shape.mesh.triangle_count(),
        })
    });
    let plane = scene.plane().map(|plane| {
        serde_json::json!({
            "coefficients": plane.coefficients(),
            "normal": plane.normal().to_array(),
            "position": plane.position().to_array(),
        })
    });
    let projection = scene.projection;
    serde_json::json!({
        "shape": shape,
        "plane": plane,
        "projection": {
            "position": projection.position.to_array(),
            "target": projection.target.to_array(),
            "extent": projection.extent,
        },
    })
}

/// Parse and execute a JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
