//! User-facing input and geometry errors.

/// Everything a button press or text field can be rejected for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Enter the plane normal (A, B, C) as a non-zero vector")]
    ZeroNormal,
    #[error("Plane equation must be four comma-separated numbers: A, B, C, D")]
    InvalidPlane,
    #[error("Enter point coordinates, e.g. [1,0,0], [0,1,0], [0,0,1]")]
    EmptyVertexList,
    #[error("Point {index} is malformed ({text:?}); expected [x, y, z], e.g. [1,0,0], [0,1,0], [0,0,1]")]
    MalformedVertex { index: usize, text: String },
    #[error("At least 3 points are required (got {0})")]
    TooFewPoints(usize),
    #[error("The points are collinear or coincident and do not span a shape")]
    DegeneratePoints,
    #[error("Enter a valid rotation angle in degrees (got {0:?})")]
    InvalidAngle(String),
    #[error("There is no shape in the scene; create one first")]
    NoShape,
    #[error("No plane is set; use \"Set plane\" first")]
    NoPlane,
}

/// Failure to read or write a scene file.
#[derive(Debug, thiserror::Error)]
pub enum SceneFileError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}
