//! Keyword heuristic that turns "draw me a cone" style questions into a shape.

use shared::ShapeKind;

/// Words that mark a question as a drawing request
const TRIGGERS: &[&str] = &[
    "그려줘",
    "보여줘",
    "생성해줘",
    "만들어줘",
    "draw",
    "show me",
    "create",
    "make",
];

/// Shape words, most specific first ("구" matches inside many words, so sphere is last)
const SHAPE_WORDS: &[(ShapeKind, &[&str])] = &[
    (ShapeKind::Tetrahedron, &["정사면체", "tetrahedron"]),
    (ShapeKind::Cube, &["정육면체", "큐브", "cube"]),
    (ShapeKind::Cylinder, &["원기둥", "cylinder"]),
    (ShapeKind::Cone, &["원뿔", "cone"]),
    (ShapeKind::Circle, &["원판", "circle", "disc", "disk"]),
    (ShapeKind::Sphere, &["구", "sphere", "ball"]),
];

/// The shape a question asks to draw, if it contains both a trigger and a shape word.
pub fn detect_shape(text: &str) -> Option<ShapeKind> {
    let text = text.to_lowercase();
    if !TRIGGERS.iter().any(|t| text.contains(t)) {
        return None;
    }
    SHAPE_WORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(kind, _)| *kind)
}

/// Question sent to the model when a shape was detected.
pub fn augment_query(query: &str, kind: ShapeKind) -> String {
    format!(
        "Please answer: \"{query}\". (Note: the user has enabled drawing this shape in \
         the 3D viewer. The shape is {}.)",
        kind.as_str()
    )
}
