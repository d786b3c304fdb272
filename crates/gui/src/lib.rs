// Library crate: exposes testable modules for integration tests and scripted control.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod build;
pub mod chat;
pub mod command;
pub mod error;
pub mod geometry;
pub mod harness;
pub mod state;
pub mod validation;

/// Subset of viewport types needed by geometry and build (MeshData, Aabb, Ray, picking).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
