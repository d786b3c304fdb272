//! Scene state management
//!
//! The scene holds at most one shape and one plane, plus the projection
//! camera that frames the shape along the plane normal.

mod persistence;
mod plane_ops;
mod shape_ops;
mod transform_ops;

use glam::{EulerRot, Mat4, Quat, Vec3};
use shared::{ShapeKind, ShapeSpec, Transform};

use crate::geometry::{frame_bounds, Plane, ProjectionCamera};
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Plane shown at startup and restored by "clear"
pub const DEFAULT_PLANE: [f64; 4] = [0.0, 0.0, 1.0, 0.0];

/// The single shape in the scene
#[derive(Debug, Clone)]
pub struct Shape {
    pub spec: ShapeSpec,
    pub transform: Transform,
    /// Model-space geometry
    pub mesh: MeshData,
}

impl Shape {
    pub fn rotation(&self) -> Quat {
        let [x, y, z] = self.transform.rotation;
        Quat::from_euler(EulerRot::XYZ, x as f32, y as f32, z as f32)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.transform.position.map(|v| v as f32))
    }

    /// Model-to-world matrix (rotation, then translation)
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position())
    }

    /// World-space bounding box of the transformed vertices
    pub fn world_bounds(&self) -> Aabb {
        Aabb::from_mesh_transformed(&self.mesh, &self.model_matrix())
    }
}

/// Something the primary (orbit) camera should do on the next frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRequest {
    /// Move the orbit target, keeping the eye where it is
    Focus(Vec3),
    /// Back to the default eye and target
    Reset,
}

/// Scene state: shape, plane and the derived projection camera
#[derive(Debug, Default)]
pub struct SceneState {
    pub(crate) shape: Option<Shape>,
    pub(crate) plane: Option<Plane>,
    /// Secondary camera, derived from shape and plane
    pub projection: ProjectionCamera,
    /// Bumped on every mutation
    pub(crate) version: u64,
    /// Bumped only when the model-space mesh changes; gates GPU uploads
    pub(crate) geometry_version: u64,
    pub(crate) camera_request: Option<CameraRequest>,
}

impl SceneState {
    /// The scene shown when the application starts: a sphere over the XY plane.
    pub fn startup() -> Self {
        let mut scene = Self::default();
        scene.create_primitive(ShapeKind::Sphere);
        if let Err(e) = scene.set_plane(DEFAULT_PLANE) {
            tracing::warn!("Default plane rejected: {e}");
        }
        scene
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Version of the model-space mesh. Transforms leave it alone.
    pub fn geometry_version(&self) -> u64 {
        self.geometry_version
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn plane(&self) -> Option<&Plane> {
        self.plane.as_ref()
    }

    /// Pending request for the primary camera, cleared on read.
    pub fn take_camera_request(&mut self) -> Option<CameraRequest> {
        self.camera_request.take()
    }

    /// Direction the projection view looks from: the plane normal, or the
    /// current camera direction when no plane is set.
    pub fn view_normal(&self) -> Vec3 {
        match &self.plane {
            Some(plane) => plane.normal().as_vec3(),
            None => self.projection.direction(),
        }
    }

    /// Reframe the projection camera on the shape. Returns false (and leaves
    /// the camera alone) when there is nothing to frame.
    pub fn sync_projection(&mut self) -> bool {
        let Some(shape) = &self.shape else {
            return false;
        };
        let normal = self.view_normal();
        match frame_bounds(&shape.world_bounds(), normal) {
            Some(frame) => {
                self.projection.apply_frame(frame, normal);
                true
            }
            None => false,
        }
    }

    /// Remove shape and plane and reset both cameras.
    pub fn clear(&mut self) {
        self.shape = None;
        self.plane = None;
        self.projection = ProjectionCamera::default();
        self.camera_request = Some(CameraRequest::Reset);
        self.version += 1;
        self.geometry_version += 1;
        tracing::info!("Scene cleared");
    }
}
