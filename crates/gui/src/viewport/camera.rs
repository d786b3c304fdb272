use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;
use crate::geometry::projection::DEFAULT_EYE;

/// Frustum height at zoom 1
const FRUSTUM_HEIGHT: f32 = 15.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
const PITCH_LIMIT: f32 = 1.55;

/// Orthographic orbit camera for the main viewport (Z up)
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Rotation about +Z (radians), 0 looks from +X
    pub yaw: f32,
    /// Elevation above the XY plane (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Zoom factor, larger shows less
    pub zoom: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
            zoom: 1.0,
        };
        camera.look_from(DEFAULT_EYE);
        camera
    }

    /// Recompute yaw, pitch and distance so the eye sits at `eye`.
    fn look_from(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let distance = offset.length();
        if distance < 1e-4 {
            return;
        }
        self.distance = distance;
        self.pitch = (offset.z / distance).clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = offset.y.atan2(offset.x);
    }

    /// Move the target, keeping the eye where it is.
    pub fn retarget(&mut self, target: Vec3) {
        let eye = self.eye_position();
        self.target = target;
        self.look_from(eye);
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.zoom = (self.zoom * (1.0 + delta)).clamp(0.5, 4.0);
    }

    /// Pan by a screen-space offset in pixels of a viewport `height` pixels tall.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        let units_per_pixel = self.frustum_height() / height.max(1.0);
        let offset = self.right_vector() * -dx + self.up_vector() * dy;
        self.target += offset * units_per_pixel;
    }

    /// Visible world height
    pub fn frustum_height(&self) -> f32 {
        FRUSTUM_HEIGHT / self.zoom
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * cy, cp * sy, sp) * self.distance
    }

    /// Unit vector from the eye towards the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye_position()).normalize_or_zero()
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Z)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let half_h = self.frustum_height() * 0.5;
        let half_w = half_h * aspect;
        Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, NEAR, FAR)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        self.forward().cross(Vec3::Z).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        self.right_vector().cross(self.forward()).normalize_or_zero()
    }

    /// Project a 3D point to 2D screen coords (for overlay text)
    pub fn project(&self, point: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let p = self.view_projection(aspect) * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray from a screen position into the 3D scene.
    ///
    /// Orthographic rays are parallel, so the origin is the unprojected point
    /// on the near plane rather than the eye.
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();
        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }
}
