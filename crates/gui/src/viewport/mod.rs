//! 3D viewport panel: main orbit view plus the projection inset

mod camera;
mod gl_renderer;
pub use orthoview_lib::viewport::{mesh, picking};
mod overlays;

use std::sync::{Arc, Mutex};

use egui::Ui;
use glam::{Mat4, Vec3};

use crate::build::{is_double_sided, PROJECTION_COLOR};
use crate::state::{AppState, CameraRequest, ControlMode};
use camera::OrbitCamera;
use gl_renderer::{GlRenderer, RenderParams, ShapeDraw, ShapeUpload, Shading};
use picking::{pick_triangle, ray_plane};

/// Gap between the inset and the viewport corner
const INSET_MARGIN: f32 = 10.0;

/// An in-progress shape drag: the shape follows the pointer in the plane
/// through the grab point that faces the camera.
struct ShapeDrag {
    last_point: Vec3,
    normal: Vec3,
}

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: OrbitCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    drag: Option<ShapeDrag>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            gl_renderer: None,
            drag: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = OrbitCamera::new();
    }

    /// Free GPU resources; called once when the window closes.
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        // ── Requests from scene operations ────────────────────
        match state.scene.take_camera_request() {
            Some(CameraRequest::Focus(target)) => self.camera.retarget(target),
            Some(CameraRequest::Reset) => self.reset_camera(),
            None => {}
        }

        // ── Shape drag and camera controls ────────────────────
        let dragging_shape = self.handle_shape_drag(&response, rect, state);
        if !dragging_shape {
            self.handle_camera(&response, rect, state.mode);
        }

        // ── Scroll zoom ───────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.002);
            }
        }

        // Projection follows the shape every frame
        state.scene.sync_projection();

        if !ui.is_rect_visible(rect) {
            return;
        }

        let inset = inset_rect(rect, state.settings.viewport.projection_size);
        self.render_gl(ui, rect, inset, state);

        // ── Overlays ─────────────────────────────────────────
        let painter = ui.painter_at(rect);
        let axes = &state.settings.axes;
        if axes.visible && axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, axes.length);
        }
        overlays::draw_projection_frame(&painter, inset, state);
        overlays::draw_hint(&painter, rect, state.mode);
    }

    fn handle_camera(&mut self, response: &egui::Response, rect: egui::Rect, mode: ControlMode) {
        let orbit = response.dragged_by(egui::PointerButton::Middle)
            || (mode == ControlMode::Orbit && response.dragged_by(egui::PointerButton::Primary));
        if orbit {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y, rect.height());
        }
    }

    /// Returns true while a shape drag owns the pointer.
    fn handle_shape_drag(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) -> bool {
        if state.mode != ControlMode::Drag {
            self.drag = None;
            return false;
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            let pointer = response.interact_pointer_pos().or_else(|| response.hover_pos());
            if let (Some(pos), Some(shape)) = (pointer, state.scene.shape()) {
                let ray = self.camera.screen_ray(pos, rect);
                if let Some(hit) = pick_triangle(&ray, &shape.mesh, &shape.model_matrix()) {
                    tracing::debug!(triangle = hit.triangle_index, "Started shape drag");
                    self.drag = Some(ShapeDrag {
                        last_point: hit.point,
                        normal: -self.camera.forward(),
                    });
                }
            }
        }

        let Some(drag) = self.drag.as_mut() else {
            return false;
        };

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let ray = self.camera.screen_ray(pos, rect);
                if let Some(t) = ray_plane(&ray, drag.last_point, drag.normal) {
                    let point = ray.at(t);
                    let delta = point - drag.last_point;
                    drag.last_point = point;
                    if let Err(e) = state.scene.translate_shape(delta) {
                        tracing::debug!("Drag ended: {e}");
                        self.drag = None;
                    }
                }
            }
        }

        if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
            self.drag = None;
        }
        true
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, inset: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let aspect = rect.width() / rect.height().max(1.0);
        let main_vp = self.camera.view_projection(aspect);
        let projection_vp = state.scene.projection.view_projection();

        // Clone the mesh only when the GPU copy is stale
        let version = state.scene.geometry_version();
        let stale = gl_renderer
            .lock()
            .map(|r| r.needs_shape(version))
            .unwrap_or(false);
        let upload = stale.then(|| ShapeUpload {
            version,
            mesh: state.scene.shape().map(|s| s.mesh.clone()),
        });
        let shape_draw = state.scene.shape().map(|shape| ShapeDraw {
            model: shape.model_matrix(),
            double_sided: is_double_sided(&shape.spec),
        });
        let plane_model = state.scene.plane().map(|plane| {
            Mat4::from_rotation_translation(
                plane.orientation().as_quat(),
                plane.position().as_vec3(),
            )
        });

        let settings = &state.settings;
        let grid_settings = settings.grid.clone();
        let axes_settings = settings.axes.clone();
        let main_params = RenderParams {
            viewport: [0.0; 4],
            view_projection: main_vp,
            bg_color: settings.viewport.background_color,
            shading: Shading::Lit,
            helpers: true,
            grid_visible: grid_settings.visible,
            axes_visible: axes_settings.visible,
        };
        let inset_params = RenderParams {
            viewport: [0.0; 4],
            view_projection: projection_vp,
            bg_color: settings.viewport.projection_background,
            shading: Shading::Flat(PROJECTION_COLOR),
            helpers: false,
            grid_visible: false,
            axes_visible: false,
        };

        // Main view; uploads changed geometry first
        let renderer = gl_renderer.clone();
        let main = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                if let Ok(mut r) = renderer.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    if let Some(upload) = &upload {
                        r.sync_shape(gl, upload);
                    }
                    let params = RenderParams {
                        viewport: pixel_viewport(&info),
                        ..main_params
                    };
                    r.paint(gl, &params, shape_draw.as_ref(), plane_model);
                }
            })),
        };
        ui.painter().add(main);

        // Projection inset on top
        let renderer = gl_renderer.clone();
        let projection = egui::PaintCallback {
            rect: inset,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                if let Ok(r) = renderer.lock() {
                    let params = RenderParams {
                        viewport: pixel_viewport(&info),
                        ..inset_params
                    };
                    r.paint(gl, &params, shape_draw.as_ref(), None);
                }
            })),
        };
        ui.painter().add(projection);
    }
}

/// Square inset in the top-right corner of the viewport
fn inset_rect(rect: egui::Rect, size: f32) -> egui::Rect {
    let size = size
        .min(rect.width() - 2.0 * INSET_MARGIN)
        .min(rect.height() - 2.0 * INSET_MARGIN)
        .max(1.0);
    egui::Rect::from_min_size(
        egui::pos2(rect.right() - INSET_MARGIN - size, rect.top() + INSET_MARGIN),
        egui::vec2(size, size),
    )
}

fn pixel_viewport(info: &egui::PaintCallbackInfo) -> [f32; 4] {
    let clip = info.viewport_in_pixels();
    [
        clip.left_px as f32,
        clip.from_bottom_px as f32,
        clip.width_px as f32,
        clip.height_px as f32,
    ]
}
