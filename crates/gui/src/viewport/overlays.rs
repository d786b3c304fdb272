//! Viewport overlay drawing (axis labels, projection inset frame, hints)

use egui::Painter;
use glam::Vec3;

use crate::i18n::t;
use crate::state::{AppState, ControlMode};

use super::camera::OrbitCamera;

/// Labels sit this far past the arrow tips
const LABEL_OFFSET: f32 = 0.5;

/// Draw X/Y/Z labels just beyond the axis arrows
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &OrbitCamera, length: f32) {
    let at = length + LABEL_OFFSET;
    let labels = [
        (Vec3::X * at, "X", egui::Color32::from_rgb(220, 50, 50)),
        (Vec3::Y * at, "Y", egui::Color32::from_rgb(40, 170, 40)),
        (Vec3::Z * at, "Z", egui::Color32::from_rgb(50, 80, 220)),
    ];

    for (pos, label, color) in labels {
        if let Some(screen) = camera.project(pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(16.0),
                    color,
                );
            }
        }
    }
}

/// Border and caption around the projection inset
pub fn draw_projection_frame(painter: &Painter, inset: egui::Rect, state: &AppState) {
    painter.rect_stroke(
        inset,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(150)),
        egui::StrokeKind::Outside,
    );

    let caption = match state.scene.plane() {
        Some(plane) => {
            let n = plane.normal();
            format!("{} n=({:.2}, {:.2}, {:.2})", t("status.projection"), n.x, n.y, n.z)
        }
        None => t("status.projection").to_string(),
    };
    painter.text(
        inset.left_bottom() + egui::vec2(4.0, -4.0),
        egui::Align2::LEFT_BOTTOM,
        caption,
        egui::FontId::monospace(10.0),
        egui::Color32::from_gray(90),
    );
}

/// Mode-dependent navigation hint along the bottom edge
pub fn draw_hint(painter: &Painter, rect: egui::Rect, mode: ControlMode) {
    let hint = match mode {
        ControlMode::Orbit => t("status.nav_hint"),
        ControlMode::Drag => t("status.drag_hint"),
    };
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 8.0),
        egui::Align2::CENTER_BOTTOM,
        hint,
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(110),
    );
}
