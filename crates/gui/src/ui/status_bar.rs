use egui::Ui;
use shared::ShapeSpec;

use crate::i18n::{shape_name, t};
use crate::state::{AppState, ControlMode};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let shape = match state.scene.shape().map(|s| &s.spec) {
            Some(ShapeSpec::Primitive { kind }) => shape_name(*kind).to_string(),
            Some(ShapeSpec::Custom { points }) => {
                format!("{} ({})", t("shape.custom"), points.len())
            }
            None => t("status.none").to_string(),
        };
        ui.weak(format!("{}: {shape}", t("status.shape")));

        ui.separator();

        let plane = state
            .scene
            .plane()
            .map(|p| p.format_coefficients())
            .unwrap_or_else(|| t("status.none").to_string());
        ui.weak(format!("{}: {plane}", t("status.plane")));

        ui.separator();

        match state.mode {
            ControlMode::Orbit => ui.weak(t("mode.orbit")),
            ControlMode::Drag => ui.colored_label(egui::Color32::from_rgb(204, 68, 170), t("mode.drag")),
        };

        if state.chat.is_loading {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(200, 130, 0), t("status.ai_thinking"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("orthoview v", env!("CARGO_PKG_VERSION")));
        });
    });
}
