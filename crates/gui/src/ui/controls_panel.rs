//! Left-hand control panel: shapes, vertex input, plane, rotations, mode.

use egui::Ui;
use shared::{Axis, ShapeKind};

use crate::i18n::{shape_name, t};
use crate::state::inputs::PLANE_PRESETS;
use crate::state::{AppState, ControlMode};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_salt("controls_scroll")
        .show(ui, |ui| {
            shapes_section(ui, state);
            ui.separator();
            custom_section(ui, state);
            ui.separator();
            plane_section(ui, state);
            ui.separator();
            rotation_section(ui, state, RotationTarget::Shape);
            ui.separator();
            rotation_section(ui, state, RotationTarget::Plane);
            ui.separator();
            mode_section(ui, state);
            ui.separator();
            if ui.button(t("controls.clear")).clicked() {
                state.clear_scene();
            }
        });
}

fn shapes_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong(t("controls.shapes"));
    ui.horizontal_wrapped(|ui| {
        for &kind in ShapeKind::all() {
            if ui.button(shape_name(kind)).clicked() {
                state.create_primitive(kind);
            }
        }
    });
}

fn custom_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong(t("controls.custom"));
    ui.add(
        egui::TextEdit::multiline(&mut state.inputs.vertices)
            .hint_text(t("controls.vertices_hint"))
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
    if ui.button(t("controls.create_custom")).clicked() {
        let result = state.create_custom_from_input();
        state.report(result);
    }
}

fn plane_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong(t("controls.plane"));
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.inputs.plane)
            .hint_text(t("controls.plane_hint"))
            .desired_width(f32::INFINITY),
    );
    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    ui.horizontal_wrapped(|ui| {
        if ui.button(t("controls.set_plane")).clicked() || enter {
            let result = state.set_plane_from_input();
            state.report(result);
        }
        for (label, equation) in PLANE_PRESETS {
            if ui.small_button(t(label)).on_hover_text(equation).clicked() {
                let result = state.apply_plane_preset(equation);
                state.report(result);
            }
        }
    });
}

#[derive(Clone, Copy)]
enum RotationTarget {
    Shape,
    Plane,
}

fn rotation_section(ui: &mut Ui, state: &mut AppState, target: RotationTarget) {
    let title = match target {
        RotationTarget::Shape => t("controls.rotate_shape"),
        RotationTarget::Plane => t("controls.rotate_plane"),
    };
    ui.strong(title);
    ui.horizontal(|ui| {
        ui.label(t("controls.angle"));
        let field = match target {
            RotationTarget::Shape => &mut state.inputs.shape_angle,
            RotationTarget::Plane => &mut state.inputs.plane_angle,
        };
        ui.add(egui::TextEdit::singleline(field).desired_width(50.0));
        for axis in Axis::all() {
            if ui.button(axis.label()).clicked() {
                let result = match target {
                    RotationTarget::Shape => state.rotate_shape_from_input(axis),
                    RotationTarget::Plane => state.rotate_plane_from_input(axis),
                };
                state.report(result);
            }
        }
    });
}

fn mode_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong(t("controls.mode"));
    ui.horizontal(|ui| {
        if ui.button(t("controls.toggle_mode")).clicked() {
            state.set_mode(state.mode.toggled());
        }
        let (label, color) = match state.mode {
            ControlMode::Orbit => (t("mode.orbit"), egui::Color32::from_rgb(0, 119, 255)),
            ControlMode::Drag => (t("mode.drag"), egui::Color32::from_rgb(204, 68, 170)),
        };
        ui.colored_label(color, label);
    });
}
