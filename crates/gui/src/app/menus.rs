//! Application menu bar and settings window

use eframe::egui;
use shared::ShapeKind;

use crate::i18n::{shape_name, t};
use crate::state::{AppState, Language};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            state.clear_scene();
            state.chat.clear();
            ui.close_menu();
        }
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                if let Err(e) = state.scene.load_from_path(&path) {
                    tracing::error!("Failed to load scene: {e}");
                    state.notice = Some(e.to_string());
                } else {
                    state.inputs.reset_scene_fields();
                    if let Some(plane) = state.scene.plane() {
                        state.inputs.plane = plane.format_coefficients();
                    }
                }
            }
        }
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.save_title"))
                .add_filter("JSON", &["json"])
                .set_file_name("scene.json")
                .save_file()
            {
                if let Err(e) = state.scene.save_to_path(&path) {
                    tracing::error!("Failed to save scene: {e}");
                    state.notice = Some(e.to_string());
                }
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.controls, t("menu.controls"));
        ui.checkbox(&mut state.panels.chat, t("menu.ai_chat"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for &language in Language::all() {
                let selected = state.settings.ui.language == language;
                if ui.selectable_label(selected, language.display_name()).clicked() {
                    state.settings.ui.language = language;
                    state.settings.save();
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the create menu
pub fn create_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.create"), |ui| {
        for &kind in ShapeKind::all() {
            if ui.button(shape_name(kind)).clicked() {
                state.create_primitive(kind);
                ui.close_menu();
            }
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(400.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_general_settings(ui, state);
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_chat_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_general_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.general"));
    ui.horizontal(|ui| {
        ui.label(t("settings.language"));
        egui::ComboBox::from_id_salt("language_combo")
            .selected_text(state.settings.ui.language.display_name())
            .show_ui(ui, |ui| {
                for &language in Language::all() {
                    ui.selectable_value(
                        &mut state.settings.ui.language,
                        language,
                        language.display_name(),
                    );
                }
            });
    });
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(1.0..=100.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_divisions"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.divisions)
                .speed(1)
                .range(1..=100),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.visible, t("settings.axes_visible"));
    ui.checkbox(&mut state.settings.axes.show_labels, t("settings.axes_labels"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.5..=50.0),
        );
    });
    ui.add_space(10.0);
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    color_row(ui, t("settings.bg_color"), &mut state.settings.viewport.background_color);
    color_row(
        ui,
        t("settings.proj_bg_color"),
        &mut state.settings.viewport.projection_background,
    );
    ui.horizontal(|ui| {
        ui.label(t("settings.proj_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.viewport.projection_size)
                .speed(1.0)
                .range(100.0..=600.0)
                .suffix(" px"),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_chat_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.chat"));
    let chat = &mut state.settings.chat;
    ui.horizontal(|ui| {
        ui.label(t("settings.chat_model"));
        ui.text_edit_singleline(&mut chat.model);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.chat_base_url"));
        ui.text_edit_singleline(&mut chat.base_url);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.chat_api_key"));
        let mut key = chat.api_key.clone().unwrap_or_default();
        if ui
            .add(egui::TextEdit::singleline(&mut key).password(true))
            .changed()
        {
            chat.api_key = Some(key).filter(|k| !k.trim().is_empty());
        }
    });
    ui.weak(t("settings.chat_key_env"));
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::settings::AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
