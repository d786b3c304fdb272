//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::i18n::set_lang;
use crate::state::AppState;
use crate::ui::{chat_panel, controls_panel, notice, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct ViewerApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_scene: Option<std::path::PathBuf>) -> Self {
        let mut state = AppState::default();

        // CLI scene replaces the startup scene
        if let Some(path) = initial_scene {
            if let Err(e) = state.scene.load_from_path(&path) {
                tracing::error!("Failed to load scene {}: {e}", path.display());
                state.notice = Some(e.to_string());
            } else if let Some(plane) = state.scene.plane() {
                state.inputs.plane = plane.format_coefficients();
            }
        }

        set_lang(state.settings.ui.language);
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);
        state.chat.set_repaint_context(cc.egui_ctx.clone());

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        } else {
            tracing::warn!("No glow context; the 3D view will stay empty");
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }
        set_lang(self.state.settings.ui.language);

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        self.state.poll_chat();

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::create_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Rejected input ───────────────────────────────────
        notice::show(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: Controls ─────────────────────────────
        if self.state.panels.controls {
            egui::SidePanel::left("controls")
                .default_width(280.0)
                .width_range(200.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
                )
                .show(ctx, |ui| {
                    controls_panel::show(ui, &mut self.state);
                });
        }

        // ── Right panel: Chat ────────────────────────────────
        if self.state.panels.chat {
            egui::SidePanel::right("chat")
                .default_width(300.0)
                .width_range(200.0..=500.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    chat_panel::show(ui, &mut self.state);
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
