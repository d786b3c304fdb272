//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
) {
    // Don't handle shortcuts when a text field is focused or a notice is up
    if ctx.memory(|m| m.focused().is_some()) || state.notice.is_some() {
        return;
    }

    ctx.input(|i| {
        // M: toggle orbit / drag mode
        if i.key_pressed(egui::Key::M) && !i.modifiers.command {
            state.set_mode(state.mode.toggled());
        }
        // Home: reset the orbit camera
        if i.key_pressed(egui::Key::Home) {
            viewport.reset_camera();
        }
        // Ctrl+Delete: clear the scene
        if i.modifiers.command && i.key_pressed(egui::Key::Delete) {
            state.clear_scene();
        }
    });
}
