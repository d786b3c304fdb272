//! Modal notice for rejected input

use crate::i18n::t;
use crate::state::AppState;

/// Show the pending notice, if any, until the user dismisses it.
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.notice.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(t("notice.title"));
        ui.add_space(6.0);
        ui.label(message);
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button(t("notice.ok")).clicked()).inner
    });

    let dismissed = modal.inner
        || modal.should_close()
        || ctx.input(|i| i.key_pressed(egui::Key::Enter));
    if dismissed {
        state.notice = None;
    }
}
