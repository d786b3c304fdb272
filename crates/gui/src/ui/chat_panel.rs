//! Right-hand chat panel: conversation with the model plus the shape preview
//! for drawing requests.

use egui::{Color32, Ui};
use orthoview_lib::chat::detect_shape;

use crate::i18n::{shape_name, t};
use crate::state::chat::{ChatMessage, ChatRole};
use crate::state::AppState;

const EXAMPLE_KEYS: [&str; 3] = ["chat.example1", "chat.example2", "chat.example3"];

/// Something the user asked for while the message list was borrowed
enum PanelAction {
    Retry,
    Clear,
    UseExample(&'static str),
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let mut action = header(ui, !state.chat.messages.is_empty());
    ui.separator();

    let list_height = (ui.available_height() - 56.0).max(60.0);
    egui::ScrollArea::vertical()
        .id_salt("chat_scroll")
        .max_height(list_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let chat = &state.chat;
            if chat.messages.is_empty() && !chat.is_loading {
                if let Some(example) = examples(ui) {
                    action = Some(PanelAction::UseExample(example));
                }
            }

            let retry_index = chat
                .last_failed_input
                .as_ref()
                .and_then(|_| chat.messages.len().checked_sub(1));
            for (i, msg) in chat.messages.iter().enumerate() {
                let retryable = Some(i) == retry_index && msg.is_error;
                if message(ui, msg, retryable) {
                    action = Some(PanelAction::Retry);
                }
            }

            if chat.is_loading {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(t("chat.thinking"));
                });
            }
        });

    match action {
        Some(PanelAction::Retry) => state.retry_chat(),
        Some(PanelAction::Clear) => state.chat.clear(),
        Some(PanelAction::UseExample(key)) => state.chat.input = t(key).to_string(),
        None => {}
    }

    ui.add_space(2.0);
    input_row(ui, state);
}

fn header(ui: &mut Ui, has_messages: bool) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.heading(t("chat.title"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clicked = ui
                .add_enabled(has_messages, egui::Button::new(t("chat.clear")).small())
                .on_hover_text(t("chat.clear_tip"))
                .clicked();
            if clicked {
                action = Some(PanelAction::Clear);
            }
        });
    });
    action
}

/// Placeholder with clickable example questions. Returns the picked example key.
fn examples(ui: &mut Ui) -> Option<&'static str> {
    let mut picked = None;
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.weak(t("chat.placeholder"));
        ui.add_space(6.0);
        ui.weak(t("chat.examples"));
        for key in EXAMPLE_KEYS {
            if ui.link(format!("\"{}\"", t(key))).clicked() {
                picked = Some(key);
            }
        }
    });
    picked
}

/// One message bubble. Returns true when its retry button was clicked.
fn message(ui: &mut Ui, msg: &ChatMessage, retryable: bool) -> bool {
    let (author, ink, fill) = match (&msg.role, msg.is_error) {
        (_, true) => ("AI", Color32::from_rgb(190, 40, 40), Color32::from_rgb(253, 232, 232)),
        (ChatRole::User, false) => (
            t("chat.you"),
            Color32::from_rgb(0, 90, 200),
            Color32::from_rgb(227, 239, 255),
        ),
        (ChatRole::Assistant, false) => {
            ("AI", Color32::from_rgb(30, 130, 60), Color32::from_rgb(235, 247, 238))
        }
    };

    let mut retry = false;
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::same(6))
        .outer_margin(egui::Margin::symmetric(0, 2))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.colored_label(ink, format!("{author}:"));
                ui.label(&msg.text);
            });
            if retryable {
                ui.add_space(2.0);
                retry = ui.small_button(t("chat.retry")).clicked();
            }
        });
    retry
}

/// Text field and send button, with a note when the question will draw a shape.
fn input_row(ui: &mut Ui, state: &mut AppState) {
    if let Some(kind) = detect_shape(&state.chat.input) {
        ui.colored_label(
            Color32::from_rgb(204, 68, 170),
            format!("{} {}", t("chat.will_draw"), shape_name(kind)),
        );
    }

    ui.horizontal(|ui| {
        let width = (ui.available_width() - 44.0).max(40.0);
        let field = ui.add_sized(
            [width, 22.0],
            egui::TextEdit::singleline(&mut state.chat.input)
                .hint_text(t("chat.ask"))
                .desired_width(width),
        );

        let ready = !state.chat.is_loading && !state.chat.input.trim().is_empty();
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(ready, egui::Button::new(">>"))
            .on_hover_text(t("chat.send_tip"))
            .clicked();

        if ready && (submitted || clicked) {
            state.send_chat();
            field.request_focus();
        }
    });
}
