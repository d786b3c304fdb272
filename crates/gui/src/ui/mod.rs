pub mod chat_panel;
pub mod controls_panel;
pub mod notice;
pub mod status_bar;
