pub mod actions;
pub mod chat;
pub mod inputs;
pub mod scene;
pub mod settings;

use chat::ChatState;
pub use inputs::{ControlMode, InputFields};
pub use scene::{CameraRequest, SceneState, Shape};
pub use settings::{AppSettings, Language};

/// Panel visibility flags
pub struct PanelVisibility {
    pub controls: bool,
    pub chat: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            controls: true,
            chat: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub chat: ChatState,
    pub inputs: InputFields,
    pub mode: ControlMode,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Message shown in the modal notice until dismissed
    pub notice: Option<String>,
    /// Show settings window
    pub show_settings_window: bool,
}

impl AppState {
    /// State with the given scene and settings; nothing is read from disk.
    pub fn new(scene: SceneState, settings: AppSettings) -> Self {
        Self {
            scene,
            chat: ChatState::default(),
            inputs: InputFields::default(),
            mode: ControlMode::default(),
            panels: PanelVisibility::default(),
            settings,
            notice: None,
            show_settings_window: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SceneState::startup(), AppSettings::load())
    }
}
