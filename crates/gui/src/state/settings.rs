//! Application settings

use serde::{Deserialize, Serialize};

use crate::chat::client::{API_KEY_ENV, DEFAULT_MODEL, GEMINI_API_BASE};
use crate::chat::GeminiConfig;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Korean, Language::English]
    }
}

/// Plane helper display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show the plane helper grid
    pub visible: bool,
    /// Side length of the plane helper
    pub size: f32,
    /// Cells along each side
    pub divisions: u32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 10.0,
            divisions: 10,
            opacity: 0.2,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Show axes
    pub visible: bool,
    /// Axis arrow length
    pub length: f32,
    /// Show axis labels (X, Y, Z)
    pub show_labels: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 6.0,
            show_labels: true,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Main view background color RGB
    pub background_color: [u8; 3],
    /// Projection inset background color RGB
    pub projection_background: [u8; 3],
    /// Projection inset side length in points
    pub projection_size: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0xf0, 0xf0, 0xf0],
            projection_background: [0xf8, 0xf8, 0xf8],
            projection_size: 200.0,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    #[serde(default)]
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::default(),
        }
    }
}

/// Chat API settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    pub base_url: String,
    pub model: String,
    /// Stored key; the environment variable wins when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ChatSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl ChatSettings {
    /// Client configuration, with the key taken from the environment first.
    pub fn gemini_config(&self) -> GeminiConfig {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.config_with_key(env_key)
    }

    fn config_with_key(&self, env_key: Option<String>) -> GeminiConfig {
        let key = env_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_default();
        GeminiConfig::new(key)
            .with_model(&self.model)
            .with_base_url(&self.base_url)
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Plane helper settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Axis settings
    #[serde(default)]
    pub axes: AxisSettings,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
    /// Chat API settings
    #[serde(default)]
    pub chat: ChatSettings,
}

impl AppSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "orthoview", "orthoview")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Could not create {}: {e}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Could not save settings: {e}");
                }
            }
            Err(e) => tracing::warn!("Could not serialize settings: {e}"),
        }
    }
}
