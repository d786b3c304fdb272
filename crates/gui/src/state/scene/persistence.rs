//! Scene description export/import and scene files

use std::path::Path;

use shared::SceneDescription;

use super::SceneState;
use crate::error::{InputError, SceneFileError};

impl SceneState {
    /// Serializable snapshot of the scene.
    pub fn description(&self) -> SceneDescription {
        SceneDescription {
            shape: self.shape.as_ref().map(|s| s.spec.clone()),
            transform: self
                .shape
                .as_ref()
                .map(|s| s.transform.clone())
                .unwrap_or_default(),
            plane: self.plane.map(|p| p.coefficients()),
        }
    }

    /// Replace the scene with `desc`. On error the scene is left cleared.
    pub fn load_description(&mut self, desc: &SceneDescription) -> Result<(), InputError> {
        self.clear();
        if let Some(spec) = &desc.shape {
            self.create_shape(spec.clone())?;
            if let Some(shape) = self.shape.as_mut() {
                shape.transform = desc.transform.clone();
            }
        }
        if let Some(coefficients) = desc.plane {
            self.set_plane(coefficients)?;
        }
        self.version += 1;
        self.sync_projection();
        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), SceneFileError> {
        let json = serde_json::to_string_pretty(&self.description())?;
        std::fs::write(path, json).map_err(|source| SceneFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved scene to {}", path.display());
        Ok(())
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<(), SceneFileError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let desc: SceneDescription = serde_json::from_str(&json)?;
        self.load_description(&desc)?;
        tracing::info!("Loaded scene from {}", path.display());
        Ok(())
    }
}
