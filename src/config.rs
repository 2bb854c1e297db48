use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{PITCH, SENSITIVITY, SPEED, YAW, ZOOM};

/// Initial camera state. Every field has a default so partial JSON works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees, not clamped on load
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Field of view in degrees, clamped to [1, 45] when applied
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        }
    }
}

impl CameraConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse camera config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Invalid camera config: {}", path.display()))?;
        log::debug!("Loaded camera config from {}", path.display());
        Ok(config)
    }
}
