use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Movement};
use crate::config::CameraConfig;

fn constrained() -> bool {
    true
}

/// One recorded input event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Move {
        direction: Movement,
        dt: f32,
    },
    Look {
        x: f32,
        y: f32,
        #[serde(default = "constrained")]
        constrain_pitch: bool,
    },
    Scroll {
        y: f32,
    },
}

impl Command {
    pub fn apply(&self, camera: &mut Camera) {
        match *self {
            Command::Move { direction, dt } => camera.process_keyboard(direction, dt),
            Command::Look { x, y, constrain_pitch } => camera.process_mouse_movement(x, y, constrain_pitch),
            Command::Scroll { y } => camera.process_mouse_scroll(y),
        }
    }
}

/// Deterministic input replay: an optional starting config plus commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<CameraConfig>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse camera script")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera script: {}", path.display()))?;
        let script = Self::from_json_str(&content)
            .with_context(|| format!("Invalid camera script: {}", path.display()))?;
        log::debug!("Loaded {} commands from {}", script.commands.len(), path.display());
        Ok(script)
    }

    /// Camera the script starts from
    pub fn initial_camera(&self) -> Camera {
        self.config
            .as_ref()
            .map(Camera::from_config)
            .unwrap_or_default()
    }

    pub fn run(&self) -> Camera {
        let mut camera = self.initial_camera();
        self.run_on(&mut camera);
        camera
    }

    /// Replay every command on an existing camera
    pub fn run_on(&self, camera: &mut Camera) {
        for (step, command) in self.commands.iter().enumerate() {
            command.apply(camera);
            log::debug!(
                "step {}: {:?} -> position {:?}, yaw {:.3}, pitch {:.3}, zoom {:.3}",
                step,
                command,
                camera.position(),
                camera.yaw(),
                camera.pitch(),
                camera.zoom()
            );
        }
    }
}
