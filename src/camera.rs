use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;
use crate::math::{clamp_pitch, clamp_zoom, derive_basis, Basis};
use crate::types::CameraUniform;

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

/// Direction of a single movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

/// Free-flying camera driven by yaw/pitch angles in degrees.
///
/// Orientation is private so the basis can never go stale: every change to
/// yaw or pitch goes through a method that rebuilds `front`, `right` and `up`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    basis: Basis,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Create a camera and derive its basis.
    ///
    /// `pitch` is taken as given here. Only look commands and
    /// [`Camera::set_orientation`] clamp it.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let basis = derive_basis(yaw, pitch, world_up);
        if !basis.is_finite() {
            log::warn!(
                "Degenerate camera basis: world up {:?} is parallel to front (yaw {}, pitch {})",
                world_up,
                yaw,
                pitch
            );
        }

        Self {
            position,
            world_up,
            basis,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(config.position),
            Vec3::from_array(config.world_up),
            config.yaw,
            config.pitch,
        );
        camera.movement_speed = config.movement_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera.set_zoom(config.zoom);
        camera
    }

    pub fn to_config(&self) -> CameraConfig {
        CameraConfig {
            position: self.position.to_array(),
            world_up: self.world_up.to_array(),
            yaw: self.yaw,
            pitch: self.pitch,
            movement_speed: self.movement_speed,
            mouse_sensitivity: self.mouse_sensitivity,
            zoom: self.zoom,
        }
    }

    /// Right-handed look-at matrix toward `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.basis.front, self.basis.up)
    }

    /// Translate along the basis. Up/Down follow `world_up`, not the tilted `up`,
    /// so vertical motion stays level regardless of pitch.
    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            Movement::Forward => self.basis.front * velocity,
            Movement::Backward => -self.basis.front * velocity,
            Movement::Left => -self.basis.right * velocity,
            Movement::Right => self.basis.right * velocity,
            Movement::Up => self.world_up * velocity,
            Movement::Down => -self.world_up * velocity,
        };
        self.position += offset;
        log::trace!("Camera moved {:?} to {:?}", direction, self.position);
    }

    /// Apply raw pointer deltas to yaw and pitch.
    ///
    /// With `constrain_pitch` off the basis degenerates as pitch nears ±90°.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = clamp_pitch(self.pitch);
        }
        self.update_basis();
    }

    /// Mouse look with the pitch clamp on
    pub fn look(&mut self, xoffset: f32, yoffset: f32) {
        self.process_mouse_movement(xoffset, yoffset, true);
    }

    /// Scroll-wheel zoom, vertical axis only
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.set_zoom(self.zoom - yoffset);
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            position: self.position.to_array(),
            zoom: self.zoom,
            front: self.basis.front.to_array(),
            _pad1: 0.0,
            right: self.basis.right.to_array(),
            _pad2: 0.0,
            up: self.basis.up.to_array(),
            _pad3: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Replace both angles, clamping pitch and rebuilding the basis
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = clamp_pitch(pitch);
        self.update_basis();
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Field of view in degrees, always within [1, 45]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = clamp_zoom(zoom);
    }

    fn update_basis(&mut self) {
        self.basis = derive_basis(self.yaw, self.pitch, self.world_up);
        log::trace!("Camera basis rebuilt for yaw {} pitch {}", self.yaw, self.pitch);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}
