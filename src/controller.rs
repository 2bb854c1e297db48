use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Movement};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Controller - handles button input states
///
/// The host implements this over whatever input layer it polls.
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

/// Button to movement mapping, in the order commands are issued
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<(Button, Movement)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Button::KeyW, Movement::Forward),
                (Button::KeyS, Movement::Backward),
                (Button::KeyA, Movement::Left),
                (Button::KeyD, Movement::Right),
                (Button::Space, Movement::Up),
                (Button::Shift, Movement::Down),
            ],
        }
    }
}

impl KeyBindings {
    /// First movement bound to `button`
    pub fn movement_for(&self, button: Button) -> Option<Movement> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == button)
            .map(|&(_, movement)| movement)
    }

    /// Rebind `button`, replacing any previous mapping for it
    pub fn bind(&mut self, button: Button, movement: Movement) {
        self.bindings.retain(|(bound, _)| *bound != button);
        self.bindings.push((button, movement));
    }
}

/// Issue one movement command per held, bound button
pub fn drive<C: Controller>(camera: &mut Camera, controller: &C, bindings: &KeyBindings, delta_time: f32) {
    for &(button, movement) in &bindings.bindings {
        if controller.is_down(button) {
            camera.process_keyboard(movement, delta_time);
        }
    }
}
