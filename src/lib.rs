pub mod camera;
pub mod cli;
pub mod config;
pub mod controller;
pub mod math;
pub mod script;
pub mod types;

pub use camera::{Camera, Movement};
pub use config::CameraConfig;
pub use controller::{drive, Button, Controller, KeyBindings};
pub use script::{Command, Script};
pub use types::CameraUniform;
