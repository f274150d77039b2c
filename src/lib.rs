pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod gui;
pub mod logging;
pub mod math;
pub mod renderer;
pub mod rig;
pub mod traits;
pub mod types;

pub use camera::{CameraChange, LookAtCamera};
pub use config::{CameraConfig, ControllerConfig, DemoConfig};
pub use crate::core::{CameraInputController, Document, Element, GestureHandler};
pub use error::{Error, Result};
pub use gui::{CameraPanel, ParamPane};
pub use rig::CameraRig;
pub use traits::{CameraIntent, CameraIntentHandler};
