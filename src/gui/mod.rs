pub mod camera_panel;
pub mod egui_panel;
pub mod pane;

pub use camera_panel::CameraPanel;
pub use egui_panel::show_pane;
pub use pane::{Binding, ParamPane, ParamSpec};
