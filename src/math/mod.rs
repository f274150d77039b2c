mod color;
mod view;

pub use color::{hsv_to_rgb, hsva_to_rgba};
pub use view::{orbit, perspective, view_matrix, Basis, WORLD_UP};
