use glam::Vec3;

/// Abstract camera intent produced by an input controller
///
/// Moves are absolute world-space offsets; rotations are angles in radians
/// about the world X, Y and Z axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraIntent {
    Move(Vec3),
    Rotate(Vec3),
}

/// Receiver side of the controller -> camera contract
pub trait CameraIntentHandler {
    /// Translate the camera by `delta` in world space
    fn on_camera_move(&mut self, delta: Vec3);

    /// Orbit the camera around its target by `delta` radians
    fn on_camera_rotate(&mut self, delta: Vec3);

    /// Route an intent to the matching handler
    fn handle_intent(&mut self, intent: CameraIntent) {
        match intent {
            CameraIntent::Move(delta) => self.on_camera_move(delta),
            CameraIntent::Rotate(delta) => self.on_camera_rotate(delta),
        }
    }
}
