use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::core::element::{Element, ListenerId};
use crate::math::{self, WORLD_UP};
use crate::traits::CameraIntentHandler;
use crate::types::CameraUniform;

/// Camera state handed to the change subscriber after every mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraChange {
    pub position: Vec3,
    pub target: Vec3,
}

type ChangeCallback = Box<dyn FnMut(&CameraChange)>;

/// Camera looking from `position` at `target`
///
/// Position and target are absolute world-space points. The view matrix is
/// rebuilt after every mutation; the projection only on
/// [`update_projection_matrix`](Self::update_projection_matrix).
pub struct LookAtCamera {
    element: Element,
    config: CameraConfig,
    position: Vec3,
    target: Vec3,
    projection_matrix: Mat4,
    view_matrix: Mat4,
    on_change: Option<ChangeCallback>,
    intent_listener: Option<ListenerId>,
    degenerate: bool,
}

impl LookAtCamera {
    pub fn new(element: &Element) -> Self {
        Self::with_config(element, CameraConfig::default())
    }

    pub fn with_config(element: &Element, config: CameraConfig) -> Self {
        let mut camera = Self {
            element: element.clone(),
            config,
            position: config.position,
            target: config.target,
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            on_change: None,
            intent_listener: None,
            degenerate: false,
        };
        camera.update_projection_matrix();
        camera.update_view_matrix();
        camera
    }

    /// Subscribe the shared camera to intents dispatched on its element
    pub fn attach(camera: &Rc<RefCell<Self>>) {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(camera);
        let mut this = camera.borrow_mut();
        if this.intent_listener.is_some() {
            return;
        }

        let id = this.element.add_intent_listener(move |intent| {
            if let Some(camera) = weak.upgrade() {
                camera.borrow_mut().handle_intent(intent);
            }
        });
        this.intent_listener = Some(id);
        log::debug!("camera attached to `{}`", this.element.id());
    }

    /// Absolute overwrite of the eye position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view_matrix();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update_view_matrix();
    }

    /// Translate along world axes, independent of the viewing direction
    pub fn move_by(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    /// Orbit around the target by angles about world X, Y and Z
    pub fn rotate(&mut self, rotation: Vec3) {
        let position = math::orbit(self.view_matrix, self.target, rotation);
        self.set_position(position);
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = math::perspective(
            self.config.fov_y_degrees.to_radians(),
            self.element.aspect_ratio(),
            self.config.near,
            self.config.far,
        );
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// True while eye and target coincide and the view matrix is NaN
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Register the change subscriber, replacing any previous one
    pub fn on_camera_change(&mut self, callback: impl FnMut(&CameraChange) + 'static) {
        if self.on_change.is_some() {
            log::debug!("camera change subscriber replaced");
        }
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_camera_change(&mut self) {
        self.on_change = None;
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform::new(self.projection_matrix, self.view_matrix)
    }

    /// Stop listening for intents; matrices are left untouched
    pub fn dispose(&mut self) {
        if let Some(id) = self.intent_listener.take() {
            self.element.remove_listener(id);
            log::debug!("camera detached from `{}`", self.element.id());
        }
    }

    fn update_view_matrix(&mut self) {
        let degenerate = self.position == self.target;
        if degenerate && !self.degenerate {
            log::warn!(
                "camera position equals target {:?}; view matrix is undefined",
                self.target
            );
        }
        self.degenerate = degenerate;

        self.view_matrix = math::view_matrix(self.position, self.target, WORLD_UP);
        self.notify_change();
    }

    fn notify_change(&mut self) {
        let change = CameraChange {
            position: self.position,
            target: self.target,
        };
        if let Some(callback) = self.on_change.as_mut() {
            callback(&change);
        }
    }
}

impl CameraIntentHandler for LookAtCamera {
    fn on_camera_move(&mut self, delta: Vec3) {
        self.move_by(delta);
    }

    fn on_camera_rotate(&mut self, delta: Vec3) {
        self.rotate(delta);
    }
}

impl Drop for LookAtCamera {
    fn drop(&mut self) {
        self.dispose();
    }
}
