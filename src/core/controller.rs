use glam::Vec3;

use super::element::{Element, EventKind, ListenerId};
use super::gesture::{DragDetail, GestureHandler, PointerDelta};
use crate::config::ControllerConfig;
use crate::traits::CameraIntent;

/// Turns gestures on an element into camera intents dispatched on that element
///
/// A drag is a pan when meta is held or the right button is down, an orbit
/// otherwise; the wheel dollies along world Z. The context menu is suppressed
/// while the controller is alive.
pub struct CameraInputController {
    element: Element,
    gestures: GestureHandler,
    context_menu: Option<ListenerId>,
    config: ControllerConfig,
}

impl CameraInputController {
    pub fn new(element: &Element) -> Self {
        Self::with_config(element, ControllerConfig::default())
    }

    pub fn with_config(element: &Element, config: ControllerConfig) -> Self {
        let gestures = GestureHandler::new(element);

        let target = element.downgrade();
        gestures.on_drag(move |detail| {
            if let Some(element) = target.upgrade() {
                element.dispatch_intent(drag_intent(detail, &config));
            }
        });

        let target = element.downgrade();
        gestures.on_wheel(move |delta| {
            if let Some(element) = target.upgrade() {
                element.dispatch_intent(wheel_intent(delta, &config));
            }
        });

        let context_menu = element.add_listener(EventKind::ContextMenu, |event| {
            event.prevent_default()
        });

        log::debug!("camera controller bound to `{}`", element.id());

        Self {
            element: element.clone(),
            gestures,
            context_menu: Some(context_menu),
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn dispose(&mut self) {
        self.gestures.dispose();
        if let Some(id) = self.context_menu.take() {
            self.element.remove_listener(id);
            log::debug!("camera controller released `{}`", self.element.id());
        }
    }
}

impl Drop for CameraInputController {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Classify a drag as pan (move) or orbit (rotate)
pub fn drag_intent(detail: &DragDetail, config: &ControllerConfig) -> CameraIntent {
    let delta = detail.delta;
    let is_pan = detail.buttons.meta_key || detail.buttons.right_button;

    if is_pan {
        CameraIntent::Move(Vec3::new(
            delta.delta_x * config.pan_speed_x,
            delta.delta_y * config.pan_speed_y,
            0.0,
        ))
    } else {
        // horizontal drag yaws around Y, vertical drag pitches around X
        CameraIntent::Rotate(Vec3::new(
            delta.delta_y * config.rotate_speed_x,
            delta.delta_x * config.rotate_speed_y,
            0.0,
        ))
    }
}

pub fn wheel_intent(delta: &PointerDelta, config: &ControllerConfig) -> CameraIntent {
    CameraIntent::Move(Vec3::new(0.0, 0.0, delta.delta_y * config.dolly_speed))
}
