use glam::Vec3;
use lookat_camera::core::{CameraInputController, Element, Modifiers, PointerSample, RawInput};
use lookat_camera::{CameraIntent, ControllerConfig, LookAtCamera};
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(test)]
mod controller_tests {
    use super::*;

    fn recorded(element: &Element) -> Rc<RefCell<Vec<CameraIntent>>> {
        let intents = Rc::new(RefCell::new(Vec::new()));
        let sink = intents.clone();
        element.add_intent_listener(move |intent| sink.borrow_mut().push(intent));
        intents
    }

    fn drag(element: &Element, buttons: u16, modifiers: Modifiers, dx: f32, dy: f32) {
        element.dispatch(RawInput::PointerDown(
            PointerSample::new(100.0, 100.0, buttons).with_modifiers(modifiers),
        ));
        element.dispatch(RawInput::PointerMove(
            PointerSample::new(100.0 + dx, 100.0 + dy, buttons).with_modifiers(modifiers),
        ));
        element.dispatch(RawInput::PointerUp(
            PointerSample::new(100.0 + dx, 100.0 + dy, 0).with_modifiers(modifiers),
        ));
    }

    #[test]
    fn test_left_drag_orbits() {
        let element = Element::new("canvas", 800, 600);
        let _controller = CameraInputController::new(&element);
        let intents = recorded(&element);

        drag(&element, 1, Modifiers::default(), 40.0, -20.0);

        let intents = intents.borrow();
        assert_eq!(intents.len(), 1);
        match intents[0] {
            CameraIntent::Rotate(rotation) => {
                assert!(rotation.abs_diff_eq(Vec3::new(-20.0 * 0.0025, 40.0 * 0.0025, 0.0), 1e-7))
            }
            other => panic!("expected rotate, got {:?}", other),
        }
    }

    #[test]
    fn test_right_drag_pans() {
        let element = Element::new("canvas", 800, 600);
        let _controller = CameraInputController::new(&element);
        let intents = recorded(&element);

        drag(&element, 2, Modifiers::default(), 10.0, 5.0);

        assert_eq!(
            *intents.borrow(),
            vec![CameraIntent::Move(Vec3::new(1.0, 0.5, 0.0))]
        );
    }

    #[test]
    fn test_meta_left_drag_pans() {
        let element = Element::new("canvas", 800, 600);
        let _controller = CameraInputController::new(&element);
        let intents = recorded(&element);
        let meta = Modifiers {
            meta: true,
            ..Modifiers::default()
        };

        drag(&element, 1, meta, -10.0, 0.0);

        assert_eq!(
            *intents.borrow(),
            vec![CameraIntent::Move(Vec3::new(-1.0, 0.0, 0.0))]
        );
    }

    #[test]
    fn test_custom_speeds() {
        let element = Element::new("canvas", 800, 600);
        let config = ControllerConfig {
            dolly_speed: 0.5,
            ..ControllerConfig::default()
        };
        let controller = CameraInputController::with_config(&element, config);
        let intents = recorded(&element);

        element.dispatch(RawInput::Wheel {
            delta_x: 0.0,
            delta_y: -4.0,
        });

        assert_eq!(controller.config().dolly_speed, 0.5);
        assert_eq!(
            *intents.borrow(),
            vec![CameraIntent::Move(Vec3::new(0.0, 0.0, -2.0))]
        );
    }

    #[test]
    fn test_click_emits_nothing() {
        let element = Element::new("canvas", 800, 600);
        let _controller = CameraInputController::new(&element);
        let intents = recorded(&element);

        element.dispatch(RawInput::PointerDown(PointerSample::new(1.0, 1.0, 1)));
        element.dispatch(RawInput::PointerUp(PointerSample::new(1.0, 1.0, 0)));

        assert!(intents.borrow().is_empty());
    }

    #[test]
    fn test_controller_drives_camera() {
        let element = Element::new("canvas", 800, 600);
        let _controller = CameraInputController::new(&element);
        let camera = Rc::new(RefCell::new(LookAtCamera::new(&element)));
        LookAtCamera::attach(&camera);

        element.dispatch(RawInput::Wheel {
            delta_x: 0.0,
            delta_y: 50.0,
        });
        drag(&element, 2, Modifiers::default(), 20.0, 0.0);

        let camera = camera.borrow();
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(2.0, 0.0, 15.0), 1e-5));
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn test_dispose_restores_context_menu() {
        let element = Element::new("canvas", 800, 600);
        let mut controller = CameraInputController::new(&element);
        assert!(element.dispatch(RawInput::ContextMenu));

        controller.dispose();
        controller.dispose();

        assert!(!element.dispatch(RawInput::ContextMenu));
        assert_eq!(element.listener_count(), 0);
    }
}
