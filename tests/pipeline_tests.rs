use glam::{Mat4, Vec3};
use lookat_camera::core::{Document, Element, PointerSample, RawInput};
use lookat_camera::types::CameraUniform;
use lookat_camera::{CameraIntent, CameraRig, DemoConfig};

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn rig(with_panel: bool) -> CameraRig {
        let mut document = Document::new();
        document.insert(Element::new("webgpu-canvas", 800, 600));
        CameraRig::new(&document, "webgpu-canvas", &DemoConfig::default(), with_panel).unwrap()
    }

    /// Run frames until nothing is pending; returns every uniform "rendered"
    fn drain(rig: &CameraRig) -> Vec<CameraUniform> {
        let mut rendered = Vec::new();
        for _ in 0..10 {
            if rig.tick(FRAME) {
                rendered.push(rig.uniform());
            }
        }
        rendered
    }

    #[test]
    fn test_burst_of_intents_renders_once() {
        for with_panel in [false, true] {
            let rig = rig(with_panel);

            for _ in 0..5 {
                rig.element()
                    .dispatch_intent(CameraIntent::Move(Vec3::new(0.0, 0.0, 1.0)));
                assert!(!rig.tick(0.0));
            }
            let rendered = drain(&rig);

            assert_eq!(rendered.len(), 1, "panel: {with_panel}");
            let expected_view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO, Vec3::Y);
            let view = Mat4::from_cols_array_2d(&rendered[0].view);
            assert!(view.abs_diff_eq(expected_view, 1e-5));
        }
    }

    #[test]
    fn test_drag_stream_coalesces() {
        let rig = rig(true);
        let element = rig.element().clone();

        element.dispatch(RawInput::PointerDown(PointerSample::new(0.0, 0.0, 2)));
        for step in 1..=8 {
            element.dispatch(RawInput::PointerMove(PointerSample::new(step as f32, 0.0, 2)));
            assert!(!rig.tick(0.0001));
        }
        element.dispatch(RawInput::PointerUp(PointerSample::new(8.0, 0.0, 0)));

        let rendered = drain(&rig);
        assert_eq!(rendered.len(), 1);
        let position = rig.camera().borrow().position();
        assert!(position.abs_diff_eq(Vec3::new(0.8, 0.0, 10.0), 1e-5));
    }

    #[test]
    fn test_separated_changes_render_separately() {
        let rig = rig(false);

        rig.element().dispatch(RawInput::Wheel {
            delta_x: 0.0,
            delta_y: 10.0,
        });
        let first = drain(&rig);
        rig.element().dispatch(RawInput::Wheel {
            delta_x: 0.0,
            delta_y: 10.0,
        });
        let second = drain(&rig);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].view, second[0].view);
    }

    #[test]
    fn test_idle_rig_never_renders() {
        let rig = rig(true);
        assert!(drain(&rig).is_empty());
    }
}
