use glam::{Mat4, Vec3};
use lookat_camera::math::{orbit, view_matrix, Basis, WORLD_UP};
use lookat_camera::{Element, LookAtCamera};

#[cfg(test)]
mod camera_tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EYES: [Vec3; 5] = [
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(3.0, 4.0, 5.0),
        Vec3::new(-7.5, 2.0, -1.0),
        Vec3::new(0.1, -9.0, 0.3),
        Vec3::new(40.0, 0.5, -60.0),
    ];

    fn canvas() -> Element {
        Element::new("webgpu-canvas", 800, 600)
    }

    #[test]
    fn test_view_rows_are_orthonormal() {
        let target = Vec3::new(0.5, -0.25, 1.0);
        for eye in EYES {
            let view = view_matrix(eye, target, WORLD_UP);
            let rows = [view.row(0).truncate(), view.row(1).truncate(), view.row(2).truncate()];

            for (i, a) in rows.iter().enumerate() {
                assert!((a.length() - 1.0).abs() < 1e-5, "row {} of {:?} not unit", i, eye);
                for b in rows.iter().skip(i + 1) {
                    assert!(a.dot(*b).abs() < 1e-5, "rows of {:?} not orthogonal", eye);
                }
            }
        }
    }

    #[test]
    fn test_view_matches_glam_look_at() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        for eye in EYES {
            let expected = Mat4::look_at_rh(eye, target, WORLD_UP);
            assert!(
                view_matrix(eye, target, WORLD_UP).abs_diff_eq(expected, 1e-4),
                "mismatch for eye {:?}",
                eye
            );
        }
    }

    #[test]
    fn test_basis_forward_points_back_at_eye() {
        let basis = Basis::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, WORLD_UP);
        assert!(basis.forward.abs_diff_eq(Vec3::Z, 1e-6));
        assert!(basis.right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(basis.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_orbit_preserves_distance_to_offset_target() {
        let target = Vec3::new(2.0, -1.0, 4.0);
        let eye = Vec3::new(5.0, 3.0, 9.0);
        let radius = eye.distance(target);

        let mut view = view_matrix(eye, target, WORLD_UP);
        for rotation in [
            Vec3::new(0.0, FRAC_PI_2, 0.0),
            Vec3::new(0.3, 0.0, 0.0),
            Vec3::new(-0.2, 0.7, 0.0),
        ] {
            let next = orbit(view, target, rotation);
            assert!((next.distance(target) - radius).abs() < 1e-3);
            view = view_matrix(next, target, WORLD_UP);
        }
    }

    #[test]
    fn test_full_yaw_returns_home() {
        let mut camera = LookAtCamera::new(&canvas());
        for _ in 0..4 {
            camera.rotate(Vec3::new(0.0, FRAC_PI_2, 0.0));
        }
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-3));

        camera.rotate(Vec3::new(0.0, PI, 0.0));
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-3));
    }

    #[test]
    fn test_move_by_keeps_target() {
        let mut camera = LookAtCamera::new(&canvas());
        camera.set_target(Vec3::new(1.0, 1.0, 1.0));

        camera.move_by(Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(camera.position(), Vec3::new(1.0, 0.0, 10.0));
        assert_eq!(camera.target(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_getters_return_copies() {
        let mut camera = LookAtCamera::new(&canvas());
        let mut position = camera.position();
        position.x = 99.0;

        assert_eq!(camera.position().x, 0.0);
        camera.set_position(position);
        assert_eq!(camera.position().x, 99.0);
    }

    #[test]
    fn test_view_tracks_target_changes() {
        let mut camera = LookAtCamera::new(&canvas());
        camera.set_target(Vec3::new(0.0, 5.0, 0.0));

        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, 1e-5));
    }
}
