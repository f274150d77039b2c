use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec3};
use lookat_camera::core::{CameraInputController, Element, PointerSample, RawInput};
use lookat_camera::demo::instances;
use lookat_camera::math::{orbit, view_matrix, WORLD_UP};
use lookat_camera::LookAtCamera;
use std::cell::RefCell;
use std::rc::Rc;

/// Deterministic eye positions on a sphere of radius 10
fn eye(seed: u32) -> Vec3 {
    let theta = (seed as f32 * 0.123456) % std::f32::consts::TAU;
    let phi = 0.2 + (seed as f32 * 0.789012) % 2.7;
    Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()) * 10.0
}

/// Benchmark: hand-built view matrix against glam's look_at_rh
fn bench_view_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_matrix");
    let target = Vec3::new(0.5, 0.0, -0.5);

    group.bench_function("basis", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(view_matrix(black_box(eye(seed)), target, WORLD_UP))
        });
    });
    group.bench_function("glam_look_at_rh", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(Mat4::look_at_rh(black_box(eye(seed)), target, WORLD_UP))
        });
    });

    group.finish();
}

/// Benchmark: orbit step including the view inverse
fn bench_orbit(c: &mut Criterion) {
    let target = Vec3::ZERO;
    let view = view_matrix(Vec3::new(0.0, 0.0, 10.0), target, WORLD_UP);

    c.bench_function("orbit_step", |b| {
        b.iter(|| black_box(orbit(black_box(view), target, Vec3::new(0.01, 0.02, 0.0))))
    });
}

/// Benchmark: raw pointer move through gestures, controller and camera
fn bench_drag_pipeline(c: &mut Criterion) {
    let element = Element::new("canvas", 800, 600);
    let _controller = CameraInputController::new(&element);
    let camera = Rc::new(RefCell::new(LookAtCamera::new(&element)));
    LookAtCamera::attach(&camera);
    element.dispatch(RawInput::PointerDown(PointerSample::new(0.0, 0.0, 1)));

    c.bench_function("drag_event_to_view_matrix", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x += 1.0;
            element.dispatch(RawInput::PointerMove(PointerSample::new(x, 0.0, 1)));
            black_box(camera.borrow().view_matrix())
        });
    });
}

/// Benchmark: instance generation for pane-selectable counts
fn bench_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("instances");
    for count in [10u32, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(instances(count)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_view_matrix,
    bench_orbit,
    bench_drag_pipeline,
    bench_instances
);
criterion_main!(benches);
