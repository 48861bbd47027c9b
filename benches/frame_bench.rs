//! Frame Renderer Benchmarks
//!
//! Measures one camera render through the headless host at a few scene
//! sizes, and the culling step on its own.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::Vec3;

use frame_renderer::core::camera::Camera;
use frame_renderer::{
    FrameRenderer, HeadlessContext, RendererSettings, Scene, SceneCamera, SceneCuller,
    SceneObject,
};

fn build_scene(count: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..count {
        let x = (i % 32) as f32 - 16.0;
        let z = -((i / 32) as f32) - 2.0;
        let center = Vec3::new(x, 0.0, z);
        let object = match i % 8 {
            0 => SceneObject::transparent("glass", center, 0.5),
            1 => SceneObject::new("legacy", center, 0.5).with_pass("ForwardBase"),
            _ => SceneObject::new("cube", center, 0.5),
        };
        scene.add(object);
    }
    scene
}

fn camera() -> SceneCamera {
    SceneCamera::new_perspective(60.0, 16.0 / 9.0, 0.1, 200.0).with_name("Bench Camera")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render");
    let settings = RendererSettings::default();
    let camera = camera();

    for count in [0usize, 256, 4096] {
        let mut ctx = HeadlessContext::new(build_scene(count)).with_gizmos(false);
        let mut renderer = FrameRenderer::new(&settings);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                renderer.render(&mut ctx, black_box(&camera));
                ctx.reset();
            });
        });
    }
    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let scene = build_scene(4096);
    let parameters = camera()
        .try_get_culling_parameters()
        .expect("bench camera has a valid frustum");
    let culler = SceneCuller::new();
    let mut visible = culler.cull(&scene, &parameters);

    c.bench_function("scene_cull_4096", |b| {
        b.iter(|| {
            culler.cull_into(black_box(&scene), black_box(&parameters), &mut visible);
            black_box(visible.len())
        });
    });
}

criterion_group!(benches, bench_render, bench_cull);
criterion_main!(benches);
