//! Frame Trace
//!
//! Renders a scene through the headless host and logs the host calls of
//! every camera. Without arguments a built-in scene is used; otherwise the
//! first argument is a JSON scene description:
//!
//! ```json
//! {
//!   "frames": 2,
//!   "settings": { "background": [0.1, 0.1, 0.1, 1.0] },
//!   "cameras": [{ "name": "Main", "position": [0, 1, 5], "target": [0, 0, 0] }],
//!   "objects": [{ "name": "Cube", "center": [0, 0, 0], "radius": 1 }]
//! }
//! ```
//!
//! Run: `RUST_LOG=info cargo run -p frame_trace -- scene.json`

use std::path::Path;

use anyhow::{Context, Result};
use glam::{Affine3A, Vec3};
use log::{info, warn};
use serde::Deserialize;

use frame_renderer::core::render_queue::RenderQueue;
use frame_renderer::headless::HeadlessContext;
use frame_renderer::{CameraType, RenderPipeline, RendererSettings, Scene, SceneCamera, SceneObject};

// ============================================================================
// Scene Description
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(default)]
struct TraceScene {
    frames: u32,
    gizmos: bool,
    settings: RendererSettings,
    cameras: Vec<CameraDesc>,
    objects: Vec<ObjectDesc>,
}

impl Default for TraceScene {
    fn default() -> Self {
        Self {
            frames: 1,
            gizmos: true,
            settings: RendererSettings::default(),
            cameras: vec![
                CameraDesc::default(),
                CameraDesc {
                    name: "Scene Camera".into(),
                    camera_type: CameraType::SceneView,
                    position: [4.0, 3.0, 6.0],
                    ..Default::default()
                },
                CameraDesc {
                    name: "Degenerate".into(),
                    near: 0.0,
                    ..Default::default()
                },
            ],
            objects: vec![
                ObjectDesc::default(),
                ObjectDesc {
                    name: "Window".into(),
                    center: [0.5, 0.0, 1.5],
                    render_queue: RenderQueue::TRANSPARENT,
                    ..Default::default()
                },
                ObjectDesc {
                    name: "Old Statue".into(),
                    center: [-2.0, 0.0, -1.0],
                    pass: "ForwardBase".into(),
                    ..Default::default()
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CameraDesc {
    name: String,
    camera_type: CameraType,
    /// Vertical field of view in degrees.
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: [f32; 3],
    target: [f32; 3],
    culling_mask: u32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            name: "Main Camera".into(),
            camera_type: CameraType::Game,
            fov: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            position: [0.0, 1.0, 5.0],
            target: [0.0; 3],
            culling_mask: u32::MAX,
        }
    }
}

impl CameraDesc {
    fn build(&self) -> SceneCamera {
        let eye = Vec3::from_array(self.position);
        let target = Vec3::from_array(self.target);
        let world = Affine3A::look_at_rh(eye, target, Vec3::Y).inverse();

        let mut camera = SceneCamera::new_perspective(self.fov, self.aspect, self.near, self.far)
            .with_name(self.name.clone())
            .with_type(self.camera_type)
            .with_transform(world);
        camera.culling_mask = self.culling_mask;
        camera
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ObjectDesc {
    name: String,
    center: [f32; 3],
    radius: f32,
    render_queue: i32,
    pass: String,
    layer: u8,
}

impl Default for ObjectDesc {
    fn default() -> Self {
        Self {
            name: "Cube".into(),
            center: [0.0; 3],
            radius: 1.0,
            render_queue: RenderQueue::GEOMETRY,
            pass: "SRPDefaultUnlit".into(),
            layer: 0,
        }
    }
}

impl ObjectDesc {
    fn build(&self) -> SceneObject {
        SceneObject::new(self.name.clone(), Vec3::from_array(self.center), self.radius)
            .with_queue(self.render_queue)
            .with_pass(self.pass.as_str())
            .with_layer(self.layer)
    }
}

fn load_scene(path: &Path) -> Result<TraceScene> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading scene file {}", path.display()))?;
    let scene: TraceScene = serde_json::from_str(&json)
        .with_context(|| format!("parsing scene file {}", path.display()))?;
    Ok(scene)
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let description = match std::env::args().nth(1) {
        Some(path) => load_scene(Path::new(&path))?,
        None => TraceScene::default(),
    };

    let mut scene = Scene::new();
    for object in &description.objects {
        scene.add(object.build());
    }
    let cameras: Vec<SceneCamera> = description.cameras.iter().map(CameraDesc::build).collect();

    let mut pipeline = RenderPipeline::new(description.settings)?;
    let mut ctx = HeadlessContext::new(scene).with_gizmos(description.gizmos);

    info!(
        "Tracing {} frame(s): {} camera(s), {} object(s)",
        description.frames,
        cameras.len(),
        ctx.scene().len()
    );

    for _ in 0..description.frames {
        let report = pipeline.render(&mut ctx, &cameras);
        info!(
            "=== Frame {} ({} submitted, {} skipped) ===",
            pipeline.frame_index(),
            report.submitted,
            report.skipped
        );
        for call in ctx.calls() {
            info!("  {call}");
        }
        if report.skipped > 0 {
            warn!("{} camera(s) had no culling parameters", report.skipped);
        }
        ctx.reset();
    }

    Ok(())
}
