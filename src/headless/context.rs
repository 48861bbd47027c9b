//! Recording Context
//!
//! # Draw Order
//!
//! `draw_renderers` keeps the visible objects whose queue and layer pass the
//! filter and whose pass is one of the drawing settings' passes, then orders
//! them by a packed key, lowest first:
//!
//! | Bits  | Content                                           |
//! |-------|---------------------------------------------------|
//! | 32-47 | render queue (`RENDER_QUEUE`)                     |
//! | 0-31  | depth: near first (`QUANTIZED_FRONT_TO_BACK`) or far first (`BACK_TO_FRONT`) |
//!
//! Criteria that are not set contribute zero. The sort is stable, so ties
//! keep culling order.

use log::warn;
use rustc_hash::FxHashSet;

use crate::core::camera::{Camera, CullingParameters};
use crate::core::command_buffer::CommandBuffer;
use crate::core::context::{GizmoSubset, RenderContext};
use crate::core::drawing::{
    DrawBatch, DrawingSettings, FilteringSettings, SortingCriteria, SortingSettings,
};
use crate::core::shader_tag::ShaderTagId;
use crate::headless::trace::{DrawRecord, HostCall, Submission};
use crate::scene::{ObjectKey, Scene, SceneCuller, SceneObject, VisibleSet};

/// Packed draw-order key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct DrawKey(u64);

impl DrawKey {
    fn new(sorting: &SortingSettings, object: &SceneObject) -> Self {
        let criteria = sorting.criteria;
        let queue_bits = if criteria.contains(SortingCriteria::RENDER_QUEUE) {
            u64::from(object.render_queue.clamp(0, 0xFFFF).unsigned_abs()) << 32
        } else {
            0
        };

        let depth = sorting.distance_to(object.center);
        let d_u32 = if depth.is_sign_negative() || depth.is_nan() {
            0
        } else {
            depth.to_bits()
        };
        let depth_bits = if criteria.contains(SortingCriteria::BACK_TO_FRONT) {
            !d_u32
        } else if criteria.contains(SortingCriteria::QUANTIZED_FRONT_TO_BACK) {
            d_u32 >> 2
        } else {
            0
        };

        Self(queue_bits | u64::from(depth_bits))
    }
}

/// Host context that records calls instead of rendering.
pub struct HeadlessContext {
    scene: Scene,
    culler: SceneCuller,
    gizmos_enabled: bool,
    calls: Vec<HostCall>,
    pending: Vec<HostCall>,
    submissions: Vec<Submission>,
    profiler_depth: usize,
}

impl HeadlessContext {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            culler: SceneCuller::new(),
            gizmos_enabled: true,
            calls: Vec::new(),
            pending: Vec::new(),
            submissions: Vec::new(),
            profiler_depth: 0,
        }
    }

    #[must_use]
    pub fn with_gizmos(mut self, enabled: bool) -> Self {
        self.gizmos_enabled = enabled;
        self
    }

    pub fn set_gizmos_enabled(&mut self, enabled: bool) {
        self.gizmos_enabled = enabled;
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Every call so far, in order.
    #[inline]
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Device work queued since the last submit.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[HostCall] {
        &self.pending
    }

    #[inline]
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn draw_records(&self) -> impl Iterator<Item = &DrawRecord> {
        self.calls.iter().filter_map(HostCall::as_draw)
    }

    /// Currently open profiler samples.
    #[inline]
    #[must_use]
    pub fn profiler_depth(&self) -> usize {
        self.profiler_depth
    }

    /// Forgets recorded calls and submissions. The scene is kept.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.pending.clear();
        self.submissions.clear();
        self.profiler_depth = 0;
    }

    fn record(&mut self, call: HostCall) {
        if call.is_gpu_work() {
            self.pending.push(call.clone());
        }
        self.calls.push(call);
    }

    fn collect_draw(
        &self,
        visible: &VisibleSet,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    ) -> Vec<ObjectKey> {
        let passes: FxHashSet<ShaderTagId> = drawing.passes().iter().copied().collect();

        let mut items: Vec<(DrawKey, ObjectKey)> = visible
            .keys()
            .iter()
            .filter_map(|&key| {
                // Objects removed after culling are skipped.
                let object = self.scene.get(key)?;
                let accepted = filtering.accepts(object.render_queue, object.layer)
                    && passes.contains(&object.pass);
                accepted.then(|| (DrawKey::new(&drawing.sorting, object), key))
            })
            .collect();

        items.sort_by_key(|&(sort_key, _)| sort_key);
        items.into_iter().map(|(_, key)| key).collect()
    }
}

impl RenderContext for HeadlessContext {
    type CullingResults = VisibleSet;

    fn setup_camera_properties(&mut self, camera: &dyn Camera) {
        self.record(HostCall::SetupCameraProperties {
            camera: camera.name().to_owned(),
        });
    }

    fn cull(&mut self, parameters: &CullingParameters) -> VisibleSet {
        let visible = self.culler.cull(&self.scene, parameters);
        self.record(HostCall::Cull {
            visible: visible.len(),
        });
        visible
    }

    fn draw_renderers(
        &mut self,
        culling_results: &VisibleSet,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    ) {
        let objects = self.collect_draw(culling_results, drawing, filtering);
        self.record(HostCall::DrawRenderers(DrawRecord {
            batch: DrawBatch::capture(drawing, filtering),
            objects,
        }));
    }

    fn draw_skybox(&mut self, camera: &dyn Camera) {
        self.record(HostCall::DrawSkybox {
            camera: camera.name().to_owned(),
        });
    }

    fn draw_gizmos(&mut self, camera: &dyn Camera, subset: GizmoSubset) {
        self.record(HostCall::DrawGizmos {
            camera: camera.name().to_owned(),
            subset,
        });
    }

    fn execute_command_buffer(&mut self, buffer: &CommandBuffer) {
        self.record(HostCall::ExecuteCommandBuffer {
            buffer: buffer.name().to_owned(),
            commands: buffer.commands().to_vec(),
        });
    }

    fn submit(&mut self) {
        self.calls.push(HostCall::Submit);
        let work = std::mem::take(&mut self.pending);
        self.submissions.push(Submission { work });
    }

    fn emit_world_geometry_for_scene_view(&mut self, camera: &dyn Camera) {
        self.record(HostCall::EmitWorldGeometry {
            camera: camera.name().to_owned(),
        });
    }

    fn should_render_gizmos(&self) -> bool {
        self.gizmos_enabled
    }

    fn begin_profiler_sample(&mut self, name: &str) {
        self.profiler_depth += 1;
        self.record(HostCall::BeginProfilerSample(name.to_owned()));
    }

    fn end_profiler_sample(&mut self) {
        if self.profiler_depth == 0 {
            warn!("Profiler sample ended without a matching begin");
        } else {
            self.profiler_depth -= 1;
        }
        self.record(HostCall::EndProfilerSample);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec3};

    use super::*;
    use crate::core::camera::SceneCamera;

    fn camera() -> SceneCamera {
        SceneCamera::new_perspective(60.0, 1.0, 0.1, 100.0).with_name("Main")
    }

    #[test]
    fn test_back_to_front_orders_far_first() {
        let cam = camera();
        let sorting = SortingSettings::new(&cam).with_criteria(SortingCriteria::COMMON_TRANSPARENT);
        let near = SceneObject::transparent("near", Vec3::new(0.0, 0.0, -2.0), 0.5);
        let far = SceneObject::transparent("far", Vec3::new(0.0, 0.0, -20.0), 0.5);
        assert!(DrawKey::new(&sorting, &far) < DrawKey::new(&sorting, &near));
    }

    #[test]
    fn test_front_to_back_orders_near_first() {
        let cam = camera();
        let sorting = SortingSettings::new(&cam).with_criteria(SortingCriteria::COMMON_OPAQUE);
        let near = SceneObject::new("near", Vec3::new(0.0, 0.0, -2.0), 0.5);
        let far = SceneObject::new("far", Vec3::new(0.0, 0.0, -20.0), 0.5);
        assert!(DrawKey::new(&sorting, &near) < DrawKey::new(&sorting, &far));
    }

    #[test]
    fn test_render_queue_dominates_depth() {
        let cam = camera();
        let sorting = SortingSettings::new(&cam).with_criteria(SortingCriteria::COMMON_OPAQUE);
        let near_late = SceneObject::new("a", Vec3::new(0.0, 0.0, -2.0), 0.5).with_queue(2450);
        let far_early = SceneObject::new("b", Vec3::new(0.0, 0.0, -50.0), 0.5);
        assert!(DrawKey::new(&sorting, &far_early) < DrawKey::new(&sorting, &near_late));
    }

    #[test]
    fn test_submit_moves_pending_work() {
        let mut ctx = HeadlessContext::new(Scene::new());
        let cam = camera().with_transform(Affine3A::IDENTITY);
        ctx.setup_camera_properties(&cam);
        ctx.draw_skybox(&cam);
        ctx.begin_profiler_sample("x");
        ctx.end_profiler_sample();
        assert_eq!(ctx.pending().len(), 2);

        ctx.submit();
        assert!(ctx.pending().is_empty());
        assert_eq!(ctx.submissions().len(), 1);
        assert_eq!(ctx.submissions()[0].work.len(), 2);
        assert_eq!(ctx.calls().len(), 5);
    }

    #[test]
    fn test_removed_objects_are_skipped() {
        let mut scene = Scene::new();
        let kept = scene.add(SceneObject::new("kept", Vec3::new(0.0, 0.0, -5.0), 1.0));
        let removed = scene.add(SceneObject::new("removed", Vec3::new(0.0, 0.0, -6.0), 1.0));
        let mut ctx = HeadlessContext::new(scene);
        let cam = camera();

        let visible = ctx.cull(&cam.try_get_culling_parameters().unwrap());
        assert_eq!(visible.len(), 2);
        ctx.scene_mut().remove(removed);

        let drawing =
            DrawingSettings::new(ShaderTagId::srp_default_unlit(), SortingSettings::new(&cam));
        ctx.draw_renderers(&visible, &drawing, &FilteringSettings::DEFAULT);
        assert_eq!(ctx.draw_records().next().unwrap().objects, [kept]);
    }

    #[test]
    fn test_unmatched_pass_is_filtered() {
        let mut scene = Scene::new();
        scene.add(
            SceneObject::new("lit", Vec3::new(0.0, 0.0, -5.0), 1.0).with_pass("UniversalForward"),
        );
        let mut ctx = HeadlessContext::new(scene);
        let cam = camera();

        let visible = ctx.cull(&cam.try_get_culling_parameters().unwrap());
        let drawing =
            DrawingSettings::new(ShaderTagId::srp_default_unlit(), SortingSettings::new(&cam));
        ctx.draw_renderers(&visible, &drawing, &FilteringSettings::DEFAULT);
        assert!(ctx.draw_records().next().unwrap().objects.is_empty());
    }
}
