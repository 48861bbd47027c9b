//! Render Context
//!
//! [`RenderContext`] is the host's side of a frame: it accumulates work
//! (camera state, draw calls, executed command buffers) and sends it to the
//! device on [`submit`](RenderContext::submit). The frame renderer only
//! sequences calls into it.
//!
//! Methods are infallible. A host that faults internally panics, and the
//! panic reaches the caller of `render` untouched.

use crate::core::camera::{Camera, CullingParameters};
use crate::core::command_buffer::CommandBuffer;
use crate::core::drawing::{DrawingSettings, FilteringSettings};

/// Gizmo layers relative to image effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoSubset {
    PreImageEffects,
    PostImageEffects,
}

pub trait RenderContext {
    /// Host-defined visible set produced by [`cull`](Self::cull).
    type CullingResults;

    /// Pushes view/projection state of `camera`.
    fn setup_camera_properties(&mut self, camera: &dyn Camera);

    fn cull(&mut self, parameters: &CullingParameters) -> Self::CullingResults;

    fn draw_renderers(
        &mut self,
        culling_results: &Self::CullingResults,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    );

    fn draw_skybox(&mut self, camera: &dyn Camera);

    fn draw_gizmos(&mut self, camera: &dyn Camera, subset: GizmoSubset);

    /// Queues the buffer's commands. The buffer may be cleared right after.
    fn execute_command_buffer(&mut self, buffer: &CommandBuffer);

    /// Sends all queued work to the device.
    fn submit(&mut self);

    /// Materializes world geometry so scene-view UI can pick it.
    fn emit_world_geometry_for_scene_view(&mut self, camera: &dyn Camera);

    /// Host gizmo toggle.
    fn should_render_gizmos(&self) -> bool {
        true
    }

    /// CPU profiler scope. No GPU effect.
    fn begin_profiler_sample(&mut self, _name: &str) {}

    fn end_profiler_sample(&mut self) {}
}
