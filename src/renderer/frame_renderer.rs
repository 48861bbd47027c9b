//! Frame Renderer
//!
//! Renders one camera per call: cull, set the camera up, draw opaque
//! geometry, the skybox and transparent geometry, run the editor
//! diagnostics, then submit.
//!
//! # Sequence
//!
//! ```text
//! prepare_buffer → prepare_for_scene_window → cull ─┬─ setup → opaque → skybox → transparent
//!                                                   │        → unsupported shaders → gizmos → submit
//!                                                   └─ (no culling parameters) → abort
//! ```
//!
//! # Buffer Discipline
//!
//! The renderer owns a single [`CommandBuffer`] for its whole lifetime. It is
//! flushed (executed, then cleared) exactly twice per rendered camera:
//! - at the end of setup, so camera state and the clear land before any draw
//! - in submit, so the profiling sample wraps exactly the frame's draws
//!
//! After `render` returns the buffer is always empty.

use glam::Vec4;
use log::trace;

use crate::core::camera::Camera;
use crate::core::command_buffer::{ClearFlags, CommandBuffer};
use crate::core::context::RenderContext;
use crate::core::drawing::{DrawingSettings, FilteringSettings, SortingCriteria, SortingSettings};
use crate::core::render_queue::RenderQueueRange;
use crate::core::shader_tag::ShaderTagId;
use crate::renderer::diagnostics::{DefaultDiagnostics, Diagnostics};
use crate::renderer::phase::RenderPhase;
use crate::renderer::settings::RendererSettings;

/// Per-camera render loop.
///
/// One instance is typically created by the pipeline driver and reused for
/// every camera of every frame. `render` takes `&mut self`, so two renders
/// can never overlap on the same instance.
pub struct FrameRenderer<C: RenderContext, D: Diagnostics = DefaultDiagnostics> {
    buffer: CommandBuffer,
    unlit_pass: ShaderTagId,
    clear_flags: ClearFlags,
    background: Vec4,
    /// Visible set of the latest successful render. Replaced every frame.
    culling_results: Option<C::CullingResults>,
    diagnostics: D,
    phase: RenderPhase,
    frames_submitted: u64,
}

impl<C: RenderContext> FrameRenderer<C> {
    /// Creates a renderer with the build's [`DefaultDiagnostics`].
    #[must_use]
    pub fn new(settings: &RendererSettings) -> Self {
        Self::with_diagnostics(settings, DefaultDiagnostics::from_settings(settings))
    }
}

impl<C: RenderContext, D: Diagnostics> FrameRenderer<C, D> {
    #[must_use]
    pub fn with_diagnostics(settings: &RendererSettings, diagnostics: D) -> Self {
        Self {
            buffer: CommandBuffer::new(settings.buffer_name.clone()),
            unlit_pass: ShaderTagId::new(&settings.unlit_pass),
            clear_flags: settings.clear_flags(),
            background: settings.background_color(),
            culling_results: None,
            diagnostics,
            phase: RenderPhase::Idle,
            frames_submitted: 0,
        }
    }

    /// Renders `camera` through `context`.
    ///
    /// When the camera has no culling parameters the frame is skipped for
    /// this camera: nothing is set up, drawn or submitted.
    pub fn render(&mut self, context: &mut C, camera: &dyn Camera) {
        self.phase = RenderPhase::Start;

        self.diagnostics.prepare_buffer(context, &mut self.buffer, camera);
        self.phase = RenderPhase::BufferPrepared;

        self.diagnostics.prepare_for_scene_window(context, camera);

        let Some(culling_results) = self.cull(context, camera) else {
            self.culling_results = None;
            self.phase = RenderPhase::Aborted;
            return;
        };

        self.setup(context, camera);
        self.draw_visible_geometry(context, camera, &culling_results);
        self.draw_diagnostics(context, camera, &culling_results);
        self.culling_results = Some(culling_results);
        self.submit(context, camera);
    }

    /// This frame's visible set, or `None` when the camera cannot be culled.
    fn cull(&mut self, context: &mut C, camera: &dyn Camera) -> Option<C::CullingResults> {
        let parameters = camera.try_get_culling_parameters()?;
        let culling_results = context.cull(&parameters);
        self.phase = RenderPhase::Culled;
        Some(culling_results)
    }

    fn setup(&mut self, context: &mut C, camera: &dyn Camera) {
        context.setup_camera_properties(camera);

        self.buffer.clear_render_target(self.clear_flags, self.background);
        let sample_name = self.buffer.name_owned();
        self.buffer.begin_sample(sample_name);
        Self::execute_buffer(context, &mut self.buffer);

        self.phase = RenderPhase::SetUp;
    }

    fn draw_visible_geometry(
        &mut self,
        context: &mut C,
        camera: &dyn Camera,
        culling_results: &C::CullingResults,
    ) {
        let mut sorting =
            SortingSettings::new(camera).with_criteria(SortingCriteria::COMMON_OPAQUE);
        let mut drawing = DrawingSettings::new(self.unlit_pass, sorting);
        let mut filtering = FilteringSettings::new(RenderQueueRange::OPAQUE);

        context.draw_renderers(culling_results, &drawing, &filtering);

        // Skybox after opaque so depth rejects covered sky pixels, before
        // transparent so blending sees the sky behind.
        context.draw_skybox(camera);

        sorting.criteria = SortingCriteria::COMMON_TRANSPARENT;
        drawing.sorting = sorting;
        filtering.render_queue_range = RenderQueueRange::TRANSPARENT;

        context.draw_renderers(culling_results, &drawing, &filtering);

        self.phase = RenderPhase::GeometryDrawn;
    }

    fn draw_diagnostics(
        &mut self,
        context: &mut C,
        camera: &dyn Camera,
        culling_results: &C::CullingResults,
    ) {
        self.diagnostics.draw_unsupported_shaders(context, culling_results, camera);
        self.diagnostics.draw_gizmos(context, camera);
        self.phase = RenderPhase::DiagnosticsDrawn;
    }

    fn submit(&mut self, context: &mut C, camera: &dyn Camera) {
        let sample_name = self.buffer.name_owned();
        self.buffer.end_sample(sample_name);
        Self::execute_buffer(context, &mut self.buffer);
        context.submit();

        self.phase = RenderPhase::Submitted;
        self.frames_submitted += 1;
        trace!(
            "Submitted camera '{}' (frame {})",
            camera.name(),
            self.frames_submitted
        );
    }

    /// Executes the queued commands, then clears the buffer. Does nothing
    /// when the buffer is empty.
    fn execute_buffer(context: &mut C, buffer: &mut CommandBuffer) {
        if buffer.is_empty() {
            return;
        }
        context.execute_command_buffer(buffer);
        buffer.clear();
    }

    // === Accessors ===

    /// Phase reached by the latest `render` call.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &CommandBuffer {
        &self.buffer
    }

    /// Visible set of the latest successful cull, `None` after an aborted
    /// render.
    #[inline]
    #[must_use]
    pub fn culling_results(&self) -> Option<&C::CullingResults> {
        self.culling_results.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    #[inline]
    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    /// Number of renders that reached submit.
    #[inline]
    #[must_use]
    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }
}
