//! Render Pipeline Driver
//!
//! [`RenderPipeline`] is the per-frame entry point a host calls with the
//! cameras to render. It owns one [`FrameRenderer`] and renders the cameras
//! one after another; a camera that cannot be culled is skipped without
//! affecting the others.

use log::trace;

use crate::core::camera::Camera;
use crate::core::context::RenderContext;
use crate::errors::Result;
use crate::renderer::diagnostics::{DefaultDiagnostics, Diagnostics};
use crate::renderer::frame_renderer::FrameRenderer;
use crate::renderer::phase::RenderPhase;
use crate::renderer::settings::RendererSettings;
use crate::utils::interner;

/// Outcome of one [`RenderPipeline::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Cameras that reached submit.
    pub submitted: usize,
    /// Cameras skipped because culling parameters were unavailable.
    pub skipped: usize,
}

pub struct RenderPipeline<C: RenderContext, D: Diagnostics = DefaultDiagnostics> {
    settings: RendererSettings,
    renderer: FrameRenderer<C, D>,
    frame_index: u64,
}

impl<C: RenderContext> RenderPipeline<C> {
    /// Validates `settings` and creates a pipeline with the build's
    /// [`DefaultDiagnostics`].
    pub fn new(settings: RendererSettings) -> Result<Self> {
        let diagnostics = DefaultDiagnostics::from_settings(&settings);
        Self::with_diagnostics(settings, diagnostics)
    }
}

impl<C: RenderContext, D: Diagnostics> RenderPipeline<C, D> {
    pub fn with_diagnostics(settings: RendererSettings, diagnostics: D) -> Result<Self> {
        settings.validate()?;
        interner::preload_builtin_pass_tags();
        let renderer = FrameRenderer::with_diagnostics(&settings, diagnostics);
        Ok(Self {
            settings,
            renderer,
            frame_index: 0,
        })
    }

    /// Renders every camera in order.
    pub fn render<Cam: Camera>(&mut self, context: &mut C, cameras: &[Cam]) -> FrameReport {
        let mut report = FrameReport::default();
        for camera in cameras {
            self.renderer.render(context, camera);
            if self.renderer.phase() == RenderPhase::Submitted {
                report.submitted += 1;
            } else {
                report.skipped += 1;
            }
        }

        self.frame_index += 1;
        trace!(
            "Frame {}: {} camera(s) submitted, {} skipped",
            self.frame_index, report.submitted, report.skipped
        );
        report
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer<C, D> {
        &self.renderer
    }

    /// Number of completed `render` calls.
    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
