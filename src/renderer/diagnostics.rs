//! Editor Diagnostics
//!
//! Editor-only work of a frame lives behind the [`Diagnostics`] trait so the
//! render sequence in [`FrameRenderer::render`] is the same for every build:
//!
//! | Hook | [`EditorDiagnostics`] | [`NoDiagnostics`] |
//! |------|-----------------------|-------------------|
//! | `prepare_buffer` | buffer renamed to the camera | constant buffer name |
//! | `prepare_for_scene_window` | scene-view geometry emitted | nothing |
//! | `draw_unsupported_shaders` | legacy passes drawn with the error material | nothing |
//! | `draw_gizmos` | pre/post image effect gizmos | nothing |
//!
//! [`DefaultDiagnostics`] picks one of them from the `editor` cargo feature.
//!
//! [`FrameRenderer::render`]: crate::renderer::FrameRenderer::render

use std::borrow::Cow;
use std::sync::Arc;

use log::{debug, warn};
use smallvec::SmallVec;

use crate::core::camera::{Camera, CameraType};
use crate::core::command_buffer::CommandBuffer;
use crate::core::context::{GizmoSubset, RenderContext};
use crate::core::drawing::{DrawingSettings, FilteringSettings, SortingSettings, MAX_SHADER_PASSES};
use crate::core::material::Material;
use crate::core::shader_tag::ShaderTagId;
use crate::renderer::settings::RendererSettings;

/// Profiler scope wrapped around the per-camera buffer rename.
pub const EDITOR_ONLY_SAMPLE: &str = "Editor Only";

/// Diagnostics selected by the `editor` feature.
#[cfg(feature = "editor")]
pub type DefaultDiagnostics = EditorDiagnostics;

/// Diagnostics selected by the `editor` feature.
#[cfg(not(feature = "editor"))]
pub type DefaultDiagnostics = NoDiagnostics;

/// Editor-only hooks of the frame sequence. Every hook defaults to a no-op.
pub trait Diagnostics {
    fn from_settings(settings: &RendererSettings) -> Self
    where
        Self: Sized;

    /// Names the command buffer (and therefore its sample) for `camera`.
    fn prepare_buffer<C: RenderContext>(
        &mut self,
        _context: &mut C,
        _buffer: &mut CommandBuffer,
        _camera: &dyn Camera,
    ) {
    }

    fn prepare_for_scene_window<C: RenderContext>(
        &mut self,
        _context: &mut C,
        _camera: &dyn Camera,
    ) {
    }

    fn draw_unsupported_shaders<C: RenderContext>(
        &mut self,
        _context: &mut C,
        _culling_results: &C::CullingResults,
        _camera: &dyn Camera,
    ) {
    }

    fn draw_gizmos<C: RenderContext>(&mut self, _context: &mut C, _camera: &dyn Camera) {}
}

/// Production diagnostics: nothing beyond the core sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn from_settings(_settings: &RendererSettings) -> Self {
        Self
    }
}

/// Editor diagnostics.
///
/// Owns the error material used to flag renderers whose shaders only have
/// legacy passes. The material is built on first use and kept for the
/// lifetime of the diagnostics object.
#[derive(Debug, Clone)]
pub struct EditorDiagnostics {
    legacy_passes: SmallVec<[ShaderTagId; 8]>,
    error_shader: Cow<'static, str>,
    error_material: Option<Arc<Material>>,
}

impl EditorDiagnostics {
    /// The error material, if a draw has needed it yet.
    #[must_use]
    pub fn error_material(&self) -> Option<&Arc<Material>> {
        self.error_material.as_ref()
    }

    #[must_use]
    pub fn legacy_passes(&self) -> &[ShaderTagId] {
        &self.legacy_passes
    }
}

impl Diagnostics for EditorDiagnostics {
    fn from_settings(settings: &RendererSettings) -> Self {
        if settings.legacy_passes.len() > MAX_SHADER_PASSES {
            warn!(
                "{} legacy passes configured, only the first {MAX_SHADER_PASSES} are drawn",
                settings.legacy_passes.len()
            );
        }
        Self {
            legacy_passes: settings
                .legacy_passes
                .iter()
                .take(MAX_SHADER_PASSES)
                .map(|name| ShaderTagId::new(name))
                .collect(),
            error_shader: Cow::Owned(settings.error_shader.clone()),
            error_material: None,
        }
    }

    fn prepare_buffer<C: RenderContext>(
        &mut self,
        context: &mut C,
        buffer: &mut CommandBuffer,
        camera: &dyn Camera,
    ) {
        context.begin_profiler_sample(EDITOR_ONLY_SAMPLE);
        if buffer.name() != camera.name() {
            buffer.set_name(camera.name().to_owned());
        }
        context.end_profiler_sample();
    }

    fn prepare_for_scene_window<C: RenderContext>(
        &mut self,
        context: &mut C,
        camera: &dyn Camera,
    ) {
        if camera.camera_type() == CameraType::SceneView {
            context.emit_world_geometry_for_scene_view(camera);
        }
    }

    fn draw_unsupported_shaders<C: RenderContext>(
        &mut self,
        context: &mut C,
        culling_results: &C::CullingResults,
        camera: &dyn Camera,
    ) {
        let Some((&first, rest)) = self.legacy_passes.split_first() else {
            return;
        };

        let error_shader = &self.error_shader;
        let material = self.error_material.get_or_insert_with(|| {
            debug!("Creating error material with shader '{error_shader}'");
            Arc::new(Material::error(error_shader.clone()))
        });

        let mut drawing = DrawingSettings::new(first, SortingSettings::new(camera));
        drawing.override_material = Some(Arc::clone(material));
        for (i, &pass) in rest.iter().enumerate() {
            if let Err(err) = drawing.set_shader_pass_name(i + 1, pass) {
                warn!("Skipping legacy pass '{pass}': {err}");
                break;
            }
        }

        context.draw_renderers(culling_results, &drawing, &FilteringSettings::DEFAULT);
    }

    fn draw_gizmos<C: RenderContext>(&mut self, context: &mut C, camera: &dyn Camera) {
        if context.should_render_gizmos() {
            context.draw_gizmos(camera, GizmoSubset::PreImageEffects);
            context.draw_gizmos(camera, GizmoSubset::PostImageEffects);
        }
    }
}
