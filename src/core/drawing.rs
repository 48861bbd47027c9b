//! Draw Call Settings
//!
//! One `draw_renderers` call is described by two settings objects:
//!
//! - [`DrawingSettings`]: which shader passes to draw, how to sort, and an
//!   optional override material.
//! - [`FilteringSettings`]: which render queues and layers are candidates.
//!
//! Together they form the conceptual [`DrawBatch`] tuple
//! (pass tags, sort criteria, queue range, override material). Host contexts
//! that need to keep a batch around after the call capture one with
//! [`DrawBatch::capture`].

use std::sync::Arc;

use bitflags::bitflags;
use glam::Vec3;
use smallvec::SmallVec;

use crate::core::camera::Camera;
use crate::core::material::Material;
use crate::core::render_queue::RenderQueueRange;
use crate::core::shader_tag::ShaderTagId;
use crate::errors::{FrameError, Result};

/// Maximum number of shader passes a single draw call can select.
pub const MAX_SHADER_PASSES: usize = 16;

bitflags! {
    /// How renderers are ordered within one draw call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SortingCriteria: u32 {
        /// Sort by renderer sorting layer.
        const SORTING_LAYER = 1;
        /// Sort by material render queue.
        const RENDER_QUEUE = 1 << 1;
        /// Sort far objects first.
        const BACK_TO_FRONT = 1 << 2;
        /// Sort near objects first, with distances quantized into buckets.
        const QUANTIZED_FRONT_TO_BACK = 1 << 3;
        /// Group renderers to reduce state changes.
        const OPTIMIZE_STATE_CHANGES = 1 << 4;
        /// Sort renderers taking canvas order into account.
        const CANVAS_ORDER = 1 << 5;
        /// Sort by renderer priority.
        const RENDERER_PRIORITY = 1 << 6;

        /// Typical sorting for opaque objects (front-to-back, state-minimizing).
        const COMMON_OPAQUE = Self::SORTING_LAYER.bits()
            | Self::RENDER_QUEUE.bits()
            | Self::QUANTIZED_FRONT_TO_BACK.bits()
            | Self::OPTIMIZE_STATE_CHANGES.bits()
            | Self::CANVAS_ORDER.bits();
        /// Typical sorting for transparent objects (back-to-front).
        const COMMON_TRANSPARENT = Self::SORTING_LAYER.bits()
            | Self::RENDER_QUEUE.bits()
            | Self::BACK_TO_FRONT.bits()
            | Self::OPTIMIZE_STATE_CHANGES.bits();
    }
}

/// How the distance used for depth sorting is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Distance from the camera position.
    #[default]
    Perspective,
    /// Depth along the camera's view direction.
    Orthographic,
}

/// Sorting criteria plus the camera data needed to evaluate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortingSettings {
    pub criteria: SortingCriteria,
    pub distance_metric: DistanceMetric,
    pub camera_position: Vec3,
    pub camera_forward: Vec3,
}

impl SortingSettings {
    /// Captures the camera's position and projection kind. Criteria start
    /// out empty.
    #[must_use]
    pub fn new(camera: &dyn Camera) -> Self {
        Self {
            criteria: SortingCriteria::empty(),
            distance_metric: if camera.is_orthographic() {
                DistanceMetric::Orthographic
            } else {
                DistanceMetric::Perspective
            },
            camera_position: camera.position(),
            camera_forward: camera.forward(),
        }
    }

    #[must_use]
    pub fn with_criteria(mut self, criteria: SortingCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Sort distance of a point under this metric.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        match self.distance_metric {
            DistanceMetric::Perspective => self.camera_position.distance(point),
            DistanceMetric::Orthographic => (point - self.camera_position).dot(self.camera_forward),
        }
    }
}

/// Shader passes, sorting and material override of one draw call.
///
/// The geometry passes build a single instance and mutate it between the
/// opaque and transparent draws.
#[derive(Debug, Clone)]
pub struct DrawingSettings {
    passes: SmallVec<[ShaderTagId; 8]>,
    pub sorting: SortingSettings,
    pub override_material: Option<Arc<Material>>,
}

impl DrawingSettings {
    #[must_use]
    pub fn new(pass: ShaderTagId, sorting: SortingSettings) -> Self {
        let mut passes = SmallVec::new();
        passes.push(pass);
        Self {
            passes,
            sorting,
            override_material: None,
        }
    }

    /// Sets the pass drawn in slot `index`.
    ///
    /// Slots are contiguous: `index` may replace an existing slot or append
    /// directly after the last one, up to [`MAX_SHADER_PASSES`].
    pub fn set_shader_pass_name(&mut self, index: usize, pass: ShaderTagId) -> Result<()> {
        let limit = MAX_SHADER_PASSES.min(self.passes.len() + 1);
        if index >= limit {
            return Err(FrameError::ShaderPassIndexOutOfRange { index, limit });
        }
        if index == self.passes.len() {
            self.passes.push(pass);
        } else {
            self.passes[index] = pass;
        }
        Ok(())
    }

    #[must_use]
    pub fn shader_pass_name(&self, index: usize) -> Option<ShaderTagId> {
        self.passes.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn passes(&self) -> &[ShaderTagId] {
        &self.passes
    }
}

/// Candidate filter of one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteringSettings {
    pub render_queue_range: RenderQueueRange,
    pub layer_mask: u32,
}

impl FilteringSettings {
    #[must_use]
    pub const fn new(render_queue_range: RenderQueueRange) -> Self {
        Self {
            render_queue_range,
            layer_mask: u32::MAX,
        }
    }

    /// Every queue, every layer.
    pub const DEFAULT: Self = Self::new(RenderQueueRange::ALL);

    /// Whether a renderer in `queue` on `layer` passes this filter.
    #[must_use]
    pub fn accepts(&self, queue: i32, layer: u8) -> bool {
        self.render_queue_range.contains(queue) && self.layer_mask & layer_bit(layer) != 0
    }
}

impl Default for FilteringSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mask bit of a layer index. Layers past 31 never match.
#[inline]
#[must_use]
pub fn layer_bit(layer: u8) -> u32 {
    1u32.checked_shl(u32::from(layer)).unwrap_or(0)
}

/// Owned snapshot of one draw call's description.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub passes: Vec<ShaderTagId>,
    pub criteria: SortingCriteria,
    pub render_queue_range: RenderQueueRange,
    pub override_material: Option<Arc<Material>>,
}

impl DrawBatch {
    #[must_use]
    pub fn capture(drawing: &DrawingSettings, filtering: &FilteringSettings) -> Self {
        Self {
            passes: drawing.passes().to_vec(),
            criteria: drawing.sorting.criteria,
            render_queue_range: filtering.render_queue_range,
            override_material: drawing.override_material.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::SceneCamera;

    fn sorting() -> SortingSettings {
        SortingSettings::new(&SceneCamera::new_perspective(60.0, 1.0, 0.1, 100.0))
    }

    #[test]
    fn test_common_criteria() {
        assert!(SortingCriteria::COMMON_OPAQUE.contains(SortingCriteria::QUANTIZED_FRONT_TO_BACK));
        assert!(!SortingCriteria::COMMON_OPAQUE.contains(SortingCriteria::BACK_TO_FRONT));
        assert!(SortingCriteria::COMMON_TRANSPARENT.contains(SortingCriteria::BACK_TO_FRONT));
        assert!(
            !SortingCriteria::COMMON_TRANSPARENT.contains(SortingCriteria::QUANTIZED_FRONT_TO_BACK)
        );
    }

    #[test]
    fn test_set_shader_pass_name_appends_and_replaces() {
        let mut drawing = DrawingSettings::new(ShaderTagId::new("Always"), sorting());
        drawing.set_shader_pass_name(1, ShaderTagId::new("ForwardBase")).unwrap();
        drawing.set_shader_pass_name(0, ShaderTagId::new("Vertex")).unwrap();

        assert_eq!(drawing.passes().len(), 2);
        assert_eq!(drawing.shader_pass_name(0), Some(ShaderTagId::new("Vertex")));
        assert_eq!(drawing.shader_pass_name(1), Some(ShaderTagId::new("ForwardBase")));
    }

    #[test]
    fn test_set_shader_pass_name_rejects_gaps_and_overflow() {
        let mut drawing = DrawingSettings::new(ShaderTagId::new("Always"), sorting());
        assert!(drawing.set_shader_pass_name(2, ShaderTagId::new("Vertex")).is_err());

        for i in 1..MAX_SHADER_PASSES {
            drawing.set_shader_pass_name(i, ShaderTagId::new("Vertex")).unwrap();
        }
        let err = drawing
            .set_shader_pass_name(MAX_SHADER_PASSES, ShaderTagId::new("Vertex"))
            .unwrap_err();
        assert!(matches!(
            err,
            FrameError::ShaderPassIndexOutOfRange {
                index: MAX_SHADER_PASSES,
                limit: MAX_SHADER_PASSES
            }
        ));
    }

    #[test]
    fn test_filtering_layers() {
        let mut filtering = FilteringSettings::new(RenderQueueRange::OPAQUE);
        assert!(filtering.accepts(2000, 0));
        assert!(!filtering.accepts(3000, 0));

        filtering.layer_mask = layer_bit(3);
        assert!(filtering.accepts(2000, 3));
        assert!(!filtering.accepts(2000, 4));
        assert_eq!(layer_bit(40), 0);
    }

    #[test]
    fn test_distance_metrics() {
        let mut settings = sorting();
        let point = Vec3::new(3.0, 0.0, -4.0);
        assert!((settings.distance_to(point) - 5.0).abs() < 1e-5);

        settings.distance_metric = DistanceMetric::Orthographic;
        assert!((settings.distance_to(point) - 4.0).abs() < 1e-5);
    }
}
