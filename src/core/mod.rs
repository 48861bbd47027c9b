//! Host-facing building blocks of a frame.
//!
//! - [`Camera`] / [`SceneCamera`]: camera identity, culling parameters, pose
//! - [`RenderContext`]: the host command sink
//! - [`CommandBuffer`]: the renderer-owned reusable command list
//! - [`DrawingSettings`] / [`FilteringSettings`]: per draw call description
//! - [`ShaderTagId`], [`RenderQueueRange`], [`Material`]: draw call vocabulary

pub mod camera;
pub mod command_buffer;
pub mod context;
pub mod drawing;
pub mod material;
pub mod render_queue;
pub mod shader_tag;

pub use camera::{Camera, CameraType, CullingParameters, Frustum, ProjectionType, SceneCamera};
pub use command_buffer::{BufferCommand, ClearFlags, CommandBuffer};
pub use context::{GizmoSubset, RenderContext};
pub use drawing::{
    DistanceMetric, DrawBatch, DrawingSettings, FilteringSettings, SortingCriteria,
    SortingSettings, MAX_SHADER_PASSES,
};
pub use material::Material;
pub use render_queue::{RenderQueue, RenderQueueRange};
pub use shader_tag::ShaderTagId;
