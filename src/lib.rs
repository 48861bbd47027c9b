#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod core;
pub mod errors;
pub mod headless;
pub mod renderer;
pub mod scene;
pub mod utils;

pub use crate::core::{
    Camera, CameraType, ClearFlags, CommandBuffer, DrawingSettings, FilteringSettings,
    GizmoSubset, Material, RenderContext, RenderQueueRange, SceneCamera, ShaderTagId,
    SortingCriteria, SortingSettings,
};
pub use errors::{FrameError, Result};
pub use headless::HeadlessContext;
pub use renderer::{
    DefaultDiagnostics, Diagnostics, EditorDiagnostics, FrameRenderer, FrameReport,
    NoDiagnostics, RenderPhase, RenderPipeline, RendererSettings,
};
pub use scene::{ObjectKey, Scene, SceneCuller, SceneObject, VisibleSet};
pub use utils::interner;
