//! Per-camera render loop and its driver.
//!
//! - [`FrameRenderer`]: renders one camera per call
//! - [`RenderPipeline`]: renders a frame's cameras in order
//! - [`Diagnostics`]: editor-only hooks ([`EditorDiagnostics`], [`NoDiagnostics`])
//! - [`RenderPhase`]: how far the latest render got
//! - [`RendererSettings`]: construction-time configuration

pub mod diagnostics;
pub mod frame_renderer;
pub mod phase;
pub mod pipeline;
pub mod settings;

pub use diagnostics::{DefaultDiagnostics, Diagnostics, EditorDiagnostics, NoDiagnostics};
pub use frame_renderer::FrameRenderer;
pub use phase::RenderPhase;
pub use pipeline::{FrameReport, RenderPipeline};
pub use settings::RendererSettings;
