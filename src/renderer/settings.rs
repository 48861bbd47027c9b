//! Renderer Settings
//!
//! [`RendererSettings`] is consumed once when a [`FrameRenderer`] or
//! [`RenderPipeline`] is created. Every field has a default, so a settings
//! file only needs to name what it changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use frame_renderer::renderer::RendererSettings;
//!
//! // Defaults: clear depth + color to transparent black, draw `SRPDefaultUnlit`
//! let settings = RendererSettings::default();
//!
//! // Loaded from JSON, missing fields fall back to the defaults
//! let settings = RendererSettings::from_json_str(r#"{ "buffer_name": "Main" }"#)?;
//! ```
//!
//! [`FrameRenderer`]: crate::renderer::FrameRenderer
//! [`RenderPipeline`]: crate::renderer::RenderPipeline

use std::path::Path;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::core::command_buffer::ClearFlags;
use crate::core::drawing::MAX_SHADER_PASSES;
use crate::core::material::INTERNAL_ERROR_SHADER;
use crate::core::shader_tag::{LEGACY_PASS_NAMES, SRP_DEFAULT_UNLIT};
use crate::errors::{FrameError, Result};

/// Command buffer and sample name used when per-camera names are compiled out.
pub const DEFAULT_BUFFER_NAME: &str = "Render Camera";

/// Global configuration for frame renderer creation.
///
/// # Fields
///
/// | Field           | Description                                  | Default                        |
/// |-----------------|----------------------------------------------|--------------------------------|
/// | `buffer_name`   | Fixed buffer / sample name (non-editor)      | `"Render Camera"`              |
/// | `clear_depth`   | Clear depth during camera setup              | `true`                         |
/// | `clear_color`   | Clear color during camera setup              | `true`                         |
/// | `background`    | Clear color, RGBA                            | `[0, 0, 0, 0]`                 |
/// | `unlit_pass`    | Pass tag drawn by the geometry passes        | `"SRPDefaultUnlit"`            |
/// | `legacy_passes` | Pass tags flagged as unsupported             | six built-in legacy passes     |
/// | `error_shader`  | Shader of the error override material        | `"Hidden/InternalErrorShader"` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub buffer_name: String,
    pub clear_depth: bool,
    pub clear_color: bool,
    pub background: [f32; 4],
    pub unlit_pass: String,
    pub legacy_passes: Vec<String>,
    pub error_shader: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            buffer_name: DEFAULT_BUFFER_NAME.to_string(),
            clear_depth: true,
            clear_color: true,
            background: [0.0; 4],
            unlit_pass: SRP_DEFAULT_UNLIT.to_string(),
            legacy_passes: LEGACY_PASS_NAMES.iter().map(|&s| s.to_string()).collect(),
            error_shader: INTERNAL_ERROR_SHADER.to_string(),
        }
    }
}

impl RendererSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_name.trim().is_empty() {
            return Err(FrameError::InvalidSettings("buffer_name is empty".into()));
        }
        if self.unlit_pass.trim().is_empty() {
            return Err(FrameError::InvalidSettings("unlit_pass is empty".into()));
        }
        if self.error_shader.trim().is_empty() {
            return Err(FrameError::InvalidSettings("error_shader is empty".into()));
        }
        if self.legacy_passes.is_empty() {
            return Err(FrameError::InvalidSettings("legacy_passes is empty".into()));
        }
        if self.legacy_passes.len() > MAX_SHADER_PASSES {
            return Err(FrameError::InvalidSettings(format!(
                "legacy_passes lists {} passes, a draw call selects at most {MAX_SHADER_PASSES}",
                self.legacy_passes.len()
            )));
        }
        if let Some(i) = self.legacy_passes.iter().position(|p| p.trim().is_empty()) {
            return Err(FrameError::InvalidSettings(format!("legacy_passes[{i}] is empty")));
        }
        if self.background.iter().any(|c| !c.is_finite()) {
            return Err(FrameError::InvalidSettings("background is not finite".into()));
        }
        Ok(())
    }

    /// Aspects cleared during camera setup.
    #[must_use]
    pub fn clear_flags(&self) -> ClearFlags {
        let mut flags = ClearFlags::empty();
        flags.set(ClearFlags::DEPTH, self.clear_depth);
        flags.set(ClearFlags::COLOR, self.clear_color);
        flags
    }

    #[inline]
    #[must_use]
    pub fn background_color(&self) -> Vec4 {
        Vec4::from_array(self.background)
    }
}
