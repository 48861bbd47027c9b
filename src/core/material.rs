//! Materials
//!
//! The frame renderer only ever needs a material as an override: the
//! unsupported-shader fallback swaps every legacy renderer's material for a
//! flat error material. Materials are shared through `Arc` so a draw batch
//! can hold one without copying.

use std::borrow::Cow;

/// Shader used by the error material when no other name is configured.
pub const INTERNAL_ERROR_SHADER: &str = "Hidden/InternalErrorShader";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub name: Cow<'static, str>,
    pub shader: Cow<'static, str>,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, shader: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
        }
    }

    /// Flat error material built on the given shader.
    #[must_use]
    pub fn error(shader: impl Into<Cow<'static, str>>) -> Self {
        Self::new("Error Material", shader)
    }
}
