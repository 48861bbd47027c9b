//! Shader Pass Tags
//!
//! A [`ShaderTagId`] names a shader pass (`LightMode` tag). Draw calls select
//! the renderers they draw by pass tag: the opaque and transparent passes
//! draw [`SRP_DEFAULT_UNLIT`], the unsupported-shader fallback draws the
//! [`LEGACY_PASS_NAMES`].

use std::fmt;

use crate::utils::interner::{self, Symbol};

/// Default unlit pass drawn by the opaque and transparent geometry passes.
pub const SRP_DEFAULT_UNLIT: &str = "SRPDefaultUnlit";

/// Passes of the built-in legacy shaders that this pipeline does not support.
pub const LEGACY_PASS_NAMES: [&str; 6] = [
    "Always",
    "ForwardBase",
    "PrepassBase",
    "Vertex",
    "VertexLMRGBM",
    "VertexLM",
];

/// Interned shader pass tag.
///
/// Comparison and hashing are O(1) on the interned symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderTagId(Symbol);

impl ShaderTagId {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(interner::intern(name))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        interner::resolve(self.0)
    }

    /// Tag of the default unlit pass.
    #[must_use]
    pub fn srp_default_unlit() -> Self {
        Self::new(SRP_DEFAULT_UNLIT)
    }
}

impl From<&str> for ShaderTagId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for ShaderTagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShaderTagId").field(&self.name()).finish()
    }
}

impl fmt::Display for ShaderTagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_tag() {
        assert_eq!(ShaderTagId::new("Vertex"), ShaderTagId::from("Vertex"));
        assert_ne!(ShaderTagId::new("Vertex"), ShaderTagId::new("VertexLM"));
    }

    #[test]
    fn test_name_round_trip() {
        let tag = ShaderTagId::srp_default_unlit();
        assert_eq!(tag.name(), "SRPDefaultUnlit");
        assert_eq!(tag.to_string(), "SRPDefaultUnlit");
    }
}
