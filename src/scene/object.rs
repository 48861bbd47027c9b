use std::borrow::Cow;
use std::sync::Arc;

use glam::Vec3;

use crate::core::material::Material;
use crate::core::render_queue::RenderQueue;
use crate::core::shader_tag::ShaderTagId;

/// Renderable object: bounding sphere, render queue, shader pass, material
/// and layer.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: Cow<'static, str>,
    pub center: Vec3,
    pub radius: f32,
    pub render_queue: i32,
    /// Pass the object's shader provides.
    pub pass: ShaderTagId,
    pub material: Arc<Material>,
    pub layer: u8,
}

impl SceneObject {
    /// Opaque unlit object in the geometry queue on layer 0.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, center: Vec3, radius: f32) -> Self {
        let name = name.into();
        Self {
            material: Arc::new(Material::new(name.clone(), "Unlit/Color")),
            name,
            center,
            radius,
            render_queue: RenderQueue::GEOMETRY,
            pass: ShaderTagId::srp_default_unlit(),
            layer: 0,
        }
    }

    /// Unlit object in the transparent queue.
    #[must_use]
    pub fn transparent(name: impl Into<Cow<'static, str>>, center: Vec3, radius: f32) -> Self {
        Self::new(name, center, radius).with_queue(RenderQueue::TRANSPARENT)
    }

    #[must_use]
    pub fn with_queue(mut self, render_queue: i32) -> Self {
        self.render_queue = render_queue;
        self
    }

    #[must_use]
    pub fn with_pass(mut self, pass: impl Into<ShaderTagId>) -> Self {
        self.pass = pass.into();
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }
}
