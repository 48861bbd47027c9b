//! Scene Culler
//!
//! Computes the objects a camera can see: an object is visible when its
//! layer is in the camera's culling mask and its bounding sphere is not fully
//! outside any frustum plane.

use crate::core::camera::CullingParameters;
use crate::core::drawing::layer_bit;
use crate::scene::ObjectKey;
use crate::scene::scene::Scene;

/// Objects that survived culling, in scene iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    keys: Vec<ObjectKey>,
}

impl VisibleSet {
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[ObjectKey] {
        &self.keys
    }

    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.keys.contains(&key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SceneCuller;

impl SceneCuller {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn cull(&self, scene: &Scene, parameters: &CullingParameters) -> VisibleSet {
        let mut visible = VisibleSet::default();
        self.cull_into(scene, parameters, &mut visible);
        visible
    }

    /// Culls into an existing set, reusing its allocation.
    pub fn cull_into(
        &self,
        scene: &Scene,
        parameters: &CullingParameters,
        visible: &mut VisibleSet,
    ) {
        visible.keys.clear();
        visible.keys.extend(scene.iter().filter_map(|(key, object)| {
            let in_mask = parameters.culling_mask & layer_bit(object.layer) != 0;
            let in_frustum = parameters
                .frustum
                .intersects_sphere(object.center, object.radius);
            (in_mask && in_frustum).then_some(key)
        }));
    }
}
