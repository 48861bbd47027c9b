//! Reference Scene
//!
//! A flat set of renderable objects and a frustum culler. It plays the part
//! of the host's scene and culling system for the headless context, tests
//! and benchmarks; it is not a scene graph.
//!
//! - [`Scene`]: slot-map storage of [`SceneObject`]s
//! - [`SceneCuller`]: frustum + layer culling into a [`VisibleSet`]

pub mod culler;
pub mod object;
#[allow(clippy::module_inception)]
pub mod scene;

use slotmap::new_key_type;

new_key_type! {
    /// Handle of a [`SceneObject`] in a [`Scene`].
    pub struct ObjectKey;
}

pub use culler::{SceneCuller, VisibleSet};
pub use object::SceneObject;
pub use scene::Scene;
