//! Cameras
//!
//! [`Camera`] is the read-only view of a camera the frame renderer consumes:
//! identity, type, culling parameters, and the pose needed for depth sorting.
//! Hosts implement it on their own camera type. [`SceneCamera`] is a
//! self-contained implementation with perspective/orthographic projection and
//! frustum extraction.

use std::borrow::Cow;
use std::f32::consts::PI;

use glam::{Affine3A, Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// What a camera is rendering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CameraType {
    /// In-game camera.
    #[default]
    Game = 1,
    /// Editor scene-view camera.
    SceneView = 2,
    /// Material / asset preview camera.
    Preview = 4,
    /// VR eye camera.
    Vr = 8,
    /// Reflection probe camera.
    Reflection = 16,
}

/// Read-only camera interface.
pub trait Camera {
    /// Identity string, used as command buffer and sample name in editor builds.
    fn name(&self) -> &str;

    fn camera_type(&self) -> CameraType;

    /// Culling parameters for the current pose, or `None` when the frustum is
    /// degenerate. This is the only fallible step of a frame.
    fn try_get_culling_parameters(&self) -> Option<CullingParameters>;

    /// World-space position.
    fn position(&self) -> Vec3;

    /// World-space view direction.
    fn forward(&self) -> Vec3;

    fn is_orthographic(&self) -> bool;
}

/// Everything a culler needs to compute a visible set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingParameters {
    pub view_projection: Mat4,
    pub frustum: Frustum,
    pub position: Vec3,
    pub culling_mask: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionType {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone)]
pub struct SceneCamera {
    pub name: Cow<'static, str>,
    pub camera_type: CameraType,
    /// Layers this camera renders.
    pub culling_mask: u32,

    // === Projection ===
    pub projection_type: ProjectionType,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half height of the orthographic view volume.
    pub ortho_size: f32,

    // Cached matrices
    world_matrix: Affine3A,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
}

impl SceneCamera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self::blank(ProjectionType::Perspective, aspect, near, far);
        cam.fov = fov.to_radians();
        cam.update_projection_matrix();
        cam
    }

    #[must_use]
    pub fn new_orthographic(ortho_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self::blank(ProjectionType::Orthographic, aspect, near, far);
        cam.ortho_size = ortho_size;
        cam.update_projection_matrix();
        cam
    }

    fn blank(projection_type: ProjectionType, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            name: Cow::Borrowed("Camera"),
            camera_type: CameraType::Game,
            culling_mask: u32::MAX,
            projection_type,
            fov: 60f32.to_radians(),
            aspect,
            near,
            far,
            ortho_size: 5.0,
            world_matrix: Affine3A::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, camera_type: CameraType) -> Self {
        self.camera_type = camera_type;
        self
    }

    #[must_use]
    pub fn with_transform(mut self, world: Affine3A) -> Self {
        self.update_view_projection(&world);
        self
    }

    /// Recomputes the projection after a projection field changed.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection_type {
            ProjectionType::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
            }
            ProjectionType::Orthographic => {
                let h = self.ortho_size;
                let w = h * self.aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
            }
        };
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    /// Places the camera. The view matrix is the inverse world transform.
    pub fn update_view_projection(&mut self, world_transform: &Affine3A) {
        self.world_matrix = *world_transform;
        self.view_matrix = Mat4::from(*world_transform).inverse();
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection_matrix
    }

    fn has_valid_frustum(&self) -> bool {
        let projection_ok = match self.projection_type {
            ProjectionType::Perspective => self.near > 0.0 && self.fov > 0.0 && self.fov < PI,
            ProjectionType::Orthographic => self.ortho_size > 0.0,
        };
        let vp = self.view_projection_matrix;
        projection_ok
            && self.aspect > 0.0
            && self.far > self.near
            && vp.is_finite()
            && vp.determinant().abs() >= f32::MIN_POSITIVE
    }
}

impl Camera for SceneCamera {
    fn name(&self) -> &str {
        &self.name
    }

    fn camera_type(&self) -> CameraType {
        self.camera_type
    }

    fn try_get_culling_parameters(&self) -> Option<CullingParameters> {
        if !self.has_valid_frustum() {
            return None;
        }
        Some(CullingParameters {
            view_projection: self.view_projection_matrix,
            frustum: Frustum::from_matrix(self.view_projection_matrix),
            position: self.position(),
            culling_mask: self.culling_mask,
        })
    }

    fn position(&self) -> Vec3 {
        Vec3::from(self.world_matrix.translation)
    }

    fn forward(&self) -> Vec3 {
        self.world_matrix
            .transform_vector3(Vec3::NEG_Z)
            .normalize_or_zero()
    }

    fn is_orthographic(&self) -> bool {
        self.projection_type == ProjectionType::Orthographic
    }
}

/// Six clip planes, normals pointing inward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frustum {
    planes: [Vec4; 6], // Left, Right, Bottom, Top, Near, Far
}

impl Frustum {
    /// Gribb-Hartmann extraction for a `[0, 1]` depth range.
    #[must_use]
    pub fn from_matrix(m: Mat4) -> Self {
        let rows = [m.row(0), m.row(1), m.row(2), m.row(3)];

        let mut planes = [
            rows[3] + rows[0],
            rows[3] - rows[0],
            rows[3] + rows[1],
            rows[3] - rows[1],
            rows[2],
            rows[3] - rows[2],
        ];

        for plane in &mut planes {
            let length = plane.truncate().length();
            if length > 0.0 {
                *plane /= length;
            }
        }

        Self { planes }
    }

    #[inline]
    #[must_use]
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// Conservative sphere test: `false` only when the sphere is fully
    /// outside one plane.
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(center) + plane.w >= -radius)
    }
}
