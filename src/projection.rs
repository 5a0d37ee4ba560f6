//! Pointer-to-world projection.
//!
//! Turns a pointer position in normalized device coordinates into a point on
//! the field plane (`z = 0`) by casting a ray from a perspective camera.
//!
//! NDC runs from -1 to 1 on both axes with Y up. Depth follows the wgpu/Vulkan
//! convention (0 at the near plane, 1 at the far plane), matching
//! [`Mat4::perspective_rh`].

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera looking at the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            fov_y: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// A camera on the +Z axis at `distance`, facing the origin.
    pub fn facing_plane(distance: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            ..Default::default()
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inverse = self.view_proj(aspect).inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray::new(near, (far - near).normalize_or_zero())
    }
}

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the plane `z = plane_z`.
    ///
    /// `None` if the ray is parallel to the plane or the plane is behind it.
    pub fn intersect_z_plane(&self, plane_z: f32) -> Option<Vec3> {
        let denom = self.direction.z;
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = (plane_z - self.origin.z) / denom;
        (t >= 0.0 && t.is_finite()).then(|| self.at(t))
    }
}

/// Size of the drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A degenerate viewport reports 1.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Pixel coordinates (origin top-left) to NDC (origin center, Y up).
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Vec2::new(
            (x / self.width as f32) * 2.0 - 1.0,
            1.0 - (y / self.height as f32) * 2.0,
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Camera plus viewport: everything needed to map the pointer onto the field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projector {
    pub camera: Camera,
    pub viewport: Viewport,
}

impl Projector {
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        Self { camera, viewport }
    }

    /// Field-plane XY under an NDC pointer, or `None` if the ray misses.
    pub fn project(&self, ndc: Vec2) -> Option<Vec2> {
        self.camera
            .ray_from_ndc(ndc, self.viewport.aspect())
            .intersect_z_plane(0.0)
            .map(|hit| hit.truncate())
    }

    /// Half-size of the field plane visible through the viewport.
    pub fn visible_half_extent(&self) -> Vec2 {
        let distance = self.camera.position.z.abs();
        let half_height = distance * (self.camera.fov_y.to_radians() * 0.5).tan();
        Vec2::new(half_height * self.viewport.aspect(), half_height)
    }
}
