//! The render-side seam.
//!
//! A [`RenderSurface`] owns the camera and the GPU-facing draw call. The crate
//! never renders anything itself: it asks the surface to map the pointer onto
//! the field plane and hands it the position buffer when it changed.

use glam::{Vec2, Vec3};

use crate::projection::{Projector, Viewport};

/// Host-provided drawing target.
pub trait RenderSurface {
    /// Field-plane XY under a pointer in NDC, or `None` when the pointer
    /// misses the plane.
    fn project(&self, ndc: Vec2) -> Option<Vec2>;

    /// Draw the current particle positions. Called at most once per frame,
    /// and only when positions changed.
    fn draw(&mut self, positions: &[Vec3]);

    /// The drawing area changed size.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Rendered point size in world units. Sent once on mount.
    fn set_point_size(&mut self, _size: f32) {}
}

/// Surface that projects with a [`Projector`] and keeps the last frame in memory.
///
/// Useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub projector: Projector,
    point_size: Option<f32>,
    frames: Vec<Vec3>,
    draw_count: u64,
}

impl RecordingSurface {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            point_size: None,
            frames: Vec::new(),
            draw_count: 0,
        }
    }

    /// Number of `draw` calls so far.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Point size received from the scene, if any.
    pub fn point_size(&self) -> Option<f32> {
        self.point_size
    }

    /// Positions passed to the latest `draw`.
    pub fn last_frame(&self) -> &[Vec3] {
        &self.frames
    }
}

impl RenderSurface for RecordingSurface {
    fn project(&self, ndc: Vec2) -> Option<Vec2> {
        self.projector.project(ndc)
    }

    fn draw(&mut self, positions: &[Vec3]) {
        self.frames.clear();
        self.frames.extend_from_slice(positions);
        self.draw_count += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.projector.viewport = Viewport::new(width, height);
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = Some(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_keeps_last_frame() {
        let mut surface = RecordingSurface::default();
        surface.draw(&[Vec3::ONE, Vec3::ZERO]);
        surface.draw(&[Vec3::X]);
        assert_eq!(surface.draw_count(), 2);
        assert_eq!(surface.last_frame(), &[Vec3::X]);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut surface = RecordingSurface::default();
        surface.resize(1920, 1080);
        assert_eq!(surface.projector.viewport, Viewport::new(1920, 1080));
    }
}
