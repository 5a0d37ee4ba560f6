//! Scene lifecycle: mount, feed pointer events and frames, unmount.
//!
//! A [`Scene`] is the handle returned by [`Scene::mount`]. It owns the
//! particle field, the pointer tracker and the host's [`RenderSurface`], and
//! every later call goes through it. After [`Scene::unmount`] the pointer is
//! detached, all eases are cancelled, and every call fails with
//! [`FieldError::Disposed`].
//!
//! # Example
//!
//! ```
//! use repel_field::prelude::*;
//!
//! let config = FieldConfig { columns: 20, rows: 20, ..Default::default() };
//! let mut scene = Scene::mount(config, RecordingSurface::default())?;
//!
//! scene.pointer_moved(Vec2::new(0.1, 0.0))?;
//! let drawn = scene.frame(1.0 / 60.0)?;
//! assert!(drawn);
//!
//! scene.unmount();
//! assert!(scene.frame(1.0 / 60.0).is_err());
//! # Ok::<(), repel_field::FieldError>(())
//! ```

use glam::Vec2;
use tracing::{debug, info, trace, warn};
use winit::event::WindowEvent;

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::{ParticleField, PointerReport};
use crate::input::{PointerEvent, PointerInput};
use crate::surface::RenderSurface;

/// Outcome of one pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The pointer hit the field plane and was applied.
    Applied(PointerReport),
    /// The pointer missed the field plane; nothing changed.
    Missed,
    /// The pointer left; this many return eases were started.
    Released(usize),
}

/// A mounted repel-field scene.
pub struct Scene<S: RenderSurface> {
    config: FieldConfig,
    field: ParticleField,
    pointer: PointerInput,
    surface: S,
    frames_drawn: u64,
}

impl<S: RenderSurface> Scene<S> {
    /// Build the field from `config`, hand the point size to the surface and
    /// start listening to the pointer.
    pub fn mount(config: FieldConfig, mut surface: S) -> Result<Self, FieldError> {
        let field = config.build_field()?;
        surface.set_point_size(config.particle_size);
        let mut pointer = PointerInput::new();
        pointer.attach();
        info!(
            columns = config.columns,
            rows = config.rows,
            particles = field.len(),
            "scene mounted"
        );
        Ok(Self {
            config,
            field,
            pointer,
            surface,
            frames_drawn: 0,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerInput {
        &self.pointer
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of frames that reached the surface.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn is_mounted(&self) -> bool {
        !self.field.is_disposed()
    }

    /// Feed a winit window event. Resizes go to the surface; pointer events
    /// go to the field.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Result<Option<PointerOutcome>, FieldError> {
        self.ensure_mounted()?;
        if let WindowEvent::Resized(size) = event {
            self.surface.resize(size.width, size.height);
        }
        match self.pointer.handle_event(event) {
            Some(PointerEvent::Moved { ndc }) => self.pointer_moved(ndc).map(Some),
            Some(PointerEvent::Left) => self.pointer_left().map(Some),
            None => Ok(None),
        }
    }

    /// The pointer moved to `ndc`.
    pub fn pointer_moved(&mut self, ndc: Vec2) -> Result<PointerOutcome, FieldError> {
        self.ensure_mounted()?;
        let Some(world) = self.surface.project(ndc) else {
            trace!(x = ndc.x, y = ndc.y, "pointer missed field plane");
            return Ok(PointerOutcome::Missed);
        };
        let report = self
            .field
            .apply_pointer(world, self.config.radius, self.config.strength)?;
        Ok(PointerOutcome::Applied(report))
    }

    /// The pointer left the drawing area.
    pub fn pointer_left(&mut self) -> Result<PointerOutcome, FieldError> {
        self.ensure_mounted()?;
        let started = self.field.release_pointer()?;
        Ok(PointerOutcome::Released(started))
    }

    /// The drawing area changed size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FieldError> {
        self.ensure_mounted()?;
        self.pointer.set_window_size(width, height);
        self.surface.resize(width, height);
        Ok(())
    }

    /// Step eases by `delta` seconds, then draw if anything changed.
    ///
    /// Returns whether the surface was drawn.
    pub fn frame(&mut self, delta: f32) -> Result<bool, FieldError> {
        self.ensure_mounted()?;
        self.field.tick(delta)?;
        if !self.field.take_dirty()? {
            return Ok(false);
        }
        self.surface.draw(self.field.positions()?);
        self.frames_drawn += 1;
        Ok(true)
    }

    /// Detach the pointer, cancel every ease and dispose the field.
    ///
    /// Calling it twice is harmless.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            debug!("unmount on an already unmounted scene");
            return;
        }
        self.pointer.detach();
        self.field.dispose();
        info!(frames = self.frames_drawn, "scene unmounted");
    }

    fn ensure_mounted(&self) -> Result<(), FieldError> {
        if self.is_mounted() {
            Ok(())
        } else {
            warn!("scene used after unmount");
            Err(FieldError::Disposed)
        }
    }
}
