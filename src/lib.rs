//! # repel-field
//!
//! A grid of particles that scatters away from the pointer and eases back into
//! place once it passes.
//!
//! The crate owns the particle positions and the rules that move them. The
//! host owns everything else: it draws the positions, supplies the camera used
//! to map the pointer onto the field plane, and calls into the crate once per
//! pointer event and once per frame.
//!
//! ## Quick Start
//!
//! ```
//! use repel_field::prelude::*;
//!
//! let mut field = ParticleField::new(40, 30, 0.15)?
//!     .with_force(ForceLaw::Linear)?
//!     .with_return(Ease::QuartOut, 0.3)?;
//!
//! // Pointer event: world-space position on the field plane
//! field.apply_pointer(Vec2::new(0.4, -0.2), 0.3, 0.1)?;
//!
//! // Frame: step return eases, upload if anything moved
//! field.tick(1.0 / 60.0)?;
//! if field.take_dirty()? {
//!     let _upload: &[u8] = field.as_bytes()?;
//! }
//! # Ok::<(), repel_field::FieldError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Particle `(column, row)` lives at buffer index `column * rows + row` for the
//! life of the field. Its rest position never changes; its current position is
//! what the renderer draws.
//!
//! ### Motion
//!
//! Each particle is [`Idle`](Motion::Idle), [`Repelled`](Motion::Repelled) or
//! [`Returning`](Motion::Returning). A particle carries at most one return ease;
//! a new push cancels it.
//!
//! ### Scenes
//!
//! [`Scene`] bundles a field, a pointer tracker and a [`RenderSurface`] behind a
//! mount/unmount lifecycle, for hosts that deliver winit window events.
//!
//! | Concern | Types |
//! |---------|-------|
//! | Field | [`ParticleField`], [`Motion`], [`PointerReport`] |
//! | Forces | [`ForceLaw`] |
//! | Easing | [`Ease`] |
//! | Projection | [`Camera`], [`Projector`], [`Viewport`], [`Ray`] |
//! | Host seams | [`RenderSurface`], [`PointerInput`] |
//! | Lifecycle | [`Scene`], [`FieldConfig`], [`time::FrameClock`] |

pub mod config;
pub mod easing;
pub mod error;
pub mod field;
pub mod force;
pub mod input;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod time;

pub use bytemuck;
pub use config::FieldConfig;
pub use easing::Ease;
pub use error::{ConfigError, FieldError};
pub use field::{Motion, ParticleField, PointerReport};
pub use force::ForceLaw;
pub use glam::{Vec2, Vec3};
pub use input::{PointerEvent, PointerInput};
pub use projection::{Camera, Projector, Ray, Viewport};
pub use scene::{PointerOutcome, Scene};
pub use surface::{RecordingSurface, RenderSurface};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use repel_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::easing::Ease;
    pub use crate::error::{ConfigError, FieldError};
    pub use crate::field::{Motion, ParticleField, PointerReport};
    pub use crate::force::ForceLaw;
    pub use crate::input::{PointerEvent, PointerInput};
    pub use crate::projection::{Camera, Projector, Viewport};
    pub use crate::scene::{PointerOutcome, Scene};
    pub use crate::surface::{RecordingSurface, RenderSurface};
    pub use crate::time::{FrameClock, Tick};
    pub use crate::{Vec2, Vec3};
}
