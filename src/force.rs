//! Repulsion force laws.
//!
//! Both laws push particles *away* from the pointer. The inverse-distance law
//! is commonly written as a pull toward the pointer; its sign is flipped here
//! so the two laws are interchangeable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Below this distance a particle sits on the pointer and has no defined
/// push direction. Such particles are left where they are.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// How strongly a particle inside the repulsion radius is pushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum ForceLaw {
    /// Force falls linearly from 1 at the pointer to 0 at the radius.
    ///
    /// `p += normalize(p - pointer) * (radius - d) / radius * strength`
    #[default]
    Linear,

    /// Force falls off as `k / (d + k)`, scaled by the offset itself.
    ///
    /// `p += (p - pointer) * k / (d + k) * strength`
    InverseDistance {
        /// Softening constant. Larger values flatten the falloff.
        k: f32,
    },
}

impl ForceLaw {
    /// Displacement for a particle at `offset = particle - pointer`.
    ///
    /// Returns `None` when the particle is outside `radius` and `Some(Vec2::ZERO)`
    /// for the degenerate on-pointer case.
    pub fn displacement(&self, offset: Vec2, radius: f32, strength: f32) -> Option<Vec2> {
        let d = offset.length();
        if !(d < radius) {
            return None;
        }
        if d < DEGENERATE_DISTANCE {
            return Some(Vec2::ZERO);
        }
        let push = match *self {
            ForceLaw::Linear => {
                let force = (radius - d) / radius;
                offset / d * force * strength
            }
            ForceLaw::InverseDistance { k } => {
                let force = k / (d + k);
                offset * force * strength
            }
        };
        Some(push)
    }

    /// Largest offset from rest a particle may accumulate under this law.
    ///
    /// Repeated pointer events with the same position saturate here, which
    /// keeps `apply_pointer` idempotent for particles already at the cap.
    pub fn max_displacement(&self, radius: f32, strength: f32) -> f32 {
        match self {
            ForceLaw::Linear => strength,
            ForceLaw::InverseDistance { .. } => radius * strength,
        }
    }

    /// Check law-specific tuning constants.
    pub(crate) fn validate(&self) -> Result<(), crate::FieldError> {
        if let ForceLaw::InverseDistance { k } = self {
            crate::FieldError::check_positive("k", *k)?;
        }
        Ok(())
    }
}
