//! Field configuration.
//!
//! A [`FieldConfig`] describes one repel-field scene: grid layout, pointer
//! response, return ease and camera. It serializes to JSON; every field has a
//! default, so a partial file only needs the values it changes.
//!
//! ```json
//! {
//!   "columns": 80,
//!   "rows": 60,
//!   "radius": 0.4,
//!   "force": { "law": "inverse_distance", "k": 0.2 },
//!   "ease": "CubicOut"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::easing::Ease;
use crate::error::{ConfigError, FieldError};
use crate::field::{ParticleField, DEFAULT_RETURN_DURATION};
use crate::force::ForceLaw;
use crate::projection::{Camera, Projector, Viewport};

/// Complete scene configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub columns: u32,
    pub rows: u32,
    /// World units between neighbouring particles.
    pub spacing: f32,
    /// Rendered point size in world units.
    pub particle_size: f32,
    /// Repulsion radius in world units.
    pub radius: f32,
    /// Repulsion strength (world units of push at full force).
    pub strength: f32,
    pub force: ForceLaw,
    pub ease: Ease,
    /// Return ease duration in seconds.
    pub return_duration: f32,
    pub camera: Camera,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            spacing: 0.15,
            particle_size: 0.01,
            radius: 0.3,
            strength: 0.1,
            force: ForceLaw::Linear,
            ease: Ease::QuartOut,
            return_duration: DEFAULT_RETURN_DURATION,
            camera: Camera::default(),
        }
    }
}

impl FieldConfig {
    /// Defaults with a grid large enough to cover the visible field plane.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let mut config = Self::default();
        config.fit_to_viewport(Viewport::new(width, height));
        config
    }

    /// Resize the grid so it covers the plane visible through `viewport`.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) {
        let half = Projector::new(self.camera, viewport).visible_half_extent();
        let spacing = self.spacing.max(f32::EPSILON);
        self.columns = ((half.x * 2.0 / spacing).ceil() as u32).saturating_add(1).max(1);
        self.rows = ((half.y * 2.0 / spacing).ceil() as u32).saturating_add(1).max(1);
    }

    /// Check every value the field would reject.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.columns == 0 || self.rows == 0 || self.columns.checked_mul(self.rows).is_none() {
            return Err(FieldError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        FieldError::check_positive("spacing", self.spacing)?;
        FieldError::check_positive("particle_size", self.particle_size)?;
        FieldError::check_positive("radius", self.radius)?;
        FieldError::check_positive("strength", self.strength)?;
        FieldError::check_positive("return_duration", self.return_duration)?;
        FieldError::check_positive("fov_y", self.camera.fov_y)?;
        self.force.validate()
    }

    /// Build the particle field this config describes.
    pub fn build_field(&self) -> Result<ParticleField, FieldError> {
        self.validate()?;
        ParticleField::new(self.columns, self.rows, self.spacing)?
            .with_force(self.force)?
            .with_return(self.ease, self.return_duration)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(path = %path.display(), columns = config.columns, rows = config.rows, "config loaded");
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
