//! Error types for repel-field.
//!
//! Parameter problems are rejected at the boundary instead of being clamped,
//! and any use of a field after teardown fails fast with [`FieldError::Disposed`].
//! A pointer that misses the field plane is not an error; projection returns
//! `None` for that case.

use thiserror::Error;

/// Errors raised by [`ParticleField`](crate::ParticleField) and [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// A scalar parameter was zero, negative, or not finite.
    #[error("invalid {name}: {value} (must be finite and greater than zero)")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Grid dimensions were zero or the particle count overflows.
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: u32, rows: u32 },
    /// The field (or the scene owning it) has already been torn down.
    #[error("particle field used after dispose")]
    Disposed,
}

impl FieldError {
    /// Check that `value` is finite and strictly positive.
    pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<f32, FieldError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(FieldError::InvalidParameter { name, value })
        }
    }
}

/// Errors that can occur while loading or saving a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// The config parsed but holds values the field would reject.
    #[error("config rejected: {0}")]
    Invalid(#[from] FieldError),
}
