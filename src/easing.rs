//! Easing curves for the return-to-rest motion.
//!
//! Every curve maps normalized progress `t` in `[0, 1]` onto eased progress
//! with `apply(0.0) == 0.0` and `apply(1.0) == 1.0`, so a finished ease
//! always lands exactly on its target.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing curve applied to a particle returning to its rest position.
///
/// # Example
///
/// ```
/// use repel_field::Ease;
///
/// let ease = Ease::QuartOut;
/// assert_eq!(ease.apply(0.0), 0.0);
/// assert_eq!(ease.apply(1.0), 1.0);
/// assert!(ease.apply(0.5) > 0.5); // out-curves front-load the motion
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// `t²`, slow start.
    QuadIn,
    /// Decelerating quadratic.
    QuadOut,
    /// Decelerating cubic.
    CubicOut,
    /// Decelerating quartic. Snappy start with a long settle.
    #[default]
    QuartOut,
    /// Decelerating quintic.
    QuintOut,
    /// Half cosine, slow at both ends.
    SineInOut,
    /// Hermite smoothstep `3t² - 2t³`.
    Smoothstep,
}

impl Ease {
    /// Map progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t).powi(2),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::QuartOut => 1.0 - (1.0 - t).powi(4),
            Ease::QuintOut => 1.0 - (1.0 - t).powi(5),
            Ease::SineInOut => (1.0 - (PI * t).cos()) * 0.5,
            Ease::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// All curves, in declaration order.
    pub fn variants() -> &'static [Ease] {
        &[
            Ease::Linear,
            Ease::QuadIn,
            Ease::QuadOut,
            Ease::CubicOut,
            Ease::QuartOut,
            Ease::QuintOut,
            Ease::SineInOut,
            Ease::Smoothstep,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for ease in Ease::variants() {
            assert_eq!(ease.apply(0.0), 0.0, "{:?} at 0", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for ease in Ease::variants() {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
            assert_eq!(ease.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in Ease::variants() {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = ease.apply(step as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{:?} decreased at step {}", ease, step);
                prev = v;
            }
        }
    }

    #[test]
    fn test_quart_out_midpoint() {
        // 1 - 0.5^4
        assert!((Ease::QuartOut.apply(0.5) - 0.9375).abs() < 1e-6);
        assert!((Ease::QuadIn.apply(0.5) - 0.25).abs() < 1e-6);
    }
}
