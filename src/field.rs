//! The particle field: a fixed grid of points pushed around by a pointer.
//!
//! A field owns three parallel buffers indexed by particle:
//!
//! - **rest positions**, fixed at construction
//! - **current positions**, the buffer a renderer uploads
//! - **motion state**, one [`Motion`] per particle
//!
//! Particles within the repulsion radius of the pointer are pushed away by the
//! field's [`ForceLaw`]. Particles outside it ease back to rest over a
//! configurable duration. A particle holds at most one return ease at a time:
//! a new repulsion replaces it, and further pointer events outside the radius
//! let it continue rather than restarting it.
//!
//! Eases are driven by [`ParticleField::tick`], called once per frame by
//! whoever owns the frame loop. The field never schedules work on its own.
//!
//! # Example
//!
//! ```
//! use repel_field::{ParticleField, Vec2};
//!
//! let mut field = ParticleField::new(3, 3, 1.0)?;
//! assert_eq!(field.len(), 9);
//!
//! // Push the top-right corner particle away from a pointer just below-left of it.
//! field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2)?;
//! assert!(field.take_dirty()?);
//!
//! // Once the pointer moves away, the particle eases home.
//! field.apply_pointer(Vec2::new(-5.0, -5.0), 0.5, 0.2)?;
//! field.tick(1.0)?;
//! assert_eq!(field.positions()?, field.rest_positions()?);
//! # Ok::<(), repel_field::FieldError>(())
//! ```

use glam::{Vec2, Vec3};
use tracing::{debug, trace};

use crate::easing::Ease;
use crate::error::FieldError;
use crate::force::ForceLaw;

/// Default return ease duration in seconds.
pub const DEFAULT_RETURN_DURATION: f32 = 0.3;

/// A particle already at its displacement cap is not rewritten by a push
/// shorter than this, so it stays bit-identical under repeated pushes.
const MIN_STEP: f32 = 1e-6;

/// Motion state of a single particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Motion {
    /// Resting, or displaced with nothing scheduled.
    #[default]
    Idle,
    /// Pushed by the pointer during the latest pointer event.
    Repelled,
    /// Easing from `from` back to rest.
    Returning {
        /// Seconds of ticked time since the ease began.
        elapsed: f32,
        /// Position when the ease began.
        from: Vec3,
    },
}

impl Motion {
    /// Whether a return ease is in flight.
    pub fn is_returning(&self) -> bool {
        matches!(self, Motion::Returning { .. })
    }
}

/// Summary of one [`ParticleField::apply_pointer`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerReport {
    /// Particles inside the repulsion radius.
    pub repelled: usize,
    /// Particles whose position actually changed.
    pub displaced: usize,
    /// Particles sitting on the pointer, left unmoved.
    pub degenerate: usize,
    /// Particles with a return ease in flight after the call.
    pub returning: usize,
}

/// A `columns x rows` grid of particles on the XY plane.
#[derive(Debug, Clone)]
pub struct ParticleField {
    columns: u32,
    rows: u32,
    spacing: f32,
    rest: Vec<Vec3>,
    positions: Vec<Vec3>,
    motions: Vec<Motion>,
    force: ForceLaw,
    ease: Ease,
    return_duration: f32,
    /// Field clock in seconds, advanced only by `tick`. Eases keep their
    /// own elapsed time, so this is informational.
    now: f64,
    dirty: bool,
    revision: u64,
    disposed: bool,
}

impl ParticleField {
    /// Lay out `columns * rows` particles centered on the origin.
    ///
    /// Particle `(i, j)` rests at `((i - columns/2) * spacing, (j - rows/2) * spacing, 0)`
    /// using integer halves, and lives at index `i * rows + j`.
    pub fn new(columns: u32, rows: u32, spacing: f32) -> Result<Self, FieldError> {
        let spacing = FieldError::check_positive("spacing", spacing)?;
        let count = columns
            .checked_mul(rows)
            .filter(|&n| n > 0)
            .ok_or(FieldError::InvalidDimensions { columns, rows })? as usize;

        let half_columns = (columns / 2) as i64;
        let half_rows = (rows / 2) as i64;
        let mut rest = Vec::with_capacity(count);
        for i in 0..columns as i64 {
            for j in 0..rows as i64 {
                rest.push(Vec3::new(
                    (i - half_columns) as f32 * spacing,
                    (j - half_rows) as f32 * spacing,
                    0.0,
                ));
            }
        }

        debug!(columns, rows, spacing, count, "particle field created");

        Ok(Self {
            columns,
            rows,
            spacing,
            positions: rest.clone(),
            rest,
            motions: vec![Motion::Idle; count],
            force: ForceLaw::default(),
            ease: Ease::default(),
            return_duration: DEFAULT_RETURN_DURATION,
            now: 0.0,
            dirty: true,
            revision: 0,
            disposed: false,
        })
    }

    /// Use a different repulsion law.
    pub fn with_force(mut self, force: ForceLaw) -> Result<Self, FieldError> {
        force.validate()?;
        self.force = force;
        Ok(self)
    }

    /// Set the curve and duration (seconds) of the return-to-rest ease.
    pub fn with_return(mut self, ease: Ease, duration: f32) -> Result<Self, FieldError> {
        self.return_duration = FieldError::check_positive("return_duration", duration)?;
        self.ease = ease;
        Ok(self)
    }

    // ========== Layout ==========

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.rest.len()
    }

    /// Always `false`; a field holds at least one particle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Buffer index of grid cell `(column, row)`.
    pub fn index(&self, column: u32, row: u32) -> Option<usize> {
        (column < self.columns && row < self.rows)
            .then(|| column as usize * self.rows as usize + row as usize)
    }

    /// Grid cell `(column, row)` of buffer index `idx`.
    pub fn grid_coords(&self, idx: usize) -> Option<(u32, u32)> {
        (idx < self.len()).then(|| {
            let rows = self.rows as usize;
            ((idx / rows) as u32, (idx % rows) as u32)
        })
    }

    /// Axis-aligned bounds of the rest layout as `(min, max)`.
    pub fn extent(&self) -> (Vec2, Vec2) {
        let first = self.rest[0].truncate();
        let last = self.rest[self.len() - 1].truncate();
        (first.min(last), first.max(last))
    }

    // ========== Settings ==========

    pub fn force(&self) -> ForceLaw {
        self.force
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn return_duration(&self) -> f32 {
        self.return_duration
    }

    /// Field clock in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    // ========== Pointer ==========

    /// Repel particles within `radius` of `pointer`, start returns for the rest.
    ///
    /// Distances are measured in the XY plane from each particle's current
    /// position. The total offset from rest is capped at
    /// [`ForceLaw::max_displacement`], so repeating a call with the same
    /// pointer never pushes a saturated particle further.
    pub fn apply_pointer(
        &mut self,
        pointer: Vec2,
        radius: f32,
        strength: f32,
    ) -> Result<PointerReport, FieldError> {
        self.ensure_live()?;
        let radius = FieldError::check_positive("radius", radius)?;
        let strength = FieldError::check_positive("strength", strength)?;

        let cap = self.force.max_displacement(radius, strength);
        let mut report = PointerReport::default();

        for i in 0..self.len() {
            let pos = self.positions[i];
            let rest = self.rest[i];

            match self.force.displacement(pos.truncate() - pointer, radius, strength) {
                Some(push) => {
                    report.repelled += 1;
                    self.motions[i] = Motion::Repelled;
                    if push == Vec2::ZERO {
                        report.degenerate += 1;
                        continue;
                    }
                    let offset = pos + push.extend(0.0) - rest;
                    let target = if offset.length() > cap {
                        let clamped = rest + offset.clamp_length_max(cap);
                        // Already at the cap: leave it bit-identical.
                        if clamped.distance(pos) <= MIN_STEP {
                            continue;
                        }
                        clamped
                    } else {
                        nudge_if_unchanged(pos, pos + push.extend(0.0), push)
                    };
                    self.positions[i] = target;
                    report.displaced += 1;
                }
                None => match self.motions[i] {
                    Motion::Returning { .. } => report.returning += 1,
                    _ if pos != rest => {
                        self.motions[i] = Motion::Returning {
                            elapsed: 0.0,
                            from: pos,
                        };
                        report.returning += 1;
                    }
                    _ => self.motions[i] = Motion::Idle,
                },
            }
        }

        if report.displaced > 0 {
            self.mark_written();
        }
        debug!(
            x = pointer.x,
            y = pointer.y,
            repelled = report.repelled,
            displaced = report.displaced,
            returning = report.returning,
            "pointer applied"
        );
        Ok(report)
    }

    /// Send every pushed particle home, as if the pointer left the field.
    ///
    /// Returns the number of eases started.
    pub fn release_pointer(&mut self) -> Result<usize, FieldError> {
        self.ensure_live()?;
        let mut started = 0;
        for i in 0..self.len() {
            if self.motions[i].is_returning() {
                continue;
            }
            let pos = self.positions[i];
            self.motions[i] = if pos != self.rest[i] {
                started += 1;
                Motion::Returning {
                    elapsed: 0.0,
                    from: pos,
                }
            } else {
                Motion::Idle
            };
        }
        debug!(started, "pointer released");
        Ok(started)
    }

    // ========== Time ==========

    /// Advance the field clock by `delta` seconds and step every return ease.
    ///
    /// A finished ease writes the rest position exactly and goes idle.
    /// Returns the number of particles moved.
    pub fn tick(&mut self, delta: f32) -> Result<usize, FieldError> {
        self.ensure_live()?;
        if !delta.is_finite() || delta < 0.0 {
            return Err(FieldError::InvalidParameter {
                name: "delta",
                value: delta,
            });
        }
        self.now += f64::from(delta);

        let mut moved = 0;
        for i in 0..self.len() {
            let Motion::Returning { elapsed, from } = self.motions[i] else {
                continue;
            };
            let elapsed = elapsed + delta;
            let t = elapsed / self.return_duration;
            let rest = self.rest[i];
            if t >= 1.0 {
                self.positions[i] = rest;
                self.motions[i] = Motion::Idle;
            } else {
                self.positions[i] = from.lerp(rest, self.ease.apply(t));
                self.motions[i] = Motion::Returning { elapsed, from };
            }
            moved += 1;
        }

        if moved > 0 {
            self.mark_written();
            trace!(moved, now = self.now, "return eases stepped");
        }
        Ok(moved)
    }

    /// Snap every particle to rest and drop all eases.
    pub fn reset(&mut self) -> Result<(), FieldError> {
        self.ensure_live()?;
        self.positions.copy_from_slice(&self.rest);
        self.motions.fill(Motion::Idle);
        self.mark_written();
        Ok(())
    }

    // ========== Read side ==========

    /// Current positions, indexed like the grid.
    pub fn positions(&self) -> Result<&[Vec3], FieldError> {
        self.ensure_live()?;
        Ok(&self.positions)
    }

    /// Rest positions, indexed like the grid.
    pub fn rest_positions(&self) -> Result<&[Vec3], FieldError> {
        self.ensure_live()?;
        Ok(&self.rest)
    }

    /// Current positions as raw bytes, ready for a vertex buffer upload.
    pub fn as_bytes(&self) -> Result<&[u8], FieldError> {
        self.ensure_live()?;
        Ok(bytemuck::cast_slice(self.positions.as_slice()))
    }

    // The accessors below stay readable after `dispose` so a host can
    // inspect a torn-down field. They never mutate.

    /// Motion state of particle `idx`.
    pub fn motion(&self, idx: usize) -> Option<Motion> {
        self.motions.get(idx).copied()
    }

    /// Number of return eases in flight.
    pub fn active_eases(&self) -> usize {
        self.motions.iter().filter(|m| m.is_returning()).count()
    }

    /// Whether positions changed since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the changed flag.
    ///
    /// A freshly created field starts dirty so the first frame uploads it.
    pub fn take_dirty(&mut self) -> Result<bool, FieldError> {
        self.ensure_live()?;
        Ok(std::mem::take(&mut self.dirty))
    }

    /// Number of write batches applied to the position buffer.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========== Teardown ==========

    /// Cancel all eases and refuse any further use.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let cancelled = self.active_eases();
        self.motions.fill(Motion::Idle);
        self.dirty = false;
        self.disposed = true;
        debug!(cancelled, "particle field disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_live(&self) -> Result<(), FieldError> {
        if self.disposed {
            Err(FieldError::Disposed)
        } else {
            Ok(())
        }
    }

    fn mark_written(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }
}

/// `pos + push` for a push too small to survive float rounding still has to
/// move the particle: step the dominant axis by one ulp along the push.
fn nudge_if_unchanged(pos: Vec3, target: Vec3, push: Vec2) -> Vec3 {
    if target != pos {
        return target;
    }
    let mut nudged = pos;
    if push.x.abs() >= push.y.abs() {
        nudged.x = ulp_step(pos.x, push.x > 0.0);
    } else {
        nudged.y = ulp_step(pos.y, push.y > 0.0);
    }
    nudged
}

/// The next representable `f32` after `v`, toward +inf or -inf.
fn ulp_step(v: f32, up: bool) -> f32 {
    if v == 0.0 {
        let tiny = f32::from_bits(1);
        return if up { tiny } else { -tiny };
    }
    let bits = v.to_bits();
    // Magnitude grows with the bit pattern on both signs.
    if (v > 0.0) == up {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_new_counts_and_rest() {
        let field = ParticleField::new(4, 3, 0.5).unwrap();
        assert_eq!(field.len(), 12);
        assert_eq!(field.positions().unwrap(), field.rest_positions().unwrap());
        assert!(field.is_dirty());
        assert_eq!(field.active_eases(), 0);
    }

    #[test]
    fn test_three_by_three_layout() {
        let field = ParticleField::new(3, 3, 1.0).unwrap();
        let positions = field.positions().unwrap();
        let idx = field.index(0, 0).unwrap();
        assert_eq!(positions[idx], Vec3::new(-1.0, -1.0, 0.0));
        let idx = field.index(1, 1).unwrap();
        assert_eq!(positions[idx], Vec3::ZERO);
        let idx = field.index(2, 1).unwrap();
        assert_eq!(positions[idx], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(field.extent(), (Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_index_layout_is_column_major() {
        let field = ParticleField::new(5, 7, 0.1).unwrap();
        assert_eq!(field.index(2, 3), Some(2 * 7 + 3));
        assert_eq!(field.grid_coords(17), Some((2, 3)));
        assert_eq!(field.index(5, 0), None);
        assert_eq!(field.index(0, 7), None);
        assert_eq!(field.grid_coords(35), None);
    }

    #[test]
    fn test_new_rejects_bad_parameters() {
        assert_eq!(
            ParticleField::new(0, 3, 1.0).unwrap_err(),
            FieldError::InvalidDimensions { columns: 0, rows: 3 }
        );
        assert!(ParticleField::new(3, 0, 1.0).is_err());
        assert!(ParticleField::new(3, 3, 0.0).is_err());
        assert!(ParticleField::new(3, 3, -0.5).is_err());
        assert!(ParticleField::new(u32::MAX, 2, 1.0).is_err());
        assert!(ParticleField::new(2, 2, 1.0)
            .unwrap()
            .with_return(Ease::Linear, 0.0)
            .is_err());
    }

    #[test]
    fn test_apply_pointer_rejects_bad_parameters() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        assert!(field.apply_pointer(Vec2::ZERO, 0.0, 1.0).is_err());
        assert!(field.apply_pointer(Vec2::ZERO, 1.0, -1.0).is_err());
        assert!(field.apply_pointer(Vec2::ZERO, f32::NAN, 1.0).is_err());
        assert_eq!(field.revision(), 0);
    }

    #[test]
    fn test_small_radius_at_center_changes_nothing() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        field.take_dirty().unwrap();

        let report = field.apply_pointer(Vec2::ZERO, 0.5, 1.0).unwrap();

        // Only the center particle is in range, and it sits on the pointer.
        assert_eq!(report.repelled, 1);
        assert_eq!(report.degenerate, 1);
        assert_eq!(report.displaced, 0);
        assert_eq!(field.positions().unwrap(), field.rest_positions().unwrap());
        assert!(!field.is_dirty());
        assert!(field.positions().unwrap().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_repelled_particle_moves_away() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        let idx = field.index(2, 2).unwrap();
        let before = field.positions().unwrap()[idx];

        let pointer = Vec2::new(0.8, 0.8);
        let report = field.apply_pointer(pointer, 0.5, 0.2).unwrap();

        let after = field.positions().unwrap()[idx];
        assert_eq!(report.displaced, 1);
        assert_ne!(after, before);
        assert!(after.truncate().distance(pointer) > before.truncate().distance(pointer));
        assert_eq!(after.z, 0.0);
        assert_eq!(field.motion(idx), Some(Motion::Repelled));
    }

    #[test]
    fn test_repeated_pointer_is_capped() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        let idx = field.index(2, 2).unwrap();
        let pointer = Vec2::new(0.95, 0.95);
        let (radius, strength) = (0.5, 0.1);
        let cap = field.force().max_displacement(radius, strength);

        for _ in 0..10 {
            field.apply_pointer(pointer, radius, strength).unwrap();
        }
        let saturated = field.positions().unwrap()[idx];
        let offset = saturated - field.rest_positions().unwrap()[idx];
        assert!((offset.length() - cap).abs() < 1e-5);

        let revision = field.revision();
        field.apply_pointer(pointer, radius, strength).unwrap();
        assert_eq!(field.positions().unwrap()[idx], saturated);
        assert_eq!(field.revision(), revision);
    }

    #[test]
    fn test_return_lands_exactly_on_rest() {
        let mut field = ParticleField::new(3, 3, 1.0)
            .unwrap()
            .with_return(Ease::QuartOut, 0.3)
            .unwrap();
        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        field.apply_pointer(Vec2::new(10.0, 10.0), 0.5, 0.2).unwrap();
        assert_eq!(field.active_eases(), 1);

        field.tick(0.1).unwrap();
        assert_eq!(field.active_eases(), 1);
        field.tick(0.1).unwrap();
        field.tick(0.15).unwrap();

        assert_eq!(field.active_eases(), 0);
        assert_eq!(field.positions().unwrap(), field.rest_positions().unwrap());
    }

    #[test]
    fn test_return_follows_curve() {
        let mut field = ParticleField::new(3, 3, 1.0)
            .unwrap()
            .with_return(Ease::Linear, 1.0)
            .unwrap();
        let idx = field.index(2, 2).unwrap();
        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        let from = field.positions().unwrap()[idx];
        let rest = field.rest_positions().unwrap()[idx];

        field.release_pointer().unwrap();
        field.tick(0.5).unwrap();

        assert!(approx_eq(field.positions().unwrap()[idx], from.lerp(rest, 0.5)));
    }

    #[test]
    fn test_pointer_outside_continues_ease() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        let idx = field.index(2, 2).unwrap();
        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        field.apply_pointer(Vec2::new(-9.0, 0.0), 0.5, 0.2).unwrap();
        let first = field.motion(idx).unwrap();

        field.tick(0.1).unwrap();
        field.apply_pointer(Vec2::new(-9.0, 3.0), 0.5, 0.2).unwrap();

        // Same ease, not restarted
        assert_eq!(field.motion(idx).unwrap(), first);
        assert_eq!(field.active_eases(), 1);
    }

    #[test]
    fn test_repulsion_cancels_return() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        let idx = field.index(2, 2).unwrap();
        let pointer = Vec2::new(0.8, 0.8);
        field.apply_pointer(pointer, 0.5, 0.2).unwrap();
        field.release_pointer().unwrap();
        field.tick(0.05).unwrap();
        assert!(field.motion(idx).unwrap().is_returning());

        field.apply_pointer(pointer, 0.5, 0.2).unwrap();

        assert_eq!(field.motion(idx), Some(Motion::Repelled));
        assert_eq!(field.active_eases(), 0);
        let held = field.positions().unwrap()[idx];
        field.tick(1.0).unwrap();
        assert_eq!(field.positions().unwrap()[idx], held);
    }

    #[test]
    fn test_inverse_distance_law() {
        let mut field = ParticleField::new(3, 3, 1.0)
            .unwrap()
            .with_force(ForceLaw::InverseDistance { k: 0.5 })
            .unwrap();
        let idx = field.index(2, 2).unwrap();
        let pointer = Vec2::new(0.8, 0.8);
        let before = field.positions().unwrap()[idx];
        field.apply_pointer(pointer, 0.5, 0.5).unwrap();
        let after = field.positions().unwrap()[idx];
        assert!(after.truncate().distance(pointer) > before.truncate().distance(pointer));
    }

    #[test]
    fn test_take_dirty_clears() {
        let mut field = ParticleField::new(2, 2, 1.0).unwrap();
        assert!(field.take_dirty().unwrap());
        assert!(!field.take_dirty().unwrap());
        field.reset().unwrap();
        assert!(field.take_dirty().unwrap());
    }

    #[test]
    fn test_as_bytes_matches_positions() {
        let field = ParticleField::new(2, 3, 1.0).unwrap();
        let bytes = field.as_bytes().unwrap();
        assert_eq!(bytes.len(), 6 * 3 * 4);
    }

    #[test]
    fn test_dispose_fails_fast_without_mutation() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        field.release_pointer().unwrap();
        assert_eq!(field.active_eases(), 1);
        let revision = field.revision();

        field.dispose();

        assert!(field.is_disposed());
        assert_eq!(field.active_eases(), 0);
        assert!(!field.is_dirty());
        assert_eq!(field.motion(field.index(2, 2).unwrap()), Some(Motion::Idle));
        assert_eq!(field.tick(1.0), Err(FieldError::Disposed));
        assert_eq!(
            field.apply_pointer(Vec2::ZERO, 1.0, 1.0),
            Err(FieldError::Disposed)
        );
        assert_eq!(field.positions(), Err(FieldError::Disposed));
        assert_eq!(field.revision(), revision);
    }

    #[test]
    fn test_return_finishes_after_long_uptime() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        for _ in 0..1200 {
            field.tick(1000.0).unwrap();
        }
        assert!(field.now() > 1e6);

        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        field.release_pointer().unwrap();
        for _ in 0..30 {
            field.tick(1.0 / 60.0).unwrap();
        }

        assert_eq!(field.active_eases(), 0);
        assert_eq!(field.positions().unwrap(), field.rest_positions().unwrap());
    }

    #[test]
    fn test_ease_gets_its_full_duration() {
        let mut field = ParticleField::new(3, 3, 1.0)
            .unwrap()
            .with_return(Ease::Linear, 0.5)
            .unwrap();
        field.tick(0.4).unwrap();
        field.apply_pointer(Vec2::new(0.8, 0.8), 0.5, 0.2).unwrap();
        field.release_pointer().unwrap();
        let idx = field.index(2, 2).unwrap();

        // Time ticked before the ease began does not count against it.
        field.tick(0.25).unwrap();
        assert!(field.motion(idx).unwrap().is_returning());
        field.tick(0.2).unwrap();
        assert!(field.motion(idx).unwrap().is_returning());
        field.tick(0.1).unwrap();
        assert_eq!(field.motion(idx), Some(Motion::Idle));
    }

    #[test]
    fn test_push_at_radius_edge_still_moves() {
        let mut field = ParticleField::new(3, 3, 1.0).unwrap();
        let idx = field.index(2, 1).unwrap();
        let before = field.positions().unwrap()[idx];

        let pointer = Vec2::new(0.500002, 0.0);
        let report = field.apply_pointer(pointer, 0.5, 0.1).unwrap();

        let after = field.positions().unwrap()[idx];
        assert_eq!(report.repelled, 1);
        assert_eq!(report.displaced, 1);
        assert_ne!(after, before);
        assert!(after.x > before.x);
    }

    #[test]
    fn test_ulp_step_moves_one_representable_value() {
        assert!(ulp_step(1.0, true) > 1.0);
        assert!(ulp_step(1.0, false) < 1.0);
        assert!(ulp_step(-1.0, true) > -1.0);
        assert!(ulp_step(-1.0, false) < -1.0);
        assert!(ulp_step(0.0, true) > 0.0);
        assert!(ulp_step(0.0, false) < 0.0);
    }
}
