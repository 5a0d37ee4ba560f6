//! Frame clock driving return eases.
//!
//! The particle field has no timers of its own. Once per frame the host asks a
//! [`FrameClock`] for a [`Tick`] and hands its `delta` to
//! [`ParticleField::tick`](crate::ParticleField::tick). In real-time mode the
//! delta comes from `std::time::Instant`; in fixed-step mode every frame
//! advances by the same amount, which keeps tests and headless runs
//! deterministic.
//!
//! # Example
//!
//! ```
//! use repel_field::time::FrameClock;
//!
//! let mut clock = FrameClock::fixed(1.0 / 60.0);
//! let tick = clock.advance();
//! assert_eq!(tick.frame, 1);
//! assert!((tick.delta - 1.0 / 60.0).abs() < 1e-6);
//! ```

use std::time::Instant;

/// Timing for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Seconds since the previous frame, after scaling. Zero while paused.
    pub delta: f32,
    /// Scaled seconds since the clock started, excluding pauses.
    pub elapsed: f32,
    /// Frames advanced so far.
    pub frame: u64,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    RealTime { last: Instant },
    Fixed { step: f32 },
}

/// Per-frame time source.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    elapsed: f32,
    frame: u64,
    paused: bool,
    time_scale: f32,
    /// Upper bound for a single real-time delta, so a stalled frame does not
    /// skip eases to completion.
    max_delta: f32,
}

impl FrameClock {
    /// A clock measuring wall time between frames.
    pub fn real_time() -> Self {
        Self::with_source(Source::RealTime {
            last: Instant::now(),
        })
    }

    /// A clock advancing `step` seconds per frame.
    pub fn fixed(step: f32) -> Self {
        Self::with_source(Source::Fixed {
            step: step.max(0.0),
        })
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            elapsed: 0.0,
            frame: 0,
            paused: false,
            time_scale: 1.0,
            max_delta: 0.25,
        }
    }

    /// Step to the next frame.
    pub fn advance(&mut self) -> Tick {
        let raw = match &mut self.source {
            Source::RealTime { last } => {
                let now = Instant::now();
                let raw = now.duration_since(*last).as_secs_f32();
                *last = now;
                raw.min(self.max_delta)
            }
            Source::Fixed { step } => *step,
        };

        let delta = if self.paused {
            0.0
        } else {
            raw * self.time_scale
        };
        self.elapsed += delta;
        self.frame += 1;
        self.current(delta)
    }

    fn current(&self, delta: f32) -> Tick {
        Tick {
            delta,
            elapsed: self.elapsed,
            frame: self.frame,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Freeze time. Frames still advance, with zero delta.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the time scale multiplier. Negative values clamp to zero.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Set the cap on a single real-time delta, in seconds.
    pub fn set_max_delta(&mut self, max_delta: f32) {
        self.max_delta = max_delta.max(0.0);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::real_time()
    }
}
