//! Variable-rate frame clock.
//!
//! Every rendered frame gets one [`FrameTime`]: the clamped time since the
//! previous frame and the session timestamp the camera choreographer and
//! pulse animation read.

use std::time::Instant;
use tracing::warn;

/// Longest frame delta passed on to the simulation; longer stalls are clamped.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Timing of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped to [`MAX_FRAME_TIME`].
    pub dt: f32,
    /// Seconds since the clock started, sum of all clamped deltas.
    pub now: f64,
    /// Zero-based index of this frame.
    pub frame: u64,
}

/// Produces one [`FrameTime`] per frame, from the wall clock or from
/// explicit deltas.
pub struct FrameClock {
    previous_time: Instant,
    now: f64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            now: 0.0,
            frame_count: 0,
        }
    }

    /// Measure the wall-clock time since the last call and advance by it.
    pub fn tick(&mut self) -> FrameTime {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time)
    }

    /// Advance by an explicit frame time. Negative or non-finite deltas
    /// count as zero.
    pub fn advance(&mut self, frame_time: f64) -> FrameTime {
        let mut frame_time = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.now += frame_time;
        let time = FrameTime {
            dt: frame_time as f32,
            now: self.now,
            frame: self.frame_count,
        };
        self.frame_count += 1;
        time
    }

    /// Session time of the most recent frame.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_time() {
        let mut clock = FrameClock::new();
        for _ in 0..8 {
            clock.advance(0.125);
        }
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.frame_count(), 8);
    }

    #[test]
    fn test_frame_indices_start_at_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(0.0).frame, 0);
        assert_eq!(clock.advance(0.0).frame, 1);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut clock = FrameClock::new();
        let time = clock.advance(3.0);
        assert_eq!(time.dt, MAX_FRAME_TIME as f32);
        assert_eq!(time.now, MAX_FRAME_TIME);
    }

    #[test]
    fn test_invalid_frame_time_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(-1.0).dt, 0.0);
        assert_eq!(clock.advance(f64::NAN).dt, 0.0);
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_wall_clock_tick_is_bounded() {
        let mut clock = FrameClock::default();
        let time = clock.tick();
        assert!(time.dt >= 0.0);
        assert!(f64::from(time.dt) <= MAX_FRAME_TIME);
        assert_eq!(time.frame, 0);
    }

    #[test]
    fn test_deterministic_sequence() {
        let frame_times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        let mut a = FrameClock::new();
        let mut b = FrameClock::new();
        for &ft in &frame_times {
            assert_eq!(a.advance(ft), b.advance(ft));
        }
        assert_eq!(a.now(), b.now());
    }
}
