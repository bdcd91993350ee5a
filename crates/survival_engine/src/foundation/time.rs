//! Time management utilities

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic, resettable source of elapsed time.
///
/// The game loop keeps two clocks: one restarted every frame to measure the
/// frame delta, and one left running for the total elapsed time readout.
pub trait Clock {
    /// Seconds elapsed since creation or the last restart
    fn elapsed_seconds(&self) -> f32;

    /// Reset the clock to zero and return the seconds elapsed before the reset
    fn restart(&mut self) -> f32;
}

/// Wall-clock stopwatch, running from creation
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start_new()
    }
}

impl Stopwatch {
    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Get the elapsed time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Clock for Stopwatch {
    fn elapsed_seconds(&self) -> f32 {
        self.elapsed_secs()
    }

    fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        self.started_at = now;
        elapsed
    }
}

/// Manually advanced clock for deterministic simulation and tests.
///
/// Clones share the same time source but keep their own restart point, so a
/// frame clock and a total-time clock can be driven by a single `advance`.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
    started_at: f64,
}

impl ManualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the shared time source forward
    pub fn advance(&self, seconds: f32) {
        self.now.set(self.now.get() + f64::from(seconds));
    }
}

impl Clock for ManualClock {
    #[allow(clippy::cast_possible_truncation)]
    fn elapsed_seconds(&self) -> f32 {
        (self.now.get() - self.started_at) as f32
    }

    fn restart(&mut self) -> f32 {
        let elapsed = self.elapsed_seconds();
        self.started_at = self.now.get();
        elapsed
    }
}

/// Caps the frame rate by sleeping away the remainder of each frame
#[derive(Debug)]
pub struct FrameLimiter {
    frame_time: Option<Duration>,
    frame_start: Instant,
}

impl FrameLimiter {
    /// Create a limiter for `max_fps` frames per second; zero disables limiting
    pub fn new(max_fps: u32) -> Self {
        Self {
            frame_time: (max_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(max_fps))),
            frame_start: Instant::now(),
        }
    }

    /// Mark the beginning of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the current frame budget
    pub fn remaining(&self) -> Duration {
        self.frame_time
            .map_or(Duration::ZERO, |budget| budget.saturating_sub(self.frame_start.elapsed()))
    }

    /// Sleep until the frame budget is used up
    pub fn wait(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stopwatch_restart_returns_elapsed_and_starts_over() {
        let mut stopwatch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(5));

        let elapsed = stopwatch.restart();

        assert!(elapsed >= 0.005);
        assert!(stopwatch.elapsed_seconds() < elapsed);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let mut frame = ManualClock::new();
        let total = frame.clone();

        frame.advance(0.5);
        assert_relative_eq!(frame.restart(), 0.5);

        total.advance(0.25);
        assert_relative_eq!(frame.elapsed_seconds(), 0.25);
        assert_relative_eq!(total.elapsed_seconds(), 0.75);
    }

    #[test]
    fn test_unlimited_frame_limiter_never_waits() {
        let limiter = FrameLimiter::new(0);
        assert_eq!(limiter.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_frame_limiter_budget() {
        let mut limiter = FrameLimiter::new(60);
        limiter.begin_frame();
        assert!(limiter.remaining() <= Duration::from_secs_f64(1.0 / 60.0));
    }
}
