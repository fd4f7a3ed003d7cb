//! Frame timing.
//!
//! The host's frame scheduler hands the loop a millisecond timestamp each
//! tick; [`FrameClock`] turns consecutive timestamps into elapsed seconds.
//! The first tick is seeded from its own timestamp and reports zero elapsed
//! time, so a loop that starts late never sees a spurious multi-second delta.
//!
//! # Example
//!
//! ```
//! use scintilla::clock::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! assert_eq!(clock.tick(0.0), 0.0);
//! assert!((clock.tick(16.0) - 0.016).abs() < 1e-6);
//! ```

use std::time::Instant;

/// Derives per-tick elapsed seconds from millisecond frame timestamps.
#[derive(Debug)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    /// Origin for [`FrameClock::now_ms`] timestamps.
    started: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp_ms: None,
            started: Instant::now(),
            frame_count: 0,
        }
    }

    /// Advance the clock to `timestamp_ms` and return elapsed seconds since
    /// the previous tick. The first tick returns `0.0`.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last_timestamp_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.frame_count += 1;
        delta
    }

    /// Milliseconds since this clock was created. Used as the timestamp
    /// source when the host scheduler does not supply one.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Total ticks observed.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Forget the previous timestamp so the next tick reports zero elapsed.
    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
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
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_synthetic_sixty_hz_deltas() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let d1 = clock.tick(16.0);
        let d2 = clock.tick(32.0);
        assert!((d1 - 0.016).abs() < 1e-6);
        assert!((d2 - 0.016).abs() < 1e-6);
        assert_eq!(clock.frame(), 3);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
    }

    #[test]
    fn test_reset_forgets_last_timestamp() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        assert_eq!(clock.tick(5_000.0), 0.0);
    }
}
