#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// Frame clock measuring the time between consecutive ticks.
///
/// Time is passed in rather than read so the clock follows whatever time
/// source drives the frames (display callback timestamps, a test double).
#[derive(Debug, Clone)]
pub struct Clock {
    start_time: Instant,
    last_tick: Instant,
    /// Time between the last two ticks
    pub delta: Duration,
    /// Total elapsed time since the last `start`
    pub elapsed: Duration,
    /// Ticks since the last `start`
    pub frame_count: u64,
}

impl Clock {
    /// Creates a clock started at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Restarts the clock so the next delta is measured from `now`.
    pub fn start(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Advances the clock to `now` and returns the delta in seconds.
    ///
    /// A `now` earlier than the previous tick yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.last_tick);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_tick = now;
        self.frame_count += 1;
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_since_previous_tick() {
        let base = Instant::now();
        let mut clock = Clock::new(base);
        let dt = clock.tick(base + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
        let dt = clock.tick(base + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-4);
        assert_eq!(clock.frame_count, 2);
    }

    #[test]
    fn start_resets_reference_point() {
        let base = Instant::now();
        let mut clock = Clock::new(base);
        clock.start(base + Duration::from_secs(10));
        let dt = clock.tick(base + Duration::from_secs(10) + Duration::from_millis(20));
        assert!((dt - 0.020).abs() < 1e-4);
    }

    #[test]
    fn backwards_time_is_zero_delta() {
        let base = Instant::now() + Duration::from_secs(1);
        let mut clock = Clock::new(base);
        assert_eq!(clock.tick(base - Duration::from_millis(5)), 0.0);
    }
}
