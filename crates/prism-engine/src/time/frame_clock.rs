use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Wall-clock frame timer.
///
/// Reports the raw elapsed time between ticks. Pauses the runtime knows
/// about (suspend/resume) are removed with `reset()`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Rebases the clock to now, e.g. after the window was suspended.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// An instant earlier than the previous tick counts as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt: Duration = now.saturating_duration_since(self.last);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
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

    fn clock_at(start: Instant) -> FrameClock {
        let mut clock = FrameClock::new();
        clock.last = start;
        clock
    }

    #[test]
    fn reports_elapsed_seconds_between_ticks() {
        let start = Instant::now();
        let mut clock = clock_at(start);

        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_frames_are_reported_in_full() {
        let start = Instant::now();
        let mut clock = clock_at(start);

        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(ft.dt, 3.0);
    }

    #[test]
    fn same_instant_reports_zero() {
        let start = Instant::now();
        let mut clock = clock_at(start);

        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn earlier_instant_reports_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = clock_at(start);

        let ft = clock.tick_at(start - Duration::from_millis(500));
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn reset_rebases_to_now() {
        let mut clock = clock_at(Instant::now() - Duration::from_secs(10));
        clock.reset();

        let ft = clock.tick();
        assert!(ft.dt < 1.0);
    }

    #[test]
    fn frame_index_counts_up_from_zero() {
        let start = Instant::now();
        let mut clock = clock_at(start);

        let a = clock.tick_at(start + Duration::from_millis(10));
        let b = clock.tick_at(start + Duration::from_millis(20));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }
}
