use std::time::{Duration, Instant};

/// Frame clock feeding deltas to the debounce timers
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Instant at which `seconds` will have passed since the last tick
    pub fn deadline(&self, seconds: f32) -> Instant {
        self.last_tick + Duration::from_secs_f32(seconds.max(0.0))
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
