/// Trailing-edge debounce driven by frame deltas
///
/// Every `trigger` restarts the wait; `tick` fires once after `delay` seconds
/// have passed without a new trigger.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
    delay: f32,
    elapsed: f32,
    pending: bool,
}

impl Debounce {
    /// Create debounce with delay in seconds
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
            pending: false,
        }
    }

    pub fn from_millis(millis: f32) -> Self {
        Self::new(millis / 1000.0)
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Arm the debounce, restarting the wait if already pending
    pub fn trigger(&mut self) {
        self.elapsed = 0.0;
        self.pending = true;
    }

    /// Advance by delta seconds, returns true when the debounced call should run
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.pending {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed >= self.delay {
            self.pending = false;
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Seconds left before firing, if pending
    pub fn remaining(&self) -> Option<f32> {
        self.pending.then(|| (self.delay - self.elapsed).max(0.0))
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.elapsed = 0.0;
    }
}
