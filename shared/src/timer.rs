use std::time::{Duration, Instant};

/// Coarse interval timer: rings once the configured duration has elapsed
/// since the last reset.
#[derive(Clone, Debug)]
pub struct Timer {
    duration: Duration,
    last: Instant,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last: Instant::now(),
        }
    }

    pub fn ringing(&self) -> bool {
        self.last.elapsed() >= self.duration
    }

    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}
