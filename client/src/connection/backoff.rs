use std::time::Duration;

use lyricast_shared::Timer;

use crate::client_config::BackoffConfig;

/// Capped exponential delay between reconnect attempts.
///
/// The first attempt after a drop is immediate; each failure doubles the
/// wait up to the configured cap; a successful connect resets the
/// schedule. Retrying stops only on explicit disconnect, never on its own,
/// because session lifetimes span minutes to hours.
pub struct Backoff {
    config: BackoffConfig,
    current: Duration,
    timer: Timer,
}

impl Backoff {
    pub fn new(config: BackoffConfig) -> Self {
        let current = config.initial_interval;
        Self {
            config,
            current,
            timer: Timer::new(Duration::ZERO),
        }
    }

    /// True when the next attempt may be made.
    pub fn ready(&self) -> bool {
        self.timer.ringing()
    }

    pub fn failure(&mut self) {
        self.timer.set_duration(self.current);
        self.timer.reset();
        self.current = (self.current * 2).min(self.config.max_interval);
    }

    pub fn success(&mut self) {
        self.current = self.config.initial_interval;
        self.timer.set_duration(Duration::ZERO);
    }
}
