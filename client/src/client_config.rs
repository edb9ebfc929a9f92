use std::time::Duration;

/// Runtime options for a [`SessionClient`](crate::SessionClient).
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Reconnect backoff schedule.
    pub backoff: BackoffConfig,
}

/// Schedule for reconnect attempts after a drop or a failed connect.
#[derive(Clone, Debug)]
pub struct BackoffConfig {
    pub initial_interval: Duration,
    pub max_interval: Duration,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(250),
            max_interval: Duration::from_secs(10),
        }
    }
}
