use thiserror::Error;

/// Errors that can occur while establishing the pub/sub channel. Never
/// fatal: the client retries with backoff and surfaces the condition only
/// through its connection status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The broker endpoint could not be reached
    #[error("broker unreachable: {endpoint}")]
    Unreachable { endpoint: String },

    /// The broker refused or failed the connection handshake
    #[error("broker handshake failed: {reason}")]
    Handshake { reason: String },
}
