use std::fmt;

/// Observable status of the transport connection. Rendered as a small
/// indicator by embedders; never part of the replicated session state, and
/// never allowed to block delivery or publication.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting => f.write_str("Connecting"),
            ConnectionStatus::Connected => f.write_str("Connected"),
            ConnectionStatus::Disconnected => f.write_str("Disconnected"),
        }
    }
}
