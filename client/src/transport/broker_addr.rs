use std::fmt;
use std::net::SocketAddr;

/// The address of the broker on the other end of the connection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BrokerAddr {
    /// The transport is still resolving the broker's address.
    Finding,
    /// The broker's address has been found.
    Found(SocketAddr),
}

impl fmt::Display for BrokerAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BrokerAddr::Finding => f.write_str("resolving.."),
            BrokerAddr::Found(addr) => write!(f, "{addr}"),
        }
    }
}
