mod backoff;
mod status;

pub use backoff::Backoff;
pub use status::ConnectionStatus;
