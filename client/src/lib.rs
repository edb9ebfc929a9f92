//! # Lyricast Client
//! One participant of a live lyric session. The client subscribes to the
//! session channel, folds every delivered state transition into its local
//! replica, and, when acting as the controller, publishes retained
//! transitions of its own.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod transport;

mod client;
mod client_config;
mod connection;

pub use client::{ClientEvent, SessionClient};
pub use client_config::{BackoffConfig, ClientConfig};
pub use connection::{Backoff, ConnectionStatus};
pub use transport::ConnectionError;

pub use lyricast_shared as shared;
