use std::time::Duration;

use lyricast_client::{BackoffConfig, ClientConfig, SessionClient};

use crate::helpers::test_channel;
use crate::local_broker::LocalBroker;

/// A config whose reconnect attempts are always ready, so tests never have
/// to sleep through a backoff window.
pub fn instant_reconnect_config() -> ClientConfig {
    ClientConfig {
        backoff: BackoffConfig {
            initial_interval: Duration::ZERO,
            max_interval: Duration::ZERO,
        },
    }
}

fn connected_client(broker: &LocalBroker, controller: bool) -> SessionClient {
    let mut client = SessionClient::new(instant_reconnect_config(), test_channel(), controller);
    client.connect(Box::new(broker.socket()));
    client.update();
    assert!(
        client.connection_status().is_connected(),
        "client failed to connect to the local broker"
    );
    client
}

pub fn connected_controller(broker: &LocalBroker) -> SessionClient {
    connected_client(broker, true)
}

pub fn connected_viewer(broker: &LocalBroker) -> SessionClient {
    connected_client(broker, false)
}
