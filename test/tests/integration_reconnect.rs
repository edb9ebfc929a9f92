/// Connection loss and recovery: status transitions, silent publish drops
/// with the optimistic state standing, and resubscription picking the
/// retained payload back up.
use lyricast_client::{ClientEvent, ConnectionStatus, SessionClient};
use lyricast_shared::{SongId, NO_LINE};
use lyricast_test::{
    connected_controller, connected_viewer, instant_reconnect_config, test_channel, LocalBroker,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn dropped_link_reconnects_and_resubscribes() {
    init_logs();
    let broker = LocalBroker::new();
    let mut controller = connected_controller(&broker);
    let mut viewer = connected_viewer(&broker);

    controller.select_song(SongId::from("1"));
    viewer.update();

    broker.drop_all_links();
    viewer.update();
    assert_eq!(viewer.connection_status(), ConnectionStatus::Disconnected);
    assert!(viewer.take_events().contains(&ClientEvent::Disconnected));
    // The local replica survives the outage.
    assert_eq!(viewer.state().active_song_id, Some(SongId::from("1")));

    viewer.update();
    assert!(viewer.connection_status().is_connected());
    assert_eq!(viewer.state().active_song_id, Some(SongId::from("1")));
}

#[test]
fn offline_broker_keeps_the_client_connecting() {
    init_logs();
    let broker = LocalBroker::new();
    broker.set_offline(true);

    let mut client = SessionClient::new(instant_reconnect_config(), test_channel(), false);
    client.connect(Box::new(broker.socket()));
    client.update();
    client.update();
    assert_eq!(client.connection_status(), ConnectionStatus::Connecting);

    broker.set_offline(false);
    client.update();
    assert!(client.connection_status().is_connected());
}

#[test]
fn publish_while_disconnected_is_dropped_not_queued() {
    init_logs();
    let broker = LocalBroker::new();
    let mut controller = connected_controller(&broker);
    let mut viewer = connected_viewer(&broker);

    controller.select_song(SongId::from("1"));
    viewer.update();
    let retained_before = broker.retained(&test_channel());

    broker.set_offline(true);
    broker.drop_all_links();
    controller.update();
    assert_eq!(
        controller.connection_status(),
        ConnectionStatus::Disconnected
    );
    controller.update();
    assert_eq!(
        controller.connection_status(),
        ConnectionStatus::Connecting
    );

    // Optimistic update stands locally; the broadcast goes nowhere.
    log::info!("issuing command during the outage");
    controller.select_line(2);
    assert_eq!(controller.state().active_line_index, 2);
    assert_eq!(broker.retained(&test_channel()), retained_before);

    // Reconnection closes the window only once the next command overwrites
    // the retained snapshot; the dropped command itself is gone.
    broker.set_offline(false);
    controller.update();
    viewer.update();
    viewer.update();
    assert!(viewer.connection_status().is_connected());
    assert_eq!(viewer.state().active_line_index, NO_LINE);

    controller.select_line(2);
    viewer.update();
    assert_eq!(viewer.state().active_line_index, 2);
}

#[test]
fn explicit_disconnect_stops_retrying() {
    init_logs();
    let broker = LocalBroker::new();
    let mut viewer = connected_viewer(&broker);

    viewer.disconnect();
    assert_eq!(viewer.connection_status(), ConnectionStatus::Disconnected);

    viewer.update();
    viewer.update();
    assert_eq!(viewer.connection_status(), ConnectionStatus::Disconnected);
}
