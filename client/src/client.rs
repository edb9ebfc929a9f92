use std::mem;

use log::{info, warn};

use lyricast_shared::{apply, apply_payload, encode, ChannelId, SessionState, SongId, WireMessage};

use crate::client_config::ClientConfig;
use crate::connection::{Backoff, ConnectionStatus};
use crate::transport::{MessageReceiver, MessageSender, Socket};

/// Notifications accumulated by [`SessionClient::update`], drained by the
/// embedder once per frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClientEvent {
    Connected,
    Disconnected,
    /// The local session replica changed; re-project and re-render.
    StateChanged,
}

/// One participant of a live session.
///
/// Owns the local replica of the session state and the transport
/// connection; this is the single explicit session object, constructed once
/// at startup and injected wherever the state is read. Poll-driven: the
/// embedder calls [`update`](Self::update) regularly, and everything
/// (reconnection, reconciliation, event collection) happens there, one
/// delivered message at a time, so no locking is ever needed.
///
/// Whether a client is the controller is decided outside; the client only
/// consumes the capability as a flag. Command methods on a non-controller
/// client are ignored with a warning.
pub struct SessionClient {
    channel: ChannelId,
    controller: bool,
    socket: Option<Box<dyn Socket>>,
    sender: Option<Box<dyn MessageSender>>,
    receiver: Option<Box<dyn MessageReceiver>>,
    status: ConnectionStatus,
    backoff: Backoff,
    state: SessionState,
    events: Vec<ClientEvent>,
}

impl SessionClient {
    pub fn new(config: ClientConfig, channel: ChannelId, controller: bool) -> Self {
        Self {
            channel,
            controller,
            socket: None,
            sender: None,
            receiver: None,
            status: ConnectionStatus::Disconnected,
            backoff: Backoff::new(config.backoff),
            state: SessionState::empty(),
            events: Vec::new(),
        }
    }

    /// Hands the client its transport endpoint and starts connecting. The
    /// socket is kept for the client's lifetime so dropped connections can
    /// be re-established without the embedder's help.
    pub fn connect(&mut self, socket: Box<dyn Socket>) {
        self.socket = Some(socket);
        self.status = ConnectionStatus::Connecting;
    }

    /// Releases the connection and abandons any pending reconnect attempt.
    /// No further state changes fire after this.
    pub fn disconnect(&mut self) {
        if self.status.is_connected() {
            self.events.push(ClientEvent::Disconnected);
        }
        self.socket = None;
        self.sender = None;
        self.receiver = None;
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.status
    }

    /// The local replica of the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    pub fn is_controller(&self) -> bool {
        self.controller
    }

    /// Drives connection management and reconciliation. Call once per frame
    /// or tick.
    pub fn update(&mut self) {
        self.maintain_connection();
        self.receive_all_messages();
    }

    /// Drains the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<ClientEvent> {
        mem::take(&mut self.events)
    }

    // Command emitter (controller role only).

    /// Activates a song; any previous line highlight is cleared.
    pub fn select_song(&mut self, id: SongId) {
        self.command(WireMessage::song(id));
    }

    /// Highlights a line of the active song. Backward moves are deliberate
    /// (correcting a skipped line) and pass through untouched.
    pub fn select_line(&mut self, index: i32) {
        let Some(id) = self.state.active_song_id.clone() else {
            warn!("select_line with no active song, ignoring");
            return;
        };
        self.command(WireMessage::line(id, index));
    }

    /// Clears the display entirely.
    pub fn blackout(&mut self) {
        self.command(WireMessage::blackout());
    }

    fn command(&mut self, message: WireMessage) {
        if !self.controller {
            warn!("command from non-controller client, ignoring");
            return;
        }

        // Optimistic local apply: the controller sees its choice with zero
        // latency. The echoed retained publish folds to the same state.
        if apply(&mut self.state, &message) {
            self.events.push(ClientEvent::StateChanged);
        }

        let payload = match encode(&message) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("dropping command: {err}");
                return;
            }
        };
        // Best-effort: a publish that cannot go out is dropped, not queued,
        // and the optimistic state stands until reconnection lets the next
        // command overwrite the retained snapshot.
        match &self.sender {
            Some(sender) => {
                if sender.publish(&self.channel, &payload, true).is_err() {
                    warn!("publish dropped, connection lost");
                }
            }
            None => warn!("publish dropped, not connected"),
        }
    }

    fn maintain_connection(&mut self) {
        if self.sender.is_some() {
            return;
        }
        let Some(socket) = self.socket.as_ref() else {
            return;
        };
        if !self.backoff.ready() {
            return;
        }
        self.status = ConnectionStatus::Connecting;

        match socket.connect() {
            Ok((sender, receiver)) => {
                if sender.subscribe(&self.channel).is_err() {
                    warn!("subscribe to {} failed, will retry", self.channel);
                    self.backoff.failure();
                    return;
                }
                info!("connected to broker {}", sender.broker_addr());
                self.sender = Some(sender);
                self.receiver = Some(receiver);
                self.status = ConnectionStatus::Connected;
                self.backoff.success();
                self.events.push(ClientEvent::Connected);
            }
            Err(err) => {
                warn!("connect failed: {err}");
                self.backoff.failure();
            }
        }
    }

    fn receive_all_messages(&mut self) {
        let Some(receiver) = self.receiver.as_mut() else {
            return;
        };
        let mut inbound = Vec::new();
        let mut dropped = false;
        loop {
            match receiver.receive() {
                Ok(Some(delivery)) => inbound.push(delivery),
                Ok(None) => break,
                Err(_) => {
                    dropped = true;
                    break;
                }
            }
        }
        for (channel, payload) in inbound {
            if channel != self.channel {
                continue;
            }
            if apply_payload(&mut self.state, &payload) {
                self.events.push(ClientEvent::StateChanged);
            }
        }
        if dropped {
            self.drop_connection();
        }
    }

    fn drop_connection(&mut self) {
        info!("connection to broker lost, reconnecting");
        self.sender = None;
        self.receiver = None;
        self.status = ConnectionStatus::Disconnected;
        self.events.push(ClientEvent::Disconnected);
    }
}
