//! Capability-shaped transport seam. The wire-level pub/sub implementation
//! (TLS, broker handshake) lives behind these traits; the client only needs
//! connect, subscribe, publish-with-retain, and receive.

mod broker_addr;
mod error;

pub use broker_addr::BrokerAddr;
pub use error::ConnectionError;

pub use inner::{MessageReceiver, MessageSender, RecvError, SendError, Socket};

mod inner {

    use lyricast_shared::ChannelId;

    use super::{BrokerAddr, ConnectionError};

    /// The send side failed; for publishes this means the payload was
    /// dropped, never queued.
    pub struct SendError;

    /// The connection dropped; no further messages will be delivered on
    /// this receiver.
    pub struct RecvError;

    /// A pub/sub endpoint the client can connect through. `connect` may be
    /// called again after a drop; the client holds the subscription state
    /// and re-issues it on every connect, so reconnection never loses it.
    pub trait Socket: Send + Sync {
        fn connect(
            &self,
        ) -> Result<(Box<dyn MessageSender>, Box<dyn MessageReceiver>), ConnectionError>;
    }

    pub trait MessageSender: Send + Sync {
        /// Starts delivery of every message published to `channel` by any
        /// party, including this client's own publishes. Idempotent.
        fn subscribe(&self, channel: &ChannelId) -> Result<(), SendError>;
        /// Publishes a payload to `channel`. With `retain`, the broker
        /// stores it as the channel's last known value and replays it to
        /// future subscribers. At-most-once delivery.
        fn publish(&self, channel: &ChannelId, payload: &[u8], retain: bool)
            -> Result<(), SendError>;
        /// Get the Broker's address
        fn broker_addr(&self) -> BrokerAddr;
    }

    pub trait MessageReceiver: MessageReceiverClone + Send + Sync {
        /// Polls the next delivered message, in the order the broker chose
        /// to deliver. `Err(RecvError)` means the connection dropped.
        fn receive(&mut self) -> Result<Option<(ChannelId, Vec<u8>)>, RecvError>;
        /// Get the Broker's address
        fn broker_addr(&self) -> BrokerAddr;
    }

    /// Used to clone Box<dyn MessageReceiver>
    pub trait MessageReceiverClone {
        /// Clone the boxed MessageReceiver
        fn clone_box(&self) -> Box<dyn MessageReceiver>;
    }

    impl<T: 'static + MessageReceiver + Clone> MessageReceiverClone for T {
        fn clone_box(&self) -> Box<dyn MessageReceiver> {
            Box::new(self.clone())
        }
    }

    impl Clone for Box<dyn MessageReceiver> {
        fn clone(&self) -> Box<dyn MessageReceiver> {
            MessageReceiverClone::clone_box(self.as_ref())
        }
    }
}
