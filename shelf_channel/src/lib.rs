//! # Shelf Channel
//!
//! Directional channel abstractions between a host and a shelf.
//!
//! ## Philosophy
//!
//! - **One channel per direction**: outbound carries events, inbound carries
//!   commands; an endpoint is never both
//! - **Fire-and-forget outbound**: sends never wait for acknowledgment
//! - **Single consumer inbound**: commands are drained one at a time, in
//!   arrival order
//!
//! ## Non-Goals
//!
//! Reliable delivery, cross-process serialization, and address resolution
//! belong to the transport behind these traits. The in-process channel here
//! is the reference implementation used by tests and demos.

use shelf_messages::{EndpointId, MessageEnvelope};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use thiserror::Error;

/// Channel error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The other side of the channel is gone
    #[error("Channel closed")]
    Closed,

    /// Envelope was addressed to a different endpoint
    #[error("Wrong destination: channel is bound to {expected}, envelope addressed to {actual}")]
    WrongDestination {
        expected: EndpointId,
        actual: EndpointId,
    },

    /// Transport-level send failure
    #[error("Failed to send message: {0}")]
    SendFailed(String),
}

/// Outbound endpoint: publishes envelopes toward a fixed destination.
///
/// Sends are fire-and-forget; implementations must not block the caller
/// waiting for the consumer.
pub trait OutboundChannel {
    fn send(&self, envelope: MessageEnvelope) -> Result<(), ChannelError>;
}

/// Inbound endpoint: the single consumer of a fixed source address.
pub trait InboundChannel {
    /// Blocks until the next envelope arrives or the channel closes.
    fn receive(&mut self) -> Result<MessageEnvelope, ChannelError>;

    /// Returns the next envelope if one is already queued.
    fn try_receive(&mut self) -> Result<Option<MessageEnvelope>, ChannelError>;
}

/// Sending half of an in-process channel
#[derive(Debug, Clone)]
pub struct InProcessSender {
    endpoint: EndpointId,
    tx: Sender<MessageEnvelope>,
}

impl InProcessSender {
    /// Returns the endpoint this sender delivers to.
    pub fn endpoint(&self) -> EndpointId {
        self.endpoint
    }
}

impl OutboundChannel for InProcessSender {
    fn send(&self, envelope: MessageEnvelope) -> Result<(), ChannelError> {
        if envelope.destination != self.endpoint {
            return Err(ChannelError::WrongDestination {
                expected: self.endpoint,
                actual: envelope.destination,
            });
        }
        self.tx.send(envelope).map_err(|_| ChannelError::Closed)
    }
}

/// Receiving half of an in-process channel
#[derive(Debug)]
pub struct InProcessReceiver {
    endpoint: EndpointId,
    rx: Receiver<MessageEnvelope>,
}

impl InProcessReceiver {
    /// Returns the endpoint this receiver listens on.
    pub fn endpoint(&self) -> EndpointId {
        self.endpoint
    }
}

impl InboundChannel for InProcessReceiver {
    fn receive(&mut self) -> Result<MessageEnvelope, ChannelError> {
        self.rx.recv().map_err(|_| ChannelError::Closed)
    }

    fn try_receive(&mut self) -> Result<Option<MessageEnvelope>, ChannelError> {
        match self.rx.try_recv() {
            Ok(envelope) => Ok(Some(envelope)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ChannelError::Closed),
        }
    }
}

/// Creates an in-process channel bound to the given endpoint.
///
/// FIFO, unbounded, one logical consumer. Dropping the receiver closes the
/// channel; later sends fail with `ChannelError::Closed`.
pub fn in_process_channel(endpoint: EndpointId) -> (InProcessSender, InProcessReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        InProcessSender { endpoint, tx },
        InProcessReceiver { endpoint, rx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_messages::{LifecycleCommand, LifecycleEvent};

    #[test]
    fn test_channel_preserves_order() {
        let endpoint = EndpointId::new();
        let (tx, mut rx) = in_process_channel(endpoint);

        tx.send(LifecycleCommand::ReadyService.into_envelope(endpoint).unwrap())
            .unwrap();
        tx.send(LifecycleCommand::StartService.into_envelope(endpoint).unwrap())
            .unwrap();
        tx.send(LifecycleCommand::StopService.into_envelope(endpoint).unwrap())
            .unwrap();

        let first = LifecycleCommand::from_envelope(&rx.receive().unwrap()).unwrap();
        let second = LifecycleCommand::from_envelope(&rx.receive().unwrap()).unwrap();
        let third = LifecycleCommand::from_envelope(&rx.receive().unwrap()).unwrap();
        assert_eq!(first, LifecycleCommand::ReadyService);
        assert_eq!(second, LifecycleCommand::StartService);
        assert_eq!(third, LifecycleCommand::StopService);
    }

    #[test]
    fn test_sender_rejects_wrong_destination() {
        let endpoint = EndpointId::new();
        let other = EndpointId::new();
        let (tx, _rx) = in_process_channel(endpoint);

        let envelope = LifecycleEvent::ShelfReady.into_envelope(other).unwrap();
        let err = tx.send(envelope).unwrap_err();
        assert_eq!(
            err,
            ChannelError::WrongDestination {
                expected: endpoint,
                actual: other,
            }
        );
    }

    #[test]
    fn test_send_after_receiver_dropped_fails() {
        let endpoint = EndpointId::new();
        let (tx, rx) = in_process_channel(endpoint);
        drop(rx);

        let envelope = LifecycleEvent::ShelfReady.into_envelope(endpoint).unwrap();
        assert_eq!(tx.send(envelope).unwrap_err(), ChannelError::Closed);
    }

    #[test]
    fn test_try_receive_empty_and_closed() {
        let endpoint = EndpointId::new();
        let (tx, mut rx) = in_process_channel(endpoint);

        assert!(rx.try_receive().unwrap().is_none());

        tx.send(LifecycleCommand::ReadyService.into_envelope(endpoint).unwrap())
            .unwrap();
        assert!(rx.try_receive().unwrap().is_some());

        drop(tx);
        assert_eq!(rx.try_receive().unwrap_err(), ChannelError::Closed);
    }
}
