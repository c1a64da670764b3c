//! Lifecycle command and event message families
//!
//! Commands flow host→shelf, events flow shelf→host. Both families are
//! closed enums of zero-payload tags with a stable, versioned wire schema.

use crate::envelope::{MessageEnvelope, MessagePayload, SchemaVersion};
use crate::ids::EndpointId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle message schema version (v1.0).
pub const LIFECYCLE_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0);

/// Envelope action for lifecycle commands.
pub const LIFECYCLE_COMMAND_ACTION: &str = "shelf.lifecycle.command";

/// Envelope action for lifecycle events.
pub const LIFECYCLE_EVENT_ACTION: &str = "shelf.lifecycle.event";

/// Command sent by the host to drive a shelf's hosted service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleCommand {
    /// Bootstrap the hosted service
    ReadyService,
    /// Start the hosted service
    StartService,
    /// Stop the hosted service
    StopService,
    /// Pause the hosted service
    PauseService,
    /// Continue a paused hosted service
    ContinueService,
}

impl LifecycleCommand {
    /// Wraps this command in a message envelope.
    pub fn into_envelope(self, destination: EndpointId) -> Result<MessageEnvelope, DecodeError> {
        let payload = MessagePayload::new(&self).map_err(|err| DecodeError::Payload(err.to_string()))?;
        Ok(MessageEnvelope::new(
            destination,
            LIFECYCLE_COMMAND_ACTION.to_string(),
            LIFECYCLE_SCHEMA_VERSION,
            payload,
        ))
    }

    /// Decodes a command from an envelope, checking action and schema version.
    pub fn from_envelope(envelope: &MessageEnvelope) -> Result<Self, DecodeError> {
        decode_checked(envelope, LIFECYCLE_COMMAND_ACTION)
    }
}

impl fmt::Display for LifecycleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleCommand::ReadyService => "ReadyService",
            LifecycleCommand::StartService => "StartService",
            LifecycleCommand::StopService => "StopService",
            LifecycleCommand::PauseService => "PauseService",
            LifecycleCommand::ContinueService => "ContinueService",
        };
        write!(f, "{}", name)
    }
}

/// Event emitted by a shelf to mirror its state transitions
///
/// Events are emitted, never requested, and order matters: `ShelfStarting`
/// always precedes the matching `ShelfStarted`, likewise Stopping/Stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// The shelf itself is wired up and listening
    ShelfReady,
    /// The hosted service has been bootstrapped
    ServiceReady,
    /// A start transition is being attempted
    ShelfStarting,
    /// The start transition succeeded
    ShelfStarted,
    /// A stop transition is being attempted
    ShelfStopping,
    /// The stop transition succeeded
    ShelfStopped,
}

impl LifecycleEvent {
    /// Wraps this event in a message envelope.
    pub fn into_envelope(self, destination: EndpointId) -> Result<MessageEnvelope, DecodeError> {
        let payload = MessagePayload::new(&self).map_err(|err| DecodeError::Payload(err.to_string()))?;
        Ok(MessageEnvelope::new(
            destination,
            LIFECYCLE_EVENT_ACTION.to_string(),
            LIFECYCLE_SCHEMA_VERSION,
            payload,
        ))
    }

    /// Decodes an event from an envelope, checking action and schema version.
    pub fn from_envelope(envelope: &MessageEnvelope) -> Result<Self, DecodeError> {
        decode_checked(envelope, LIFECYCLE_EVENT_ACTION)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleEvent::ShelfReady => "ShelfReady",
            LifecycleEvent::ServiceReady => "ServiceReady",
            LifecycleEvent::ShelfStarting => "ShelfStarting",
            LifecycleEvent::ShelfStarted => "ShelfStarted",
            LifecycleEvent::ShelfStopping => "ShelfStopping",
            LifecycleEvent::ShelfStopped => "ShelfStopped",
        };
        write!(f, "{}", name)
    }
}

/// Errors when decoding a lifecycle message from an envelope
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Envelope carries a different action than expected
    #[error("Unexpected action: expected '{expected}', got '{actual}'")]
    UnexpectedAction { expected: String, actual: String },

    /// Envelope schema version is incompatible
    #[error("Schema mismatch: expected {expected}, got {actual}")]
    SchemaMismatch {
        expected: SchemaVersion,
        actual: SchemaVersion,
    },

    /// Payload could not be (de)serialized
    #[error("Payload error: {0}")]
    Payload(String),
}

fn decode_checked<T: for<'de> Deserialize<'de>>(
    envelope: &MessageEnvelope,
    expected_action: &str,
) -> Result<T, DecodeError> {
    if envelope.action != expected_action {
        return Err(DecodeError::UnexpectedAction {
            expected: expected_action.to_string(),
            actual: envelope.action.clone(),
        });
    }
    if !envelope
        .schema_version
        .is_compatible_with(&LIFECYCLE_SCHEMA_VERSION)
    {
        return Err(DecodeError::SchemaMismatch {
            expected: LIFECYCLE_SCHEMA_VERSION,
            actual: envelope.schema_version,
        });
    }
    envelope
        .payload
        .deserialize::<T>()
        .map_err(|err| DecodeError::Payload(err.to_string()))
}
