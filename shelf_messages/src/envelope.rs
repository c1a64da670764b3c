//! Message envelope and schema versioning

use crate::ids::{EndpointId, MessageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema version for message payload
///
/// This enables backward-compatible evolution of message formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version (breaking changes)
    pub major: u32,
    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl SchemaVersion {
    /// Creates a new schema version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Checks if this version is compatible with another
    ///
    /// Compatibility rules:
    /// - Same major version = compatible
    /// - Different major version = incompatible
    pub fn is_compatible_with(&self, other: &SchemaVersion) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Type-erased message payload
///
/// The transport only sees bytes; typed decoding happens at the receiving
/// edge against the envelope's schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Serialized data (JSON for now)
    data: Vec<u8>,
}

impl MessagePayload {
    /// Creates a new payload from serializable data
    pub fn new<T: Serialize>(data: &T) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_vec(data)?;
        Ok(Self { data: json })
    }

    /// Deserializes the payload into a specific type
    pub fn deserialize<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.data)
    }

    /// Returns the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Message envelope containing routing and metadata
///
/// This is the outer wrapper for every message that crosses the
/// host/shelf boundary, in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    /// Unique identifier for this message
    pub id: MessageId,
    /// Destination endpoint
    pub destination: EndpointId,
    /// Action identifier for dispatch
    pub action: String,
    /// Schema version of the payload
    pub schema_version: SchemaVersion,
    /// Serialized payload (type-erased)
    pub payload: MessagePayload,
}

impl MessageEnvelope {
    /// Creates a new message envelope
    pub fn new(
        destination: EndpointId,
        action: String,
        schema_version: SchemaVersion,
        payload: MessagePayload,
    ) -> Self {
        Self {
            id: MessageId::new(),
            destination,
            action,
            schema_version,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version_compatibility() {
        let v1_0 = SchemaVersion::new(1, 0);
        let v1_3 = SchemaVersion::new(1, 3);
        let v2_0 = SchemaVersion::new(2, 0);

        assert!(v1_0.is_compatible_with(&v1_3));
        assert!(v1_3.is_compatible_with(&v1_0));
        assert!(!v1_0.is_compatible_with(&v2_0));
    }

    #[test]
    fn test_schema_version_display() {
        assert_eq!(SchemaVersion::new(1, 2).to_string(), "v1.2");
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = MessagePayload::new(&"hello").unwrap();
        let decoded: String = payload.deserialize().unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn test_envelope_assigns_fresh_ids() {
        let destination = EndpointId::new();
        let payload = MessagePayload::new(&()).unwrap();
        let a = MessageEnvelope::new(
            destination,
            "test.action".to_string(),
            SchemaVersion::new(1, 0),
            payload.clone(),
        );
        let b = MessageEnvelope::new(
            destination,
            "test.action".to_string(),
            SchemaVersion::new(1, 0),
            payload,
        );
        assert_ne!(a.id, b.id);
        assert_eq!(a.destination, b.destination);
    }
}
