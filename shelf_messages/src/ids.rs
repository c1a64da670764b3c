//! Unique identifiers for messages and channel endpoints

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Msg({})", self.0)
    }
}

/// Logical address of a channel endpoint
///
/// Endpoints are directionally fixed: a shelf sends to the host endpoint
/// and listens on its own. Both are resolved once at process start and
/// stay constant for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointId(Uuid);

impl EndpointId {
    /// Creates a new random endpoint ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an endpoint ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates an endpoint ID from a stable u128 constant
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endpoint({})", self.0)
    }
}

const HOST_ENDPOINT_ID: u128 = 0x7f3a_9c41_6e85_4b02_8d17_3fa2_c450_1e6du128;
const SHELF_ENDPOINT_ID: u128 = 0xa1d4_02b7_5c39_4f88_b6e0_9d21_74cf_3a5eu128;

/// Well-known endpoint the host listens on (outbound target for events).
pub fn host_endpoint_id() -> EndpointId {
    EndpointId::from_u128(HOST_ENDPOINT_ID)
}

/// Well-known endpoint the current shelf listens on (inbound source for commands).
pub fn shelf_endpoint_id() -> EndpointId {
    EndpointId::from_u128(SHELF_ENDPOINT_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_creation() {
        let id1 = MessageId::new();
        let id2 = MessageId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_message_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = MessageId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_endpoint_id_creation() {
        let id1 = EndpointId::new();
        let id2 = EndpointId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_well_known_endpoints_stable() {
        assert_eq!(host_endpoint_id(), EndpointId::from_u128(HOST_ENDPOINT_ID));
        assert_eq!(shelf_endpoint_id(), EndpointId::from_u128(SHELF_ENDPOINT_ID));
    }

    #[test]
    fn test_well_known_endpoints_distinct() {
        assert_ne!(host_endpoint_id(), shelf_endpoint_id());
    }
}
