//! # Lifecycle Contract Tests
//!
//! This crate provides "golden" tests for the host↔shelf wire contract to
//! ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the wire contract is written as code
//! - **Testability first**: contract tests fail when the protocol changes
//! - **Mechanism not policy**: define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each area of the contract has a module verifying:
//! - Action identifiers and schema versions
//! - Zero-payload tag encodings of every command and event kind
//! - Well-known endpoint identifiers

pub mod endpoints;
pub mod lifecycle;

/// Common test helpers for contract validation
pub mod test_helpers {
    use shelf_messages::{MessageEnvelope, SchemaVersion};

    /// Verifies an envelope matches the expected action and schema version
    pub fn verify_envelope_contract(
        envelope: &MessageEnvelope,
        expected_action: &str,
        expected_version: SchemaVersion,
    ) {
        assert_eq!(envelope.action, expected_action, "Action identifier drifted");
        assert_eq!(
            envelope.schema_version, expected_version,
            "Schema version drifted"
        );
    }
}
