//! # Shelf Messages
//!
//! This crate defines the wire contract between a host and its shelves.
//!
//! ## Philosophy
//!
//! - **Messages, not shared memory**: host and shelf coordinate only through
//!   explicit message passing
//! - **Typed, not stringly-typed**: commands and events are closed enums with
//!   schema versions
//! - **One-way, not request/reply**: commands flow host→shelf, events flow
//!   shelf→host, and neither direction ever waits for an answer
//!
//! ## Architecture
//!
//! Two disjoint message families share one envelope format:
//! - `LifecycleCommand`: what the host asks a shelf to do
//! - `LifecycleEvent`: what a shelf reports back
//!
//! Both are zero-payload tags; the envelope carries routing, identity, and
//! a schema version for compatibility checking.

pub mod envelope;
pub mod ids;
pub mod lifecycle;

pub use envelope::{MessageEnvelope, MessagePayload, SchemaVersion};
pub use ids::{host_endpoint_id, shelf_endpoint_id, EndpointId, MessageId};
pub use lifecycle::{
    DecodeError, LifecycleCommand, LifecycleEvent, LIFECYCLE_COMMAND_ACTION,
    LIFECYCLE_EVENT_ACTION, LIFECYCLE_SCHEMA_VERSION,
};
