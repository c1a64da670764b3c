//! # Shelf
//!
//! This crate implements the isolated service host shim: a shelf hosts
//! exactly one dynamically-resolved service and exposes its lifecycle to a
//! parent host exclusively through asynchronous messages.
//!
//! ## Philosophy
//!
//! - **Messages, not calls**: the host never invokes the shelf directly;
//!   all coordination flows through one channel per direction
//! - **Explicit lifecycle**: every start/stop attempt is bracketed by
//!   events so the host can tell "attempting" from "succeeded"
//! - **One service per shelf**: the controller is created exactly once and
//!   owned exclusively by the shelf
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A supervisor (no retries, no restart policies)
//! - A message broker (no durability, no fan-out)
//! - A multi-service host (one shelf, one service, for life)

pub mod audit;
pub mod shelf;

pub use audit::{DispatchOutcome, DispatchRecord};
pub use shelf::{Shelf, ShelfAddressing, ShelfError};
