//! Dispatch audit trail

use shelf_messages::LifecycleCommand;

/// Outcome of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran to completion
    Completed,
    /// The handler returned an error
    Failed(String),
}

/// One dispatched command and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub command: LifecycleCommand,
    pub outcome: DispatchOutcome,
}

impl DispatchRecord {
    /// Creates a record for a completed dispatch
    pub fn completed(command: LifecycleCommand) -> Self {
        Self {
            command,
            outcome: DispatchOutcome::Completed,
        }
    }

    /// Creates a record for a failed dispatch
    pub fn failed(command: LifecycleCommand, error: impl Into<String>) -> Self {
        Self {
            command,
            outcome: DispatchOutcome::Failed(error.into()),
        }
    }
}
