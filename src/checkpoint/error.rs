//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring an automaton position
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint encoding failed: {0}")]
    SerializationFailed(String),

    #[error("Checkpoint decoding failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken from an automaton with a different table or
    /// initial state
    #[error("Checkpoint does not fit this automaton: {0}")]
    ValidationFailed(String),
}
