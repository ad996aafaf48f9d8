//! Checkpoint and restore of an automaton's position.
//!
//! A checkpoint records where an automaton is, not what it is: the initial
//! and current states plus identifying metadata. The transition table is
//! never serialized; a checkpoint is restored into an automaton rebuilt from
//! the same table.

use crate::automaton::Automaton;
use crate::core::{State, Symbol};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton's cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the automaton
    pub initial_state: S,

    /// Current state of the automaton
    pub current_state: S,
}

impl<S: Serialize> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<S: DeserializeOwned> Checkpoint<S> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }
}

impl<S> Checkpoint<S> {
    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl<S: State, I: Symbol> Automaton<S, I> {
    /// Capture the current position (pure).
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial_state().clone(),
            current_state: self.current_state().clone(),
        }
    }

    /// Move to the position recorded in `checkpoint`.
    ///
    /// The checkpoint must share this automaton's initial state, and its
    /// current state must be the initial state or a state of the table.
    /// On error the current state is unchanged.
    pub fn restore(&mut self, checkpoint: &Checkpoint<S>) -> Result<(), CheckpointError> {
        checkpoint.check_version()?;

        if &checkpoint.initial_state != self.initial_state() {
            return Err(CheckpointError::ValidationFailed(format!(
                "initial state {:?} does not match {:?}",
                checkpoint.initial_state,
                self.initial_state()
            )));
        }

        let current = &checkpoint.current_state;
        if current != self.initial_state() && !self.states().contains(current) {
            return Err(CheckpointError::ValidationFailed(format!(
                "state {current:?} is not part of the transition table"
            )));
        }

        debug!(id = %checkpoint.id, state = ?current, "restoring checkpoint");
        self.move_to(current.clone());
        Ok(())
    }
}
