//! Content-addressed state snapshots.
//!
//! A snapshot binds a serialized `CoreState` to its Blake2b-256 hash and
//! block height, for fast-sync handoff and audit. The hash covers the state
//! only; `created_at` is metadata and two snapshots of the same state at the
//! same height hash identically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vgv_crypto::blake2b_256;
use vgv_types::Timestamp;

use crate::state::CoreState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] bincode::Error),

    #[error("snapshot hash does not match its state")]
    HashMismatch,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub hash: [u8; 32],
    pub block_height: u64,
    pub created_at: Timestamp,
    pub state: CoreState,
}

impl StateSnapshot {
    pub fn new(
        state: CoreState,
        block_height: u64,
        created_at: Timestamp,
    ) -> Result<Self, SnapshotError> {
        let hash = Self::compute_hash(&state)?;
        Ok(Self {
            hash,
            block_height,
            created_at,
            state,
        })
    }

    pub fn compute_hash(state: &CoreState) -> Result<[u8; 32], SnapshotError> {
        let bytes = bincode::serialize(state)?;
        Ok(blake2b_256(&bytes))
    }

    /// Recompute the hash and compare against the recorded one.
    pub fn verify(&self) -> Result<(), SnapshotError> {
        if Self::compute_hash(&self.state)? != self.hash {
            return Err(SnapshotError::HashMismatch);
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.verify()?;
        Ok(snapshot)
    }
}
