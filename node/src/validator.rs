//! The validator core lifecycle.

use tracing::info;

use vgv_crypto::SignatureVerifier;
use vgv_ledger::GenesisConfig;
use vgv_processor::{process_block, Block, BlockOutcome, CoreState, StateSnapshot};
use vgv_types::{ProtocolParams, Timestamp};

use crate::NodeError;

/// The replicated core plus the commit cursor.
///
/// Consensus hands finalized blocks to [`ValidatorCore::apply_block`] in
/// height order; the core refuses gaps and keeps the last committed state as
/// the single source of truth for queries and snapshots.
pub struct ValidatorCore {
    state: CoreState,
    height: u64,
}

impl ValidatorCore {
    pub fn from_genesis(
        config: &GenesisConfig,
        params: ProtocolParams,
        now: Timestamp,
    ) -> Result<Self, NodeError> {
        let state = CoreState::from_genesis(config, params, now)?;
        info!(
            governments = state.ledger.account_count(),
            supply = state.ledger.supply().total_supply().raw() as u64,
            "core initialized from genesis"
        );
        Ok(Self { state, height: 0 })
    }

    /// Resume from a verified snapshot.
    pub fn from_snapshot(snapshot: StateSnapshot) -> Result<Self, NodeError> {
        snapshot.verify()?;
        Ok(Self {
            height: snapshot.block_height,
            state: snapshot.state,
        })
    }

    /// Apply the next finalized block and commit the resulting state.
    pub fn apply_block<V: SignatureVerifier>(
        &mut self,
        block: &Block,
        verifier: &V,
    ) -> Result<BlockOutcome, NodeError> {
        if block.height != self.height + 1 {
            return Err(NodeError::NonSequentialBlock {
                current: self.height,
                got: block.height,
            });
        }
        let outcome = process_block(&self.state, block, verifier)?;
        self.state = outcome.state.clone();
        self.height = block.height;
        Ok(outcome)
    }

    pub fn state(&self) -> &CoreState {
        &self.state
    }

    /// Governance and epoch hooks mutate the committed state directly.
    pub fn state_mut(&mut self) -> &mut CoreState {
        &mut self.state
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn snapshot(&self, created_at: Timestamp) -> Result<StateSnapshot, NodeError> {
        Ok(StateSnapshot::new(self.state.clone(), self.height, created_at)?)
    }
}
