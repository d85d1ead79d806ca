//! The complete replicated core state.

use serde::{Deserialize, Serialize};

use vgv_bridge::BridgeState;
use vgv_ledger::{build_genesis_ledger, GenesisConfig, LedgerError, LedgerState};
use vgv_multisig::RequestBook;
use vgv_types::{ProtocolParams, Timestamp};

/// Everything a validator replicates: parameters, ledger, open governance
/// requests, and bridge state.
///
/// `CoreState` is a value. [`process_block`](crate::process_block) clones it,
/// folds a block into the clone, and returns the clone; the previous state
/// stays intact until the caller commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreState {
    pub params: ProtocolParams,
    pub ledger: LedgerState,
    pub requests: RequestBook,
    pub bridge: BridgeState,
}

impl CoreState {
    /// Block-zero state from a genesis configuration.
    pub fn from_genesis(
        config: &GenesisConfig,
        params: ProtocolParams,
        now: Timestamp,
    ) -> Result<Self, LedgerError> {
        let ledger = build_genesis_ledger(config, &params, now)?;
        Ok(Self {
            params,
            ledger,
            requests: RequestBook::new(),
            bridge: BridgeState::new(),
        })
    }
}
