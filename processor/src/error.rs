use thiserror::Error;

use vgv_allocation::AllocationError;
use vgv_bridge::BridgeError;
use vgv_ledger::LedgerError;
use vgv_minting::MintError;
use vgv_multisig::MultisigError;
use vgv_transactions::TransactionError;
use vgv_types::InvalidParamValue;

/// Why a single transaction or hook call was rejected. The surrounding state
/// is unaffected.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Multisig(#[from] MultisigError),

    #[error(transparent)]
    Mint(#[from] MintError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Param(#[from] InvalidParamValue),

    #[error("sequence {got} replayed or out of order, expected {expected}")]
    ReplayedOrOutOfOrder { expected: u64, got: u64 },
}

/// A whole-block failure. The block is discarded and the previous state
/// remains current.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("invariant violated after block {height}: {source}")]
    Invariant { height: u64, source: LedgerError },
}
