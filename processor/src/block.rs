//! Block application.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use vgv_bridge::OraclePrice;
use vgv_crypto::SignatureVerifier;
use vgv_minting::{propose_mint, MintProposal};
use vgv_multisig::authorize;
use vgv_transactions::{validate_transaction, Transaction};
use vgv_types::{Timestamp, TxHash};

use crate::error::{BlockError, ProcessError};
use crate::fees::fee_for;
use crate::state::CoreState;

/// A consensus-ordered block of transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub height: u64,
    /// Consensus time for every deadline, window, and drift check in the
    /// block.
    pub timestamp: Timestamp,
    /// Oracle observation delivered with this block, if any.
    pub oracle: Option<OraclePrice>,
    pub transactions: Vec<Transaction>,
}

/// A transaction the block carried but the state refused.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rejection {
    pub hash: TxHash,
    pub reason: String,
}

/// The result of folding one block into the state.
#[derive(Clone, Debug)]
pub struct BlockOutcome {
    pub state: CoreState,
    pub committed: Vec<TxHash>,
    pub rejected: Vec<Rejection>,
}

/// Apply a block to `prev`, producing the next state.
///
/// Transactions apply strictly in block order. A rejected transaction leaves
/// no trace in the state (its sequence is not consumed); a rejection is
/// deterministic, so every validator records the same outcome. If the ledger
/// fails its conservation check after the fold, the whole block is refused.
pub fn process_block<V: SignatureVerifier>(
    prev: &CoreState,
    block: &Block,
    verifier: &V,
) -> Result<BlockOutcome, BlockError> {
    let mut state = prev.clone();
    let mut committed = Vec::with_capacity(block.transactions.len());
    let mut rejected = Vec::new();

    if let Some(observation) = block.oracle {
        state.bridge.record_price(observation);
    }

    for tx in &block.transactions {
        match apply_transaction(&mut state, tx, block, verifier) {
            Ok(()) => committed.push(*tx.hash()),
            Err(err) => {
                warn!(hash = %tx.hash(), source = %tx.source(), %err, "transaction rejected");
                rejected.push(Rejection {
                    hash: *tx.hash(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let swept = state.requests.sweep(block.timestamp);
    if swept > 0 {
        info!(height = block.height, swept, "expired governance requests removed");
    }

    if let Err(source) = state.ledger.check_conservation() {
        return Err(BlockError::Invariant {
            height: block.height,
            source,
        });
    }

    info!(
        height = block.height,
        committed = committed.len(),
        rejected = rejected.len(),
        "block applied"
    );

    Ok(BlockOutcome {
        state,
        committed,
        rejected,
    })
}

/// Apply one transaction, or fail without mutating anything.
///
/// Order: stateless validation, source active, multi-sig authorization,
/// sequence, fee and balance pre-flight, then the type-specific effect. The
/// sequence advances only on acceptance.
fn apply_transaction<V: SignatureVerifier>(
    state: &mut CoreState,
    tx: &Transaction,
    block: &Block,
    verifier: &V,
) -> Result<(), ProcessError> {
    let params = state.params.clone();
    validate_transaction(tx, block.timestamp, params.tx_time_tolerance_secs)?;

    let source = tx.source().clone();
    let account = state.ledger.ensure_active(&source)?;
    let officials = account.officials.clone();
    let threshold = account.signature_threshold;
    let expected = account.next_sequence;
    let balance = account.balance;

    authorize(
        &officials,
        threshold,
        &tx.signing_bytes(),
        tx.signatures(),
        verifier,
    )?;

    if tx.sequence() != expected {
        return Err(ProcessError::ReplayedOrOutOfOrder {
            expected,
            got: tx.sequence(),
        });
    }

    let fee = fee_for(&params, tx.urgency());

    match tx {
        Transaction::Transfer(transfer) => {
            state.ledger.ensure_active(&transfer.to)?;
            let total = transfer
                .amount
                .checked_add(fee)
                .ok_or(vgv_ledger::LedgerError::AmountOverflow)?;
            if balance < total {
                return Err(vgv_ledger::LedgerError::InsufficientBalance {
                    needed: total.raw(),
                    available: balance.raw(),
                }
                .into());
            }
            // pre-flight passed; neither step below can fail
            state.ledger.move_to_reserve(&source, fee)?;
            state
                .ledger
                .apply_transfer(&transfer.from, &transfer.to, transfer.amount)?;
        }
        Transaction::Mint(mint) => {
            if balance < fee {
                return Err(vgv_ledger::LedgerError::InsufficientBalance {
                    needed: fee.raw(),
                    available: balance.raw(),
                }
                .into());
            }
            propose_mint(
                &mut state.ledger,
                &MintProposal {
                    amount: mint.amount,
                    year: block.timestamp.year(),
                    dao_approval_pct: mint.dao_approval_pct,
                    gdp_growth_positive: mint.gdp_growth_positive,
                },
                &params,
            )?;
            state.ledger.move_to_reserve(&source, fee)?;
        }
        Transaction::BridgeConvert(convert) => {
            state.bridge.convert(
                &mut state.ledger,
                &source,
                convert.amount,
                fee,
                block.timestamp,
                &params,
            )?;
        }
    }

    state.ledger.advance_sequence(&source)?;
    Ok(())
}
