//! Stateless transaction validation.

use vgv_types::Timestamp;

use crate::error::TransactionError;
use crate::transfer::Purpose;
use crate::Transaction;

/// Validate a transaction's basic structure.
///
/// Stateless checks only: timestamp drift against block time, non-zero
/// amounts, hash integrity, and the presence of signatures. Stateful checks
/// (sequence, balances, official sets) are the processor's.
pub fn validate_transaction(
    tx: &Transaction,
    now: Timestamp,
    time_tolerance_secs: u64,
) -> Result<(), TransactionError> {
    let tx_secs = tx.timestamp().as_secs();
    let now_secs = now.as_secs();
    let drift = tx_secs.abs_diff(now_secs);
    if drift > time_tolerance_secs {
        return Err(TransactionError::InvalidTimestamp {
            reason: format!(
                "timestamp {} is {}s away from block time {}, tolerance is {}s",
                tx.timestamp(),
                drift,
                now,
                time_tolerance_secs
            ),
        });
    }

    if tx.signatures().is_empty() {
        return Err(TransactionError::NoSignatures);
    }

    if *tx.hash() != tx.compute_hash() {
        return Err(TransactionError::HashMismatch);
    }

    match tx {
        Transaction::Transfer(transfer) => {
            if transfer.amount.is_zero() {
                return Err(TransactionError::ZeroAmount);
            }
            if transfer.from == transfer.to {
                return Err(TransactionError::SelfTransfer);
            }
            let reference = match &transfer.purpose {
                Purpose::TradeSettlement { agreement_id } => agreement_id,
                Purpose::DevelopmentAid { program_id } => program_id,
                Purpose::EmergencyAid { disaster_reference } => disaster_reference,
            };
            if reference.is_empty() {
                return Err(TransactionError::EmptyPurposeReference);
            }
        }
        Transaction::Mint(mint) => {
            if mint.amount.is_zero() {
                return Err(TransactionError::ZeroAmount);
            }
            if mint.dao_approval_pct > 100 {
                return Err(TransactionError::ApprovalOutOfRange(mint.dao_approval_pct));
            }
        }
        Transaction::BridgeConvert(convert) => {
            if convert.amount.is_zero() {
                return Err(TransactionError::ZeroAmount);
            }
        }
    }

    Ok(())
}
