//! Mint proposal evaluation.

use serde::{Deserialize, Serialize};
use tracing::info;

use vgv_ledger::LedgerState;
use vgv_types::{Amount, ProtocolParams};

use crate::error::MintError;

/// A fully-specified mint proposal, presented after the off-chain DAO vote
/// has concluded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintProposal {
    /// Units to mint, raw.
    pub amount: Amount,
    /// Calendar year the mint is charged against.
    pub year: u16,
    /// Share of DAO voting power that approved, in whole percent.
    pub dao_approval_pct: u8,
    /// Whether the aggregate member-economy GDP trend is positive.
    pub gdp_growth_positive: bool,
}

/// What a successful mint did to the supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub minted: Amount,
    pub year: u16,
    pub new_total_supply: Amount,
    /// Cumulative units minted in `year`, including this mint.
    pub minted_this_year: Amount,
}

/// Evaluate a mint proposal against supply policy and, if it passes, grow the
/// supply and credit the new units to the reserve.
///
/// Checks run in a fixed order so every validator reports the same rejection
/// reason: supply ceiling, annual cap, DAO approval, growth justification.
/// The annual cap is a percentage of the total supply at evaluation time.
pub fn propose_mint(
    ledger: &mut LedgerState,
    proposal: &MintProposal,
    params: &ProtocolParams,
) -> Result<MintReceipt, MintError> {
    if proposal.amount.is_zero() {
        return Err(MintError::ZeroAmount);
    }

    let total = ledger.supply().total_supply();
    let would_be = total
        .checked_add(proposal.amount)
        .ok_or(MintError::AmountOverflow)?;
    if would_be.raw() > params.max_supply {
        return Err(MintError::ExceedsMaxSupply {
            requested: proposal.amount.raw(),
            would_be: would_be.raw(),
            max: params.max_supply,
        });
    }

    let cap = total.scale_bps(params.annual_mint_cap_bps);
    let minted = ledger.supply().minted_in(proposal.year);
    let minted_after = minted
        .checked_add(proposal.amount)
        .ok_or(MintError::AmountOverflow)?;
    if minted_after > cap {
        return Err(MintError::ExceedsAnnualLimit {
            requested: proposal.amount.raw(),
            minted: minted.raw(),
            cap: cap.raw(),
        });
    }

    if proposal.dao_approval_pct < params.dao_approval_threshold_pct {
        return Err(MintError::InsufficientApproval {
            have: proposal.dao_approval_pct,
            need: params.dao_approval_threshold_pct,
        });
    }

    if !proposal.gdp_growth_positive {
        return Err(MintError::NoGrowthJustification);
    }

    ledger.record_mint(proposal.amount, proposal.year, proposal.dao_approval_pct);

    info!(
        minted = proposal.amount.raw() as u64,
        year = proposal.year,
        approval_pct = proposal.dao_approval_pct,
        total_supply = ledger.supply().total_supply().raw() as u64,
        "mint accepted"
    );

    Ok(MintReceipt {
        minted: proposal.amount,
        year: proposal.year,
        new_total_supply: ledger.supply().total_supply(),
        minted_this_year: minted_after,
    })
}
