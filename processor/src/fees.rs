//! Transaction fees.

use vgv_types::{Amount, ProtocolParams, UrgencyLevel};

/// The fee for a transaction at the given urgency: base fee × multiplier
/// (Standard ×1, Urgent ×3, Emergency ×5). Fees accrue to the reserve.
pub fn fee_for(params: &ProtocolParams, urgency: UrgencyLevel) -> Amount {
    Amount::new(params.base_fee.saturating_mul(urgency.fee_multiplier()))
}
