//! Protocol parameters — every governance-tunable value in one struct.
//!
//! Parameters live inside the core state and are mutated only through the
//! multi-signature governance hooks, so every validator applies the same
//! change at the same block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amount::MAX_SUPPLY_RAW;

/// One basis point is 1/10,000. All fractional protocol quantities are
/// expressed in basis points to keep arithmetic integer-only and
/// deterministic across validators.
pub const BPS_SCALE: u32 = 10_000;

/// All protocol parameters held by every validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolParams {
    // ── Fees ─────────────────────────────────────────────────────────────
    /// Base transaction fee in raw VGV units; scaled by the urgency
    /// multiplier (Standard ×1, Urgent ×3, Emergency ×5).
    pub base_fee: u128,

    // ── Minting ──────────────────────────────────────────────────────────
    /// Annual mint ceiling as basis points of total supply. Default 200 (2%).
    pub annual_mint_cap_bps: u32,

    /// Minimum DAO approval percentage for a mint proposal. Default 67.
    pub dao_approval_threshold_pct: u8,

    /// Absolute supply ceiling in raw units.
    pub max_supply: u128,

    // ── Officials / multi-sig ────────────────────────────────────────────
    /// Minimum authorized officials per government account.
    pub min_officials: u32,

    /// Maximum authorized officials per government account.
    pub max_officials: u32,

    /// Minimum lifetime of a pending signing request (seconds). Default 24h.
    pub multisig_deadline_min_secs: u64,

    /// Maximum lifetime of a pending signing request (seconds). Default 48h.
    pub multisig_deadline_max_secs: u64,

    // ── Bridge ───────────────────────────────────────────────────────────
    /// Maximum age of the newest oracle observation at conversion time.
    pub oracle_freshness_secs: u64,

    /// Monthly conversion cap as basis points of the month-start balance.
    /// Default 500 (5%).
    pub bridge_monthly_cap_bps: u32,

    // ── Allocation ───────────────────────────────────────────────────────
    /// Indicator weights in basis points; must sum to `BPS_SCALE`.
    pub weight_population_bps: u32,
    pub weight_gdp_bps: u32,
    pub weight_internet_bps: u32,
    pub weight_trade_bps: u32,
    pub weight_democracy_bps: u32,

    /// Founding-tier allocation bonus in basis points. Default 1000 (+10%).
    pub founding_bonus_bps: u32,

    /// Permitted deviation when an indicator category is summed across all
    /// governments. Default ±1 bps (rounding slack in upstream feeds).
    pub indicator_tolerance_bps: u32,

    // ── Validation ───────────────────────────────────────────────────────
    /// Maximum distance between a transaction timestamp and the block
    /// timestamp, in seconds.
    pub tx_time_tolerance_secs: u64,
}

impl ProtocolParams {
    /// VedGov defaults — the intended configuration for the live network.
    pub fn vedgov_defaults() -> Self {
        Self {
            base_fee: 10,

            annual_mint_cap_bps: 200,           // 2% per year
            dao_approval_threshold_pct: 67,
            max_supply: MAX_SUPPLY_RAW,

            min_officials: 3,
            max_officials: 7,
            multisig_deadline_min_secs: 24 * 3600,
            multisig_deadline_max_secs: 48 * 3600,

            oracle_freshness_secs: 3600,        // 1 hour
            bridge_monthly_cap_bps: 500,        // 5% per month

            weight_population_bps: 2500,
            weight_gdp_bps: 2500,
            weight_internet_bps: 2000,
            weight_trade_bps: 2000,
            weight_democracy_bps: 1000,
            founding_bonus_bps: 1000,           // +10%
            indicator_tolerance_bps: 1,

            tx_time_tolerance_secs: 300,
        }
    }

    /// The five indicator weights in canonical order
    /// (population, GDP, internet, trade, democracy).
    pub fn indicator_weights(&self) -> [u32; 5] {
        [
            self.weight_population_bps,
            self.weight_gdp_bps,
            self.weight_internet_bps,
            self.weight_trade_bps,
            self.weight_democracy_bps,
        ]
    }

    /// Apply a governance-approved parameter change.
    pub fn apply(&mut self, param: GovernableParam, value: u128) -> Result<(), InvalidParamValue> {
        let out_of_range = |reason: &str| InvalidParamValue {
            param,
            value,
            reason: reason.to_string(),
        };

        match param {
            GovernableParam::BaseFee => self.base_fee = value,
            GovernableParam::AnnualMintCapBps => {
                if value == 0 || value > BPS_SCALE as u128 {
                    return Err(out_of_range("must be in 1..=10000 bps"));
                }
                self.annual_mint_cap_bps = value as u32;
            }
            GovernableParam::DaoApprovalThresholdPct => {
                if value < 51 || value > 100 {
                    return Err(out_of_range("must be in 51..=100 percent"));
                }
                self.dao_approval_threshold_pct = value as u8;
            }
            GovernableParam::OracleFreshnessSecs => {
                if value == 0 {
                    return Err(out_of_range("must be positive"));
                }
                self.oracle_freshness_secs = value as u64;
            }
            GovernableParam::BridgeMonthlyCapBps => {
                if value == 0 || value > BPS_SCALE as u128 {
                    return Err(out_of_range("must be in 1..=10000 bps"));
                }
                self.bridge_monthly_cap_bps = value as u32;
            }
        }
        Ok(())
    }
}

/// Default is the VedGov configuration.
impl Default for ProtocolParams {
    fn default() -> Self {
        Self::vedgov_defaults()
    }
}

/// Parameters adjustable through the governance hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernableParam {
    BaseFee,
    AnnualMintCapBps,
    DaoApprovalThresholdPct,
    OracleFreshnessSecs,
    BridgeMonthlyCapBps,
}

impl GovernableParam {
    /// Canonical wire tag for signing bytes.
    pub fn wire_tag(&self) -> u8 {
        match self {
            Self::BaseFee => 0,
            Self::AnnualMintCapBps => 1,
            Self::DaoApprovalThresholdPct => 2,
            Self::OracleFreshnessSecs => 3,
            Self::BridgeMonthlyCapBps => 4,
        }
    }
}

/// A proposed parameter value outside its permitted range.
#[derive(Debug, Error)]
#[error("invalid value {value} for {param:?}: {reason}")]
pub struct InvalidParamValue {
    pub param: GovernableParam,
    pub value: u128,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_full_scale() {
        let p = ProtocolParams::default();
        let sum: u32 = p.indicator_weights().iter().sum();
        assert_eq!(sum, BPS_SCALE);
    }

    #[test]
    fn apply_valid_change() {
        let mut p = ProtocolParams::default();
        p.apply(GovernableParam::BaseFee, 25).unwrap();
        assert_eq!(p.base_fee, 25);
    }

    #[test]
    fn apply_rejects_minority_dao_threshold() {
        let mut p = ProtocolParams::default();
        assert!(p.apply(GovernableParam::DaoApprovalThresholdPct, 50).is_err());
        assert!(p.apply(GovernableParam::DaoApprovalThresholdPct, 101).is_err());
        p.apply(GovernableParam::DaoApprovalThresholdPct, 75).unwrap();
        assert_eq!(p.dao_approval_threshold_pct, 75);
    }

    #[test]
    fn apply_rejects_zero_mint_cap() {
        let mut p = ProtocolParams::default();
        assert!(p.apply(GovernableParam::AnnualMintCapBps, 0).is_err());
        assert!(p.apply(GovernableParam::AnnualMintCapBps, 10_001).is_err());
    }
}
