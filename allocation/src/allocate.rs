//! Score computation and pool splitting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use vgv_ledger::LedgerState;
use vgv_types::{Amount, GovernmentId, ProtocolParams, BPS_SCALE};

use crate::error::AllocationError;
use crate::indicators::{IndicatorCategory, IndicatorSet};

/// A government's slice of one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEvent {
    pub government: GovernmentId,
    pub amount: Amount,
}

/// Validated allocation weights, ready to split any pool.
///
/// Scores are in weight-bps × share-bps units; with exact 10,000-bps inputs
/// and no tier bonus the scores of all governments sum to exactly
/// 100,000,000. The plan itself holds no amounts — the same plan can split
/// several pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// (government, score) in government-id order. Suspended governments are
    /// absent; their weight implicitly redistributes to everyone else through
    /// the total.
    scores: Vec<(GovernmentId, u128)>,
    total_score: u128,
}

impl AllocationPlan {
    pub fn scores(&self) -> &[(GovernmentId, u128)] {
        &self.scores
    }

    pub fn total_score(&self) -> u128 {
        self.total_score
    }

    /// Split a pool proportionally to the scores, rounding each slice down.
    ///
    /// Returns the events plus the undistributed remainder (at most one raw
    /// unit per government), which stays in the reserve.
    pub fn distribute(&self, pool: Amount) -> (Vec<AllocationEvent>, Amount) {
        let mut events = Vec::with_capacity(self.scores.len());
        let mut distributed: u128 = 0;
        for (government, score) in &self.scores {
            let amount = pool.raw() * score / self.total_score;
            distributed += amount;
            events.push(AllocationEvent {
                government: government.clone(),
                amount: Amount::new(amount),
            });
        }
        (events, Amount::new(pool.raw() - distributed))
    }
}

/// Validate an indicator submission and compute the allocation plan.
///
/// Every government in the submission must be registered; suspended
/// governments are dropped from the plan. For each category, the shares
/// across the whole submission must sum to 10,000 bps within the configured
/// tolerance.
pub fn compute_allocation(
    ledger: &LedgerState,
    indicators: &BTreeMap<GovernmentId, IndicatorSet>,
    params: &ProtocolParams,
) -> Result<AllocationPlan, AllocationError> {
    for (i, category) in IndicatorCategory::ALL.into_iter().enumerate() {
        let sum: u64 = indicators.values().map(|set| set.shares()[i] as u64).sum();
        let tolerance = params.indicator_tolerance_bps as u64;
        let full = BPS_SCALE as u64;
        if sum < full.saturating_sub(tolerance) || sum > full + tolerance {
            return Err(AllocationError::IndicatorsDoNotSumTo100 {
                category,
                sum_bps: sum,
            });
        }
    }

    let weights = params.indicator_weights();
    let mut scores = Vec::with_capacity(indicators.len());
    let mut total_score: u128 = 0;

    for (id, set) in indicators {
        let account = ledger
            .account(id)
            .ok_or_else(|| AllocationError::UnknownGovernment(id.to_string()))?;
        if !account.status.is_active() {
            debug!(government = %id, status = ?account.status, "excluded from allocation");
            continue;
        }

        let shares = set.shares();
        let mut score: u128 = 0;
        for (weight, share) in weights.iter().zip(shares.iter()) {
            score += *weight as u128 * *share as u128;
        }
        if account.tier.is_founding() {
            score = score * (BPS_SCALE + params.founding_bonus_bps) as u128 / BPS_SCALE as u128;
        }

        total_score += score;
        scores.push((id.clone(), score));
    }

    if total_score == 0 {
        return Err(AllocationError::NoEligibleGovernments);
    }

    Ok(AllocationPlan {
        scores,
        total_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgv_ledger::{GovernmentAccount, SettlementStats};
    use vgv_types::{
        GovernmentStatus, GovernmentTier, InstitutionType, Official, OfficialId, PublicKey,
        Timestamp,
    };

    fn account(code: &str, tier: GovernmentTier) -> GovernmentAccount {
        GovernmentAccount {
            id: GovernmentId::new(code),
            tier,
            institution: InstitutionType::Treasury,
            status: GovernmentStatus::Active,
            balance: Amount::ZERO,
            officials: (1..=3)
                .map(|i| Official {
                    id: OfficialId::new(format!("{code}-{i}")),
                    public_key: PublicKey([i as u8; 32]),
                })
                .collect(),
            signature_threshold: 2,
            next_sequence: 0,
            registered_at: Timestamp::EPOCH,
            stats: SettlementStats::default(),
        }
    }

    fn ledger(tiers: &[(&str, GovernmentTier)]) -> LedgerState {
        let params = ProtocolParams::default();
        let mut ledger = LedgerState::new(Amount::new(1_000_000));
        for (code, tier) in tiers {
            ledger.register_government(account(code, *tier), &params).unwrap();
        }
        ledger
    }

    fn uniform_indicators(codes: &[&str]) -> BTreeMap<GovernmentId, IndicatorSet> {
        codes
            .iter()
            .map(|c| {
                (
                    GovernmentId::new(*c),
                    IndicatorSet::uniform(codes.len() as u32),
                )
            })
            .collect()
    }

    #[test]
    fn equal_indicators_split_equally() {
        let ledger = ledger(&[
            ("BRA", GovernmentTier::Full),
            ("IND", GovernmentTier::Full),
            ("NGA", GovernmentTier::Full),
            ("VNM", GovernmentTier::Full),
        ]);
        let plan =
            compute_allocation(&ledger, &uniform_indicators(&["BRA", "IND", "NGA", "VNM"]),
                &ProtocolParams::default())
            .unwrap();

        let (events, remainder) = plan.distribute(Amount::new(100_000));
        assert_eq!(events.len(), 4);
        for event in &events {
            assert_eq!(event.amount, Amount::new(25_000));
        }
        assert_eq!(remainder, Amount::ZERO);
    }

    #[test]
    fn founding_tier_gets_bonus() {
        let ledger = ledger(&[
            ("BRA", GovernmentTier::Founding),
            ("IND", GovernmentTier::Full),
        ]);
        let plan = compute_allocation(&ledger, &uniform_indicators(&["BRA", "IND"]),
            &ProtocolParams::default())
            .unwrap();

        let (events, _) = plan.distribute(Amount::new(210_000));
        // BRA's score is 1.1× IND's, so BRA gets 110/210 of the pool
        assert_eq!(events[0].government, GovernmentId::new("BRA"));
        assert_eq!(events[0].amount, Amount::new(110_000));
        assert_eq!(events[1].amount, Amount::new(100_000));
    }

    #[test]
    fn suspended_government_excluded_and_renormalized() {
        let mut ledger = ledger(&[
            ("BRA", GovernmentTier::Full),
            ("IND", GovernmentTier::Full),
        ]);
        ledger
            .set_status(&GovernmentId::new("BRA"), GovernmentStatus::Suspended)
            .unwrap();

        let plan = compute_allocation(&ledger, &uniform_indicators(&["BRA", "IND"]),
            &ProtocolParams::default())
            .unwrap();
        let (events, remainder) = plan.distribute(Amount::new(100_000));

        // IND absorbs the whole pool
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].government, GovernmentId::new("IND"));
        assert_eq!(events[0].amount, Amount::new(100_000));
        assert_eq!(remainder, Amount::ZERO);
    }

    #[test]
    fn shares_above_full_scale_rejected() {
        let ledger = ledger(&[
            ("BRA", GovernmentTier::Full),
            ("IND", GovernmentTier::Full),
        ]);
        let mut indicators = uniform_indicators(&["BRA", "IND"]);
        // 5100 + 5000 = 10100 bps in the population category
        if let Some(set) = indicators.get_mut(&GovernmentId::new("BRA")) {
            set.population_bps = 5_100;
        }

        assert_eq!(
            compute_allocation(&ledger, &indicators, &ProtocolParams::default()),
            Err(AllocationError::IndicatorsDoNotSumTo100 {
                category: IndicatorCategory::Population,
                sum_bps: 10_100,
            })
        );
    }

    #[test]
    fn one_bps_rounding_slack_tolerated() {
        let ledger = ledger(&[
            ("BRA", GovernmentTier::Full),
            ("IND", GovernmentTier::Full),
            ("NGA", GovernmentTier::Full),
        ]);
        // 3333 × 3 = 9999 bps per category, within the ±1 tolerance
        let indicators = uniform_indicators(&["BRA", "IND", "NGA"]);
        compute_allocation(&ledger, &indicators, &ProtocolParams::default()).unwrap();
    }

    #[test]
    fn unknown_government_rejected() {
        let ledger = ledger(&[("BRA", GovernmentTier::Full)]);
        let mut indicators = uniform_indicators(&["BRA"]);
        indicators.insert(GovernmentId::new("ZZZ"), IndicatorSet::default());

        // ZZZ holds zero shares so sums still pass; registration is what fails
        assert_eq!(
            compute_allocation(&ledger, &indicators, &ProtocolParams::default()),
            Err(AllocationError::UnknownGovernment("ZZZ".into()))
        );
    }

    #[test]
    fn remainder_is_dust_only() {
        let ledger = ledger(&[
            ("BRA", GovernmentTier::Full),
            ("IND", GovernmentTier::Full),
            ("NGA", GovernmentTier::Full),
        ]);
        let plan = compute_allocation(&ledger, &uniform_indicators(&["BRA", "IND", "NGA"]),
            &ProtocolParams::default())
            .unwrap();

        let (events, remainder) = plan.distribute(Amount::new(100));
        let distributed: u128 = events.iter().map(|e| e.amount.raw()).sum();
        assert_eq!(distributed + remainder.raw(), 100);
        assert!(remainder.raw() < 3);
    }
}
