//! Development indicator inputs.

use serde::{Deserialize, Serialize};

/// The five scored development indicator categories, in canonical weight
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Population,
    GdpPerCapita,
    InternetPenetration,
    TradeVolume,
    DemocracyIndex,
}

impl IndicatorCategory {
    pub const ALL: [Self; 5] = [
        Self::Population,
        Self::GdpPerCapita,
        Self::InternetPenetration,
        Self::TradeVolume,
        Self::DemocracyIndex,
    ];
}

/// One government's share of each indicator category, in basis points of the
/// category total across all governments in the same submission.
///
/// For each category, shares across all governments must sum to 10,000 bps
/// (± the configured rounding tolerance) or the whole submission is refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub population_bps: u32,
    pub gdp_bps: u32,
    pub internet_bps: u32,
    pub trade_bps: u32,
    pub democracy_bps: u32,
}

impl IndicatorSet {
    /// Shares in canonical category order (matches
    /// `ProtocolParams::indicator_weights`).
    pub fn shares(&self) -> [u32; 5] {
        [
            self.population_bps,
            self.gdp_bps,
            self.internet_bps,
            self.trade_bps,
            self.democracy_bps,
        ]
    }

    /// Equal share in every category, for n governments.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn uniform(n: u32) -> Self {
        assert!(n > 0, "indicator shares require at least one government");
        let share = 10_000 / n;
        Self {
            population_bps: share,
            gdp_bps: share,
            internet_bps: share,
            trade_bps: share,
            democracy_bps: share,
        }
    }
}
