use thiserror::Error;

use crate::indicators::IndicatorCategory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("{category:?} indicator shares sum to {sum_bps} bps, expected 10000")]
    IndicatorsDoNotSumTo100 {
        category: IndicatorCategory,
        sum_bps: u64,
    },

    #[error("indicator data for unregistered government {0}")]
    UnknownGovernment(String),

    #[error("no active government is eligible for allocation")]
    NoEligibleGovernments,
}
