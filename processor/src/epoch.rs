//! Epoch allocation: distributing reserve funds by development indicators.

use std::collections::BTreeMap;
use tracing::info;

use vgv_allocation::{compute_allocation, AllocationEvent, IndicatorSet};
use vgv_types::{Amount, GovernmentId};

use crate::error::ProcessError;
use crate::state::CoreState;

/// Distribute `pool` from the reserve according to the indicator submission.
///
/// The plan is validated in full before any balance moves; flooring dust
/// stays in the reserve. Returns the per-government events.
pub fn apply_allocation(
    state: &mut CoreState,
    indicators: &BTreeMap<GovernmentId, IndicatorSet>,
    pool: Amount,
) -> Result<Vec<AllocationEvent>, ProcessError> {
    if pool > state.ledger.reserve() {
        return Err(vgv_ledger::LedgerError::InsufficientReserve {
            needed: pool.raw(),
            available: state.ledger.reserve().raw(),
        }
        .into());
    }

    let plan = compute_allocation(&state.ledger, indicators, &state.params)?;
    let (events, remainder) = plan.distribute(pool);

    for event in &events {
        if event.amount.is_zero() {
            continue;
        }
        state
            .ledger
            .release_from_reserve(&event.government, event.amount)?;
    }

    info!(
        pool = pool.raw() as u64,
        recipients = events.len(),
        remainder = remainder.raw() as u64,
        "allocation applied"
    );
    Ok(events)
}
