//! Global supply bookkeeping.
//!
//! `SupplyState` records the facts; the minting controller (`vgv-minting`)
//! owns the policy checks and is the only caller of [`SupplyState::record_mint`]
//! via `LedgerState::record_mint`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vgv_types::Amount;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyState {
    total_supply: Amount,
    /// Raw units minted per calendar year; entries reset implicitly when a
    /// new year key appears.
    yearly_minted: BTreeMap<u16, Amount>,
    /// DAO approval recorded with the most recent accepted mint.
    last_dao_approval_pct: Option<u8>,
}

impl SupplyState {
    pub fn new(initial_supply: Amount) -> Self {
        Self {
            total_supply: initial_supply,
            yearly_minted: BTreeMap::new(),
            last_dao_approval_pct: None,
        }
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Raw units already minted in `year` (zero if none).
    pub fn minted_in(&self, year: u16) -> Amount {
        self.yearly_minted.get(&year).copied().unwrap_or(Amount::ZERO)
    }

    pub fn last_dao_approval_pct(&self) -> Option<u8> {
        self.last_dao_approval_pct
    }

    /// Record an already-validated mint. Preconditions (caps, approval) are
    /// the minting controller's responsibility.
    pub(crate) fn record_mint(&mut self, amount: Amount, year: u16, dao_approval_pct: u8) {
        self.total_supply = self.total_supply.saturating_add(amount);
        let entry = self.yearly_minted.entry(year).or_insert(Amount::ZERO);
        *entry = entry.saturating_add(amount);
        self.last_dao_approval_pct = Some(dao_approval_pct);
    }
}
