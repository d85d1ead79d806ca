//! Conversion execution and the monthly cap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use vgv_ledger::LedgerState;
use vgv_types::{Amount, CivilMonth, GovernmentId, ProtocolParams, Timestamp};

use crate::error::BridgeError;
use crate::price::{OraclePrice, PriceWindow, PRICE_SCALE};

/// One government's conversion window for the current calendar month.
///
/// The balance is snapshotted lazily at the government's first conversion
/// attempt in the month; the cap for the whole month derives from that
/// snapshot, so converting cannot shrink (or grow) the cap mid-month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub month: CivilMonth,
    pub snapshot_balance: Amount,
    pub converted: Amount,
}

/// An executed conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub government: GovernmentId,
    /// VGV escrowed into the reserve.
    pub vgv_amount: Amount,
    /// 7-day average price applied, in [`PRICE_SCALE`] units.
    pub rate: u64,
    /// Citizen-side units to release, rounded down.
    pub citizen_units: u128,
    pub month: CivilMonth,
}

/// Oracle window plus per-government monthly conversion windows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    prices: PriceWindow,
    windows: BTreeMap<GovernmentId, MonthWindow>,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_price(&mut self, observation: OraclePrice) {
        self.prices.record(observation);
    }

    pub fn prices(&self) -> &PriceWindow {
        &self.prices
    }

    pub fn window(&self, id: &GovernmentId) -> Option<&MonthWindow> {
        self.windows.get(id)
    }

    /// Convert `amount` VGV to citizen units at the current average price.
    ///
    /// All policy checks run before any state changes; on success the VGV
    /// (plus `fee`) moves to the reserve and the month window advances.
    pub fn convert(
        &mut self,
        ledger: &mut LedgerState,
        id: &GovernmentId,
        amount: Amount,
        fee: Amount,
        now: Timestamp,
        params: &ProtocolParams,
    ) -> Result<Conversion, BridgeError> {
        if amount.is_zero() {
            return Err(BridgeError::ZeroAmount);
        }

        let balance = ledger.ensure_active(id).map_err(BridgeError::Ledger)?.balance;
        let total_debit = amount.checked_add(fee).ok_or(BridgeError::AmountOverflow)?;
        if balance < total_debit {
            return Err(BridgeError::Ledger(
                vgv_ledger::LedgerError::InsufficientBalance {
                    needed: total_debit.raw(),
                    available: balance.raw(),
                },
            ));
        }

        let last_updated = self.prices.last_updated().ok_or(BridgeError::NoPriceHistory)?;
        let age_secs = last_updated.elapsed_since(now);
        if age_secs > params.oracle_freshness_secs {
            return Err(BridgeError::StaleOracle {
                age_secs,
                max_secs: params.oracle_freshness_secs,
            });
        }
        let rate = self.prices.average().ok_or(BridgeError::NoPriceHistory)?;

        let month = now.civil_month();
        let fresh_window = match self.windows.get(id) {
            Some(window) if window.month == month => window.clone(),
            _ => MonthWindow {
                month,
                snapshot_balance: balance,
                converted: Amount::ZERO,
            },
        };

        let cap = fresh_window.snapshot_balance.scale_bps(params.bridge_monthly_cap_bps);
        let converted_after = fresh_window
            .converted
            .checked_add(amount)
            .ok_or(BridgeError::AmountOverflow)?;
        if converted_after > cap {
            return Err(BridgeError::ExceedsMonthlyCap {
                requested: amount.raw(),
                converted: fresh_window.converted.raw(),
                cap: cap.raw(),
            });
        }

        // checks done; mutate
        ledger.move_to_reserve(id, total_debit)?;
        self.windows.insert(
            id.clone(),
            MonthWindow {
                converted: converted_after,
                ..fresh_window
            },
        );

        let citizen_units = amount.raw() * rate as u128 / PRICE_SCALE as u128;
        info!(
            government = %id,
            vgv = amount.raw() as u64,
            rate,
            citizen_units = citizen_units as u64,
            "bridge conversion"
        );

        Ok(Conversion {
            government: id.clone(),
            vgv_amount: amount,
            rate,
            citizen_units,
            month,
        })
    }
}
