//! The ledger state and its mutation contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vgv_types::{Amount, GovernmentId, GovernmentStatus, ProtocolParams};

use crate::account::GovernmentAccount;
use crate::error::LedgerError;
use crate::supply::SupplyState;

/// The committed ledger: account table, unallocated reserve, supply state.
///
/// `BTreeMap` keeps iteration (and therefore serialization and snapshot
/// hashing) in a deterministic order on every validator.
///
/// The conservation invariant — sum of balances plus reserve equals total
/// supply — holds after every public mutation; [`LedgerState::check_conservation`]
/// re-verifies it after each block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    accounts: BTreeMap<GovernmentId, GovernmentAccount>,
    /// Supply not held by any government: genesis allocation pool, accrued
    /// fees, and VGV escrowed against the citizen-side bridge.
    reserve: Amount,
    supply: SupplyState,
}

impl LedgerState {
    /// A fresh ledger with the full initial supply in the reserve.
    pub fn new(initial_supply: Amount) -> Self {
        Self {
            accounts: BTreeMap::new(),
            reserve: initial_supply,
            supply: SupplyState::new(initial_supply),
        }
    }

    // ── Registry ─────────────────────────────────────────────────────────

    /// Register a new government account.
    ///
    /// The account must carry a zero balance; funding happens through
    /// allocation events after registration.
    pub fn register_government(
        &mut self,
        account: GovernmentAccount,
        params: &ProtocolParams,
    ) -> Result<(), LedgerError> {
        if self.accounts.contains_key(&account.id) {
            return Err(LedgerError::AlreadyRegistered(account.id.to_string()));
        }

        let officials = account.officials.len() as u32;
        if officials < params.min_officials || officials > params.max_officials {
            return Err(LedgerError::OfficialCountOutOfRange {
                have: officials,
                min: params.min_officials,
                max: params.max_officials,
            });
        }
        if account.signature_threshold == 0 || account.signature_threshold > officials {
            return Err(LedgerError::InvalidThreshold {
                threshold: account.signature_threshold,
                officials,
            });
        }
        for (i, official) in account.officials.iter().enumerate() {
            if account.officials[..i].iter().any(|o| o.id == official.id) {
                return Err(LedgerError::DuplicateOfficial(official.id.to_string()));
            }
        }

        self.accounts.insert(account.id.clone(), account);
        Ok(())
    }

    pub fn account(&self, id: &GovernmentId) -> Option<&GovernmentAccount> {
        self.accounts.get(id)
    }

    /// The account, or `UnknownAccount` / `AccountSuspended`.
    pub fn ensure_active(&self, id: &GovernmentId) -> Result<&GovernmentAccount, LedgerError> {
        let account = self
            .accounts
            .get(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))?;
        if !account.status.is_active() {
            return Err(LedgerError::AccountSuspended {
                account: id.to_string(),
                status: account.status,
            });
        }
        Ok(account)
    }

    pub fn get_balance(&self, id: &GovernmentId) -> Result<Amount, LedgerError> {
        self.accounts
            .get(id)
            .map(|a| a.balance)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))
    }

    /// Set an account's status (suspend/reinstate), via governance only.
    pub fn set_status(
        &mut self,
        id: &GovernmentId,
        status: GovernmentStatus,
    ) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))?;
        account.status = status;
        Ok(())
    }

    /// Consume and return the sequence number for the next transaction from
    /// this account. Called exactly once per accepted transaction.
    pub fn advance_sequence(&mut self, id: &GovernmentId) -> Result<u64, LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))?;
        let seq = account.next_sequence;
        account.next_sequence += 1;
        Ok(seq)
    }

    // ── Balance movement ─────────────────────────────────────────────────

    /// Transfer `amount` from one active account to another.
    ///
    /// All checks run before any mutation: on error the ledger is untouched,
    /// on success debit and credit become visible together.
    pub fn apply_transfer(
        &mut self,
        from: &GovernmentId,
        to: &GovernmentId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.ensure_active(from)?.balance;
        self.ensure_active(to)?;
        let new_from = from_balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: from_balance.raw(),
            })?;
        let to_balance = self.get_balance(to)?;
        let new_to = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;

        let sender = self
            .accounts
            .get_mut(from)
            .ok_or_else(|| LedgerError::UnknownAccount(from.to_string()))?;
        sender.balance = new_from;
        sender.stats.payments_sent += 1;
        sender.stats.volume_sent = sender.stats.volume_sent.saturating_add(amount.raw());

        let receiver = self
            .accounts
            .get_mut(to)
            .ok_or_else(|| LedgerError::UnknownAccount(to.to_string()))?;
        receiver.balance = new_to;
        receiver.stats.payments_received += 1;
        receiver.stats.volume_received =
            receiver.stats.volume_received.saturating_add(amount.raw());

        Ok(())
    }

    /// Debit an active account and credit the reserve (fees, bridge escrow).
    pub fn move_to_reserve(
        &mut self,
        id: &GovernmentId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.ensure_active(id)?.balance;
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: balance.raw(),
            })?;
        let new_reserve = self
            .reserve
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;

        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))?
            .balance = new_balance;
        self.reserve = new_reserve;
        Ok(())
    }

    /// Credit an active account from the reserve (allocation events).
    pub fn release_from_reserve(
        &mut self,
        id: &GovernmentId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.ensure_active(id)?.balance;
        let new_reserve =
            self.reserve
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientReserve {
                    needed: amount.raw(),
                    available: self.reserve.raw(),
                })?;
        let new_balance = balance.checked_add(amount).ok_or(LedgerError::AmountOverflow)?;

        self.reserve = new_reserve;
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))?
            .balance = new_balance;
        Ok(())
    }

    /// Record an already-validated mint: grows total supply and credits the
    /// newly minted units to the reserve in one step.
    pub fn record_mint(&mut self, amount: Amount, year: u16, dao_approval_pct: u8) {
        self.supply.record_mint(amount, year, dao_approval_pct);
        self.reserve = self.reserve.saturating_add(amount);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn reserve(&self) -> Amount {
        self.reserve
    }

    pub fn supply(&self) -> &SupplyState {
        &self.supply
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Accounts in deterministic (key) order.
    pub fn iter_accounts(&self) -> impl Iterator<Item = &GovernmentAccount> {
        self.accounts.values()
    }

    /// Verify the conservation invariant:
    /// sum of balances + reserve == total supply.
    pub fn check_conservation(&self) -> Result<(), LedgerError> {
        let mut actual = self.reserve.raw();
        for account in self.accounts.values() {
            actual = actual.saturating_add(account.balance.raw());
        }
        let expected = self.supply.total_supply().raw();
        if actual != expected {
            return Err(LedgerError::ConservationViolated { expected, actual });
        }
        Ok(())
    }
}
