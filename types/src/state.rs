//! Status, tier, institution, and urgency enums for government accounts
//! and transactions.

use serde::{Deserialize, Serialize};

/// The registry status of a government account.
///
/// Accounts are never deleted; every status change leaves the account (and
/// its history) in the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovernmentStatus {
    /// Verified and allowed to transact.
    Active,
    /// Temporarily suspended by governance action.
    Suspended,
    /// Registered but not yet verified.
    Pending,
    /// Access permanently revoked.
    Revoked,
}

impl GovernmentStatus {
    /// Whether this account may send, receive, mint, or convert.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Membership tier — affects allocation weight and governance standing.
///
/// Immutable once assigned except by governance action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovernmentTier {
    /// Founding members receive an allocation bonus.
    Founding,
    Full,
    Associate,
    Observer,
}

impl GovernmentTier {
    pub fn is_founding(&self) -> bool {
        matches!(self, Self::Founding)
    }
}

/// The kind of institution holding the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionType {
    Treasury,
    CentralBank,
    MinistryOfFinance,
    MonetaryAuthority,
    FinancialIntelligenceUnit,
    CustomsAuthority,
}

/// Transaction urgency — determines the fee multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Standard,
    Urgent,
    Emergency,
}

impl UrgencyLevel {
    /// Multiplier applied to the base fee.
    pub fn fee_multiplier(&self) -> u128 {
        match self {
            Self::Standard => 1,
            Self::Urgent => 3,
            Self::Emergency => 5,
        }
    }

    /// Canonical wire tag for signing bytes.
    pub fn wire_tag(&self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Urgent => 1,
            Self::Emergency => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_multipliers() {
        assert_eq!(UrgencyLevel::Standard.fee_multiplier(), 1);
        assert_eq!(UrgencyLevel::Urgent.fee_multiplier(), 3);
        assert_eq!(UrgencyLevel::Emergency.fee_multiplier(), 5);
    }

    #[test]
    fn only_active_transacts() {
        assert!(GovernmentStatus::Active.is_active());
        assert!(!GovernmentStatus::Suspended.is_active());
        assert!(!GovernmentStatus::Pending.is_active());
        assert!(!GovernmentStatus::Revoked.is_active());
    }
}
