//! Per-government account records.

use serde::{Deserialize, Serialize};
use vgv_types::{
    Amount, GovernmentId, GovernmentStatus, GovernmentTier, InstitutionType, Official, OfficialId,
    PublicKey, Timestamp,
};

/// A government account in the ledger.
///
/// Balances are mutated only through `LedgerState` methods; tier, officials,
/// and status change only through governance actions. Accounts are never
/// deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentAccount {
    pub id: GovernmentId,
    pub tier: GovernmentTier,
    pub institution: InstitutionType,
    pub status: GovernmentStatus,
    pub balance: Amount,
    /// Authorized officials (3–7, enforced at registration).
    pub officials: Vec<Official>,
    /// Signatures required to authorize an action for this account.
    pub signature_threshold: u32,
    /// Sequence number the next transaction from this account must carry.
    pub next_sequence: u64,
    pub registered_at: Timestamp,
    /// Audit-trail counters, updated on every committed settlement.
    pub stats: SettlementStats,
}

/// Lifetime settlement counters for one account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStats {
    pub payments_sent: u64,
    pub payments_received: u64,
    pub volume_sent: u128,
    pub volume_received: u128,
}

impl GovernmentAccount {
    /// Look up an official's registered public key.
    pub fn official_key(&self, id: &OfficialId) -> Option<&PublicKey> {
        self.officials
            .iter()
            .find(|o| &o.id == id)
            .map(|o| &o.public_key)
    }

    pub fn is_official(&self, id: &OfficialId) -> bool {
        self.official_key(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> GovernmentAccount {
        GovernmentAccount {
            id: GovernmentId::new("IND"),
            tier: GovernmentTier::Founding,
            institution: InstitutionType::Treasury,
            status: GovernmentStatus::Active,
            balance: Amount::new(1000),
            officials: vec![
                Official {
                    id: OfficialId::new("IND-1"),
                    public_key: PublicKey([1u8; 32]),
                },
                Official {
                    id: OfficialId::new("IND-2"),
                    public_key: PublicKey([2u8; 32]),
                },
                Official {
                    id: OfficialId::new("IND-3"),
                    public_key: PublicKey([3u8; 32]),
                },
            ],
            signature_threshold: 2,
            next_sequence: 0,
            registered_at: Timestamp::EPOCH,
            stats: SettlementStats::default(),
        }
    }

    #[test]
    fn official_lookup() {
        let acct = sample_account();
        assert!(acct.is_official(&OfficialId::new("IND-2")));
        assert!(!acct.is_official(&OfficialId::new("IND-9")));
        assert_eq!(
            acct.official_key(&OfficialId::new("IND-3")),
            Some(&PublicKey([3u8; 32]))
        );
    }
}
