//! Genesis ledger construction.
//!
//! A genesis configuration lists the initial supply and the founding set of
//! government accounts. Initial balances are funded from the reserve so that
//! conservation holds from block zero.

use serde::{Deserialize, Serialize};

use vgv_types::{
    Amount, GovernmentId, GovernmentStatus, GovernmentTier, InstitutionType, Official, OfficialId,
    ProtocolParams, PublicKey, Timestamp,
};

use crate::account::{GovernmentAccount, SettlementStats};
use crate::error::LedgerError;
use crate::ledger::LedgerState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Initial supply in raw units.
    pub initial_supply: u128,
    pub governments: Vec<GenesisGovernment>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisGovernment {
    /// ISO 3166-1 alpha-3 code.
    pub id: String,
    pub tier: GovernmentTier,
    pub institution: InstitutionType,
    /// Official id and ed25519 public key pairs.
    pub officials: Vec<(String, PublicKey)>,
    pub signature_threshold: u32,
    /// Raw units funded from the reserve at genesis.
    pub initial_balance: u128,
}

/// Build the block-zero ledger from a genesis configuration.
pub fn build_genesis_ledger(
    config: &GenesisConfig,
    params: &ProtocolParams,
    now: Timestamp,
) -> Result<LedgerState, LedgerError> {
    let mut ledger = LedgerState::new(Amount::new(config.initial_supply));

    for government in &config.governments {
        let id = GovernmentId::parse(&government.id)
            .ok_or_else(|| LedgerError::InvalidGovernmentId(government.id.clone()))?;
        let officials = government
            .officials
            .iter()
            .map(|(official_id, key)| Official {
                id: OfficialId::new(official_id),
                public_key: key.clone(),
            })
            .collect();

        ledger.register_government(
            GovernmentAccount {
                id: id.clone(),
                tier: government.tier,
                institution: government.institution,
                status: GovernmentStatus::Active,
                balance: Amount::ZERO,
                officials,
                signature_threshold: government.signature_threshold,
                next_sequence: 0,
                registered_at: now,
                stats: SettlementStats::default(),
            },
            params,
        )?;

        if government.initial_balance > 0 {
            ledger.release_from_reserve(&id, Amount::new(government.initial_balance))?;
        }
    }

    ledger.check_conservation()?;
    Ok(ledger)
}
