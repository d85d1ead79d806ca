//! Mint transaction: bring a concluded DAO mint decision on-ledger.

use serde::{Deserialize, Serialize};
use vgv_types::{Amount, GovernmentId, OfficialId, Signature, Timestamp, TxHash};

/// A mint submission, co-signed by the submitting government's officials.
///
/// Carries the DAO vote outcome; the minting controller re-checks every
/// policy gate (supply ceiling, annual cap, approval threshold, growth
/// justification) at execution time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTx {
    pub hash: TxHash,
    /// The government submitting the decision; pays the fee.
    pub source: GovernmentId,
    pub amount: Amount,
    /// Share of DAO voting power that approved, whole percent.
    pub dao_approval_pct: u8,
    pub gdp_growth_positive: bool,
    pub sequence: u64,
    pub timestamp: Timestamp,
    pub signatures: Vec<(OfficialId, Signature)>,
}

impl MintTx {
    pub const WIRE_TAG: u8 = 0x02;

    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(48);
        out.push(Self::WIRE_TAG);
        out.extend_from_slice(self.source.as_bytes());
        out.extend_from_slice(&self.amount.raw().to_le_bytes());
        out.push(self.dao_approval_pct);
        out.push(self.gdp_growth_positive as u8);
        out.extend_from_slice(&self.sequence.to_le_bytes());
        out.extend_from_slice(&self.timestamp.as_secs().to_le_bytes());
        out
    }

    pub fn compute_hash(&self) -> TxHash {
        vgv_crypto::hash_transaction(&self.signing_bytes())
    }
}
