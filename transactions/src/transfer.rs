//! Settlement transfer: move VGV between government accounts.

use serde::{Deserialize, Serialize};
use vgv_types::{
    Amount, GovernmentId, OfficialId, Signature, Timestamp, TxHash, UrgencyLevel,
};

/// The declared purpose of a settlement payment, kept on-ledger for audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    TradeSettlement { agreement_id: String },
    DevelopmentAid { program_id: String },
    EmergencyAid { disaster_reference: String },
}

impl Purpose {
    /// Canonical encoding: tag byte, then the length-prefixed reference.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let (tag, reference) = match self {
            Self::TradeSettlement { agreement_id } => (0u8, agreement_id),
            Self::DevelopmentAid { program_id } => (1u8, program_id),
            Self::EmergencyAid { disaster_reference } => (2u8, disaster_reference),
        };
        let mut out = Vec::with_capacity(5 + reference.len());
        out.push(tag);
        out.extend_from_slice(&(reference.len() as u32).to_le_bytes());
        out.extend_from_slice(reference.as_bytes());
        out
    }
}

/// A multi-signature settlement payment between two governments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    pub hash: TxHash,
    pub from: GovernmentId,
    pub to: GovernmentId,
    pub amount: Amount,
    pub purpose: Purpose,
    /// Scales the fee: Standard ×1, Urgent ×3, Emergency ×5.
    pub urgency: UrgencyLevel,
    /// Must equal the sender account's `next_sequence`.
    pub sequence: u64,
    pub timestamp: Timestamp,
    /// Official signatures over [`TransferTx::signing_bytes`].
    pub signatures: Vec<(OfficialId, Signature)>,
}

impl TransferTx {
    pub const WIRE_TAG: u8 = 0x01;

    /// Canonical signing bytes. Fixed field order, little-endian integers,
    /// length-prefixed variable fields; signatures and hash excluded.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        out.push(Self::WIRE_TAG);
        out.extend_from_slice(self.from.as_bytes());
        out.extend_from_slice(self.to.as_bytes());
        out.extend_from_slice(&self.amount.raw().to_le_bytes());
        out.extend_from_slice(&self.purpose.signing_bytes());
        out.push(self.urgency.wire_tag());
        out.extend_from_slice(&self.sequence.to_le_bytes());
        out.extend_from_slice(&self.timestamp.as_secs().to_le_bytes());
        out
    }

    pub fn compute_hash(&self) -> TxHash {
        vgv_crypto::hash_transaction(&self.signing_bytes())
    }
}
