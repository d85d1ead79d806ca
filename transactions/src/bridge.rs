//! Bridge conversion transaction: VGV to citizen-token escrow.

use serde::{Deserialize, Serialize};
use vgv_types::{Amount, GovernmentId, OfficialId, Signature, Timestamp, TxHash};

/// A request to convert settlement VGV into citizen-side units at the
/// oracle's moving-average price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConvertTx {
    pub hash: TxHash,
    pub source: GovernmentId,
    /// VGV to escrow, before the fee.
    pub amount: Amount,
    pub sequence: u64,
    pub timestamp: Timestamp,
    pub signatures: Vec<(OfficialId, Signature)>,
}

impl BridgeConvertTx {
    pub const WIRE_TAG: u8 = 0x03;

    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(40);
        out.push(Self::WIRE_TAG);
        out.extend_from_slice(self.source.as_bytes());
        out.extend_from_slice(&self.amount.raw().to_le_bytes());
        out.extend_from_slice(&self.sequence.to_le_bytes());
        out.extend_from_slice(&self.timestamp.as_secs().to_le_bytes());
        out
    }

    pub fn compute_hash(&self) -> TxHash {
        vgv_crypto::hash_transaction(&self.signing_bytes())
    }
}
