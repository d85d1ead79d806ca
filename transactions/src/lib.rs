//! All VGV transaction types and their stateless validation.
//!
//! Transaction types:
//! - **Transfer**: settlement payment between two government accounts
//! - **Mint**: bring a concluded DAO mint decision on-ledger
//! - **BridgeConvert**: escrow VGV against citizen-token issuance
//!
//! Every transaction carries its source account's sequence number and a set
//! of official signatures over its canonical signing bytes; the processor
//! performs the stateful checks.

pub mod bridge;
pub mod error;
pub mod mint;
pub mod transfer;
pub mod validation;

pub use bridge::BridgeConvertTx;
pub use error::TransactionError;
pub use mint::MintTx;
pub use transfer::{Purpose, TransferTx};
pub use validation::validate_transaction;

use serde::{Deserialize, Serialize};
use vgv_types::{GovernmentId, OfficialId, Signature, Timestamp, TxHash, UrgencyLevel};

/// The unified transaction enum wrapping all VGV transaction types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Transfer(TransferTx),
    Mint(MintTx),
    BridgeConvert(BridgeConvertTx),
}

impl Transaction {
    pub fn hash(&self) -> &TxHash {
        match self {
            Self::Transfer(tx) => &tx.hash,
            Self::Mint(tx) => &tx.hash,
            Self::BridgeConvert(tx) => &tx.hash,
        }
    }

    /// The account whose officials must authorize this transaction and whose
    /// sequence it consumes.
    pub fn source(&self) -> &GovernmentId {
        match self {
            Self::Transfer(tx) => &tx.from,
            Self::Mint(tx) => &tx.source,
            Self::BridgeConvert(tx) => &tx.source,
        }
    }

    pub fn sequence(&self) -> u64 {
        match self {
            Self::Transfer(tx) => tx.sequence,
            Self::Mint(tx) => tx.sequence,
            Self::BridgeConvert(tx) => tx.sequence,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Transfer(tx) => tx.timestamp,
            Self::Mint(tx) => tx.timestamp,
            Self::BridgeConvert(tx) => tx.timestamp,
        }
    }

    pub fn signatures(&self) -> &[(OfficialId, Signature)] {
        match self {
            Self::Transfer(tx) => &tx.signatures,
            Self::Mint(tx) => &tx.signatures,
            Self::BridgeConvert(tx) => &tx.signatures,
        }
    }

    /// The canonical bytes officials sign and the hash commits to.
    pub fn signing_bytes(&self) -> Vec<u8> {
        match self {
            Self::Transfer(tx) => tx.signing_bytes(),
            Self::Mint(tx) => tx.signing_bytes(),
            Self::BridgeConvert(tx) => tx.signing_bytes(),
        }
    }

    /// Fee urgency. Mint and bridge transactions always pay the standard fee.
    pub fn urgency(&self) -> UrgencyLevel {
        match self {
            Self::Transfer(tx) => tx.urgency,
            Self::Mint(_) | Self::BridgeConvert(_) => UrgencyLevel::Standard,
        }
    }

    pub fn compute_hash(&self) -> TxHash {
        vgv_crypto::hash_transaction(&self.signing_bytes())
    }
}
