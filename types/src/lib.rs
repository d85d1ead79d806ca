//! Fundamental types for the VGV settlement core.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: government identifiers, amounts, timestamps, hashes, key and
//! signature types, status enums, and protocol parameters.

pub mod amount;
pub mod government;
pub mod hash;
pub mod keys;
pub mod params;
pub mod state;
pub mod time;

pub use amount::{Amount, MAX_SUPPLY_RAW};
pub use government::{GovernmentId, Official, OfficialId};
pub use hash::TxHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::{GovernableParam, InvalidParamValue, ProtocolParams, BPS_SCALE};
pub use state::{GovernmentStatus, GovernmentTier, InstitutionType, UrgencyLevel};
pub use time::{CivilMonth, Timestamp};
