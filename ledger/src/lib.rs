//! Government account ledger.
//!
//! `LedgerState` is an explicit value: the processor clones it at the start
//! of a block, folds transactions into the copy, and the caller publishes
//! the copy on commit. There are no process-wide singletons, so deterministic
//! replay and cheap block rollback fall out of value semantics.

pub mod account;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod supply;

pub use account::{GovernmentAccount, SettlementStats};
pub use error::LedgerError;
pub use genesis::{build_genesis_ledger, GenesisConfig, GenesisGovernment};
pub use ledger::LedgerState;
pub use supply::SupplyState;
