//! Controlled minting.
//!
//! New VGV enters circulation only through [`propose_mint`], which enforces,
//! in order: the absolute supply ceiling, the annual percentage cap, the DAO
//! approval threshold, and the economic-growth justification. Minted units
//! are credited to the reserve for later allocation, never directly to an
//! account.

pub mod error;
pub mod mint;

pub use error::MintError;
pub use mint::{propose_mint, MintProposal, MintReceipt};
