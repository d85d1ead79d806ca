//! The VGV → citizen-token bridge.
//!
//! Governments convert settlement VGV into the citizen-side token at a
//! 7-day moving-average oracle price. Conversions are throttled per
//! government to a percentage of the balance held at the start of each
//! calendar month, and refuse to execute against a stale oracle. Converted
//! VGV moves into the reserve as escrow, so ledger conservation is
//! unaffected by the citizen side.

pub mod bridge;
pub mod error;
pub mod price;

pub use bridge::{BridgeState, Conversion, MonthWindow};
pub use error::BridgeError;
pub use price::{OraclePrice, PriceWindow, PRICE_SCALE};
