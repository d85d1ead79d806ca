use thiserror::Error;
use vgv_ledger::LedgerError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("conversion of zero units")]
    ZeroAmount,

    #[error("no oracle price observations recorded")]
    NoPriceHistory,

    #[error("newest oracle observation is {age_secs}s old, limit {max_secs}s")]
    StaleOracle { age_secs: u64, max_secs: u64 },

    #[error(
        "converting {requested} with {converted} already converted this month exceeds the cap {cap}"
    )]
    ExceedsMonthlyCap {
        requested: u128,
        converted: u128,
        cap: u128,
    },

    #[error("amount overflow")]
    AmountOverflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
