use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("account {account} is suspended (status {status:?})")]
    AccountSuspended {
        account: String,
        status: vgv_types::GovernmentStatus,
    },

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient reserve: need {needed}, have {available}")]
    InsufficientReserve { needed: u128, available: u128 },

    #[error("government {0} is already registered")]
    AlreadyRegistered(String),

    #[error("invalid government id {0:?}: expected ISO 3166-1 alpha-3")]
    InvalidGovernmentId(String),

    #[error("official count {have} outside permitted range {min}..={max}")]
    OfficialCountOutOfRange { have: u32, min: u32, max: u32 },

    #[error("signature threshold {threshold} invalid for {officials} officials")]
    InvalidThreshold { threshold: u32, officials: u32 },

    #[error("duplicate official {0} in authorized set")]
    DuplicateOfficial(String),

    #[error("amount overflow")]
    AmountOverflow,

    #[error("conservation violated: balances + reserve = {actual}, total supply = {expected}")]
    ConservationViolated { expected: u128, actual: u128 },
}
