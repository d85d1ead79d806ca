use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("transaction amount is zero")]
    ZeroAmount,

    #[error("transfer source and destination are the same account")]
    SelfTransfer,

    #[error("transaction carries no signatures")]
    NoSignatures,

    #[error("transaction hash does not match its content")]
    HashMismatch,

    #[error("payment purpose reference is empty")]
    EmptyPurposeReference,

    #[error("DAO approval percentage {0} above 100")]
    ApprovalOutOfRange(u8),
}
