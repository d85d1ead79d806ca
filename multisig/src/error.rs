use thiserror::Error;
use vgv_types::TxHash;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MultisigError {
    #[error("unknown signing request {0}")]
    UnknownRequest(TxHash),

    #[error("signing request {0} already open")]
    DuplicateRequest(TxHash),

    #[error("deadline {deadline_secs}s from creation outside permitted window {min_secs}..={max_secs}")]
    InvalidDeadline {
        deadline_secs: u64,
        min_secs: u64,
        max_secs: u64,
    },

    #[error("signer {0} is not a registered official of this account")]
    UnknownOfficial(String),

    #[error("official {0} already signed")]
    DuplicateSignature(String),

    #[error("signature from official {0} failed verification")]
    InvalidSignature(String),

    #[error("have {have} valid signatures, need {need}")]
    InsufficientSignatures { have: u32, need: u32 },

    #[error("signing request expired before reaching threshold")]
    RequestExpired,

    #[error("signing request {0} is closed")]
    RequestClosed(TxHash),

    #[error("signing request {0} has not been approved")]
    NotApproved(TxHash),
}
