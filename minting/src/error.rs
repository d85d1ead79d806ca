use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MintError {
    #[error("mint of zero units")]
    ZeroAmount,

    #[error("minting {requested} would take supply to {would_be}, above the {max} ceiling")]
    ExceedsMaxSupply {
        requested: u128,
        would_be: u128,
        max: u128,
    },

    #[error(
        "minting {requested} with {minted} already minted this year exceeds the annual cap {cap}"
    )]
    ExceedsAnnualLimit {
        requested: u128,
        minted: u128,
        cap: u128,
    },

    #[error("DAO approval {have}% below required {need}%")]
    InsufficientApproval { have: u8, need: u8 },

    #[error("no positive GDP growth justification for minting")]
    NoGrowthJustification,

    #[error("amount overflow")]
    AmountOverflow,
}
