use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("ledger error: {0}")]
    Ledger(#[from] vgv_ledger::LedgerError),

    #[error("block rejected: {0}")]
    Block(#[from] vgv_processor::BlockError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] vgv_processor::SnapshotError),

    #[error("block height {got} does not follow current height {current}")]
    NonSequentialBlock { current: u64, got: u64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
