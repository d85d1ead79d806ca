//! The deterministic state-transition function.
//!
//! A block is folded into a clone of the previous core state; transactions
//! that fail any check are recorded as rejections without touching state,
//! and the whole block is discarded if the conservation invariant does not
//! hold afterwards. Governance actions and epoch allocations run through
//! their own hooks between blocks.

pub mod block;
pub mod epoch;
pub mod error;
pub mod fees;
pub mod governance;
pub mod snapshot;
pub mod state;

pub use block::{process_block, Block, BlockOutcome, Rejection};
pub use epoch::apply_allocation;
pub use error::{BlockError, ProcessError};
pub use fees::fee_for;
pub use governance::{
    execute_approved, open_governance_request, submit_governance_signature,
};
pub use snapshot::{SnapshotError, StateSnapshot};
pub use state::CoreState;
