//! Reserve allocation by development indicators.
//!
//! Each epoch, reserve funds are distributed across member governments in
//! proportion to a weighted score over five development indicators. All
//! arithmetic is integer basis points; the only division happens once per
//! government when a concrete pool is split, rounding down, with the dust
//! left in the reserve.

pub mod allocate;
pub mod error;
pub mod indicators;

pub use allocate::{compute_allocation, AllocationEvent, AllocationPlan};
pub use error::AllocationError;
pub use indicators::{IndicatorCategory, IndicatorSet};
