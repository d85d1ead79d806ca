//! Multi-signature authorization.
//!
//! Two entry points share one rule — distinct registered officials, threshold
//! met, every signature verified against the registered key:
//!
//! - [`authorize`] checks the signature set carried inline by a transaction.
//! - [`RequestBook`] collects signatures over time for governance actions,
//!   with a submission deadline per request.

pub mod authorize;
pub mod book;
pub mod error;
pub mod request;

pub use authorize::authorize;
pub use book::{RequestBook, SignatureOutcome};
pub use error::MultisigError;
pub use request::{GovernanceAction, RequestStatus, SigningRequest};
